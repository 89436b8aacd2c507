//! Interval-packing layout engine.
//!
//! Arranges overlapping same-day intervals into side-by-side columns so
//! that no two overlapping items share a column. Works on abstract items —
//! anything time-bounded lays out here, the payload rides along untouched.
//! Callers partition by day; this engine sees one day at a time.
//!
//! # Algorithm
//!
//! Classic interval-graph greedy coloring plus a cluster sweep, in one
//! pass over the start-sorted items:
//!
//! 1. Sort by `from_min`, ties by `to_min`.
//! 2. First-fit coloring: drop active entries that ended at or before the
//!    item's start, then take the smallest column index not in use.
//! 3. Cluster sweep: an item starting at or after the running cluster's
//!    max end closes the cluster; every member is stamped with
//!    `max column + 1` as its cluster width.
//!
//! Start-then-end ordering with first-fit gives a deterministic packing
//! equivalent to standard interval-graph coloring. Each cluster is sized
//! independently — disjoint clusters are visually and temporally
//! independent, so no attempt is made at a globally minimal column count.
//!
//! # Complexity
//! O(n log n) for the sort, O(n·k) for the active-set scans with k the
//! maximum simultaneous overlap.

/// A time-bounded input item. `payload` is caller data carried through
/// unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalItem<T> {
    /// Caller-side identifier.
    pub id: String,
    /// Start minute (inclusive).
    pub from_min: u16,
    /// End minute (exclusive). May be 1440 for day-end items.
    pub to_min: u16,
    /// Opaque caller data.
    pub payload: T,
}

impl<T> IntervalItem<T> {
    /// Creates a new item.
    pub fn new(id: impl Into<String>, from_min: u16, to_min: u16, payload: T) -> Self {
        Self {
            id: id.into(),
            from_min,
            to_min,
            payload,
        }
    }
}

/// An input item tagged with its packed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaidOutItem<T> {
    /// Caller-side identifier.
    pub id: String,
    /// Start minute (inclusive).
    pub from_min: u16,
    /// End minute (exclusive).
    pub to_min: u16,
    /// Zero-based column index within the item's cluster.
    pub column: usize,
    /// Total column count of the item's overlap cluster.
    pub columns: usize,
    /// Opaque caller data, carried through.
    pub payload: T,
}

/// A still-open column assignment during the scan.
struct ActiveColumn {
    to_min: u16,
    column: usize,
}

/// Packs one day's intervals into non-overlapping columns.
///
/// Returns the items in sorted scan order, each tagged with its column
/// index and its cluster's column count. Degenerate items
/// (`from_min >= to_min`) sort normally and produce zero-height geometry;
/// nothing here fails.
///
/// ```
/// use timetable::layout::{layout_intervals, IntervalItem};
///
/// let laid = layout_intervals(vec![
///     IntervalItem::new("a", 0, 60, ()),
///     IntervalItem::new("b", 30, 90, ()),
/// ]);
/// assert_eq!((laid[0].column, laid[0].columns), (0, 2));
/// assert_eq!((laid[1].column, laid[1].columns), (1, 2));
/// ```
pub fn layout_intervals<T>(items: Vec<IntervalItem<T>>) -> Vec<LaidOutItem<T>> {
    let mut items = items;
    items.sort_by(|a, b| {
        a.from_min
            .cmp(&b.from_min)
            .then_with(|| a.to_min.cmp(&b.to_min))
    });

    let mut active: Vec<ActiveColumn> = Vec::new();
    let mut out: Vec<LaidOutItem<T>> = Vec::with_capacity(items.len());

    // Running cluster: index of its first item in `out`, its max end seen
    // so far, and the max column used inside it.
    let mut cluster_start = 0usize;
    let mut cluster_end = 0u16;
    let mut cluster_max_col = 0usize;

    for item in items {
        // Entries that ended at or before this start no longer collide
        active.retain(|a| a.to_min > item.from_min);

        let mut column = 0;
        while active.iter().any(|a| a.column == column) {
            column += 1;
        }
        active.push(ActiveColumn {
            to_min: item.to_min,
            column,
        });

        if !out.is_empty() && item.from_min >= cluster_end {
            // Cluster closed: stamp its width on every member
            stamp_columns(&mut out[cluster_start..], cluster_max_col + 1);
            cluster_start = out.len();
            cluster_max_col = 0;
            cluster_end = item.to_min;
        } else {
            cluster_end = cluster_end.max(item.to_min);
        }
        cluster_max_col = cluster_max_col.max(column);

        out.push(LaidOutItem {
            id: item.id,
            from_min: item.from_min,
            to_min: item.to_min,
            column,
            columns: 1,
            payload: item.payload,
        });
    }

    if !out.is_empty() {
        stamp_columns(&mut out[cluster_start..], cluster_max_col + 1);
    }
    out
}

fn stamp_columns<T>(cluster: &mut [LaidOutItem<T>], columns: usize) {
    for item in cluster {
        item.columns = columns;
    }
}
