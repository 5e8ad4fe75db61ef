//! Sequence algorithms.
//!
//! The algorithms are grouped by engine:
//! - [`heap`]: Binary max-heap maintenance (`push`, `pop`, `make`, `sort_heap`).
//! - [`partition`]: Unstable and stable partitioning, partition point.
//! - [`sort`]: Quicksort, buffer-free merge sort, sortedness checks.
//! - [`merge`]: Buffer-free merging of adjacent sorted runs.
//! - [`select`]: Quickselect, partial sort, top-k copy.
//! - [`primitives`]: `rotate`, `reverse`, `iter_swap`, `find_if_not`.
//!
//! Every operation mutates the caller's sequence in place and never allocates.

pub mod heap;
pub mod merge;
pub mod partition;
pub mod primitives;
pub mod select;
pub mod sort;

pub use heap::{
    is_heap, is_heap_by, is_heap_until, is_heap_until_by, make_heap, make_heap_by, pop_heap,
    pop_heap_by, push_heap, push_heap_by, sort_heap, sort_heap_by,
};
pub use merge::{inplace_merge, inplace_merge_by};
pub use partition::{is_partitioned, partition, partition_point, stable_partition};
pub use primitives::{find_if_not, iter_swap, reverse, rotate};
pub use select::{
    nth_element, nth_element_by, partial_sort, partial_sort_by, partial_sort_copy,
    partial_sort_copy_by,
};
pub use sort::{
    is_sorted, is_sorted_by, is_sorted_until, is_sorted_until_by, sort, sort_by, stable_sort,
    stable_sort_by,
};
