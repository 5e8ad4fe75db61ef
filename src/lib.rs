//! # seqalgo
//!
//! `seqalgo` is a toolkit of in-place sequence algorithms: sorting, selection, partitioning and
//! binary-heap maintenance, written once against abstract position cursors and a caller-supplied
//! ordering predicate instead of against one container's storage layout.
//!
//! ## Key Features
//!
//! - **Traversal tiers**: Algorithms ask for the weakest capability they need. [`partition`] and
//!   [`stable_partition`] work on [`Forward`] sequences, [`inplace_merge`] on [`Bidirectional`]
//!   ones, sorting, selection and heaps on [`RandomAccess`] ones.
//! - **No allocation**: Everything, including the stable sort, works by swapping elements of the
//!   caller's sequence. Stack depth is O(log n) for every algorithm.
//! - **Comparator-driven**: Every ordering operation has an `_by` form taking
//!   `is_less(a, b)`, "a strictly precedes b", and a default form for `T: Ord`.
//! - **Container-agnostic**: Slices, `Vec` and `VecDeque` work out of the box, [`Window`] gives any
//!   random-access sequence a sub-range view, [`Span`] does the same for every other sequence, and
//!   custom containers implement the cursor traits.
//!
//! ## Usage
//!
//! ### Sorting and selection
//!
//! ```rust
//! use seqalgo::prelude::*;
//!
//! let mut data = vec![5, 3, 1, 4, 1, 5, 9, 2, 6];
//! sort(&mut data);
//! assert_eq!(data, vec![1, 1, 2, 3, 4, 5, 5, 6, 9]);
//!
//! let mut data = vec![5, 3, 1, 4, 1, 5, 9, 2, 6];
//! partial_sort(&mut data, 3);
//! assert_eq!(data[..3], [1, 1, 2]);
//! ```
//!
//! ### Stable ordering by key
//!
//! ```rust
//! use seqalgo::stable_sort_by;
//!
//! let mut users = vec![("carol", 31), ("alice", 27), ("bob", 31), ("dave", 27)];
//! stable_sort_by(&mut users, |a, b| a.1 < b.1);
//!
//! assert_eq!(users, vec![("alice", 27), ("dave", 27), ("carol", 31), ("bob", 31)]);
//! ```
//!
//! ### Custom Sequences
//!
//! Containers that are not indexable implement [`Forward`] (and [`Bidirectional`] if they can walk
//! backwards) with their own position type. See the trait documentation for an example.
//!
//! ## Performance Characteristics
//!
//! - **sort**: Quicksort with the last element as pivot. O(n log n) on average, O(n²) comparisons
//!   on sorted, reverse sorted or all-equal input.
//! - **stable_sort**: O(n log² n) comparisons and swaps in the worst case.
//! - **nth_element**: Expected O(n), O(n²) on adversarial input.
//! - **partial_sort_copy**: O(n log k) for `k` selected elements.
//! - **Memory Overhead**: None beyond a handful of positions per stack frame.

pub mod algo;
pub mod core;

pub use crate::algo::{
    find_if_not, inplace_merge, inplace_merge_by, is_heap, is_heap_by, is_heap_until,
    is_heap_until_by, is_partitioned, is_sorted, is_sorted_by, is_sorted_until,
    is_sorted_until_by, iter_swap, make_heap, make_heap_by, nth_element, nth_element_by,
    partial_sort, partial_sort_by, partial_sort_copy, partial_sort_copy_by, partition,
    partition_point, pop_heap, pop_heap_by, push_heap, push_heap_by, reverse, rotate, sort,
    sort_by, sort_heap, sort_heap_by, stable_partition, stable_sort, stable_sort_by,
};
pub use crate::core::{Bidirectional, Forward, RandomAccess, Span, Traversal, Window};

pub mod prelude {
    pub use crate::algo::{
        inplace_merge, inplace_merge_by, is_sorted, is_sorted_by, make_heap, make_heap_by,
        nth_element, nth_element_by, partial_sort, partial_sort_by, partial_sort_copy,
        partial_sort_copy_by, partition, partition_point, pop_heap, pop_heap_by, push_heap,
        push_heap_by, sort, sort_by, sort_heap, sort_heap_by, stable_partition, stable_sort,
        stable_sort_by,
    };
    pub use crate::core::{Bidirectional, Forward, RandomAccess, Span, Window};
}
