//! Unstable quicksort, stable merge sort and sortedness checks.

use crate::algo::merge::merge_range;
use crate::algo::partition::partition_with;
use crate::algo::primitives::iter_swap;
use crate::core::{Forward, RandomAccess};

/// Sorts the sequence in ascending order. Not stable.
///
/// Quicksort with the last element as pivot. Average O(n log n); already sorted, reverse sorted
/// and all-equal input take O(n²) comparisons. Recursion only descends into the smaller side of
/// each partition, so the stack depth stays O(log n) on every input.
///
/// # Examples
///
/// ```
/// let mut v = vec![5, 3, 1, 4, 1, 5, 9, 2, 6];
/// seqalgo::sort(&mut v);
///
/// assert_eq!(v, [1, 1, 2, 3, 4, 5, 5, 6, 9]);
/// ```
pub fn sort<S>(seq: &mut S)
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    sort_by(seq, |a, b| a < b);
}

/// [`sort`] with a custom comparator. `is_less(a, b)` must return `true` if `a` strictly
/// precedes `b`.
pub fn sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    quicksort(seq, 0, len, &mut is_less);
}

pub(crate) fn quicksort<S, F>(seq: &mut S, mut first: usize, mut last: usize, is_less: &mut F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    while last - first >= 2 {
        let mid = partition_at_pivot(seq, first, last, is_less);

        if mid - first < last - mid {
            quicksort(seq, first, mid, is_less);
            first = mid + 1;
        } else {
            quicksort(seq, mid + 1, last, is_less);
            last = mid;
        }
    }
}

/// Partitions `[first, last)` around its last element and moves that pivot onto the boundary.
///
/// Returns the pivot's final offset: everything before it strictly precedes it, nothing after it
/// does. The range must not be empty.
pub(crate) fn partition_at_pivot<S, F>(
    seq: &mut S,
    first: usize,
    last: usize,
    is_less: &mut F,
) -> usize
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    debug_assert!(first < last);

    let pivot = last - 1;
    let mid = partition_with(seq, first, pivot, |s, pos| is_less(s.at(pos), s.at(pivot)));
    iter_swap(seq, mid, pivot);
    mid
}

/// Sorts the sequence in ascending order, keeping equal elements in their input order.
///
/// Merge sort: bisect, sort both halves, merge them in place by rotations. No buffer is
/// allocated. Each merge of `n` elements can cost O(n log n) comparisons and swaps, so the sort
/// takes O(n log² n) of both in the worst case. O(log n) stack.
///
/// # Examples
///
/// ```
/// let mut v = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// seqalgo::stable_sort_by(&mut v, |a, b| a.0 < b.0);
///
/// assert_eq!(v, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn stable_sort<S>(seq: &mut S)
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    stable_sort_by(seq, |a, b| a < b);
}

/// [`stable_sort`] with a custom comparator.
pub fn stable_sort_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    merge_sort(seq, 0, len, &mut is_less);
}

fn merge_sort<S, F>(seq: &mut S, first: usize, last: usize, is_less: &mut F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = last - first;
    if len < 2 {
        return;
    }

    let half = len / 2;
    let mid = first + half;
    merge_sort(seq, first, mid, is_less);
    merge_sort(seq, mid, last, is_less);
    merge_range(seq, first, mid, last, half, len - half, is_less);
}

/// Returns `true` if no element is strictly preceded by the one after it.
pub fn is_sorted<S>(seq: &S) -> bool
where
    S: Forward + ?Sized,
    S::Item: Ord,
{
    is_sorted_by(seq, |a, b| a < b)
}

/// [`is_sorted`] with a custom comparator.
pub fn is_sorted_by<S, F>(seq: &S, is_less: F) -> bool
where
    S: Forward + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    is_sorted_until_by(seq, is_less) == seq.end()
}

/// Returns the end of the longest sorted prefix: the first position whose element strictly
/// precedes its predecessor, or `end()`.
///
/// # Examples
///
/// ```
/// let v = vec![1, 2, 2, 5, 3, 4];
///
/// assert_eq!(seqalgo::is_sorted_until(&v), 4);
/// ```
pub fn is_sorted_until<S>(seq: &S) -> S::Pos
where
    S: Forward + ?Sized,
    S::Item: Ord,
{
    is_sorted_until_by(seq, |a, b| a < b)
}

/// [`is_sorted_until`] with a custom comparator.
pub fn is_sorted_until_by<S, F>(seq: &S, mut is_less: F) -> S::Pos
where
    S: Forward + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let last = seq.end();
    let mut prev = seq.begin();
    if prev == last {
        return last;
    }

    let mut cur = seq.next_pos(prev);
    while cur != last {
        if is_less(seq.at(cur), seq.at(prev)) {
            return cur;
        }
        prev = cur;
        cur = seq.next_pos(cur);
    }

    last
}
