//! Quickselect, partial sorting and heap-based top-k copying.

use crate::algo::heap::{make_heap_len, sift_down, sort_heap_len};
use crate::algo::sort::{partition_at_pivot, quicksort};
use crate::core::RandomAccess;
use std::cmp::Ordering;

/// Reorders the sequence so that the element at `nth` is the one that would be there if the
/// whole sequence were sorted.
///
/// Nothing before `nth` follows it and nothing after `nth` precedes it; both sides are otherwise
/// unordered. Quickselect with the last element as pivot: expected O(n), O(n²) on adversarial
/// input, no recursion. `nth >= len` leaves the sequence untouched.
///
/// # Examples
///
/// ```
/// let mut v = vec![5, 3, 1, 4, 1, 5, 9, 2, 6];
/// seqalgo::nth_element(&mut v, 4);
///
/// assert_eq!(v[4], 4);
/// assert!(v[..4].iter().all(|&x| x <= 4));
/// assert!(v[5..].iter().all(|&x| x >= 4));
/// ```
pub fn nth_element<S>(seq: &mut S, nth: usize)
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    nth_element_by(seq, nth, |a, b| a < b);
}

/// [`nth_element`] with a custom comparator.
pub fn nth_element_by<S, F>(seq: &mut S, nth: usize, mut is_less: F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    select(seq, 0, nth, len, &mut is_less);
}

fn select<S, F>(seq: &mut S, mut first: usize, nth: usize, mut last: usize, is_less: &mut F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if nth >= last {
        return;
    }

    // `nth` stays inside `[first, last)`, every round places one pivot for good.
    while first < last {
        let mid = partition_at_pivot(seq, first, last, is_less);
        match mid.cmp(&nth) {
            Ordering::Equal => return,
            Ordering::Greater => last = mid,
            Ordering::Less => first = mid + 1,
        }
    }
}

/// Sorts the first `middle` elements so that they are the `middle` smallest ones, in order.
///
/// The rest of the sequence does not precede any of them but is left in unspecified order.
/// `middle >= len` sorts everything, `middle == 0` does nothing.
///
/// # Examples
///
/// ```
/// let mut v = vec![5, 3, 1, 4, 1, 5, 9, 2, 6];
/// seqalgo::partial_sort(&mut v, 3);
///
/// assert_eq!(v[..3], [1, 1, 2]);
/// assert!(v[3..].iter().all(|&x| x >= 2));
/// ```
pub fn partial_sort<S>(seq: &mut S, middle: usize)
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    partial_sort_by(seq, middle, |a, b| a < b);
}

/// [`partial_sort`] with a custom comparator.
pub fn partial_sort_by<S, F>(seq: &mut S, middle: usize, mut is_less: F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    let middle = middle.min(len);
    if middle == 0 {
        return;
    }

    select(seq, 0, middle - 1, len, &mut is_less);
    quicksort(seq, 0, middle, &mut is_less);
}

/// Copies the smallest elements of `source` into `dest`, in ascending order.
///
/// `dest` is first filled up and turned into a heap, every further source element that precedes
/// the heap's maximum replaces it. O(n log k) comparisons.
///
/// # Arguments
///
/// * `source` - Any iterable yielding the candidates. It is consumed once, front to back.
/// * `dest` - The output sequence. Its length caps how many elements are selected.
///
/// # Returns
///
/// `k = min(source length, dest.len())`, the end of the written part of `dest`. Offsets from `k`
/// on are left untouched.
///
/// # Examples
///
/// ```
/// let source = [5, 3, 1, 4, 1, 5, 9, 2, 6];
/// let mut top = [0; 4];
/// let written = seqalgo::partial_sort_copy(source, &mut top[..]);
///
/// assert_eq!(written, 4);
/// assert_eq!(top, [1, 1, 2, 3]);
/// ```
pub fn partial_sort_copy<I, D>(source: I, dest: &mut D) -> usize
where
    I: IntoIterator<Item = D::Item>,
    D: RandomAccess + ?Sized,
    D::Item: Ord,
{
    partial_sort_copy_by(source, dest, |a, b| a < b)
}

/// [`partial_sort_copy`] with a custom comparator.
pub fn partial_sort_copy_by<I, D, F>(source: I, dest: &mut D, mut is_less: F) -> usize
where
    I: IntoIterator<Item = D::Item>,
    D: RandomAccess + ?Sized,
    F: FnMut(&D::Item, &D::Item) -> bool,
{
    let capacity = dest.len();
    if capacity == 0 {
        return 0;
    }

    let mut source = source.into_iter();
    let mut written = 0;
    for value in source.by_ref().take(capacity) {
        *dest.at_mut(written) = value;
        written += 1;
    }

    make_heap_len(dest, written, &mut is_less);

    for value in source {
        if is_less(&value, dest.at(0)) {
            *dest.at_mut(0) = value;
            sift_down(dest, written, &mut is_less);
        }
    }

    sort_heap_len(dest, written, &mut is_less);
    written
}
