//! Binary max-heap maintenance over random-access sequences.
//!
//! The heap is implicit: the element at offset `i` has its children at `2i + 1` and `2i + 2`, and
//! no parent is strictly preceded by one of its children. Under the default `<` ordering the
//! largest element therefore sits at offset `0`.

use crate::core::RandomAccess;

/// Restores the heap after a new element was appended at the last position.
///
/// `[0, len - 1)` must already be a heap.
///
/// # Examples
///
/// ```
/// use seqalgo::{is_heap, make_heap, push_heap};
///
/// let mut v = vec![3, 1, 4, 1, 5];
/// make_heap(&mut v);
/// v.push(9);
/// push_heap(&mut v);
///
/// assert_eq!(v[0], 9);
/// assert!(is_heap(&v));
/// ```
pub fn push_heap<S>(seq: &mut S)
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    push_heap_by(seq, |a, b| a < b);
}

/// [`push_heap`] with a custom comparator.
pub fn push_heap_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    sift_up(seq, len, &mut is_less);
}

/// Moves the largest element to the last position and re-heapifies `[0, len - 1)`.
///
/// # Examples
///
/// ```
/// use seqalgo::{make_heap, pop_heap};
///
/// let mut v = vec![3, 1, 4, 1, 5];
/// make_heap(&mut v);
/// pop_heap(&mut v);
///
/// assert_eq!(v.pop(), Some(5));
/// ```
pub fn pop_heap<S>(seq: &mut S)
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    pop_heap_by(seq, |a, b| a < b);
}

/// [`pop_heap`] with a custom comparator.
pub fn pop_heap_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    pop_heap_len(seq, len, &mut is_less);
}

/// Turns the sequence into a heap.
pub fn make_heap<S>(seq: &mut S)
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    make_heap_by(seq, |a, b| a < b);
}

/// [`make_heap`] with a custom comparator.
pub fn make_heap_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    make_heap_len(seq, len, &mut is_less);
}

/// Sorts a heap into ascending order.
///
/// The sequence must already be a heap under the same ordering.
///
/// # Examples
///
/// ```
/// use seqalgo::{make_heap, sort_heap};
///
/// let mut v = vec![5, 3, 1, 4, 1, 5, 9, 2, 6];
/// make_heap(&mut v);
/// sort_heap(&mut v);
///
/// assert_eq!(v, [1, 1, 2, 3, 4, 5, 5, 6, 9]);
/// ```
pub fn sort_heap<S>(seq: &mut S)
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    sort_heap_by(seq, |a, b| a < b);
}

/// [`sort_heap`] with a custom comparator.
pub fn sort_heap_by<S, F>(seq: &mut S, mut is_less: F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    sort_heap_len(seq, len, &mut is_less);
}

/// Returns `true` if the sequence is a heap.
pub fn is_heap<S>(seq: &S) -> bool
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    is_heap_by(seq, |a, b| a < b)
}

/// [`is_heap`] with a custom comparator.
pub fn is_heap_by<S, F>(seq: &S, is_less: F) -> bool
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    is_heap_until_by(seq, is_less) == seq.len()
}

/// Returns the offset of the first element that is strictly preceded by its parent, or `len`.
///
/// `[0, is_heap_until(seq))` is the longest prefix that is a heap.
pub fn is_heap_until<S>(seq: &S) -> usize
where
    S: RandomAccess + ?Sized,
    S::Item: Ord,
{
    is_heap_until_by(seq, |a, b| a < b)
}

/// [`is_heap_until`] with a custom comparator.
pub fn is_heap_until_by<S, F>(seq: &S, mut is_less: F) -> usize
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.len();
    (1..len)
        .find(|&child| is_less(seq.at((child - 1) / 2), seq.at(child)))
        .unwrap_or(len)
}

/// Walks the element at `len - 1` towards the root while its parent strictly precedes it.
fn sift_up<S, F>(seq: &mut S, len: usize, is_less: &mut F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if len < 2 {
        return;
    }

    let mut child = len - 1;
    while child > 0 {
        let parent = (child - 1) / 2;
        if !is_less(seq.at(parent), seq.at(child)) {
            break;
        }
        seq.swap_at(parent, child);
        child = parent;
    }
}

/// Restores heap order over `[0, len)` when only the root may be out of place.
///
/// The root is swapped with its larger child for as long as it strictly precedes that child.
pub(crate) fn sift_down<S, F>(seq: &mut S, len: usize, is_less: &mut F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut node = 0;
    loop {
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Pick the larger child. On ties the left one wins.
        if child + 1 < len && is_less(seq.at(child), seq.at(child + 1)) {
            child += 1;
        }

        if !is_less(seq.at(node), seq.at(child)) {
            break;
        }
        seq.swap_at(node, child);
        node = child;
    }
}

pub(crate) fn pop_heap_len<S, F>(seq: &mut S, len: usize, is_less: &mut F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if len < 2 {
        return;
    }
    seq.swap_at(0, len - 1);
    sift_down(seq, len - 1, is_less);
}

/// Grows the heap one prefix at a time, each step being a [`push_heap`] of the next element.
pub(crate) fn make_heap_len<S, F>(seq: &mut S, len: usize, is_less: &mut F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    for end in 2..=len {
        sift_up(seq, end, is_less);
    }
}

pub(crate) fn sort_heap_len<S, F>(seq: &mut S, len: usize, is_less: &mut F)
where
    S: RandomAccess + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    for end in (2..=len).rev() {
        pop_heap_len(seq, end, is_less);
    }
}
