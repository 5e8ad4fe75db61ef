//! Sequence primitives the engines are built from.

use crate::core::{Bidirectional, Forward};

/// Exchanges the elements at `a` and `b`. Equal positions are left untouched.
#[inline]
pub fn iter_swap<S: Forward + ?Sized>(seq: &mut S, a: S::Pos, b: S::Pos) {
    if a != b {
        seq.swap_at(a, b);
    }
}

/// Returns the first position in `[first, last)` whose element does not satisfy `pred`, or `last`.
pub fn find_if_not<S, P>(seq: &S, mut first: S::Pos, last: S::Pos, mut pred: P) -> S::Pos
where
    S: Forward + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    while first != last && pred(seq.at(first)) {
        first = seq.next_pos(first);
    }
    first
}

/// Reverses the elements of `[first, last)`.
pub fn reverse<S: Bidirectional + ?Sized>(seq: &mut S, mut first: S::Pos, mut last: S::Pos) {
    while first != last {
        last = seq.prev_pos(last);
        if first == last {
            break;
        }
        seq.swap_at(first, last);
        first = seq.next_pos(first);
    }
}

/// Rotates `[first, last)` so that the element at `middle` becomes the first one.
///
/// Returns the new position of the element that was at `first`, i.e. `first + (last - middle)`.
/// Only forward steps are taken: every pass swaps the block `[middle, last)` into place and
/// leaves a smaller rotation of the tail behind.
///
/// # Examples
///
/// ```
/// let mut v = vec![1, 2, 3, 4, 5];
/// let pos = seqalgo::rotate(&mut v, 0, 3, 5);
///
/// assert_eq!(v, [4, 5, 1, 2, 3]);
/// assert_eq!(pos, 2);
/// ```
pub fn rotate<S: Forward + ?Sized>(
    seq: &mut S,
    first: S::Pos,
    middle: S::Pos,
    last: S::Pos,
) -> S::Pos {
    if first == middle {
        return last;
    }
    if middle == last {
        return first;
    }

    let (mut first, mut middle) = rotate_pass(seq, first, middle, last);
    let result = first;

    while first != middle && middle != last {
        (first, middle) = rotate_pass(seq, first, middle, last);
    }

    result
}

/// Swaps `[middle, last)` to the front of `[first, last)`.
///
/// Returns the remaining sub-rotation `(first, middle)` over the same `last`.
fn rotate_pass<S: Forward + ?Sized>(
    seq: &mut S,
    first: S::Pos,
    middle: S::Pos,
    last: S::Pos,
) -> (S::Pos, S::Pos) {
    let mut write = first;
    // Where the element originally at `first` ends up once `read` hits `last`.
    let mut next_read = first;
    let mut read = middle;

    while read != last {
        if write == next_read {
            next_read = read;
        }
        seq.swap_at(write, read);
        write = seq.next_pos(write);
        read = seq.next_pos(read);
    }

    (write, next_read)
}
