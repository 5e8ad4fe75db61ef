//! Partitioning by a unary predicate.

use crate::algo::primitives::{find_if_not, rotate};
use crate::core::{Forward, Traversal};

/// Moves every element satisfying `pred` in front of every element that does not.
///
/// Returns the partition boundary: the position of the first element of the second group. The
/// relative order inside the groups is not preserved. Single pass, O(n) predicate applications.
///
/// # Examples
///
/// ```
/// let mut v = vec![1, 2, 3, 4, 5, 6, 7];
/// let mid = seqalgo::partition(&mut v, |&x| x % 3 == 0);
///
/// assert_eq!(mid, 2);
/// assert!(v[..mid].iter().all(|x| x % 3 == 0));
/// ```
pub fn partition<S, P>(seq: &mut S, mut pred: P) -> S::Pos
where
    S: Forward + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    partition_with(seq, first, last, |s, pos| pred(s.at(pos)))
}

/// Lomuto-style single pass over `[first, last)`.
///
/// The predicate sees the whole sequence together with the probed position, which lets the
/// quicksort family compare against a pivot that lives outside `[first, last)`.
pub(crate) fn partition_with<S, P>(
    seq: &mut S,
    first: S::Pos,
    last: S::Pos,
    mut pred: P,
) -> S::Pos
where
    S: Forward + ?Sized,
    P: FnMut(&S, S::Pos) -> bool,
{
    let mut write = first;
    while write != last && pred(&*seq, write) {
        write = seq.next_pos(write);
    }
    if write == last {
        return last;
    }

    let mut read = seq.next_pos(write);
    while read != last {
        if pred(&*seq, read) {
            seq.swap_at(read, write);
            write = seq.next_pos(write);
        }
        read = seq.next_pos(read);
    }

    write
}

/// Like [`partition`], but keeps the input order inside both groups.
///
/// The range is bisected, both halves are partitioned recursively and the "false" group of the
/// left half is rotated past the "true" group of the right half. O(n) predicate applications and
/// O(n log n) swaps, without any buffer.
///
/// # Examples
///
/// ```
/// let mut v = vec![1, 2, 3, 4, 5, 6, 7];
/// let mid = seqalgo::stable_partition(&mut v, |&x| x % 2 == 0);
///
/// assert_eq!(mid, 3);
/// assert_eq!(v, [2, 4, 6, 1, 3, 5, 7]);
/// ```
pub fn stable_partition<S, P>(seq: &mut S, mut pred: P) -> S::Pos
where
    S: Forward + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    let len = seq.distance(first, last);
    stable_partition_range(seq, first, last, len, &mut pred)
}

fn stable_partition_range<S, P>(
    seq: &mut S,
    first: S::Pos,
    last: S::Pos,
    len: usize,
    pred: &mut P,
) -> S::Pos
where
    S: Forward + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    match len {
        0 => return last,
        1 => return if pred(seq.at(first)) { last } else { first },
        _ => {}
    }

    let half = len / 2;
    let mid = seq.advance(first, half);
    let left = stable_partition_range(seq, first, mid, half, pred);
    let right = stable_partition_range(seq, mid, last, len - half, pred);

    rotate(seq, left, mid, right)
}

/// Returns the partition boundary of an already partitioned sequence.
///
/// Random-access sequences are binary searched with O(log n) predicate applications, all others
/// are scanned linearly. If the sequence is not partitioned by `pred` the returned position is
/// unspecified but always in range.
///
/// # Arguments
///
/// * `seq` - A sequence already partitioned by `pred`.
/// * `pred` - The predicate the sequence is partitioned by.
///
/// # Returns
///
/// The position of the first element not satisfying `pred`, or `end()` if there is none.
///
/// # Examples
///
/// ```
/// let v = [1, 2, 3, 3, 5, 6, 7];
/// let pos = seqalgo::partition_point(&v[..], |&x| x < 5);
///
/// assert_eq!(pos, 4);
/// ```
pub fn partition_point<S, P>(seq: &S, mut pred: P) -> S::Pos
where
    S: Forward + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let (mut first, last) = (seq.begin(), seq.end());
    if S::TRAVERSAL != Traversal::RandomAccess {
        return find_if_not(seq, first, last, pred);
    }

    let mut len = seq.distance(first, last);
    while len > 0 {
        let half = len / 2;
        let mid = seq.advance(first, half);
        if pred(seq.at(mid)) {
            first = seq.next_pos(mid);
            len -= half + 1;
        } else {
            len = half;
        }
    }

    first
}

/// Returns `true` if every element satisfying `pred` comes before every element that does not.
pub fn is_partitioned<S, P>(seq: &S, mut pred: P) -> bool
where
    S: Forward + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let last = seq.end();
    let mut pos = find_if_not(seq, seq.begin(), last, &mut pred);
    while pos != last {
        if pred(seq.at(pos)) {
            return false;
        }
        pos = seq.next_pos(pos);
    }
    true
}
