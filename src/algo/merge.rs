//! Buffer-free merging of two adjacent sorted runs.

use crate::algo::primitives::rotate;
use crate::core::Bidirectional;

/// Merges the sorted runs `[begin, middle)` and `[middle, end)` into one sorted sequence.
///
/// Stable: of two equal elements, the one from the first run stays in front. No auxiliary storage
/// is used, blocks are exchanged with [`rotate`](crate::rotate). If the first element of the second
/// run does not precede the last element of the first run the sequence is already sorted and is
/// left untouched.
///
/// # Arguments
///
/// * `seq` - The sequence holding both runs back to back. Use a [`Span`](crate::Span) or a
///   [`Window`](crate::Window) to merge part of a larger sequence.
/// * `middle` - Position of the first element of the second run.
///
/// # Examples
///
/// ```
/// let mut v = vec![1, 4, 6, 9, 2, 3, 5, 8];
/// seqalgo::inplace_merge(&mut v, 4);
///
/// assert_eq!(v, [1, 2, 3, 4, 5, 6, 8, 9]);
/// ```
pub fn inplace_merge<S>(seq: &mut S, middle: S::Pos)
where
    S: Bidirectional + ?Sized,
    S::Item: Ord,
{
    inplace_merge_by(seq, middle, |a, b| a < b);
}

/// [`inplace_merge`] with a custom comparator. Both runs must be sorted by `is_less`.
pub fn inplace_merge_by<S, F>(seq: &mut S, middle: S::Pos, mut is_less: F)
where
    S: Bidirectional + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let (first, last) = (seq.begin(), seq.end());
    let len1 = seq.distance(first, middle);
    let len2 = seq.distance(middle, last);
    merge_range(seq, first, middle, last, len1, len2, &mut is_less);
}

/// Merges `[first, middle)` (`len1` elements) with `[middle, last)` (`len2` elements).
///
/// Each round finds the block `A` at the end of the first run and the block `B` at the start of
/// the second run such that every element of `B` strictly precedes every element of `A`, and
/// everything left of `A` does not follow anything right of `B`. Rotating `A` past `B` splits the
/// problem into two independent merges; the smaller one recurses, the larger one loops.
pub(crate) fn merge_range<S, F>(
    seq: &mut S,
    mut first: S::Pos,
    mut middle: S::Pos,
    mut last: S::Pos,
    mut len1: usize,
    mut len2: usize,
    is_less: &mut F,
) where
    S: Bidirectional + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    loop {
        if len1 == 0 || len2 == 0 {
            return;
        }

        let mut left = seq.prev_pos(middle);
        if !is_less(seq.at(middle), seq.at(left)) {
            return;
        }

        // Walk outwards from `middle` while the right element precedes its mirror on the left.
        // `start_a` is the first element of `A`, `end_b` is one past the last element of `B`.
        let mut start_a = left;
        let mut end_b = seq.next_pos(middle);
        let mut len_a = 1;
        let mut len_b = 1;
        while len_a < len1 && len_b < len2 {
            left = seq.prev_pos(left);
            if !is_less(seq.at(end_b), seq.at(left)) {
                break;
            }
            start_a = left;
            end_b = seq.next_pos(end_b);
            len_a += 1;
            len_b += 1;
        }

        // Widen B by the following elements that still precede the smallest element of A.
        while len_b < len2 && is_less(seq.at(end_b), seq.at(start_a)) {
            end_b = seq.next_pos(end_b);
            len_b += 1;
        }

        // Widen A by the preceding elements that the largest element of B still precedes.
        let last_b = seq.prev_pos(end_b);
        while len_a < len1 {
            let before = seq.prev_pos(start_a);
            if !is_less(seq.at(last_b), seq.at(before)) {
                break;
            }
            start_a = before;
            len_a += 1;
        }

        let new_middle = rotate(seq, start_a, middle, end_b);

        // Left problem: [first, start_a) with B, now at [start_a, new_middle).
        // Right problem: A, now at [new_middle, end_b), with [end_b, last).
        let (left_len1, left_len2) = (len1 - len_a, len_b);
        let (right_len1, right_len2) = (len_a, len2 - len_b);

        if left_len1 + left_len2 <= right_len1 + right_len2 {
            merge_range(seq, first, start_a, new_middle, left_len1, left_len2, is_less);
            first = new_middle;
            middle = end_b;
            len1 = right_len1;
            len2 = right_len2;
        } else {
            merge_range(seq, new_middle, end_b, last, right_len1, right_len2, is_less);
            middle = start_a;
            last = new_middle;
            len1 = left_len1;
            len2 = left_len2;
        }
    }
}
