//! Core traits and types for seqalgo.
//!
//! This module defines:
//! - [`Traversal`]: The capability tag of a sequence.
//! - [`Forward`], [`Bidirectional`], [`RandomAccess`]: The position-cursor traits every algorithm
//!   is written against.
//! - [`Window`]: A random-access view over a sub-range of another sequence.
//! - [`Span`]: A sub-range of any sequence, addressed by the parent's own positions.

use std::collections::VecDeque;
use std::ops::{Bound, RangeBounds};

/// How a sequence can be traversed.
///
/// Algorithms that have a faster path for a stronger capability check the implementor's
/// [`Forward::TRAVERSAL`] constant, so the choice is made at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    Forward,
    Bidirectional,
    RandomAccess,
}

/// A sequence that can be walked from front to back through position cursors.
///
/// A position (`Pos`) is a plain `Copy` handle into the sequence. It never borrows the storage, so
/// the sequence itself is passed next to the positions and swapping values never invalidates them.
/// `end()` is one past the last element, and `begin() == end()` denotes the empty sequence.
///
/// # Examples
///
/// Implementing for a custom collection:
///
/// ```
/// use seqalgo::core::Forward;
///
/// struct Stack {
///     items: Vec<u32>,
/// }
///
/// impl Forward for Stack {
///     type Item = u32;
///     type Pos = usize;
///
///     fn begin(&self) -> usize {
///         0
///     }
///
///     fn end(&self) -> usize {
///         self.items.len()
///     }
///
///     fn next_pos(&self, pos: usize) -> usize {
///         pos + 1
///     }
///
///     fn at(&self, pos: usize) -> &u32 {
///         &self.items[pos]
///     }
///
///     fn at_mut(&mut self, pos: usize) -> &mut u32 {
///         &mut self.items[pos]
///     }
///
///     fn swap_at(&mut self, a: usize, b: usize) {
///         self.items.swap(a, b);
///     }
/// }
///
/// let mut stack = Stack { items: vec![4, 1, 3, 2] };
/// let mid = seqalgo::partition(&mut stack, |&x| x % 2 == 0);
/// assert_eq!(mid, 2);
/// ```
pub trait Forward {
    type Item;
    type Pos: Copy + Eq;

    /// Capability tag. `Bidirectional` promises a [`Bidirectional`] impl, `RandomAccess` promises
    /// that [`advance`](Forward::advance) and [`distance`](Forward::distance) run in O(1).
    const TRAVERSAL: Traversal = Traversal::Forward;

    /// Position of the first element.
    fn begin(&self) -> Self::Pos;

    /// Position one past the last element.
    fn end(&self) -> Self::Pos;

    /// Position following `pos`. Must not be called with `end()`.
    fn next_pos(&self, pos: Self::Pos) -> Self::Pos;

    /// Returns a reference to the element at `pos`.
    fn at(&self, pos: Self::Pos) -> &Self::Item;

    /// Returns a mutable reference to the element at `pos`.
    fn at_mut(&mut self, pos: Self::Pos) -> &mut Self::Item;

    /// Exchanges the elements at `a` and `b`.
    fn swap_at(&mut self, a: Self::Pos, b: Self::Pos);

    /// Moves `pos` forward by `n` steps.
    #[inline]
    fn advance(&self, mut pos: Self::Pos, n: usize) -> Self::Pos {
        for _ in 0..n {
            pos = self.next_pos(pos);
        }
        pos
    }

    /// Number of steps from `first` to `last`. `last` must be reachable from `first`.
    #[inline]
    fn distance(&self, mut first: Self::Pos, last: Self::Pos) -> usize {
        let mut n = 0;
        while first != last {
            first = self.next_pos(first);
            n += 1;
        }
        n
    }
}

/// A sequence that can also be walked from back to front.
pub trait Bidirectional: Forward {
    /// Position preceding `pos`. Must not be called with `begin()`.
    fn prev_pos(&self, pos: Self::Pos) -> Self::Pos;
}

/// A sequence with O(1) offset arithmetic.
///
/// Positions are offsets: `begin()` is `0` and `end()` is `len()`. Implementors override
/// [`Forward::advance`] and [`Forward::distance`] with plain arithmetic and set
/// [`Forward::TRAVERSAL`] to [`Traversal::RandomAccess`].
pub trait RandomAccess: Bidirectional<Pos = usize> {
    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Slices, vectors and deques are all indexable in O(1), the impls only differ in the type
// they are written for.
macro_rules! impl_random_access {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T> Forward for $ty {
                type Item = T;
                type Pos = usize;

                const TRAVERSAL: Traversal = Traversal::RandomAccess;

                #[inline(always)]
                fn begin(&self) -> usize {
                    0
                }

                #[inline(always)]
                fn end(&self) -> usize {
                    <$ty>::len(self)
                }

                #[inline(always)]
                fn next_pos(&self, pos: usize) -> usize {
                    pos + 1
                }

                #[inline(always)]
                fn at(&self, pos: usize) -> &T {
                    &self[pos]
                }

                #[inline(always)]
                fn at_mut(&mut self, pos: usize) -> &mut T {
                    &mut self[pos]
                }

                #[inline(always)]
                fn swap_at(&mut self, a: usize, b: usize) {
                    self.swap(a, b);
                }

                #[inline(always)]
                fn advance(&self, pos: usize, n: usize) -> usize {
                    pos + n
                }

                #[inline(always)]
                fn distance(&self, first: usize, last: usize) -> usize {
                    last - first
                }
            }

            impl<T> Bidirectional for $ty {
                #[inline(always)]
                fn prev_pos(&self, pos: usize) -> usize {
                    pos - 1
                }
            }

            impl<T> RandomAccess for $ty {
                #[inline(always)]
                fn len(&self) -> usize {
                    <$ty>::len(self)
                }
            }
        )*
    };
}

impl_random_access!([T], Vec<T>, VecDeque<T>);

/// A random-access view over the sub-range of another random-access sequence.
///
/// Positions inside the window are re-based so that the first element of the sub-range is at `0`.
/// This gives every whole-sequence operation a sub-range form, also for containers that cannot be
/// re-sliced such as [`VecDeque`].
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use seqalgo::core::Window;
///
/// let mut queue: VecDeque<i32> = VecDeque::from(vec![9, 4, 3, 2, 1, 0]);
/// seqalgo::sort(&mut Window::new(&mut queue, 1..5));
///
/// assert_eq!(queue, [9, 1, 2, 3, 4, 0]);
/// ```
#[derive(Debug)]
pub struct Window<'a, S: ?Sized> {
    seq: &'a mut S,
    start: usize,
    len: usize,
}

impl<'a, S: RandomAccess + ?Sized> Window<'a, S> {
    /// Creates a window over `range` of `seq`.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or reaches past the end of `seq`.
    pub fn new(seq: &'a mut S, range: impl RangeBounds<usize>) -> Self {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e + 1,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => seq.len(),
        };
        assert!(
            start <= end && end <= seq.len(),
            "window {start}..{end} out of range for sequence of length {}",
            seq.len()
        );

        Self {
            seq,
            start,
            len: end - start,
        }
    }

    /// Offset of the window's first element in the underlying sequence.
    pub fn start(&self) -> usize {
        self.start
    }
}

impl<S: RandomAccess + ?Sized> Forward for Window<'_, S> {
    type Item = S::Item;
    type Pos = usize;

    const TRAVERSAL: Traversal = Traversal::RandomAccess;

    #[inline(always)]
    fn begin(&self) -> usize {
        0
    }

    #[inline(always)]
    fn end(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn next_pos(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &S::Item {
        debug_assert!(pos < self.len);
        self.seq.at(self.start + pos)
    }

    #[inline(always)]
    fn at_mut(&mut self, pos: usize) -> &mut S::Item {
        debug_assert!(pos < self.len);
        self.seq.at_mut(self.start + pos)
    }

    #[inline(always)]
    fn swap_at(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.len && b < self.len);
        self.seq.swap_at(self.start + a, self.start + b);
    }

    #[inline(always)]
    fn advance(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    #[inline(always)]
    fn distance(&self, first: usize, last: usize) -> usize {
        last - first
    }
}

impl<S: RandomAccess + ?Sized> Bidirectional for Window<'_, S> {
    #[inline(always)]
    fn prev_pos(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<S: RandomAccess + ?Sized> RandomAccess for Window<'_, S> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}

/// A sub-range `[first, last)` of any sequence.
///
/// Unlike [`Window`], positions are not re-based: a `Span` hands out the parent's own positions,
/// so positions returned by an algorithm stay valid in the parent once the span is dropped. This
/// is how linked and other non-indexable sequences run an operation over part of themselves. The
/// span inherits the parent's [`Forward::TRAVERSAL`] and is [`Bidirectional`] when the parent is.
///
/// `last` must be reachable from `first` by [`Forward::next_pos`].
///
/// # Examples
///
/// ```
/// use seqalgo::core::Span;
///
/// let mut v = vec![8, 1, 2, 3, 4, 5, 6, 0];
/// let mid = seqalgo::stable_partition(&mut Span::new(&mut v, 1, 7), |&x| x % 2 == 0);
///
/// assert_eq!(mid, 4);
/// assert_eq!(v, [8, 2, 4, 6, 1, 3, 5, 0]);
/// ```
pub struct Span<'a, S: Forward + ?Sized> {
    seq: &'a mut S,
    first: S::Pos,
    last: S::Pos,
}

impl<'a, S: Forward + ?Sized> Span<'a, S> {
    pub fn new(seq: &'a mut S, first: S::Pos, last: S::Pos) -> Self {
        Self { seq, first, last }
    }
}

impl<S: Forward + ?Sized> Forward for Span<'_, S> {
    type Item = S::Item;
    type Pos = S::Pos;

    const TRAVERSAL: Traversal = S::TRAVERSAL;

    #[inline(always)]
    fn begin(&self) -> S::Pos {
        self.first
    }

    #[inline(always)]
    fn end(&self) -> S::Pos {
        self.last
    }

    #[inline(always)]
    fn next_pos(&self, pos: S::Pos) -> S::Pos {
        self.seq.next_pos(pos)
    }

    #[inline(always)]
    fn at(&self, pos: S::Pos) -> &S::Item {
        self.seq.at(pos)
    }

    #[inline(always)]
    fn at_mut(&mut self, pos: S::Pos) -> &mut S::Item {
        self.seq.at_mut(pos)
    }

    #[inline(always)]
    fn swap_at(&mut self, a: S::Pos, b: S::Pos) {
        self.seq.swap_at(a, b);
    }

    #[inline(always)]
    fn advance(&self, pos: S::Pos, n: usize) -> S::Pos {
        self.seq.advance(pos, n)
    }

    #[inline(always)]
    fn distance(&self, first: S::Pos, last: S::Pos) -> usize {
        self.seq.distance(first, last)
    }
}

impl<S: Bidirectional + ?Sized> Bidirectional for Span<'_, S> {
    #[inline(always)]
    fn prev_pos(&self, pos: S::Pos) -> S::Pos {
        self.seq.prev_pos(pos)
    }
}
