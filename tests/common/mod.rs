//! Input patterns and a swap-counting sequence shared by the integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqalgo::core::{Bidirectional, Forward, RandomAccess, Traversal};

pub const TEST_SIZES: [usize; 20] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 15, 16, 17, 20, 33, 50, 100, 280, 1_000,
];

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random(len: usize, rng: &mut StdRng) -> Vec<i32> {
    (0..len).map(|_| rng.random()).collect()
}

pub fn random_few_distinct(len: usize, rng: &mut StdRng) -> Vec<i32> {
    (0..len).map(|_| rng.random_range(0..4)).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn saw(len: usize, teeth: usize, rng: &mut StdRng) -> Vec<i32> {
    let mut v = random(len, rng);
    if len == 0 {
        return v;
    }
    for chunk in v.chunks_mut((len / teeth.max(1)).max(1)) {
        chunk.sort();
    }
    v
}

/// Every pattern at the given length, labelled for failure messages.
pub fn all_patterns(len: usize, rng: &mut StdRng) -> Vec<(&'static str, Vec<i32>)> {
    vec![
        ("random", random(len, rng)),
        ("random_few_distinct", random_few_distinct(len, rng)),
        ("ascending", ascending(len)),
        ("descending", descending(len)),
        ("all_equal", all_equal(len)),
        ("saw", saw(len, 4, rng)),
    ]
}

/// Pairs every value with its input index, for stability checks.
pub fn tagged(values: &[i32]) -> Vec<(i32, usize)> {
    values.iter().copied().zip(0..).collect()
}

/// Wraps a vector and counts the swaps algorithms perform on it.
pub struct Counted {
    pub data: Vec<i32>,
    pub swaps: usize,
}

impl Counted {
    pub fn new(data: Vec<i32>) -> Self {
        Self { data, swaps: 0 }
    }
}

impl Forward for Counted {
    type Item = i32;
    type Pos = usize;

    const TRAVERSAL: Traversal = Traversal::RandomAccess;

    fn begin(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.data.len()
    }

    fn next_pos(&self, pos: usize) -> usize {
        pos + 1
    }

    fn at(&self, pos: usize) -> &i32 {
        &self.data[pos]
    }

    fn at_mut(&mut self, pos: usize) -> &mut i32 {
        &mut self.data[pos]
    }

    fn swap_at(&mut self, a: usize, b: usize) {
        self.swaps += 1;
        self.data.swap(a, b);
    }

    fn advance(&self, pos: usize, n: usize) -> usize {
        pos + n
    }

    fn distance(&self, first: usize, last: usize) -> usize {
        last - first
    }
}

impl Bidirectional for Counted {
    fn prev_pos(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl RandomAccess for Counted {
    fn len(&self) -> usize {
        self.data.len()
    }
}
