mod common;

use common::{TEST_SIZES, all_patterns, rng, tagged};
use seqalgo::prelude::*;
use seqalgo::{find_if_not, is_partitioned};

fn sorted(mut v: Vec<i32>) -> Vec<i32> {
    v.sort();
    v
}

#[test]
fn test_partition_groups() {
    let mut rng = rng(21);

    for len in TEST_SIZES {
        for (name, input) in all_patterns(len, &mut rng) {
            let pred = |x: &i32| x % 2 == 0;
            let mut v = input.clone();
            let mid = partition(&mut v, pred);

            assert!(v[..mid].iter().all(pred), "{name} of len {len}");
            assert!(!v[mid..].iter().any(pred), "{name} of len {len}");
            assert!(is_partitioned(&v, pred));
            assert_eq!(sorted(v), sorted(input));
        }
    }
}

#[test]
fn test_stable_partition_keeps_order() {
    let mut rng = rng(22);

    for len in TEST_SIZES {
        for (name, input) in all_patterns(len, &mut rng) {
            let mut v = tagged(&input);
            let mid = stable_partition(&mut v, |x| x.0 % 3 == 0);

            let expected: Vec<(i32, usize)> = tagged(&input)
                .into_iter()
                .filter(|x| x.0 % 3 == 0)
                .chain(tagged(&input).into_iter().filter(|x| x.0 % 3 != 0))
                .collect();
            assert_eq!(v, expected, "stable_partition failed for {name} of len {len}");
            assert_eq!(mid, input.iter().filter(|x| *x % 3 == 0).count());
        }
    }
}

#[test]
fn test_stable_partition_edge_cases() {
    let mut empty: Vec<i32> = vec![];
    assert_eq!(stable_partition(&mut empty, |_| true), 0);

    let mut single = vec![1];
    assert_eq!(stable_partition(&mut single, |_| true), 1);
    assert_eq!(stable_partition(&mut single, |_| false), 0);

    let mut all = vec![1, 2, 3];
    assert_eq!(stable_partition(&mut all, |_| true), 3);
    assert_eq!(partition(&mut all, |_| false), 0);
    assert_eq!(all, vec![1, 2, 3]);
}

#[test]
fn test_partition_point_binary_search() {
    let v: Vec<i32> = (0..100).collect();
    for boundary in 0..=100 {
        assert_eq!(partition_point(&v, |&x| x < boundary), boundary as usize);
    }

    let empty: Vec<i32> = vec![];
    assert_eq!(partition_point(&empty, |_| true), 0);
}

#[test]
fn test_partition_point_unpartitioned_stays_in_range() {
    let v = vec![1, 0, 1, 0, 1, 0, 1];
    let pos = partition_point(&v, |&x| x == 1);
    assert!(pos <= v.len());
}

#[test]
fn test_is_partitioned() {
    let v = vec![2, 4, 6, 1, 3];
    assert!(is_partitioned(&v, |x| x % 2 == 0));
    assert!(!is_partitioned(&v, |x| x % 2 == 1));

    let empty: Vec<i32> = vec![];
    assert!(is_partitioned(&empty, |_| false));
}

#[test]
fn test_find_if_not() {
    let v = vec![2, 4, 5, 6];
    assert_eq!(find_if_not(&v, 0, 4, |x| x % 2 == 0), 2);
    assert_eq!(find_if_not(&v, 3, 4, |x| x % 2 == 0), 4);
}
