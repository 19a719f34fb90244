//! Heap algorithms over shuffled input.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use tola_traits::algo::{
    is_heap, is_heap_by, is_sorted, make_heap, make_heap_by, pop_heap_by, push_heap_by, sort_heap,
    sort_heap_by,
};
use tola_traits::iter::archetypes::RandomAccess;
use tola_traits::iter::{BidirectionalIter, Incrementable, OutputIter, PtrMut};

fn shuffled(n: i32, seed: u64) -> Vec<i32> {
    let mut data: Vec<i32> = (0..n).collect();
    data.shuffle(&mut StdRng::seed_from_u64(seed));
    data
}

// ============================================================================
// DESCENDING SORT WITH GREATER-THAN
// ============================================================================

#[test]
fn test_thousand_shuffled_sort_descending_with_greater() {
    let mut data = shuffled(1000, 0x5eed);
    let (first, last) = PtrMut::range(&mut data);

    make_heap_by(first, last, |a, b| a > b);
    assert!(is_heap_by(first, last, |a, b| a > b));
    sort_heap_by(first, last, |a, b| a > b);

    let expected: Vec<i32> = (0..1000).rev().collect();
    assert_eq!(data, expected);
}

#[test]
fn test_small_sizes() {
    for n in [0, 1, 2, 3, 10] {
        let mut data = shuffled(n, n as u64);
        let (first, last) = PtrMut::range(&mut data);
        make_heap_by(first, last, |a, b| a > b);
        sort_heap_by(first, last, |a, b| a > b);
        let expected: Vec<i32> = (0..n).rev().collect();
        assert_eq!(data, expected, "n = {n}");
    }
}

#[test]
fn test_less_sorts_ascending() {
    let mut data = shuffled(257, 7);
    let (first, last) = PtrMut::range(&mut data);
    make_heap(first, last);
    assert!(is_heap(first, last));
    sort_heap(first, last);
    assert!(is_sorted(first, last));
}

#[test]
fn test_random_access_archetype_is_enough() {
    let mut data = shuffled(64, 11);
    let (first, last) = PtrMut::range(&mut data);
    let (first, last) = (RandomAccess::new(first), RandomAccess::new(last));
    make_heap_by(first.clone(), last.clone(), |a, b| a > b);
    sort_heap_by(first, last, |a, b| a > b);
    assert!(data.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn test_incremental_push_then_pop() {
    let input = shuffled(50, 3);
    let mut data = vec![0; input.len()];
    let (first, end) = PtrMut::range(&mut data);

    let mut last = first;
    for (i, &value) in input.iter().enumerate() {
        last.put(value);
        last.inc();
        push_heap_by(first, last, |a, b| a < b);
        assert!(is_heap_by(first, last, |a, b| a < b), "after push {i}");
    }
    assert!(last == end);

    while last != first {
        pop_heap_by(first, last, |a, b| a < b);
        last.dec();
    }
    assert!(is_sorted(first, end));
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_sort_heap_matches_std_sort(mut data in proptest::collection::vec(any::<i16>(), 0..200)) {
        let mut expected = data.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        let (first, last) = PtrMut::range(&mut data);
        make_heap_by(first, last, |a, b| a > b);
        prop_assert!(is_heap_by(first, last, |a, b| a > b));
        sort_heap_by(first, last, |a, b| a > b);
        prop_assert_eq!(data, expected);
    }

    #[test]
    fn prop_make_heap_puts_extreme_first(data in proptest::collection::vec(any::<i32>(), 1..100)) {
        let mut heap = data.clone();
        let (first, last) = PtrMut::range(&mut heap);
        make_heap(first, last);
        prop_assert_eq!(Some(&heap[0]), data.iter().max());
    }
}
