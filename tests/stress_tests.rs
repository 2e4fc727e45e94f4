//! Stress tests that push large operation volumes through the heaps
//!
//! A small linear congruential generator keeps the sequences deterministic
//! without pulling in a random number crate.

use binomial_forest::{BinomialHeaps, ElementId};

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }

    fn value(&mut self) -> i64 {
        self.next() as i64 % 100_000 - 50_000
    }
}

/// Test massive numbers of inserts and extractions in one heap
#[test]
fn test_massive_insert_extract() {
    let mut heaps = BinomialHeaps::new(1);
    let mut rng = Lcg(7);
    let mut values: Vec<i64> = (0..10_000).map(|_| rng.value()).collect();

    for &value in &values {
        heaps.insert(0, value).unwrap();
    }
    assert_eq!(heaps.len(0), Ok(10_000));
    assert!(heaps.check_invariants().is_ok());

    values.sort_unstable();
    for expected in values {
        assert_eq!(heaps.extract_min(0).unwrap().map(|(_, v)| v), Some(expected));
    }
    assert_eq!(heaps.total_len(), 0);
}

/// Test many heaps merged pairwise into one
#[test]
fn test_cascading_moves() {
    let heap_count = 64;
    let mut heaps = BinomialHeaps::new(heap_count);
    let mut rng = Lcg(11);
    let mut expected = Vec::new();

    for heap in 0..heap_count {
        for _ in 0..rng.below(50) {
            let value = rng.value();
            heaps.insert(heap, value).unwrap();
            expected.push(value);
        }
    }

    let mut stride = 1;
    while stride < heap_count {
        for heap in (0..heap_count).step_by(stride * 2) {
            heaps.move_heap(heap + stride, heap).unwrap();
        }
        stride *= 2;
        assert!(heaps.check_invariants().is_ok());
    }

    assert_eq!(heaps.len(0), Ok(expected.len()));
    for heap in 1..heap_count {
        assert!(heaps.is_empty(heap).unwrap());
    }

    expected.sort_unstable();
    let mut drained = Vec::new();
    while let Some((_, value)) = heaps.extract_min(0).unwrap() {
        drained.push(value);
    }
    assert_eq!(drained, expected);
}

/// Test a long random mix of every operation
#[test]
fn test_random_mixed_operations() {
    let heap_count = 8;
    let mut heaps = BinomialHeaps::new(heap_count);
    let mut rng = Lcg(42);
    let mut issued = 0usize;

    for step in 0..20_000 {
        match rng.below(10) {
            0..=3 => {
                heaps.insert(rng.below(heap_count), rng.value()).unwrap();
                issued += 1;
            }
            4 => {
                heaps
                    .move_heap(rng.below(heap_count), rng.below(heap_count))
                    .unwrap();
            }
            5 | 6 => {
                heaps.update(ElementId(rng.below(issued + 2)), rng.value());
            }
            7 => {
                heaps.delete(ElementId(rng.below(issued + 2)));
            }
            _ => {
                let heap = rng.below(heap_count);
                let min = heaps.get_min(heap).unwrap();
                let extracted = heaps.extract_min(heap).unwrap();
                assert_eq!(extracted.map(|(_, value)| value), min);
            }
        }

        if step % 1_000 == 0 {
            assert_eq!(heaps.check_invariants(), Ok(()));
        }
    }

    let total: usize = (0..heap_count).map(|heap| heaps.len(heap).unwrap()).sum();
    assert_eq!(total, heaps.total_len());
    assert_eq!(heaps.check_invariants(), Ok(()));
}

/// Test deleting every element by handle in a scrambled order
#[test]
fn test_delete_all_by_handle() {
    let mut heaps = BinomialHeaps::new(4);
    let mut rng = Lcg(3);
    let mut ids: Vec<ElementId> = (0..2_000)
        .map(|_| heaps.insert(rng.below(4), rng.value()).unwrap())
        .collect();

    for i in (1..ids.len()).rev() {
        ids.swap(i, rng.below(i + 1));
    }
    for (n, id) in ids.iter().enumerate() {
        assert!(heaps.delete(*id));
        assert!(!heaps.delete(*id));
        if n % 250 == 0 {
            assert_eq!(heaps.check_invariants(), Ok(()));
        }
    }

    assert_eq!(heaps.total_len(), 0);
    for heap in 0..4 {
        assert_eq!(heaps.get_min(heap), Ok(None));
    }
}

/// Test repeated updates to the same handles in both directions
#[test]
fn test_many_updates() {
    let mut heaps = BinomialHeaps::new(1);
    let ids: Vec<ElementId> = (0..500).map(|v| heaps.insert(0, 10_000 + v).unwrap()).collect();

    for (i, id) in ids.iter().enumerate() {
        assert!(heaps.update(*id, i as i64));
    }
    for (i, id) in ids.iter().enumerate().step_by(2) {
        assert!(heaps.update(*id, 1_000 + i as i64));
    }
    assert_eq!(heaps.check_invariants(), Ok(()));

    let mut expected: Vec<(ElementId, i64)> = ids
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, if i % 2 == 0 { 1_000 + i as i64 } else { i as i64 }))
        .collect();
    expected.sort_by_key(|&(id, value)| (value, id));

    for entry in expected {
        assert_eq!(heaps.extract_min(0), Ok(Some(entry)));
    }
}
