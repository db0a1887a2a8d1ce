//! Extreme stress tests that really push the forest to its limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use binomial_forest::{BinomialForest, DecreaseKeyHeap, ForestHandle, Heap};

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in 0..10_000 {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

/// Test many decrease_key operations
fn test_many_decrease_keys<H: DecreaseKeyHeap<i32>>() {
    let mut heap = H::new();
    let handles: Vec<_> = (0..500).map(|i| heap.push_with_handle(10_000 + i)).collect();

    for (i, handle) in handles.iter().enumerate() {
        assert!(heap.decrease_key(handle, i as i32).is_ok());
    }

    for i in 0..500 {
        assert_eq!(heap.pop(), Some(i));
    }
}

/// Test alternating insert and pop
fn test_alternating_ops<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in 0..2_000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);
        assert!(heap.pop().is_some());
    }
    assert_eq!(heap.len(), 2_000);

    let mut last = i32::MIN;
    while let Some(value) = heap.pop() {
        assert!(value >= last);
        last = value;
    }
}

/// Test merge with large heaps
fn test_large_merge<H: Heap<i32>>() {
    let mut heap1 = H::new();
    let mut heap2 = H::new();

    for i in 0..5_000 {
        heap1.push(i * 2);
        heap2.push(i * 2 + 1);
    }

    heap1.merge(heap2);
    assert_eq!(heap1.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap1.pop(), Some(i));
    }
}

/// Test with extreme values at both ends of the domain
fn test_extreme_values<H: DecreaseKeyHeap<i64>>() {
    let mut heap = H::new();

    heap.push(1_000_000_000);
    let low = heap.push_with_handle(i64::MIN);
    heap.push(i64::MAX);
    let high = heap.push_with_handle(i64::MAX);

    assert_eq!(heap.erase(&low), Ok(i64::MIN));
    assert!(heap.decrease_key(&high, i64::MIN).is_ok());

    assert_eq!(heap.pop(), Some(i64::MIN));
    assert_eq!(heap.pop(), Some(1_000_000_000));
    assert_eq!(heap.pop(), Some(i64::MAX));
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_forest_massive() {
    test_massive_operations::<BinomialForest<i32>>();
}

#[test]
fn test_forest_many_decrease_keys() {
    test_many_decrease_keys::<BinomialForest<i32>>();
}

#[test]
fn test_forest_alternating() {
    test_alternating_ops::<BinomialForest<i32>>();
}

#[test]
fn test_forest_large_merge() {
    test_large_merge::<BinomialForest<i32>>();
}

#[test]
fn test_forest_extreme_values() {
    test_extreme_values::<BinomialForest<i64>>();
}

/// Erase every other handle, lowering the survivors as we go
#[test]
fn test_forest_erase_half_with_decreases() {
    let mut forest = BinomialForest::new();
    let handles: Vec<ForestHandle> = (0..1_024).map(|i| forest.insert(i * 7 % 1_024)).collect();
    let mut model: Vec<i32> = (0..1_024).map(|i| i * 7 % 1_024).collect();

    for (i, handle) in handles.iter().enumerate() {
        // Erasing removes the root of the erased value's tree, whose handle then dangles
        let Ok(&current) = forest.get(handle) else {
            continue;
        };
        let pos = model.iter().position(|&v| v == current).unwrap();
        if i % 2 == 0 {
            assert_eq!(forest.erase(handle), Ok(current));
            model.swap_remove(pos);
        } else {
            forest.decrease_key(handle, current - 3).unwrap();
            model[pos] = current - 3;
        }
    }

    assert_eq!(forest.len(), model.len());
    assert!(forest.len() >= 512);
    assert_eq!(forest.validate(), Ok(()));

    model.sort_unstable();
    let drained: Vec<i32> = std::iter::from_fn(|| forest.extract_min()).collect();
    assert_eq!(drained, model);
}

/// Repeatedly merge small forests into an accumulating one
#[test]
fn test_forest_repeated_merges() {
    let mut acc = BinomialForest::new();
    for batch in 0..200 {
        let small: BinomialForest<i32> = (0..(batch % 7)).map(|i| batch * 10 + i).collect();
        acc.merge(small);
        assert_eq!(acc.validate(), Ok(()));
    }

    let expected: usize = (0..200).map(|b| (b % 7) as usize).sum();
    assert_eq!(acc.len(), expected);

    let mut last = i32::MIN;
    while let Some(value) = acc.extract_min() {
        assert!(value >= last);
        last = value;
    }
}
