//! Kani verification proofs for forest operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use binomial_forest::{BinomialForest, HeapError};

/// Proof that insert always increments the length and keeps the forest valid
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_insert_increments_len() {
    let mut forest: BinomialForest<u32> = BinomialForest::new();
    forest.insert(kani::any());
    forest.insert(kani::any());
    let initial_len = forest.len();

    let handle = forest.insert(kani::any());

    assert!(forest.len() == initial_len + 1);
    assert!(forest.contains(&handle));
    assert!(forest.validate().is_ok());
}

/// Proof that extract_min returns the smallest of the inserted values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_extract_min_is_minimum() {
    let mut forest: BinomialForest<u32> = BinomialForest::new();
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    forest.insert(a);
    forest.insert(b);
    forest.insert(c);

    let min = forest.extract_min();
    assert!(min == Some(a.min(b).min(c)));
    assert!(forest.len() == 2);
    assert!(forest.validate().is_ok());
}

/// Proof that a rejected decrease leaves the minimum untouched
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_invalid_decrease_is_rejected() {
    let mut forest: BinomialForest<u32> = BinomialForest::new();
    let value: u32 = kani::any();
    kani::assume(value < u32::MAX);
    let handle = forest.insert(value);
    forest.insert(kani::any());
    let before = forest.peek_min().copied();

    let current = *forest.get(&handle).unwrap();
    kani::assume(current < u32::MAX);
    let result = forest.decrease_key(&handle, current + 1);

    assert!(result == Err(HeapError::InvalidDecrease));
    assert!(forest.peek_min().copied() == before);
}

/// Proof that erase removes exactly one value
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(10)]
fn verify_erase_decrements_len() {
    let mut forest: BinomialForest<u32> = BinomialForest::new();
    forest.insert(kani::any());
    let handle = forest.insert(kani::any());
    forest.insert(kani::any());

    let current = *forest.get(&handle).unwrap();
    assert!(forest.erase(&handle) == Ok(current));
    assert!(forest.len() == 2);
    assert!(forest.validate().is_ok());
}
