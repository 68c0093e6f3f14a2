//! The mutable/immutable value-ownership model.

use std::cell::Cell;
use std::ptr;

use crate::common::singly_of;
use linkseq::{DoublyLinked, Mutability, Sequence, SequenceError, SinglyLinked};

#[test]
fn immutable_sequences_store_frozen_copies() {
    let original = Cell::new(1);
    let mut seq = SinglyLinked::new(Mutability::Immutable);
    seq.push(&original).unwrap();

    original.set(99);
    assert_eq!(seq.get(0).unwrap().get(), 1); // the copy is unaffected
    assert!(seq.get_shared(0).is_none()); // no caller address to expose
}

#[test]
fn mutable_sequences_share_the_callers_storage() {
    let original = Cell::new(1);
    let mut seq = SinglyLinked::new(Mutability::Mutable);
    seq.push(&original).unwrap();

    original.set(99);
    assert_eq!(seq.get(0).unwrap().get(), 99); // mutation is observable

    let shared = seq.get_shared(0).unwrap();
    assert!(ptr::eq(shared, &original)); // same address, not a copy
}

#[test]
fn get_shared_is_none_out_of_range() {
    let value = 1;
    let mut seq = SinglyLinked::new(Mutability::Mutable);
    seq.push(&value).unwrap();
    assert!(seq.get_shared(1).is_none());
}

#[test]
fn differing_mutability_is_never_equal() {
    let values = [1, 2, 3];
    let immutable = singly_of(&values);
    let mut mutable = SinglyLinked::new(Mutability::Mutable);
    mutable.extend_from_slice(&values).unwrap();

    assert!(!immutable.eq_seq(&mutable));
    assert!(!mutable.eq_seq(&immutable));
}

#[test]
fn mutable_equality_compares_addresses_not_values() {
    let storage_a = [1, 2, 3];
    let storage_b = [1, 2, 3];

    let mut over_a = SinglyLinked::new(Mutability::Mutable);
    let mut also_over_a = SinglyLinked::new(Mutability::Mutable);
    let mut over_b = SinglyLinked::new(Mutability::Mutable);
    over_a.extend_from_slice(&storage_a).unwrap();
    also_over_a.extend_from_slice(&storage_a).unwrap();
    over_b.extend_from_slice(&storage_b).unwrap();

    assert!(over_a.eq_seq(&also_over_a)); // same addresses
    assert!(!over_a.eq_seq(&over_b)); // equal values, different addresses
}

#[test]
fn owned_values_cannot_enter_a_mutable_sequence() {
    let mut seq: SinglyLinked<'_, i32> = SinglyLinked::new(Mutability::Mutable);
    assert_eq!(
        seq.push_owned(1),
        Err(SequenceError::IncompatibleOperand {
            expected: Mutability::Mutable,
            found: Mutability::Immutable,
        })
    );
    assert!(seq.is_empty());
}

#[test]
fn mutable_extend_from_an_owned_source_is_incompatible() {
    let src = singly_of(&[1, 2, 3]);
    let mut dst: DoublyLinked<'_, i32> = DoublyLinked::new(Mutability::Mutable);
    assert_eq!(
        dst.extend_from(&src),
        Err(SequenceError::IncompatibleOperand {
            expected: Mutability::Mutable,
            found: Mutability::Immutable,
        })
    );
    assert!(dst.is_empty()); // nothing was inserted
}

#[test]
fn mutable_extend_shares_the_source_addresses() {
    let storage = [1, 2, 3];
    let mut src = SinglyLinked::new(Mutability::Mutable);
    src.extend_from_slice(&storage).unwrap();

    let mut dst = DoublyLinked::new(Mutability::Mutable);
    dst.extend_from(&src).unwrap();

    for i in 0..3 {
        assert!(ptr::eq(
            dst.get_shared(i).unwrap(),
            src.get_shared(i).unwrap()
        ));
        assert!(ptr::eq(dst.get_shared(i).unwrap(), &storage[i]));
    }
}

#[test]
fn immutable_extend_from_a_mutable_source_takes_copies() {
    let storage = [Cell::new(1), Cell::new(2)];
    let mut src = SinglyLinked::new(Mutability::Mutable);
    src.push(&storage[0]).unwrap();
    src.push(&storage[1]).unwrap();

    let mut dst = SinglyLinked::new(Mutability::Immutable);
    dst.extend_from(&src).unwrap();

    storage[0].set(42);
    assert_eq!(src.get(0).unwrap().get(), 42); // source still shares
    assert_eq!(dst.get(0).unwrap().get(), 1); // destination copied
}

#[test]
fn sorting_a_mutable_sequence_preserves_the_addresses() {
    let storage = [3, 1, 2];
    let mut seq = SinglyLinked::new(Mutability::Mutable);
    seq.extend_from_slice(&storage).unwrap();

    seq.sort_by(|a, b| a.cmp(b)).unwrap();
    assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    assert!(ptr::eq(seq.get_shared(0).unwrap(), &storage[1]));
    assert!(ptr::eq(seq.get_shared(1).unwrap(), &storage[2]));
    assert!(ptr::eq(seq.get_shared(2).unwrap(), &storage[0]));
}
