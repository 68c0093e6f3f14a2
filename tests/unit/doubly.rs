//! Doubly-linked engine scenarios.

use crate::common::{doubly_of, singly_of};
use linkseq::{DoublyLinked, Mutability, Sequence, SequenceError};

#[test]
fn add_appends_in_order() {
    let mut list = doubly_of(&[]);
    for v in 1..=3 {
        list.push_owned(v).unwrap();
    }
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);
}

#[test]
fn back_half_removal_uses_the_tail_path() {
    // index 4 of 6 elements lies in the back half (4 > 6/2), so the engine
    // reaches it from the tail.
    let mut list = doubly_of(&[1, 2, 3, 4, 5, 6]);
    list.remove(4).unwrap();
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 6]);
    assert_eq!(list.len(), 5);
}

#[test]
fn add_first_and_add_last_maintain_both_ends() {
    let mut list = doubly_of(&[2]);
    list.insert_owned(0, 1).unwrap();
    list.push_owned(3).unwrap();
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    assert_eq!(*list.first().unwrap(), 1);
    assert_eq!(*list.last().unwrap(), 3);
}

#[test]
fn add_all_inserts_the_block_in_the_middle() {
    let mut dst = doubly_of(&[1, 2, 3]);
    let src = doubly_of(&[7, 8, 9]);
    dst.extend_from_at(1, &src).unwrap();
    assert_eq!(dst.len(), 6);
    assert_eq!(dst.to_vec(), vec![1, 7, 8, 9, 2, 3]);
    assert_eq!(src.to_vec(), vec![7, 8, 9]); // source untouched
}

#[test]
fn extend_accepts_the_other_engine_as_source() {
    let mut dst = doubly_of(&[1]);
    let src = singly_of(&[2, 3]);
    dst.extend_from(&src).unwrap();
    assert_eq!(dst.to_vec(), vec![1, 2, 3]);
}

#[test]
fn equal_lists_compare_equal_across_engines() {
    let doubly = doubly_of(&[1, 2, 3]);
    let singly = singly_of(&[1, 2, 3]);
    assert_eq!(doubly, doubly_of(&[1, 2, 3]));
    assert!(doubly == singly);
    assert!(singly == doubly);
    assert!(doubly != doubly_of(&[1, 2]));
}

#[test]
fn removal_at_both_boundaries_keeps_the_chain_consistent() {
    let mut list = doubly_of(&[1, 2, 3, 4]);
    list.remove(0).unwrap();
    list.remove(list.len() - 1).unwrap();
    assert_eq!(list.to_vec(), vec![2, 3]);
    list.remove(0).unwrap();
    list.remove(0).unwrap();
    assert!(list.is_empty());
    assert_eq!(
        list.remove(0).unwrap_err(),
        SequenceError::OutOfRange { index: 0, len: 0 }
    );
}

#[test]
fn cleared_list_is_reusable() {
    let mut list = doubly_of(&[1, 2, 3]);
    list.clear();
    assert!(list.is_empty());
    list.push_owned(4).unwrap();
    assert_eq!(list.to_vec(), vec![4]);
}

#[test]
fn sort_orders_the_chain() {
    let mut list = doubly_of(&[3, 1, 2]);
    list.sort_by(|a, b| a.cmp(b)).unwrap();
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

#[test]
fn explicit_construction_honors_the_flag() {
    let list: DoublyLinked<'_, i32> = DoublyLinked::new(Mutability::Mutable);
    assert!(list.is_mutable());
    let list: DoublyLinked<'_, i32> = DoublyLinked::default();
    assert!(!list.is_mutable());
}
