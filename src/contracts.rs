//! Debug-mode contracts for the chain invariants.
//!
//! Zero-cost in release builds (`debug_assert!`), early failure detection in
//! development. Engines call these after every structural mutation:
//!
//! - the chain reachable from the head has exactly `len` nodes and ends at
//!   the tail;
//! - every `next`/`prev` pair in the doubly-linked engine is mutually
//!   consistent;
//! - every stored slot's ownership tag matches the sequence's mutability.

use crate::doubly::DoublyLinked;
use crate::sequence::Sequence;
use crate::singly::SinglyLinked;

/// Full-chain walks run after every mutation; past this length they are
/// skipped so debug builds stay usable on large sequences.
const CHECK_LIMIT: usize = 1 << 10;

/// Verify the singly-linked chain: node count matches `len`, every slot tag
/// matches the sequence mutability.
///
/// # Panics (debug builds only)
///
/// Panics when an invariant is violated.
#[inline]
pub(crate) fn check_singly<'a, T>(seq: &SinglyLinked<'a, T>) {
    if !cfg!(debug_assertions) || seq.len() > CHECK_LIMIT {
        return;
    }

    let mut count = 0;
    let mut current = seq.head.as_deref();
    while let Some(node) = current {
        debug_assert_eq!(
            node.slot.tag(),
            seq.mutability(),
            "slot {} tag disagrees with sequence mutability",
            count
        );
        count += 1;
        if count > seq.len() {
            break;
        }
        current = node.next.as_deref();
    }
    debug_assert_eq!(
        count,
        seq.len(),
        "len {} disagrees with {} reachable nodes",
        seq.len(),
        count
    );
}

/// Verify the doubly-linked chain: node count, head/tail boundary state,
/// `next`/`prev` reciprocity and slot tags.
///
/// # Panics (debug builds only)
///
/// Panics when an invariant is violated.
#[inline]
pub(crate) fn check_doubly<'a, T>(seq: &DoublyLinked<'a, T>) {
    if !cfg!(debug_assertions) || seq.len() > CHECK_LIMIT {
        return;
    }

    debug_assert_eq!(seq.head.is_none(), seq.len() == 0);
    debug_assert_eq!(seq.tail.is_none(), seq.len() == 0);

    let mut count = 0;
    let mut last = None;
    let mut current = seq.head;
    while let Some(id) = current {
        let Some(node) = seq.node(id) else {
            debug_assert!(false, "chain references vacant arena slot {}", id);
            return;
        };
        debug_assert_eq!(
            node.prev, last,
            "prev link of node {} does not point at its predecessor",
            id
        );
        debug_assert_eq!(
            node.slot.tag(),
            seq.mutability(),
            "slot {} tag disagrees with sequence mutability",
            count
        );
        count += 1;
        if count > seq.len() {
            break;
        }
        last = current;
        current = node.next;
    }
    debug_assert_eq!(
        count,
        seq.len(),
        "len {} disagrees with {} reachable nodes",
        seq.len(),
        count
    );
    debug_assert_eq!(last, seq.tail, "tail is not the last reachable node");
}
