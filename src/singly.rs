//! The singly-linked engine.
//!
//! Nodes form an owned chain: the sequence owns its head node, each node
//! owns its successor. There is no second owner anywhere — the tail is the
//! last reachable node rather than a stored pointer — so the structure is
//! free of aliasing and double-free hazards by construction.
//!
//! Every positional operation scans forward from the head: O(n).

use std::fmt;
use std::ops::Index;

use crate::contracts;
use crate::doubly::DoublyLinked;
use crate::error::SequenceError;
use crate::sequence::Sequence;
use crate::slot::{Mutability, Slot};

pub(crate) struct Node<'a, T> {
    pub(crate) slot: Slot<'a, T>,
    pub(crate) next: Option<Box<Node<'a, T>>>,
}

/// An ordered sequence backed by a singly-linked chain of owned nodes.
///
/// Construction requires an explicit [`Mutability`]; see the
/// [crate docs](crate) for the ownership model. The [`Default`] impl exists
/// for the [`List`](crate::List) alias and produces the copy-owning
/// immutable configuration.
pub struct SinglyLinked<'a, T> {
    pub(crate) head: Option<Box<Node<'a, T>>>,
    len: usize,
    mutability: Mutability,
}

impl<'a, T> SinglyLinked<'a, T> {
    /// Create an empty sequence with the given ownership policy.
    pub fn new(mutability: Mutability) -> Self {
        SinglyLinked {
            head: None,
            len: 0,
            mutability,
        }
    }

    fn node(&self, index: usize) -> Option<&Node<'a, T>> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref());
        }
        current
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<'a, T>> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current.and_then(|node| node.next.as_deref_mut());
        }
        current
    }
}

impl<'a, T> Sequence<'a, T> for SinglyLinked<'a, T> {
    fn len(&self) -> usize {
        self.len
    }

    fn mutability(&self) -> Mutability {
        self.mutability
    }

    fn slot(&self, index: usize) -> Option<&Slot<'a, T>> {
        self.node(index).map(|node| &node.slot)
    }

    fn insert_slot(&mut self, index: usize, slot: Slot<'a, T>) -> Result<(), SequenceError> {
        if index > self.len {
            return Err(SequenceError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if slot.tag() != self.mutability {
            return Err(SequenceError::IncompatibleOperand {
                expected: self.mutability,
                found: slot.tag(),
            });
        }

        if index == 0 {
            // Covers both the empty-chain case and insertion at the front.
            let node = Box::new(Node {
                slot,
                next: self.head.take(),
            });
            self.head = Some(node);
        } else {
            let len = self.len;
            let Some(prev) = self.node_mut(index - 1) else {
                return Err(SequenceError::OutOfRange { index, len });
            };
            let node = Box::new(Node {
                slot,
                next: prev.next.take(),
            });
            prev.next = Some(node);
        }

        self.len += 1;
        contracts::check_singly(self);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Slot<'a, T>, SequenceError> {
        if index >= self.len {
            return Err(SequenceError::OutOfRange {
                index,
                len: self.len,
            });
        }

        let removed = if index == 0 {
            let Some(mut node) = self.head.take() else {
                return Err(SequenceError::Empty);
            };
            self.head = node.next.take();
            node
        } else {
            let len = self.len;
            let Some(prev) = self.node_mut(index - 1) else {
                return Err(SequenceError::OutOfRange { index, len });
            };
            let Some(mut node) = prev.next.take() else {
                return Err(SequenceError::OutOfRange { index, len });
            };
            prev.next = node.next.take();
            node
        };

        self.len -= 1;
        contracts::check_singly(self);
        Ok(removed.slot)
    }

    fn clear(&mut self) {
        // Detach one node at a time: dropping the whole chain at once would
        // recurse through every Box and can overflow the stack.
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }
}

impl<'a, T> Drop for SinglyLinked<'a, T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, T> Default for SinglyLinked<'a, T> {
    /// The conventional copy-owning configuration. Use
    /// [`SinglyLinked::new`] to choose explicitly.
    fn default() -> Self {
        SinglyLinked::new(Mutability::Immutable)
    }
}

impl<'a, T> Index<usize> for SinglyLinked<'a, T> {
    type Output = T;

    /// Panicking positional access; [`Sequence::get`] is the fallible form.
    fn index(&self, index: usize) -> &T {
        match self.slot(index) {
            Some(slot) => slot.value(),
            None => panic!(
                "index {} out of range for sequence of length {}",
                index, self.len
            ),
        }
    }
}

impl<'a, T: PartialEq> PartialEq for SinglyLinked<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_seq(other)
    }
}

impl<'a, T: PartialEq> PartialEq<DoublyLinked<'a, T>> for SinglyLinked<'a, T> {
    fn eq(&self, other: &DoublyLinked<'a, T>) -> bool {
        self.eq_seq(other)
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for SinglyLinked<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'s, 'a, T> IntoIterator for &'s SinglyLinked<'a, T> {
    type Item = &'s T;
    type IntoIter = crate::sequence::Iter<'s, 'a, T, SinglyLinked<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
