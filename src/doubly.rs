//! The doubly-linked engine.
//!
//! Nodes live in a slab: a `Vec` arena with a free list. The `next`, `prev`,
//! `head` and `tail` links are arena indices — non-owning back-references,
//! never a second owner — so the bidirectional structure carries none of the
//! aliasing or double-free hazards of raw pointer pairs.
//!
//! The point of the second link is the traversal optimization: positional
//! access scans backward from the tail when the index falls in the back half
//! of the range (`index > len / 2`), forward from the head otherwise. That
//! halves the worst-case traversal length for middle accesses relative to
//! the singly-linked engine.

use std::fmt;
use std::ops::Index;

use crate::contracts;
use crate::error::SequenceError;
use crate::sequence::Sequence;
use crate::singly::SinglyLinked;
use crate::slot::{Mutability, Slot};

pub(crate) struct Node<'a, T> {
    pub(crate) slot: Slot<'a, T>,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

/// Which end a positional scan starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanDirection {
    Forward,
    Backward,
}

/// An ordered sequence backed by a doubly-linked chain in a slab arena.
///
/// Construction requires an explicit [`Mutability`]; see the
/// [crate docs](crate) for the ownership model.
pub struct DoublyLinked<'a, T> {
    nodes: Vec<Option<Node<'a, T>>>,
    free: Vec<usize>,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
    len: usize,
    mutability: Mutability,
}

impl<'a, T> DoublyLinked<'a, T> {
    /// Create an empty sequence with the given ownership policy.
    pub fn new(mutability: Mutability) -> Self {
        DoublyLinked {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            mutability,
        }
    }

    pub(crate) fn node(&self, id: usize) -> Option<&Node<'a, T>> {
        self.nodes.get(id).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: usize) -> Option<&mut Node<'a, T>> {
        self.nodes.get_mut(id).and_then(Option::as_mut)
    }

    fn alloc(&mut self, node: Node<'a, T>) -> usize {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: usize) -> Option<Node<'a, T>> {
        let node = self.nodes.get_mut(id).and_then(Option::take);
        if node.is_some() {
            self.free.push(id);
        }
        node
    }

    fn scan_direction(&self, index: usize) -> ScanDirection {
        if index > self.len / 2 {
            ScanDirection::Backward
        } else {
            ScanDirection::Forward
        }
    }

    /// Arena id of the node at `index`, scanning from whichever end is
    /// closer.
    fn node_id(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        match self.scan_direction(index) {
            ScanDirection::Forward => {
                let mut id = self.head;
                for _ in 0..index {
                    id = id.and_then(|i| self.node(i)).and_then(|node| node.next);
                }
                id
            }
            ScanDirection::Backward => {
                let mut id = self.tail;
                for _ in 0..(self.len - 1 - index) {
                    id = id.and_then(|i| self.node(i)).and_then(|node| node.prev);
                }
                id
            }
        }
    }
}

impl<'a, T> Sequence<'a, T> for DoublyLinked<'a, T> {
    fn len(&self) -> usize {
        self.len
    }

    fn mutability(&self) -> Mutability {
        self.mutability
    }

    fn slot(&self, index: usize) -> Option<&Slot<'a, T>> {
        self.node_id(index)
            .and_then(|id| self.node(id))
            .map(|node| &node.slot)
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

        let id = self.alloc(Node {
            slot,
            prev: None,
            next: None,
        });

        if index == 0 {
            match self.head {
                None => self.tail = Some(id),
                Some(old_head) => {
                    if let Some(node) = self.node_mut(id) {
                        node.next = Some(old_head);
                    }
                    if let Some(node) = self.node_mut(old_head) {
                        node.prev = Some(id);
                    }
                }
            }
            self.head = Some(id);
        } else if index == self.len {
            // len > 0 here, so the tail exists.
            if let Some(old_tail) = self.tail {
                if let Some(node) = self.node_mut(old_tail) {
                    node.next = Some(id);
                }
                if let Some(node) = self.node_mut(id) {
                    node.prev = Some(old_tail);
                }
            }
            self.tail = Some(id);
        } else {
            // Middle insert: the new node takes the place of the current
            // occupant, found by scanning from the closer end. Both the far
            // neighbor's and the occupant's links are rewired regardless of
            // which direction found it.
            let len = self.len;
            let Some(successor) = self.node_id(index) else {
                self.release(id);
                return Err(SequenceError::OutOfRange { index, len });
            };
            let predecessor = self.node(successor).and_then(|node| node.prev);
            if let Some(node) = self.node_mut(id) {
                node.prev = predecessor;
                node.next = Some(successor);
            }
            if let Some(pred) = predecessor {
                if let Some(node) = self.node_mut(pred) {
                    node.next = Some(id);
                }
            }
            if let Some(node) = self.node_mut(successor) {
                node.prev = Some(id);
            }
        }

        self.len += 1;
        contracts::check_doubly(self);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Slot<'a, T>, SequenceError> {
        let id = self.node_id(index).ok_or(SequenceError::OutOfRange {
            index,
            len: self.len,
        })?;
        let Some(node) = self.release(id) else {
            return Err(SequenceError::OutOfRange {
                index,
                len: self.len,
            });
        };
        let Node { slot, prev, next } = node;

        match prev {
            Some(pred) => {
                if let Some(node) = self.node_mut(pred) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(succ) => {
                if let Some(node) = self.node_mut(succ) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        self.len -= 1;
        if self.len == 0 {
            // Reclaim the arena once nothing is live.
            self.nodes.clear();
            self.free.clear();
        }
        contracts::check_doubly(self);
        Ok(slot)
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

impl<'a, T> Default for DoublyLinked<'a, T> {
    /// The copy-owning configuration. Use [`DoublyLinked::new`] to choose
    /// explicitly.
    fn default() -> Self {
        DoublyLinked::new(Mutability::Immutable)
    }
}

impl<'a, T> Index<usize> for DoublyLinked<'a, T> {
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

impl<'a, T: PartialEq> PartialEq for DoublyLinked<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_seq(other)
    }
}

impl<'a, T: PartialEq> PartialEq<SinglyLinked<'a, T>> for DoublyLinked<'a, T> {
    fn eq(&self, other: &SinglyLinked<'a, T>) -> bool {
        self.eq_seq(other)
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for DoublyLinked<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'s, 'a, T> IntoIterator for &'s DoublyLinked<'a, T> {
    type Item = &'s T;
    type IntoIter = crate::sequence::Iter<'s, 'a, T, DoublyLinked<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
