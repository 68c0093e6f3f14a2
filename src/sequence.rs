//! The abstract sequence contract.
//!
//! [`Sequence`] defines the full user-facing surface once. A concrete engine
//! supplies only the primitive surface — length, mutability, positional slot
//! access, slot insertion, removal and clearing — and every derived
//! operation (value entry points, bulk insertion, array marshaling,
//! comparison, sorting, iteration) is implemented here, generically, on top
//! of those primitives.
//!
//! Positional access is linear: [`Sequence::slot`] is the only primitive
//! allowed to walk the chain, so anything built on it inherits the engine's
//! traversal cost (O(n) for the singly-linked engine, O(n/2) worst case for
//! the doubly-linked one). These are linked structures, not dynamic arrays;
//! no random-access guarantee is made.

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::error::SequenceError;
use crate::slot::{Mutability, Slot};

/// An ordered sequence of elements with a fixed ownership policy.
///
/// Implementors provide the six required primitives; all other operations
/// have blanket implementations. The contract all engines uphold:
///
/// - `len()` equals the number of live nodes reachable from the head,
///   maintained incrementally on every insert/remove.
/// - `mutability()` never changes after construction, and the tag of every
///   stored slot matches it.
/// - Indices outside the valid window are rejected with
///   [`SequenceError::OutOfRange`], uniformly across all operations.
pub trait Sequence<'a, T: 'a> {
    /// Number of elements currently stored.
    fn len(&self) -> usize;

    /// The ownership policy fixed at construction.
    fn mutability(&self) -> Mutability;

    /// The stored slot at `index`, or `None` when out of range.
    ///
    /// This is the one primitive that walks the chain.
    fn slot(&self, index: usize) -> Option<&Slot<'a, T>>;

    /// Insert `slot` so it becomes the element at `index`, shifting the
    /// former occupant and all following elements one position later.
    ///
    /// Valid indices are `0..=len` (insertion at `len` appends). The slot's
    /// ownership tag must match the sequence's mutability.
    fn insert_slot(&mut self, index: usize, slot: Slot<'a, T>) -> Result<(), SequenceError>;

    /// Remove and return the slot at `index`. Valid indices are `0..len`.
    fn remove(&mut self, index: usize) -> Result<Slot<'a, T>, SequenceError>;

    /// Remove all elements and reset the length to zero.
    fn clear(&mut self);

    /// `true` when the sequence holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` for an address-storing (mutable) sequence.
    #[inline]
    fn is_mutable(&self) -> bool {
        self.mutability().is_mutable()
    }

    /// The element at `index`, by reference.
    ///
    /// Fails with [`SequenceError::OutOfRange`] instead of exposing a null
    /// address for invalid indices.
    fn get<'s>(&'s self, index: usize) -> Result<&'s T, SequenceError>
    where
        'a: 's,
    {
        self.slot(index)
            .map(Slot::value)
            .ok_or_else(|| SequenceError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    /// The caller-lived address stored at `index`.
    ///
    /// `Some` only for a mutable sequence and an in-range index; immutable
    /// sequences own their copies and never expose caller storage.
    fn get_shared(&self, index: usize) -> Option<&'a T> {
        self.slot(index).and_then(Slot::shared)
    }

    /// The first element, if any.
    fn first<'s>(&'s self) -> Option<&'s T>
    where
        'a: 's,
    {
        self.slot(0).map(Slot::value)
    }

    /// The last element, if any.
    fn last<'s>(&'s self) -> Option<&'s T>
    where
        'a: 's,
    {
        self.len()
            .checked_sub(1)
            .and_then(|index| self.slot(index))
            .map(Slot::value)
    }

    /// Insert `value` at `index`.
    ///
    /// An immutable sequence clones the value into an owned slot; a mutable
    /// sequence stores the address itself, so `value` must outlive the
    /// sequence (the `'a` bound enforces exactly that).
    fn insert(&mut self, index: usize, value: &'a T) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        let slot = match self.mutability() {
            Mutability::Immutable => Slot::Owned(value.clone()),
            Mutability::Mutable => Slot::Borrowed(value),
        };
        self.insert_slot(index, slot)
    }

    /// Insert an already-owned value at `index`.
    ///
    /// Only immutable sequences can own values; on a mutable sequence this
    /// fails with [`SequenceError::IncompatibleOperand`] because a value
    /// passed by move has no caller-lived address to store.
    fn insert_owned(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        match self.mutability() {
            Mutability::Immutable => self.insert_slot(index, Slot::Owned(value)),
            Mutability::Mutable => Err(SequenceError::IncompatibleOperand {
                expected: Mutability::Mutable,
                found: Mutability::Immutable,
            }),
        }
    }

    /// Append `value` at the end.
    fn push(&mut self, value: &'a T) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        self.insert(self.len(), value)
    }

    /// Append `value` at the end. See [`Sequence::push`].
    fn push_back(&mut self, value: &'a T) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        self.push(value)
    }

    /// Insert `value` at the front.
    fn push_front(&mut self, value: &'a T) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        self.insert(0, value)
    }

    /// Append an already-owned value. See [`Sequence::insert_owned`].
    fn push_owned(&mut self, value: T) -> Result<(), SequenceError> {
        self.insert_owned(self.len(), value)
    }

    /// Remove and return the first slot; [`SequenceError::Empty`] when the
    /// sequence holds no elements.
    fn pop_front(&mut self) -> Result<Slot<'a, T>, SequenceError> {
        if self.is_empty() {
            return Err(SequenceError::Empty);
        }
        self.remove(0)
    }

    /// Remove and return the last slot; [`SequenceError::Empty`] when the
    /// sequence holds no elements.
    fn pop_back(&mut self) -> Result<Slot<'a, T>, SequenceError> {
        match self.len() {
            0 => Err(SequenceError::Empty),
            len => self.remove(len - 1),
        }
    }

    /// Copy every element of `other`, in order, into this sequence starting
    /// at `index`. The source is left unmodified.
    ///
    /// An immutable destination takes independent copies of the source
    /// values. A mutable destination re-shares the source's borrowed
    /// addresses — and fails with [`SequenceError::IncompatibleOperand`]
    /// when the source holds owned values, which have no caller-lived
    /// address to share.
    fn extend_from_at<S>(&mut self, index: usize, other: &S) -> Result<(), SequenceError>
    where
        S: Sequence<'a, T> + ?Sized,
        T: Clone,
    {
        if index > self.len() {
            return Err(SequenceError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        let mut at = index;
        for i in 0..other.len() {
            let Some(source) = other.slot(i) else { break };
            let slot = match self.mutability() {
                Mutability::Immutable => Slot::Owned(source.value().clone()),
                Mutability::Mutable => source.shared().map(Slot::Borrowed).ok_or(
                    SequenceError::IncompatibleOperand {
                        expected: Mutability::Mutable,
                        found: Mutability::Immutable,
                    },
                )?,
            };
            self.insert_slot(at, slot)?;
            at += 1;
        }
        Ok(())
    }

    /// Copy every element of `other` to the end. See
    /// [`Sequence::extend_from_at`].
    fn extend_from<S>(&mut self, other: &S) -> Result<(), SequenceError>
    where
        S: Sequence<'a, T> + ?Sized,
        T: Clone,
    {
        self.extend_from_at(self.len(), other)
    }

    /// Insert every element of `values`, in order, starting at `index`.
    ///
    /// Same ownership rule as single insertion: an immutable sequence clones
    /// each element, a mutable sequence stores the address of each slice
    /// element.
    fn extend_from_slice_at(&mut self, index: usize, values: &'a [T]) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        if index > self.len() {
            return Err(SequenceError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        let mut at = index;
        for value in values {
            self.insert(at, value)?;
            at += 1;
        }
        Ok(())
    }

    /// Append every element of `values`. See
    /// [`Sequence::extend_from_slice_at`].
    fn extend_from_slice(&mut self, values: &'a [T]) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        self.extend_from_slice_at(self.len(), values)
    }

    /// Replace the contents with `values`: [`Sequence::clear`] followed by
    /// [`Sequence::extend_from_slice`].
    fn assign_from_slice(&mut self, values: &'a [T]) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        self.clear();
        self.extend_from_slice(values)
    }

    /// Snapshot the elements into a newly allocated `Vec`, empty when the
    /// sequence is empty. Each element is an independent copy.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            if let Some(slot) = self.slot(i) {
                out.push(slot.value().clone());
            }
        }
        out
    }

    /// Snapshot the elements into a caller-supplied buffer of at least
    /// `len` capacity; [`SequenceError::OutOfRange`] when the buffer is too
    /// short. Elements past `len` are left untouched.
    fn copy_into(&self, out: &mut [T]) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        if out.len() < self.len() {
            return Err(SequenceError::OutOfRange {
                index: self.len(),
                len: out.len(),
            });
        }
        for i in 0..self.len() {
            if let Some(slot) = self.slot(i) {
                out[i] = slot.value().clone();
            }
        }
        Ok(())
    }

    /// Sort in place with a three-way comparator. The sort is **stable**:
    /// elements comparing equal keep their original relative order.
    ///
    /// The slots themselves are permuted, not the values, so a mutable
    /// sequence keeps sharing the same caller addresses after the sort.
    fn sort_by<F>(&mut self, mut compare: F) -> Result<(), SequenceError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut slots = Vec::with_capacity(self.len());
        while !self.is_empty() {
            slots.push(self.remove(0)?);
        }
        slots.sort_by(|a, b| compare(a.value(), b.value()));
        for slot in slots {
            let at = self.len();
            self.insert_slot(at, slot)?;
        }
        Ok(())
    }

    /// Compare two sequences.
    ///
    /// `false` when the mutability flags differ (two sequences of differing
    /// mutability are never equal, even with identical contents), `false`
    /// when the lengths differ; otherwise elements are compared pairwise —
    /// by value for immutable pairs, by address for mutable pairs —
    /// short-circuiting on the first mismatch.
    fn eq_seq<S>(&self, other: &S) -> bool
    where
        S: Sequence<'a, T> + ?Sized,
        T: PartialEq,
    {
        if self.mutability() != other.mutability() || self.len() != other.len() {
            return false;
        }
        for i in 0..self.len() {
            let (Some(a), Some(b)) = (self.slot(i), other.slot(i)) else {
                return false;
            };
            let equal = match self.mutability() {
                Mutability::Immutable => a.value() == b.value(),
                Mutability::Mutable => match (a.shared(), b.shared()) {
                    (Some(x), Some(y)) => std::ptr::eq(x, y),
                    _ => false,
                },
            };
            if !equal {
                return false;
            }
        }
        true
    }

    /// Iterate over the elements by reference, front to back.
    fn iter(&self) -> Iter<'_, 'a, T, Self>
    where
        Self: Sized,
    {
        Iter {
            seq: self,
            index: 0,
            _marker: PhantomData,
        }
    }
}

/// Front-to-back iterator over any [`Sequence`].
///
/// Drives the engine's positional primitive, so a full pass costs one
/// traversal per element.
pub struct Iter<'s, 'a, T, S: Sequence<'a, T> + ?Sized> {
    seq: &'s S,
    index: usize,
    _marker: PhantomData<&'a T>,
}

impl<'s, 'a: 's, T, S: Sequence<'a, T> + ?Sized> Iterator for Iter<'s, 'a, T, S> {
    type Item = &'s T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.seq.slot(self.index)?;
        self.index += 1;
        Some(slot.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.seq.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'s, 'a: 's, T, S: Sequence<'a, T> + ?Sized> ExactSizeIterator for Iter<'s, 'a, T, S> {}
