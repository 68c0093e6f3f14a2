//! The per-node payload and the ownership flag.
//!
//! Every sequence is constructed with a [`Mutability`] that never changes for
//! the lifetime of the instance. The flag decides what each node stores:
//!
//! - [`Mutability::Immutable`]: the node owns a copy of the inserted value
//!   ([`Slot::Owned`]). Reads and equality are value-based.
//! - [`Mutability::Mutable`]: the node stores the address of a value that
//!   lives in caller-owned storage ([`Slot::Borrowed`]). Reads hand the
//!   address back and equality compares addresses, not values. The borrow
//!   checker enforces that the storage outlives the sequence.
//!
//! The tag of every stored slot matches the sequence's flag; engines reject
//! a mismatched slot at insertion with
//! [`SequenceError::IncompatibleOperand`](crate::SequenceError::IncompatibleOperand).

use std::fmt;

/// Ownership policy of a sequence, fixed at construction.
///
/// There is deliberately no default: engine constructors require the caller
/// to name a policy. Only the [`List`](crate::List) alias defaults, to
/// [`Mutability::Immutable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// Nodes store owned copies; reads and equality are value-based.
    Immutable,
    /// Nodes store borrowed addresses; reads and equality are address-based.
    Mutable,
}

impl Mutability {
    /// `true` for [`Mutability::Mutable`].
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutability::Immutable => f.write_str("immutable"),
            Mutability::Mutable => f.write_str("mutable"),
        }
    }
}

/// The payload of one node: an owned copy or a borrowed address.
///
/// Cloning a slot clones the owned value or copies the borrowed address.
/// That is exactly the copy-vs-share rule bulk insertion needs: cloning the
/// slots of an immutable source yields independent copies, cloning the slots
/// of a mutable source yields shared addresses.
#[derive(Debug, Clone)]
pub enum Slot<'a, T> {
    /// A copy owned by the sequence, made at insertion time.
    Owned(T),
    /// The address of a value in caller-owned storage.
    Borrowed(&'a T),
}

impl<'a, T> Slot<'a, T> {
    /// View the stored value, whichever variant holds it.
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Slot::Owned(value) => value,
            Slot::Borrowed(value) => value,
        }
    }

    /// The caller-lived address, for [`Slot::Borrowed`] only.
    ///
    /// The returned reference outlives the sequence; this is what makes
    /// caller-side mutation observable through a mutable sequence.
    #[inline]
    pub fn shared(&self) -> Option<&'a T> {
        match self {
            Slot::Owned(_) => None,
            Slot::Borrowed(value) => Some(value),
        }
    }

    /// The ownership tag: `Owned` slots belong to immutable sequences,
    /// `Borrowed` slots to mutable ones.
    #[inline]
    pub fn tag(&self) -> Mutability {
        match self {
            Slot::Owned(_) => Mutability::Immutable,
            Slot::Borrowed(_) => Mutability::Mutable,
        }
    }

    /// Extract the value, cloning through a borrow if necessary.
    #[inline]
    pub fn into_value(self) -> T
    where
        T: Clone,
    {
        match self {
            Slot::Owned(value) => value,
            Slot::Borrowed(value) => value.clone(),
        }
    }
}
