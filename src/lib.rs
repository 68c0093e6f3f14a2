//! Singly- and doubly-linked sequences with owned or borrowed elements.
//!
//! One contract, two engines:
//!
//! ```text
//! ┌──────────────┐      ┌───────────────────┐      ┌───────────────────┐
//! │   slot.rs    │─────▶│   sequence.rs     │─────▶│ singly.rs         │
//! │ (Mutability, │      │ (Sequence trait:  │      │ (owned Box chain) │
//! │  Slot)       │      │  6 primitives +   │      ├───────────────────┤
//! └──────────────┘      │  derived ops)     │      │ doubly.rs         │
//!        │              └───────────────────┘      │ (slab arena,      │
//!        ▼                        │                │  two-way scan)    │
//! ┌──────────────┐                ▼                └───────────────────┘
//! │   error.rs   │      ┌───────────────────┐
//! │(SequenceError│      │   contracts.rs    │
//! │ taxonomy)    │      │ (debug-mode chain │
//! └──────────────┘      │  invariants)      │
//!                       └───────────────────┘
//! ```
//!
//! # Ownership model
//!
//! Every sequence is constructed with an explicit [`Mutability`] that never
//! changes afterwards:
//!
//! - **[`Mutability::Immutable`]** — each node stores an owned **copy** of
//!   the inserted value, taken at insertion time. Reads are value-based and
//!   two immutable sequences compare by value equality of corresponding
//!   elements.
//! - **[`Mutability::Mutable`]** — each node stores the **address** of a
//!   value living in caller-owned storage (`&'a T`). The sequence never
//!   copies; reads hand the address back ([`Sequence::get_shared`]) and two
//!   mutable sequences compare by address, not value. The `'a` lifetime
//!   makes the "caller storage must outlive the sequence" rule a
//!   compile-time guarantee instead of a documentation footnote.
//!
//! Sequences of differing mutability are never equal, even with identical
//! contents.
//!
//! # Engines
//!
//! [`SinglyLinked`] walks forward from the head: O(n) positional access
//! with minimal per-node overhead. [`DoublyLinked`] keeps a back link per
//! node and scans from whichever end is closer, halving the worst-case
//! traversal for middle accesses. [`List`] is the conventional default: the
//! singly-linked engine in its copy-owning configuration.
//!
//! # Example
//!
//! ```
//! use linkseq::{List, Sequence};
//!
//! let mut list = List::default();
//! list.push_owned(1)?;
//! list.push_owned(2)?;
//! list.push_owned(3)?;
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//!
//! list.remove(1)?;
//! assert_eq!(list.to_vec(), vec![1, 3]);
//! # Ok::<(), linkseq::SequenceError>(())
//! ```
//!
//! Address-storing sequences share the caller's storage:
//!
//! ```
//! use std::cell::Cell;
//! use linkseq::{Mutability, Sequence, SinglyLinked};
//!
//! let counter = Cell::new(1);
//! let mut seq = SinglyLinked::new(Mutability::Mutable);
//! seq.push(&counter)?;
//!
//! counter.set(2);
//! assert_eq!(seq.get(0)?.get(), 2); // the caller's mutation is visible
//! # Ok::<(), linkseq::SequenceError>(())
//! ```
//!
//! # What this is not
//!
//! Not thread-safe (single-owner, single-thread), not serializable, and not
//! a dynamic array: positional access is a traversal, and no random-access
//! performance guarantee is made.

mod contracts;
mod doubly;
mod error;
mod sequence;
mod singly;
mod slot;

pub use doubly::DoublyLinked;
pub use error::SequenceError;
pub use sequence::{Iter, Sequence};
pub use singly::SinglyLinked;
pub use slot::{Mutability, Slot};

/// The conventional list type: the singly-linked engine, copy-owning
/// (immutable) via [`Default`].
///
/// Callers who care about the engine or the ownership policy construct
/// [`SinglyLinked`] or [`DoublyLinked`] with an explicit [`Mutability`]
/// instead.
pub type List<'a, T> = SinglyLinked<'a, T>;
