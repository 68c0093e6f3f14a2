//! Error type for sequence operations.
//!
//! One uniform fail-fast policy: every index outside the valid window for an
//! operation is a recoverable [`SequenceError`], never a silent no-op and
//! never undefined behavior.

use std::error::Error;
use std::fmt;

use crate::slot::Mutability;

/// Recoverable failures of sequence operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// Index outside the valid window for the operation.
    ///
    /// Insertion accepts `0..=len`, element access and removal `0..len`.
    /// Also reported by [`copy_into`](crate::Sequence::copy_into) when the
    /// destination buffer is shorter than the sequence.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Sequence length at the time of the call.
        len: usize,
    },
    /// The operation needs at least one element.
    Empty,
    /// Ownership tag of the operand contradicts the sequence's mutability.
    ///
    /// Raised when inserting an owned slot into a mutable sequence (or a
    /// borrowed slot into an immutable one), and when extending a mutable
    /// sequence from a source of owned values, which has no caller-lived
    /// addresses to share.
    IncompatibleOperand {
        /// Tag the sequence requires of its slots.
        expected: Mutability,
        /// Tag the operand carried.
        found: Mutability,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for sequence of length {}", index, len)
            }
            SequenceError::Empty => f.write_str("sequence is empty"),
            SequenceError::IncompatibleOperand { expected, found } => {
                write!(
                    f,
                    "{} operand incompatible with {} sequence",
                    found, expected
                )
            }
        }
    }
}

impl Error for SequenceError {}
