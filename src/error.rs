//! Error types for pile operations.

use alloc::vec::Vec;

use thiserror::Error;

/// Errors returned by pile operations.
///
/// A pile is left untouched when an operation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PileError {
    /// One or more indices are past the end of the pile.
    #[error("indices {indices:?} are not in range")]
    OutOfRange {
        /// The offending indices.
        indices: Vec<usize>,
    },
    /// One or more indices were requested more than once.
    #[error("indices {indices:?} were repeated")]
    RepeatedIndex {
        /// The repeated indices, each listed once.
        indices: Vec<usize>,
    },
    /// Not enough cards or capacity to complete the operation.
    #[error("requested {requested} but only {available} available")]
    NotEnough {
        /// How many cards or slots were requested.
        requested: usize,
        /// How many cards or slots were available.
        available: usize,
    },
    /// The inputs can't be used together.
    #[error("the combination of inputs {inputs:?} is not valid")]
    MismatchedInputs {
        /// Names of the mismatched inputs.
        inputs: Vec<&'static str>,
    },
}

impl PileError {
    /// The error returned when a single card is requested from an empty pile
    /// or a single slot from a full one.
    pub(crate) const fn none_available() -> Self {
        Self::NotEnough {
            requested: 1,
            available: 0,
        }
    }
}
