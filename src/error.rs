//! Error types for the calculation engine

use thiserror::Error;

/// A specialized Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors surfaced by the three calculators.
///
/// Validation failures are reported immediately; a calculator never returns
/// a partial series or a NaN/Infinity-laden result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Input outside the domain of the requested calculation.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of what was rejected.
        reason: String,
    },

    /// A computed value left the representable finite range.
    #[error("Computation overflow in {context}")]
    Overflow {
        /// Which quantity overflowed.
        context: String,
    },
}

impl CalcError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates an overflow error.
    pub fn overflow(context: impl Into<String>) -> Self {
        Self::Overflow {
            context: context.into(),
        }
    }
}
