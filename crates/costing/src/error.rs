//! Costing error taxonomy.

use forgeerp_core::DomainError;
use thiserror::Error;

use crate::{CostAmount, CurrencyId};

pub type CostingResult<T> = Result<T, CostingError>;

/// Precondition violations raised by costing arithmetic.
///
/// These signal programming errors at the call site; nothing here is retried
/// or replaced by a default value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CostingError {
    /// Missing value or non-positive identifier at construction.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two amounts with different currencies were combined.
    #[error("amount has invalid currency: {actual}. Expected: {expected}")]
    CurrencyMismatch {
        expected: CurrencyId,
        actual: CostAmount,
    },

    /// Division by zero, overflow, or a rounding that was declared unnecessary.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}

impl CostingError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn arithmetic(msg: impl Into<String>) -> Self {
        Self::Arithmetic(msg.into())
    }
}

impl From<CostingError> for DomainError {
    fn from(err: CostingError) -> Self {
        match err {
            CostingError::InvalidArgument(msg) => DomainError::validation(msg),
            e @ CostingError::CurrencyMismatch { .. } => DomainError::invariant(e.to_string()),
            CostingError::Arithmetic(msg) => DomainError::arithmetic(msg),
        }
    }
}
