//! `forgeerp-core` — shared domain building blocks.
//!
//! Pure domain primitives only: the error model every ERP crate reports through
//! and the marker trait for immutable value types.

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
