//! Costing module (currency-tagged cost amounts).
//!
//! Pure domain logic only: no IO, no persistence concerns. Amounts never
//! convert between currencies; callers keep currencies consistent.

pub mod amount;
pub mod config;
pub mod error;
pub mod id;
pub mod quantity;
pub mod rounding;

pub use amount::CostAmount;
pub use config::CostingConfig;
pub use error::{CostingError, CostingResult};
pub use id::{CurrencyId, UomId};
pub use quantity::Quantity;
pub use rounding::RoundingMode;
