//! Strongly-typed identifiers referenced by costing values.
//!
//! Both identifiers are positive integer keys owned by master data elsewhere in
//! the system; this crate only enforces that they are `> 0`.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::CostingError;

/// Identifier of a currency. Equal ids are required to add or subtract amounts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct CurrencyId(i32);

/// Identifier of a unit of measure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct UomId(i32);

macro_rules! impl_positive_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Fails with `InvalidArgument` unless `id > 0`.
            pub fn new(id: i32) -> Result<Self, CostingError> {
                if id <= 0 {
                    return Err(CostingError::invalid_argument(format!(
                        "{} > 0 (got {})",
                        $name, id
                    )));
                }
                Ok(Self(id))
            }

            pub fn get(self) -> i32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<i32> for $t {
            type Error = CostingError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = CostingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| CostingError::invalid_argument(format!("{}: {}", $name, e)))?;
                Self::new(id)
            }
        }
    };
}

impl_positive_id!(CurrencyId, "currencyId");
impl_positive_id!(UomId, "uomId");
