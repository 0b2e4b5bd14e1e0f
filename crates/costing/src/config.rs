//! Costing precision settings.
//!
//! Read from the environment:
//!
//! - `FORGEERP_COSTING_PRECISION`: fractional digits kept when rounding (default `2`)
//! - `FORGEERP_COSTING_ROUNDING_MODE`: e.g. `HALF_UP` (default), `HALF_EVEN`, `DOWN`
//!
//! Unparseable values are logged and replaced by the default.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount::CostAmount;
use crate::error::CostingResult;
use crate::rounding::{MAX_PRECISION, RoundingMode};

pub const PRECISION_ENV: &str = "FORGEERP_COSTING_PRECISION";
pub const ROUNDING_MODE_ENV: &str = "FORGEERP_COSTING_ROUNDING_MODE";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingConfig {
    pub precision: u32,
    pub rounding_mode: RoundingMode,
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            rounding_mode: RoundingMode::HalfUp,
        }
    }
}

impl CostingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup` (key -> raw value).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let precision = match lookup(PRECISION_ENV) {
            None => defaults.precision,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(p) if p <= MAX_PRECISION => p,
                _ => {
                    tracing::warn!(
                        key = PRECISION_ENV,
                        value = %raw,
                        "invalid costing precision; using default {}",
                        defaults.precision
                    );
                    defaults.precision
                }
            },
        };

        let rounding_mode = match lookup(ROUNDING_MODE_ENV) {
            None => defaults.rounding_mode,
            Some(raw) => raw.parse::<RoundingMode>().unwrap_or_else(|e| {
                tracing::warn!(
                    key = ROUNDING_MODE_ENV,
                    error = %e,
                    "invalid costing rounding mode; using default {}",
                    defaults.rounding_mode
                );
                defaults.rounding_mode
            }),
        };

        let config = Self {
            precision,
            rounding_mode,
        };
        tracing::debug!(?config, "resolved costing config");
        config
    }

    /// Round to the configured precision if the amount carries more digits.
    ///
    /// Always half-up, whatever `rounding_mode` says.
    pub fn round(&self, amount: CostAmount) -> CostAmount {
        amount.round_to_precision_if_needed(self.precision)
    }

    pub fn divide(&self, amount: CostAmount, divisor: Decimal) -> CostingResult<CostAmount> {
        amount.divide(divisor, self.precision, self.rounding_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CostingError;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = CostingConfig::from_lookup(|_| None);
        assert_eq!(config, CostingConfig::default());
        assert_eq!(config.precision, 2);
        assert_eq!(config.rounding_mode, RoundingMode::HalfUp);
    }

    #[test]
    fn reads_overrides() {
        let config = CostingConfig::from_lookup(lookup_from(&[
            (PRECISION_ENV, "4"),
            (ROUNDING_MODE_ENV, "half_even"),
        ]));
        assert_eq!(config.precision, 4);
        assert_eq!(config.rounding_mode, RoundingMode::HalfEven);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = CostingConfig::from_lookup(lookup_from(&[
            (PRECISION_ENV, "-1"),
            (ROUNDING_MODE_ENV, "sideways"),
        ]));
        assert_eq!(config, CostingConfig::default());

        let config = CostingConfig::from_lookup(lookup_from(&[(PRECISION_ENV, "40")]));
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn applies_precision_and_mode() {
        let config = CostingConfig {
            precision: 1,
            rounding_mode: RoundingMode::Down,
        };
        let amount = CostAmount::of(dec!(7), 100).unwrap();

        assert_eq!(config.divide(amount, dec!(3)).unwrap().value().to_string(), "2.3");
        assert!(matches!(
            config.divide(amount, Decimal::ZERO),
            Err(CostingError::Arithmetic(_))
        ));

        let fine = CostAmount::of(dec!(2.25), 100).unwrap();
        assert_eq!(config.round(fine).value(), dec!(2.3));
    }
}
