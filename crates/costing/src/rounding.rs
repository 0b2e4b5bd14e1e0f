//! Decimal rounding rules used when an amount is divided or rescaled.

use core::str::FromStr;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{CostingError, CostingResult};

/// Largest number of fractional digits a `Decimal` can carry.
pub const MAX_PRECISION: u32 = 28;

/// How a value is resolved to a fixed number of fractional digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero (truncate).
    Down,
    /// Towards positive infinity.
    Ceiling,
    /// Towards negative infinity.
    Floor,
    /// Nearest neighbour, ties away from zero.
    #[default]
    HalfUp,
    /// Nearest neighbour, ties towards zero.
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour.
    HalfEven,
    /// Asserts the value already fits; fails otherwise.
    Unnecessary,
}

impl RoundingMode {
    /// Round `value` to `precision` fractional digits.
    ///
    /// The result is not padded to `precision`.
    pub fn round(self, value: Decimal, precision: u32) -> CostingResult<Decimal> {
        if precision > MAX_PRECISION {
            return Err(CostingError::invalid_argument(format!(
                "precision must be <= {MAX_PRECISION} (got {precision})"
            )));
        }

        let strategy = match self {
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Unnecessary => {
                let truncated = value.round_dp_with_strategy(precision, RoundingStrategy::ToZero);
                if truncated != value {
                    return Err(CostingError::arithmetic(format!(
                        "rounding necessary: {value} does not fit {precision} fractional digits"
                    )));
                }
                return Ok(truncated);
            }
        };

        Ok(value.round_dp_with_strategy(precision, strategy))
    }
}

impl RoundingMode {
    /// `dividend / divisor` with exactly `precision` fractional digits.
    ///
    /// Works on the unsigned mantissas with long division, so the quotient is
    /// truncated and the remainder is exact before the mode picks a direction.
    /// The result is rounded once.
    pub fn divide(
        self,
        dividend: Decimal,
        divisor: Decimal,
        precision: u32,
    ) -> CostingResult<Decimal> {
        if precision > MAX_PRECISION {
            return Err(CostingError::invalid_argument(format!(
                "precision must be <= {MAX_PRECISION} (got {precision})"
            )));
        }
        if divisor.is_zero() {
            return Err(CostingError::arithmetic(format!(
                "division by zero: {dividend} / 0"
            )));
        }

        let overflow =
            || CostingError::arithmetic(format!("overflow dividing {dividend} by {divisor}"));

        let negative =
            !dividend.is_zero() && dividend.is_sign_negative() != divisor.is_sign_negative();
        let m1 = dividend.mantissa().unsigned_abs();
        let m2 = divisor.mantissa().unsigned_abs();
        // Digits to shift the dividend left (or the divisor, when negative) so
        // that the integer quotient carries `precision` fractional digits.
        let shift =
            i64::from(divisor.scale()) + i64::from(precision) - i64::from(dividend.scale());

        // (truncated quotient, remainder, denominator the remainder relates to)
        let (mut q, rem, den) = if shift >= 0 {
            let mut q = m1 / m2;
            let mut r = m1 % m2;
            for _ in 0..shift {
                // r < m2 < 2^96, so r * 10 cannot overflow.
                r *= 10;
                q = q
                    .checked_mul(10)
                    .and_then(|q| q.checked_add(r / m2))
                    .ok_or_else(overflow)?;
                r %= m2;
            }
            (q, r, Some(m2))
        } else {
            // -shift <= 28 and 10^28 fits in u128.
            match m2.checked_mul(10u128.pow((-shift) as u32)) {
                Some(d) => (m1 / d, m1 % d, Some(d)),
                // The denominator exceeds u128 while m1 < 2^96: quotient 0,
                // remainder far below half.
                None => (0, m1, None),
            }
        };

        if rem != 0 {
            // Ordering of the discarded fraction against one half.
            let half = match den {
                Some(d) => rem.cmp(&(d - rem)),
                None => core::cmp::Ordering::Less,
            };
            let round_away = match self {
                RoundingMode::Up => true,
                RoundingMode::Down => false,
                RoundingMode::Ceiling => !negative,
                RoundingMode::Floor => negative,
                RoundingMode::HalfUp => half.is_ge(),
                RoundingMode::HalfDown => half.is_gt(),
                RoundingMode::HalfEven => half.is_gt() || (half.is_eq() && q % 2 == 1),
                RoundingMode::Unnecessary => {
                    return Err(CostingError::arithmetic(format!(
                        "rounding necessary: {dividend} / {divisor} does not fit {precision} fractional digits"
                    )));
                }
            };
            if round_away {
                q = q.checked_add(1).ok_or_else(overflow)?;
            }
        }

        let mantissa = i128::try_from(q).map_err(|_| overflow())?;
        let mantissa = if negative { -mantissa } else { mantissa };
        Decimal::try_from_i128_with_scale(mantissa, precision).map_err(|_| overflow())
    }
}

impl core::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::Unnecessary => "UNNECESSARY",
        };
        f.write_str(s)
    }
}

impl FromStr for RoundingMode {
    type Err = CostingError;

    /// Accepts `HALF_UP`, `half_up` and `half-up` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "UP" => Ok(RoundingMode::Up),
            "DOWN" => Ok(RoundingMode::Down),
            "CEILING" => Ok(RoundingMode::Ceiling),
            "FLOOR" => Ok(RoundingMode::Floor),
            "HALF_UP" => Ok(RoundingMode::HalfUp),
            "HALF_DOWN" => Ok(RoundingMode::HalfDown),
            "HALF_EVEN" => Ok(RoundingMode::HalfEven),
            "UNNECESSARY" => Ok(RoundingMode::Unnecessary),
            _ => Err(CostingError::invalid_argument(format!(
                "unknown rounding mode: {s}"
            ))),
        }
    }
}
