//! `CostAmount`: an immutable decimal tagged with a currency.
//!
//! Arithmetic never converts between currencies. Operations whose result would
//! equal one of the operands return that operand as-is (scale included), so
//! `a.add(zero)` hands back `a` rather than a freshly computed sum.

use forgeerp_core::ValueObject;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{CostingError, CostingResult};
use crate::id::CurrencyId;
use crate::quantity::Quantity;
use crate::rounding::RoundingMode;

/// Signed cost amount in a single currency.
///
/// Equality is numeric over the value (`10` equals `10.00`) plus the currency.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostAmount {
    value: Decimal,
    currency_id: CurrencyId,
}

impl ValueObject for CostAmount {}

impl CostAmount {
    /// Fails with `InvalidArgument` unless `currency_id > 0`.
    pub fn of(value: Decimal, currency_id: i32) -> CostingResult<Self> {
        Ok(Self::new(value, CurrencyId::new(currency_id)?))
    }

    /// Like [`CostAmount::of`], for values read from optional sources.
    pub fn of_nullable(value: Option<Decimal>, currency_id: i32) -> CostingResult<Self> {
        let value = value.ok_or_else(|| CostingError::invalid_argument("value is required"))?;
        Self::of(value, currency_id)
    }

    pub fn new(value: Decimal, currency_id: CurrencyId) -> Self {
        Self { value, currency_id }
    }

    pub fn zero(currency_id: CurrencyId) -> Self {
        Self::new(Decimal::ZERO, currency_id)
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn currency_id(&self) -> CurrencyId {
        self.currency_id
    }

    fn assert_currency_matching(&self, other: &CostAmount) -> CostingResult<()> {
        if self.currency_id != other.currency_id {
            tracing::warn!(
                expected = %self.currency_id,
                actual = %other.currency_id,
                "rejected cost amount arithmetic across currencies"
            );
            return Err(CostingError::CurrencyMismatch {
                expected: self.currency_id,
                actual: *other,
            });
        }
        Ok(())
    }

    /// -1, 0 or 1 depending on the sign of the value.
    pub fn signum(&self) -> i32 {
        if self.value.is_zero() {
            0
        } else if self.value.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    pub fn is_zero(&self) -> bool {
        self.signum() == 0
    }

    /// Zero is returned unchanged; anything else flips sign.
    pub fn negate(self) -> Self {
        if self.is_zero() {
            return self;
        }
        Self::new(-self.value, self.currency_id)
    }

    pub fn negate_if(self, condition: bool) -> Self {
        if condition { self.negate() } else { self }
    }

    pub fn negate_if_not(self, condition: bool) -> Self {
        if !condition { self.negate() } else { self }
    }

    /// Exact product, no rounding. Multiplying by one (any scale) is a no-op.
    pub fn multiply(self, multiplicand: Decimal) -> CostingResult<Self> {
        if multiplicand == Decimal::ONE {
            return Ok(self);
        }

        let value = self.value.checked_mul(multiplicand).ok_or_else(|| {
            CostingError::arithmetic(format!("overflow multiplying {self} by {multiplicand}"))
        })?;
        Ok(Self::new(value, self.currency_id))
    }

    pub fn multiply_qty(self, quantity: &Quantity) -> CostingResult<Self> {
        self.multiply(quantity.qty())
    }

    /// Sum of two amounts in the same currency.
    ///
    /// A zero left operand yields `other`; otherwise a zero `other` yields
    /// `self`. Zero plus zero therefore returns the right-hand zero.
    pub fn add(self, other: CostAmount) -> CostingResult<Self> {
        self.assert_currency_matching(&other)?;

        if self.is_zero() {
            return Ok(other);
        }
        if other.is_zero() {
            return Ok(self);
        }

        let value = self.value.checked_add(other.value).ok_or_else(|| {
            CostingError::arithmetic(format!("overflow adding {other} to {self}"))
        })?;
        Ok(Self::new(value, self.currency_id))
    }

    pub fn subtract(self, other: CostAmount) -> CostingResult<Self> {
        self.assert_currency_matching(&other)?;

        if other.is_zero() {
            return Ok(self);
        }
        self.checked_sub(other.value)
    }

    /// Subtracts a raw decimal; there is no currency to check.
    pub fn subtract_decimal(self, other: Decimal) -> CostingResult<Self> {
        if other.is_zero() {
            return Ok(self);
        }
        self.checked_sub(other)
    }

    fn checked_sub(self, other: Decimal) -> CostingResult<Self> {
        let value = self.value.checked_sub(other).ok_or_else(|| {
            CostingError::arithmetic(format!("overflow subtracting {other} from {self}"))
        })?;
        Ok(Self::new(value, self.currency_id))
    }

    /// Quotient with exactly `precision` fractional digits.
    pub fn divide(
        self,
        divisor: Decimal,
        precision: u32,
        rounding_mode: RoundingMode,
    ) -> CostingResult<Self> {
        if divisor.is_zero() {
            tracing::warn!(amount = %self, "rejected cost amount division by zero");
            return Err(CostingError::arithmetic(format!("division by zero: {self} / 0")));
        }

        let value = rounding_mode.divide(self.value, divisor, precision)?;
        Ok(Self::new(value, self.currency_id))
    }

    pub fn divide_qty(
        self,
        divisor: &Quantity,
        precision: u32,
        rounding_mode: RoundingMode,
    ) -> CostingResult<Self> {
        self.divide(divisor.qty(), precision, rounding_mode)
    }

    /// Rounds half-up to `precision` digits, only when the scale exceeds it.
    pub fn round_to_precision_if_needed(self, precision: u32) -> Self {
        if self.value.scale() <= precision {
            return self;
        }

        let value = self
            .value
            .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
        Self::new(value, self.currency_id)
    }
}

impl core::ops::Neg for CostAmount {
    type Output = CostAmount;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl core::fmt::Display for CostAmount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (currency {})", self.value, self.currency_id)
    }
}
