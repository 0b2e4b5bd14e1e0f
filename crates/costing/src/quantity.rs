//! Quantity: a decimal magnitude in a unit of measure.
//!
//! Amounts only read the magnitude (`qty()`); the unit travels along so that
//! callers can check it before multiplying a per-unit cost.

use forgeerp_core::ValueObject;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::id::UomId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quantity {
    qty: Decimal,
    uom_id: UomId,
}

impl ValueObject for Quantity {}

impl Quantity {
    pub fn new(qty: Decimal, uom_id: UomId) -> Self {
        Self { qty, uom_id }
    }

    pub fn zero(uom_id: UomId) -> Self {
        Self::new(Decimal::ZERO, uom_id)
    }

    pub fn qty(&self) -> Decimal {
        self.qty
    }

    pub fn uom_id(&self) -> UomId {
        self.uom_id
    }

    pub fn signum(&self) -> i32 {
        if self.qty.is_zero() {
            0
        } else if self.qty.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    pub fn is_zero(&self) -> bool {
        self.signum() == 0
    }

    pub fn negate(self) -> Self {
        if self.is_zero() {
            return self;
        }
        Self::new(-self.qty, self.uom_id)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (uom {})", self.qty, self.uom_id)
    }
}
