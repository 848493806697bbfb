//! Value Objects for the order workflow

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::StoreError;

/// Catalog identifier of a product
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(value: i32) -> Self { Self(value) }
    pub fn value(&self) -> i32 { self.0 }
}

impl From<i32> for ProductId {
    fn from(value: i32) -> Self { Self(value) }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Price value object. Always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> Result<Self, StoreError> {
        if amount <= Decimal::ZERO {
            return Err(StoreError::invalid("Product price must be positive."));
        }
        Ok(Self(amount))
    }
    pub fn amount(&self) -> Decimal { self.0 }
}

impl TryFrom<Decimal> for Price {
    type Error = StoreError;
    fn try_from(amount: Decimal) -> Result<Self, Self::Error> { Self::new(amount) }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self { price.0 }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Discount percentage, inclusive range 0..=100
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percentage(Decimal);

impl Percentage {
    pub fn new(value: Decimal) -> Result<Self, StoreError> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(StoreError::invalid("Discount percentage must be between 0 and 100."));
        }
        Ok(Self(value))
    }
    pub fn value(&self) -> Decimal { self.0 }

    /// Returns `amount` reduced by this percentage.
    pub fn discount(&self, amount: Decimal) -> Decimal {
        amount - amount * (self.0 / Decimal::ONE_HUNDRED)
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = StoreError;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> { Self::new(value) }
}

// Renders the shortest form, so 10.0 prints as "10".
impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0.normalize()) }
}
