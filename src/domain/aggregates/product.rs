//! Product Aggregate

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Price;
use crate::{Result, StoreError};

/// Immutable catalog item: a name and a strictly positive price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    name: String,
    price: Price,
}

#[derive(Deserialize)]
struct ProductRecord { name: String, price: Decimal }

impl TryFrom<ProductRecord> for Product {
    type Error = StoreError;
    fn try_from(record: ProductRecord) -> Result<Self> { Self::new(record.name, record.price) }
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() { return Err(StoreError::invalid("Product name cannot be empty.")); }
        let price = Price::new(price)?;
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn price(&self) -> Decimal { self.price.amount() }
}
