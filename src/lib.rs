//! Storefront Orders
//!
//! Order workflow core for a small online store.
//!
//! ## Features
//! - Validated products and prices
//! - Order totals and percentage discounts
//! - Payment, notification and coupon checks through injected capabilities
//! - Order creation from a product catalog lookup

use thiserror::Error;

pub mod adapters;
pub mod config;
pub mod domain;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::aggregates::{Order, Product};
pub use domain::ports::{CouponService, Logger, NotificationService, PaymentService, ProductRepository};
pub use domain::services::{OrderService, OrderServiceBuilder};
pub use domain::value_objects::{Percentage, Price, ProductId};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StoreError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
