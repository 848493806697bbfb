//! Capability ports consumed by the order workflow.
//!
//! Implementations live outside the domain: the crate ships a tracing-backed
//! [`Logger`] and an in-memory [`ProductRepository`] in `crate::adapters`,
//! everything else is supplied by the caller.

use rust_decimal::Decimal;

use crate::domain::aggregates::{Order, Product};
use crate::domain::value_objects::ProductId;

/// Sink for business log entries.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

/// Catalog lookup. `None` means the id is unknown.
pub trait ProductRepository: Send + Sync {
    fn get_product_by_id(&self, id: ProductId) -> Option<Product>;
}

pub trait PaymentService: Send + Sync {
    /// Charges `amount` for `order`, returning whether the payment went through.
    fn process_payment(&self, order: &Order, amount: Decimal) -> bool;
}

pub trait NotificationService: Send + Sync {
    fn send_order_confirmation(&self, order: &Order);
}

pub trait CouponService: Send + Sync {
    fn validate_coupon(&self, code: &str) -> bool;
}
