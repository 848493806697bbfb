//! Order Aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::aggregates::Product;
use crate::domain::ports::{CouponService, Logger, NotificationService, PaymentService};
use crate::domain::value_objects::Percentage;
use crate::{Result, StoreError};

/// A customer order: the products being bought plus the checkout actions
/// that run against them. Payment, notification and coupon checks are
/// delegated to the capability passed into each call.
///
/// Orders are not `Clone`; each one keeps its own id.
///
/// ```compile_fail
/// fn needs_clone<T: Clone>() {}
/// needs_clone::<storefront_orders::Order>();
/// ```
pub struct Order {
    id: Uuid,
    items: Vec<Product>,
    logger: Arc<dyn Logger>,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { id: Uuid::new_v4(), items: vec![], logger, created_at: Utc::now() }
    }

    pub fn id(&self) -> Uuid { self.id }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn products(&self) -> &[Product] { &self.items }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Appends `product`. Rejected, with nothing logged, when the order total
    /// would no longer fit in a `Decimal`.
    pub fn add_product(&mut self, product: Product) -> Result<()> {
        if self.calculate_total().checked_add(product.price()).is_none() {
            return Err(StoreError::invalid("Order total would overflow."));
        }
        let message = format!("Product added: {}", product.name());
        self.items.push(product);
        self.logger.log(&message);
        Ok(())
    }

    // Every prefix sum is bounded by a total `add_product` already checked.
    pub fn calculate_total(&self) -> Decimal {
        self.items.iter().map(Product::price).sum()
    }

    /// Total after taking `percentage` percent off. Fails outside 0..=100.
    pub fn apply_discount(&self, percentage: Decimal) -> Result<Decimal> {
        let percentage = Percentage::new(percentage)?;
        let discounted = percentage.discount(self.calculate_total());
        self.logger.log(&format!("Discount applied: {percentage}%"));
        Ok(discounted)
    }

    /// Hands the charge to `payments`; the amount is passed through unchecked.
    pub fn process_payment(&self, payments: &dyn PaymentService, amount: Decimal) -> bool {
        payments.process_payment(self, amount)
    }

    pub fn notify_customer(&self, notifications: &dyn NotificationService) {
        notifications.send_order_confirmation(self);
        self.logger.log("Order confirmation sent.");
    }

    pub fn apply_coupon(&self, coupons: &dyn CouponService, code: &str) -> bool {
        let is_valid = coupons.validate_coupon(code);
        self.logger.log(&format!("Coupon validation result for {code}: {}", display_bool(is_valid)));
        is_valid
    }
}

fn display_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
