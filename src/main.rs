//! Storefront Orders - runs a single checkout against in-process collaborators

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use storefront_orders::adapters::{InMemoryProductRepository, TracingLogger};
use storefront_orders::config::CheckoutConfig;
use storefront_orders::{CouponService, NotificationService, Order, OrderService, PaymentService, Product, ProductId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Approves any positive charge.
struct ApprovingPayments;

impl PaymentService for ApprovingPayments {
    fn process_payment(&self, order: &Order, amount: Decimal) -> bool {
        let approved = amount > Decimal::ZERO;
        tracing::info!(order_id = %order.id(), %amount, approved, "payment processed");
        approved
    }
}

struct TracingNotifications;

impl NotificationService for TracingNotifications {
    fn send_order_confirmation(&self, order: &Order) {
        tracing::info!(order_id = %order.id(), items = order.len(), "order confirmation dispatched");
    }
}

struct ListedCoupons(HashSet<String>);

impl CouponService for ListedCoupons {
    fn validate_coupon(&self, code: &str) -> bool { self.0.contains(code) }
}

fn catalog() -> Result<InMemoryProductRepository> {
    Ok(InMemoryProductRepository::new()
        .with_product(ProductId::new(1), Product::new("Standing Desk", Decimal::new(34900, 2))?)
        .with_product(ProductId::new(2), Product::new("Desk Lamp", Decimal::new(2450, 2))?)
        .with_product(ProductId::new(3), Product::new("Monitor Arm", Decimal::new(8999, 2))?))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();
    let config = CheckoutConfig::from_env().context("loading checkout settings")?;
    tracing::info!(product_id = %config.product_id, discount = config.discount_percent, "🛒 starting checkout");

    let service = OrderService::builder()
        .product_repository(Arc::new(catalog()?))
        .logger(Arc::new(TracingLogger))
        .build()?;
    let order = service.create_order_with_product(config.product_id)?;

    let total = order.calculate_total();
    let due = order.apply_discount(Decimal::from(config.discount_percent))?;
    let coupons = ListedCoupons(config.accepted_coupons.iter().cloned().collect());
    let coupon_valid = order.apply_coupon(&coupons, &config.coupon_code);
    let paid = order.process_payment(&ApprovingPayments, due);
    if paid {
        order.notify_customer(&TracingNotifications);
    } else {
        tracing::warn!(order_id = %order.id(), "payment declined, customer not notified");
    }

    let summary = serde_json::json!({
        "order_id": order.id(),
        "created_at": order.created_at(),
        "products": order.products(),
        "total": total,
        "amount_due": due,
        "coupon": { "code": config.coupon_code, "valid": coupon_valid },
        "paid": paid,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
