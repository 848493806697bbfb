//! Order service: builds orders from catalog lookups.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::aggregates::Order;
use crate::domain::ports::{Logger, ProductRepository};
use crate::domain::value_objects::ProductId;
use crate::{Result, StoreError};

pub struct OrderService {
    products: Arc<dyn ProductRepository>,
    logger: Arc<dyn Logger>,
}

impl OrderService {
    pub fn new(products: Arc<dyn ProductRepository>, logger: Arc<dyn Logger>) -> Self {
        Self { products, logger }
    }

    pub fn builder() -> OrderServiceBuilder { OrderServiceBuilder::default() }

    /// Looks up `product_id` and returns a fresh order holding that product.
    pub fn create_order_with_product(&self, product_id: ProductId) -> Result<Order> {
        debug!(%product_id, "looking up product for new order");
        let product = self.products.get_product_by_id(product_id).ok_or_else(|| {
            warn!(%product_id, "product lookup returned nothing");
            StoreError::invalid("Invalid product ID.")
        })?;

        let mut order = Order::new(Arc::clone(&self.logger));
        order.add_product(product)?;
        debug!(order_id = %order.id(), %product_id, "order created");
        Ok(order)
    }
}

/// Collects the service's dependencies one at a time; `build` rejects a
/// missing one.
#[derive(Default)]
pub struct OrderServiceBuilder {
    products: Option<Arc<dyn ProductRepository>>,
    logger: Option<Arc<dyn Logger>>,
}

impl OrderServiceBuilder {
    pub fn product_repository(mut self, products: Arc<dyn ProductRepository>) -> Self {
        self.products = Some(products);
        self
    }

    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> Result<OrderService> {
        let products = self.products.ok_or_else(|| StoreError::invalid("product repository is required"))?;
        let logger = self.logger.ok_or_else(|| StoreError::invalid("logger is required"))?;
        Ok(OrderService::new(products, logger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::Product;
    use crate::testing::{Journal, RecordingLogger, RecordingRepository};
    use rust_decimal::Decimal;

    fn service(journal: &Journal, product: Option<Product>) -> OrderService {
        OrderService::new(
            Arc::new(RecordingRepository::new(journal, product)),
            Arc::new(RecordingLogger::new(journal)),
        )
    }

    #[test]
    fn test_create_order_with_valid_product_id() {
        let journal = Journal::default();
        let product = Product::new("Test Product", Decimal::TEN).unwrap();
        let order = service(&journal, Some(product.clone())).create_order_with_product(ProductId::new(1)).unwrap();

        assert_eq!(order.products(), [product]);
        assert_eq!(order.products()[0].name(), "Test Product");
        assert_eq!(journal.entries(), ["lookup:1", "log:Product added: Test Product"]);
    }

    #[test]
    fn test_create_order_with_unknown_product_id() {
        let journal = Journal::default();
        let err = service(&journal, None).create_order_with_product(ProductId::new(42)).unwrap_err();

        assert_eq!(err, StoreError::InvalidArgument("Invalid product ID.".into()));
        assert_eq!(journal.entries(), ["lookup:42"]);
    }

    #[test]
    fn test_negative_product_id_is_an_unknown_product() {
        let journal = Journal::default();
        let err = service(&journal, None).create_order_with_product(ProductId::new(-1)).unwrap_err();
        assert_eq!(err, StoreError::InvalidArgument("Invalid product ID.".into()));
        assert_eq!(journal.entries(), ["lookup:-1"]);
    }

    #[test]
    fn test_orders_share_the_service_logger() {
        let journal = Journal::default();
        let svc = service(&journal, Some(Product::new("Lamp", Decimal::ONE).unwrap()));
        let order = svc.create_order_with_product(ProductId::new(7)).unwrap();
        order.apply_discount(Decimal::ZERO).unwrap();
        assert_eq!(journal.count("log:Discount applied: 0%"), 1);
    }

    #[test]
    fn test_builder_requires_every_dependency() {
        let journal = Journal::default();
        let missing_repo = OrderService::builder().logger(Arc::new(RecordingLogger::new(&journal))).build();
        assert!(matches!(missing_repo, Err(StoreError::InvalidArgument(m)) if m.contains("repository")));

        let missing_logger = OrderService::builder()
            .product_repository(Arc::new(RecordingRepository::new(&journal, None)))
            .build();
        assert!(matches!(missing_logger, Err(StoreError::InvalidArgument(m)) if m.contains("logger")));

        let built = OrderService::builder()
            .product_repository(Arc::new(RecordingRepository::new(&journal, None)))
            .logger(Arc::new(RecordingLogger::new(&journal)))
            .build();
        assert!(built.is_ok());
    }
}
