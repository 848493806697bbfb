//! Ready-made capability implementations.

use std::collections::HashMap;

use crate::domain::aggregates::Product;
use crate::domain::ports::{Logger, ProductRepository};
use crate::domain::value_objects::ProductId;

/// Forwards business log entries to `tracing` at INFO.
#[derive(Clone, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "storefront_orders::order", "{message}");
    }
}

/// Map-backed product lookup, filled up front.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProductRepository {
    products: HashMap<ProductId, Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self { Self::default() }

    pub fn with_product(mut self, id: ProductId, product: Product) -> Self {
        self.products.insert(id, product);
        self
    }

    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }
}

impl FromIterator<(ProductId, Product)> for InMemoryProductRepository {
    fn from_iter<I: IntoIterator<Item = (ProductId, Product)>>(iter: I) -> Self {
        Self { products: iter.into_iter().collect() }
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn get_product_by_id(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).cloned()
    }
}
