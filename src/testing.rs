//! Recording fakes for the capability ports.
//!
//! Every fake appends to a shared [`Journal`] so tests can check call counts,
//! arguments and the relative order of calls across collaborators.

use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::domain::aggregates::{Order, Product};
use crate::domain::ports::{CouponService, Logger, NotificationService, PaymentService, ProductRepository};
use crate::domain::value_objects::ProductId;

#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: String) { self.0.lock().unwrap().push(entry); }
    pub fn entries(&self) -> Vec<String> { self.0.lock().unwrap().clone() }
    pub fn count(&self, entry: &str) -> usize { self.entries().iter().filter(|e| *e == entry).count() }
}

/// Records `log:<message>`.
pub struct RecordingLogger(Journal);

impl RecordingLogger {
    pub fn new(journal: &Journal) -> Self { Self(journal.clone()) }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) { self.0.record(format!("log:{message}")); }
}

/// Records `pay:<order id>:<amount>` and answers with a fixed result.
pub struct RecordingPayments { journal: Journal, approve: bool }

impl RecordingPayments {
    pub fn new(journal: &Journal, approve: bool) -> Self { Self { journal: journal.clone(), approve } }
}

impl PaymentService for RecordingPayments {
    fn process_payment(&self, order: &Order, amount: Decimal) -> bool {
        self.journal.record(format!("pay:{}:{amount}", order.id()));
        self.approve
    }
}

/// Records `notify:<order id>`.
pub struct RecordingNotifier(Journal);

impl RecordingNotifier {
    pub fn new(journal: &Journal) -> Self { Self(journal.clone()) }
}

impl NotificationService for RecordingNotifier {
    fn send_order_confirmation(&self, order: &Order) { self.0.record(format!("notify:{}", order.id())); }
}

/// Records `coupon:<code>`; accepts only the configured codes.
pub struct RecordingCoupons { journal: Journal, accepted: HashSet<String> }

impl RecordingCoupons {
    pub fn new(journal: &Journal, accepted: &[&str]) -> Self {
        Self { journal: journal.clone(), accepted: accepted.iter().map(|c| c.to_string()).collect() }
    }
}

impl CouponService for RecordingCoupons {
    fn validate_coupon(&self, code: &str) -> bool {
        self.journal.record(format!("coupon:{code}"));
        self.accepted.contains(code)
    }
}

/// Records `lookup:<id>` and returns the same answer for every id.
pub struct RecordingRepository { journal: Journal, product: Option<Product> }

impl RecordingRepository {
    pub fn new(journal: &Journal, product: Option<Product>) -> Self { Self { journal: journal.clone(), product } }
}

impl ProductRepository for RecordingRepository {
    fn get_product_by_id(&self, id: ProductId) -> Option<Product> {
        self.journal.record(format!("lookup:{id}"));
        self.product.clone()
    }
}
