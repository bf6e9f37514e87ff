pub mod common;
pub mod health;
pub mod products;
pub mod transactions;

use crate::db::DbPool;
use crate::services::{
    products::ProductService, tax_rates::TaxRateService, transactions::TransactionService,
};
use std::sync::Arc;

/// Aggregate of the services used by HTTP handlers. Built once at startup
/// and shared through `AppState`.
#[derive(Clone)]
pub struct AppServices {
    pub products: ProductService,
    pub tax_rates: TaxRateService,
    pub transactions: TransactionService,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        let tax_rates = TaxRateService::new(db_pool.clone());
        let products = ProductService::new(db_pool.clone());
        let transactions = TransactionService::new(db_pool, tax_rates.clone());

        Self {
            products,
            tax_rates,
            transactions,
        }
    }
}
