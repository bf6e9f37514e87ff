// Core services
pub mod products;
pub mod tax_rates;
pub mod transactions;
