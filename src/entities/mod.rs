pub mod product;
pub mod tax_rate;
pub mod transaction;
pub mod transaction_detail;

pub use product::Entity as Product;
pub use tax_rate::Entity as TaxRate;
pub use transaction::Entity as Transaction;
pub use transaction_detail::Entity as TransactionDetail;
