use crate::{entities::tax_rate, errors::ServiceError};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Rate applied when a tax code has no matching row. Policy fallback, not an
/// error condition.
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Resolves tax codes against reference data.
#[derive(Clone)]
pub struct TaxRateService {
    db: Arc<DatabaseConnection>,
}

impl TaxRateService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Returns the rate for `code` as a fraction (0.10 for 10%), falling
    /// back to [`DEFAULT_TAX_RATE`] when the code is absent.
    #[instrument(skip(self))]
    pub async fn resolve(&self, code: &str) -> Result<Decimal, ServiceError> {
        let found = tax_rate::Entity::find()
            .filter(tax_rate::Column::Code.eq(code))
            .one(&*self.db)
            .await?;

        match found {
            Some(rate) => {
                debug!(code, rate = %rate.rate, "resolved tax rate");
                Ok(rate.rate)
            }
            None => {
                debug!(code, rate = %DEFAULT_TAX_RATE, "tax code not found, using default rate");
                Ok(DEFAULT_TAX_RATE)
            }
        }
    }
}
