use crate::{entities::product, errors::ServiceError};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Read-only lookups against the product catalog.
#[derive(Clone)]
pub struct ProductService {
    db: Arc<DatabaseConnection>,
}

impl ProductService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Exact-match lookup on the unique product code.
    ///
    /// A code with no match is `ServiceError::NotFound`, kept distinct from
    /// infrastructure failures so the handler can answer 404 vs 500.
    #[instrument(skip(self))]
    pub async fn find_by_code(&self, code: &str) -> Result<product::Model, ServiceError> {
        debug!(code, "looking up product");

        product::Entity::find()
            .filter(product::Column::Code.eq(code))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Product with code {} not found", code)))
    }
}
