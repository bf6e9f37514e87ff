use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Serialize;

use crate::{
    entities::product,
    errors::ApiError,
    handlers::common::{map_service_error, success_response},
    AppState,
};

/// Wire shape for a product lookup. Field names follow the established
/// client contract, hence the uppercase keys.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    #[serde(rename = "PRD_ID")]
    pub prd_id: i64,
    #[serde(rename = "CODE")]
    pub code: String,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "PRICE")]
    pub price: i64,
}

impl From<product::Model> for ProductResponse {
    fn from(product: product::Model) -> Self {
        Self {
            prd_id: product.id,
            code: product.code,
            name: product.name,
            price: product.price,
        }
    }
}

async fn get_product(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .find_by_code(&code)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(ProductResponse::from(product)))
}

pub fn product_routes() -> Router<AppState> {
    Router::new().route("/:code", get(get_product))
}
