use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    errors::ApiError,
    handlers::common::{map_service_error, success_response, validate_input},
    services::transactions::{LineItemInput, RecordTransactionInput},
    AppState,
};

/// One scanned basket line. All product fields are the client's snapshot
/// from the preceding lookup; prices are trusted as-is.
#[derive(Debug, Deserialize, Validate)]
pub struct TransactionItemRequest {
    pub prd_id: i64,
    pub code: String,
    pub name: String,
    pub price: i64,
    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransactionRequest {
    pub emp_cd: Option<String>,
    pub store_cd: Option<String>,
    pub pos_no: Option<String>,
    #[validate]
    pub products: Vec<TransactionItemRequest>,
}

#[derive(Debug, Serialize)]
pub struct TransactionTotalsResponse {
    pub total_amount: i64,
    pub total_amount_ex_tax: i64,
}

async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let input = RecordTransactionInput {
        emp_cd: payload.emp_cd,
        store_cd: payload.store_cd,
        pos_no: payload.pos_no,
        items: payload
            .products
            .into_iter()
            .map(|item| LineItemInput {
                product_id: item.prd_id,
                product_code: item.code,
                product_name: item.name,
                unit_price: item.price,
                quantity: item.quantity,
            })
            .collect(),
    };

    let totals = state
        .services
        .transactions
        .record(input)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(TransactionTotalsResponse {
        total_amount: totals.total_amount,
        total_amount_ex_tax: totals.total_amount_ex_tax,
    }))
}

pub fn transaction_routes() -> Router<AppState> {
    Router::new().route("/", post(create_transaction))
}
