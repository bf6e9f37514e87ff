mod common;

use axum::http::StatusCode;
use common::TestApp;
use rust_decimal_macros::dec;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, Statement};
use serde_json::json;

use pos_api::entities::{transaction, transaction_detail};

fn basket_item(prd_id: i64, code: &str, name: &str, price: i64, quantity: i32) -> serde_json::Value {
    json!({
        "prd_id": prd_id,
        "code": code,
        "name": name,
        "price": price,
        "quantity": quantity,
    })
}

#[tokio::test]
async fn recording_returns_both_totals() {
    let app = TestApp::new().await;
    let tea = app.seed_product("4901234567890", "Oolong Tea 500ml", 120).await;
    let gum = app.seed_product("4902345678901", "Mint Gum", 80).await;

    let (status, body) = app
        .post_json(
            "/api/transactions",
            json!({
                "emp_cd": "0000000001",
                "store_cd": "30",
                "pos_no": "90",
                "products": [
                    basket_item(tea, "4901234567890", "Oolong Tea 500ml", 120, 1),
                    basket_item(gum, "4902345678901", "Mint Gum", 80, 2),
                ],
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_amount_ex_tax"], 280);
    assert_eq!(body["total_amount"], 308);
}

#[tokio::test]
async fn details_are_numbered_in_input_order_and_reference_the_header() {
    let app = TestApp::new().await;
    let tea = app.seed_product("4901234567890", "Oolong Tea 500ml", 120).await;
    let gum = app.seed_product("4902345678901", "Mint Gum", 80).await;
    let choc = app.seed_product("4903456789012", "Chocolate Bar", 200).await;

    let (status, _) = app
        .post_json(
            "/api/transactions",
            json!({
                "products": [
                    basket_item(gum, "4902345678901", "Mint Gum", 80, 1),
                    basket_item(tea, "4901234567890", "Oolong Tea 500ml", 120, 1),
                    basket_item(choc, "4903456789012", "Chocolate Bar", 200, 1),
                ],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let headers = transaction::Entity::find()
        .all(&*app.state.db)
        .await
        .unwrap();
    assert_eq!(headers.len(), 1);
    let header = &headers[0];

    let details = transaction_detail::Entity::find()
        .order_by_asc(transaction_detail::Column::LineNo)
        .all(&*app.state.db)
        .await
        .unwrap();

    assert_eq!(details.len(), 3);
    for (idx, detail) in details.iter().enumerate() {
        assert_eq!(detail.transaction_id, header.id);
        assert_eq!(detail.line_no, idx as i32 + 1);
        assert_eq!(detail.tax_code, "10");
    }
    // Input order preserved, snapshot fields copied from the request.
    assert_eq!(details[0].product_code, "4902345678901");
    assert_eq!(details[0].product_name, "Mint Gum");
    assert_eq!(details[0].unit_price, 80);
    assert_eq!(details[1].product_code, "4901234567890");
    assert_eq!(details[2].product_code, "4903456789012");
}

#[tokio::test]
async fn omitted_header_fields_get_sentinel_defaults() {
    let app = TestApp::new().await;
    let tea = app.seed_product("4901234567890", "Oolong Tea 500ml", 150).await;

    let (status, _) = app
        .post_json(
            "/api/transactions",
            json!({
                "products": [basket_item(tea, "4901234567890", "Oolong Tea 500ml", 150, 1)],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let header = transaction::Entity::find()
        .one(&*app.state.db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(header.emp_cd, "9999999999");
    assert_eq!(header.store_cd, "30");
    assert_eq!(header.pos_no, "90");
    assert_eq!(header.total_amount_ex_tax, 150);
    assert_eq!(header.total_amount, 165);
}

#[tokio::test]
async fn configured_rate_overrides_the_default() {
    let app = TestApp::new().await;
    app.seed_tax_rate("10", "reduced rate", dec!(0.08)).await;
    let tea = app.seed_product("4901234567890", "Oolong Tea 500ml", 100).await;

    let (status, body) = app
        .post_json(
            "/api/transactions",
            json!({
                "products": [basket_item(tea, "4901234567890", "Oolong Tea 500ml", 100, 1)],
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_amount_ex_tax"], 100);
    assert_eq!(body["total_amount"], 108);
}

#[tokio::test]
async fn unknown_tax_code_resolves_to_the_default_rate() {
    let app = TestApp::new().await;
    app.seed_tax_rate("08", "reduced rate", dec!(0.08)).await;

    let rate = app
        .state
        .services
        .tax_rates
        .resolve("99")
        .await
        .unwrap();

    assert_eq!(rate, dec!(0.10));
}

#[tokio::test]
async fn empty_basket_is_rejected_before_any_write() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post_json("/api/transactions", json!({ "products": [] }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(transaction::Entity::find()
        .all(&*app.state.db)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn zero_quantity_fails_validation() {
    let app = TestApp::new().await;
    let tea = app.seed_product("4901234567890", "Oolong Tea 500ml", 150).await;

    let (status, body) = app
        .post_json(
            "/api/transactions",
            json!({
                "products": [basket_item(tea, "4901234567890", "Oolong Tea 500ml", 150, 0)],
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn persistence_failure_leaves_no_partial_rows() {
    let app = TestApp::new().await;
    let tea = app.seed_product("4901234567890", "Oolong Tea 500ml", 150).await;

    // Sabotage the detail table so the write fails after the header insert.
    let backend = app.state.db.get_database_backend();
    app.state
        .db
        .execute(Statement::from_string(
            backend,
            "DROP TABLE transaction_details".to_string(),
        ))
        .await
        .unwrap();

    let (status, body) = app
        .post_json(
            "/api/transactions",
            json!({
                "products": [basket_item(tea, "4901234567890", "Oolong Tea 500ml", 150, 1)],
            }),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");

    // The header insert must have been rolled back with the failed details.
    assert!(transaction::Entity::find()
        .all(&*app.state.db)
        .await
        .unwrap()
        .is_empty());
}
