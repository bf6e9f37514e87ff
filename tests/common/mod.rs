use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    routing::get,
    Router,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use pos_api::{
    config::AppConfig,
    db,
    entities::{product, tax_rate},
    AppState,
};

/// Test harness: application state and router backed by an in-memory SQLite
/// database with migrations applied.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.auto_migrate = true;
        // A single connection keeps every query on the same in-memory database.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);

        let router = Router::new()
            .route("/", get(|| async { "pos-api up" }))
            .nest("/health", pos_api::handlers::health::health_routes())
            .nest("/api", pos_api::api_routes())
            .with_state(state.clone());

        Self { router, state }
    }

    /// Insert a catalog product and return its generated id.
    pub async fn seed_product(&self, code: &str, name: &str, price: i64) -> i64 {
        let inserted = product::ActiveModel {
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            price: Set(price),
            ..Default::default()
        }
        .insert(&*self.state.db)
        .await
        .expect("failed to seed product");

        inserted.id
    }

    /// Insert a tax rate row.
    pub async fn seed_tax_rate(&self, code: &str, name: &str, rate: Decimal) {
        tax_rate::ActiveModel {
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            rate: Set(rate),
            ..Default::default()
        }
        .insert(&*self.state.db)
        .await
        .expect("failed to seed tax rate");
    }

    /// Issue a GET request and return status plus parsed JSON body.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request");

        self.send(request).await
    }

    /// Issue a POST request with a JSON body and return status plus parsed
    /// JSON body.
    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body was not JSON")
        };

        (status, json)
    }
}
