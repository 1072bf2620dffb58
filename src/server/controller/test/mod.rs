//! End-to-end tests driving the full router with in-memory requests.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    router::router,
    service::{activity::ActivityLog, password::PasswordService, token::TokenSigner},
    state::AppState,
};


const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

struct TestApp {
    _context: TestContext,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new()
            .with_directory_tables()
            .build()
            .await
            .unwrap();
        let db = context.db.clone().unwrap();

        let state = AppState::new(
            db,
            TokenSigner::new(SECRET, Duration::hours(24)),
            PasswordService::new(4),
            ActivityLog::new(),
        );

        Self {
            _context: context,
            router: router(state),
        }
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        (status, value)
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, token, Some(body)).await
    }

    async fn delete(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, Some(body)).await
    }

    /// Registers an account and returns its id and bearer token.
    async fn register(&self, email: &str, role: &str) -> (i64, String) {
        let (status, body) = self
            .post(
                "/register",
                None,
                json!({
                    "name": "Test User",
                    "email": email,
                    "password": "pw123456",
                    "role": role,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

        (
            body["user"]["id"].as_i64().unwrap(),
            body["token"].as_str().unwrap().to_string(),
        )
    }

    /// Creates a business as `token` and returns its id.
    async fn create_business(&self, token: &str, name: &str) -> i64 {
        let (status, body) = self
            .post(
                "/businesses",
                Some(token),
                json!({
                    "name": name,
                    "category": "Food",
                    "description": "Fresh bread daily",
                    "rating": 4.0,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create business failed: {}", body);

        body["id"].as_i64().unwrap()
    }

    /// Creates an event next year as `token` and returns its id.
    async fn create_event(&self, token: &str, business_id: Option<i64>) -> i64 {
        let (status, body) = self
            .post(
                "/business-events",
                Some(token),
                json!({
                    "business_id": business_id,
                    "title": "Tasting night",
                    "event_date": future_date(),
                    "location": "Main St",
                    "price": 12.5,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create event failed: {}", body);

        body["id"].as_i64().unwrap()
    }
}

fn future_date() -> String {
    (chrono::Utc::now() + Duration::days(365))
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

fn assert_error(body: &Value) {
    assert!(body["error"].is_string(), "expected error body, got {}", body);
}
