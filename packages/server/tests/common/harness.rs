//! Test harness driving the HTTP router in-process.
//!
//! Each test gets a fresh in-memory document store behind the real router,
//! so requests go through routing, extraction, error mapping and CORS exactly
//! as in production.

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use server_core::kernel::{FailingDocumentStore, InMemoryDocumentStore, TestDependencies};
use server_core::server::build_app;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Status, headers and decoded JSON body of a response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// A response header as text, if present and visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let response = ctx.get("/api/tukang").await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Backing store, when the harness owns an in-memory one.
    store: Option<Arc<InMemoryDocumentStore>>,
    router: Router,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        // Uses try_init() to avoid panicking if already initialized.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = TestDependencies::new();
        Self {
            router: build_app(deps.server_deps()),
            store: Some(deps.store),
        }
    }

    /// Harness whose store fails every call.
    pub fn failing() -> (Self, Arc<FailingDocumentStore>) {
        let (deps, store) = TestDependencies::failing();
        let harness = Self {
            router: build_app(deps),
            store: None,
        };
        (harness, store)
    }

    /// The in-memory store behind the router - use this to seed or inspect documents.
    pub fn store(&self) -> &InMemoryDocumentStore {
        self.store
            .as_deref()
            .expect("harness was built without an in-memory store")
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    /// POST an arbitrary (possibly invalid) JSON text.
    pub async fn post_raw(&self, uri: &str, body: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(body.to_string())).await
    }

    /// Send a request with extra headers, e.g. a CORS preflight.
    pub async fn send_with_headers(
        &self,
        method: Method,
        uri: &str,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        self.try_send(method, uri, headers, None)
            .await
            .expect("Failed to send request to router")
    }

    async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        self.try_send(method, uri, &[], body)
            .await
            .expect("Failed to send request to router")
    }

    async fn try_send(
        &self,
        method: Method,
        uri: &str,
        headers: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let body = match body {
            Some(text) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(text)
            }
            None => Body::empty(),
        };
        let request = builder.body(body).context("Failed to build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("Router call failed")?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("Failed to read response body")?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).context("Response body is not JSON")?
        };

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }
}
