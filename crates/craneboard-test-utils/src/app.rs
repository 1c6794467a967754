//! In-process API harness for integration tests.
//!
//! [`TestApp`] wires a fresh in-memory store into the full router and drives
//! it through `tower::ServiceExt::oneshot`, so tests exercise the real
//! extractors, handlers, and JSON serialisation without binding a socket.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use craneboard_api::ApiState;
use craneboard_config::PaginationConfig;
use craneboard_core::client::USER_HEADER;
use craneboard_core::model::{Company, CompanySize, Job, Technology};
use craneboard_core::slug::slugify;
use craneboard_store::companies::CompanyInput;
use craneboard_store::jobs::JobInput;
use craneboard_store::Store;
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

use crate::tracing_setup::init_test_tracing;

/// A fully wired API instance backed by an in-memory database.
pub struct TestApp {
    /// Direct store handle for seeding fixtures past the HTTP layer.
    pub store: Store,
    router: Router,
}

impl TestApp {
    /// Fresh app with an empty in-memory database and default pagination.
    pub async fn new() -> Self {
        init_test_tracing();
        let store = Store::in_memory().await.expect("in-memory store");
        let state = Arc::new(ApiState::new(store.clone(), PaginationConfig::default()));
        let router = craneboard_api::router(state);
        Self { store, router }
    }

    /// Anonymous GET. Returns the status and the parsed JSON body
    /// (`Value::Null` when the body is empty).
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request(Method::GET, None, path, None).await
    }

    /// GET with the identity header set.
    pub async fn get_as(&self, user_id: &str, path: &str) -> (StatusCode, Value) {
        self.request(Method::GET, Some(user_id), path, None).await
    }

    /// Send a JSON body with the given method, optionally authenticated.
    pub async fn send_json<B: Serialize>(
        &self,
        method: Method,
        user_id: Option<&str>,
        path: &str,
        body: &B,
    ) -> (StatusCode, Value) {
        let value = serde_json::to_value(body).expect("serialize request body");
        self.request(method, user_id, path, Some(value)).await
    }

    /// Seed a company for the given user directly through the store.
    pub async fn seed_company(&self, user_id: &str, name: &str) -> Company {
        let input = CompanyInput {
            name: name.to_string(),
            size: CompanySize::Small,
            location: "Lisbon".to_string(),
            about: "Fixture company.".to_string(),
        };
        self.store
            .upsert_company(user_id, &input)
            .await
            .expect("seed company")
    }

    /// Seed a catalog technology, deriving the positional slug the same way
    /// the create endpoint does.
    pub async fn seed_technology(&self, title: &str) -> Technology {
        let count = self.store.count_technologies().await.expect("count technologies");
        let slug = slugify(&format!("{} {}", count + 1, title));
        self.store
            .create_technology(title, &slug)
            .await
            .expect("seed technology")
    }

    /// Seed a job posting directly through the store.
    pub async fn seed_job(
        &self,
        company_id: &str,
        title: &str,
        technology_ids: &[String],
    ) -> Job {
        let input = JobInput {
            company_id: company_id.to_string(),
            title: title.to_string(),
            location: "Remote, EU".to_string(),
            salary: 8_000_000,
            description: "Fixture posting.".to_string(),
            requirements: "Rust.".to_string(),
            remote: true,
            level: craneboard_core::model::JobLevel::Mid,
        };
        self.store
            .create_job(&input, technology_ids)
            .await
            .expect("seed job")
    }

    async fn request(
        &self,
        method: Method,
        user_id: Option<&str>,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(user_id) = user_id {
            builder = builder.header(USER_HEADER, user_id);
        }
        let request = match body {
            Some(value) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse JSON body")
        };
        (status, body)
    }
}
