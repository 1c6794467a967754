//! Typed HTTP client for the Craneboard API.
//!
//! Used by the CLI and by integration tests. Identity is attached as the
//! `x-user-id` header, matching the contract the server expects from the
//! external auth layer.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::*;
use crate::model::*;

/// Header carrying the authenticated user id.
pub const USER_HEADER: &str = "x-user-id";

/// Errors from the API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Client for a running Craneboard API server.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    user_id: Option<String>,
}

impl ApiClient {
    /// Create a client targeting the given base URL (e.g. `http://127.0.0.1:9300`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
            user_id: None,
        }
    }

    /// Attach a user identity to every subsequent request.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        debug!(%method, path, "API request");
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(user_id) = &self.user_id {
            builder = builder.header(USER_HEADER, user_id);
        }
        builder
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }
        let message = match resp.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self.request(reqwest::Method::GET, path).send().await?;
        Self::decode(resp).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self.request(method, path).json(body).send().await?;
        Self::decode(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let resp = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::decode::<serde_json::Value>(resp).await.map(|_| ())
    }

    // ── Public endpoints ────────────────────────────────────────────────

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get("/health").await
    }

    pub async fn latest_jobs(&self, limit: Option<u32>) -> Result<Vec<JobWithCompany>, ClientError> {
        let path = match limit {
            Some(n) => format!("/api/jobs/latest?limit={n}"),
            None => "/api/jobs/latest".to_string(),
        };
        self.get(&path).await
    }

    pub async fn job(&self, id: &str) -> Result<JobDetail, ClientError> {
        self.get(&format!("/api/jobs/{id}")).await
    }

    pub async fn technologies(&self, query: PageQuery) -> Result<Paged<Technology>, ClientError> {
        self.get(&format!("/api/technologies?{}", page_params(query)))
            .await
    }

    pub async fn all_technologies(&self) -> Result<Vec<Technology>, ClientError> {
        self.get("/api/technologies/all").await
    }

    // ── Protected endpoints ─────────────────────────────────────────────

    pub async fn my_company(&self) -> Result<Company, ClientError> {
        self.get("/api/company").await
    }

    pub async fn upsert_company(
        &self,
        req: &UpsertCompanyRequest,
    ) -> Result<Company, ClientError> {
        self.send_json(reqwest::Method::PUT, "/api/company", req)
            .await
    }

    pub async fn company_jobs(
        &self,
        query: PageQuery,
    ) -> Result<Paged<JobWithTechnologies>, ClientError> {
        self.get(&format!("/api/company/jobs?{}", page_params(query)))
            .await
    }

    pub async fn create_job(&self, req: &UpsertJobRequest) -> Result<Job, ClientError> {
        self.send_json(reqwest::Method::POST, "/api/jobs", req).await
    }

    pub async fn update_job(&self, id: &str, req: &UpsertJobRequest) -> Result<Job, ClientError> {
        self.send_json(reqwest::Method::PUT, &format!("/api/jobs/{id}"), req)
            .await
    }

    pub async fn delete_job(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/api/jobs/{id}")).await
    }

    pub async fn create_technology(
        &self,
        req: &CreateTechnologyRequest,
    ) -> Result<Technology, ClientError> {
        self.send_json(reqwest::Method::POST, "/api/technologies", req)
            .await
    }

    pub async fn delete_technology(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/api/technologies/{id}")).await
    }

    pub async fn skills(&self) -> Result<Vec<UserSkillWithTechnology>, ClientError> {
        self.get("/api/skills").await
    }

    pub async fn upsert_skill(&self, req: &UpsertSkillRequest) -> Result<UserSkill, ClientError> {
        self.send_json(reqwest::Method::PUT, "/api/skills", req)
            .await
    }

    pub async fn remove_skill(&self, technology_id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/api/skills/{technology_id}")).await
    }
}

fn page_params(query: PageQuery) -> String {
    let mut params = Vec::new();
    if let Some(page) = query.page {
        params.push(format!("page={page}"));
    }
    if let Some(limit) = query.limit {
        params.push(format!("limit={limit}"));
    }
    params.join("&")
}
