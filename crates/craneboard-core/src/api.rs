//! Shared request/response types for the Craneboard HTTP API.
//!
//! These types are serialized as JSON. Both the API server and the typed
//! client use them, so the wire contract lives in exactly one place.
//! Request types carry their own validation; the server rejects anything
//! `validate()` refuses with a 400.

use serde::{Deserialize, Serialize};

use crate::model::{CompanySize, JobLevel};
use crate::pagination::{self, PageWindow};

/// Server health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub git_hash: String,
    pub build_profile: String,
}

/// Generic error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Acknowledgement for delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub acknowledged: bool,
}

/// Query parameters accepted by paged list endpoints.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageQuery {
    /// Resolve the requested page and limit against configured defaults.
    ///
    /// Page defaults to 1 (a zero page is treated as 1); the limit defaults
    /// to `default_limit` and is capped at `max_limit`.
    pub fn resolve(self, default_limit: u32, max_limit: u32) -> (u32, u32) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(default_limit).clamp(1, max_limit);
        (page, limit)
    }
}

/// Query parameters for the latest-jobs endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LatestJobsQuery {
    pub limit: Option<u32>,
}

/// A page of results together with the pagination window to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub count: i64,
    pub pages: u32,
    /// Absent when there is nothing to paginate (empty list or a stale
    /// page request); clients hide the control in that case.
    pub window: Option<PageWindow>,
}

impl<T> Paged<T> {
    /// Assemble a paged response from a page of rows and the total count.
    pub fn new(data: Vec<T>, count: i64, page: u32, limit: u32) -> Self {
        let pages = (count.max(0) as u64).div_ceil(u64::from(limit)) as u32;
        Self {
            data,
            count,
            pages,
            window: pagination::window(page, pages),
        }
    }
}

/// Body for creating or replacing the caller's company profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertCompanyRequest {
    pub name: String,
    pub size: CompanySize,
    pub location: String,
    #[serde(default)]
    pub about: String,
}

impl UpsertCompanyRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("company name must not be empty".to_string());
        }
        if self.location.trim().is_empty() {
            return Err("company location must not be empty".to_string());
        }
        Ok(())
    }
}

/// Body for creating or updating a job posting. Salary is integer cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertJobRequest {
    pub title: String,
    pub location: String,
    pub salary: i64,
    pub description: String,
    pub requirements: String,
    pub remote: bool,
    pub level: JobLevel,
    pub technologies: Vec<String>,
}

impl UpsertJobRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.chars().count() < 5 {
            return Err("job title must be at least 5 characters".to_string());
        }
        if self.location.chars().count() < 5 {
            return Err("job location must be at least 5 characters".to_string());
        }
        if self.salary < 0 {
            return Err("salary must not be negative".to_string());
        }
        if self.technologies.is_empty() {
            return Err("a job needs at least one technology".to_string());
        }
        Ok(())
    }
}

/// Body for adding a technology to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTechnologyRequest {
    pub title: String,
}

impl CreateTechnologyRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("technology title must not be empty".to_string());
        }
        Ok(())
    }
}

/// Body for registering or updating the caller's experience with a technology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertSkillRequest {
    pub technology_id: String,
    pub years: i64,
}

impl UpsertSkillRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.technology_id.trim().is_empty() {
            return Err("technology_id must not be empty".to_string());
        }
        if !(0..=50).contains(&self.years) {
            return Err("years must be between 0 and 50".to_string());
        }
        Ok(())
    }
}
