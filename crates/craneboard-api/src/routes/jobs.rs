//! Job posting endpoints: the public listings and the company dashboard.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use craneboard_core::api::{AckResponse, LatestJobsQuery, PageQuery, Paged, UpsertJobRequest};
use craneboard_core::model::{Company, Job, JobDetail, JobWithCompany, JobWithTechnologies};
use craneboard_store::jobs::JobInput;
use tracing::info;

use crate::error::ApiError;
use crate::identity::CurrentUser;
use crate::server::ApiState;

/// `GET /api/jobs/latest` — newest postings for the landing page.
pub async fn latest(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<LatestJobsQuery>,
) -> Result<Json<Vec<JobWithCompany>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(state.pagination.latest_jobs_limit)
        .clamp(1, state.pagination.max_limit);
    Ok(Json(state.store.latest_jobs(limit).await?))
}

/// `GET /api/jobs/{id}` — the public job page.
pub async fn detail(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<JobDetail>, ApiError> {
    let detail = state.store.job_detail(&id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(detail))
}

/// `GET /api/company/jobs` — paged postings of the caller's company.
pub async fn company_jobs(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paged<JobWithTechnologies>>, ApiError> {
    let company = require_company(&state, &user_id).await?;
    let (page, limit) = query.resolve(
        state.pagination.default_limit,
        state.pagination.max_limit,
    );
    let (data, count) = state.store.list_company_jobs(&company.id, page, limit).await?;
    Ok(Json(Paged::new(data, count, page, limit)))
}

/// `POST /api/jobs` — create a posting for the caller's company.
pub async fn create(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<UpsertJobRequest>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    req.validate().map_err(ApiError::Validation)?;
    let company = require_company(&state, &user_id).await?;
    let technology_ids = resolve_technologies(&state, &req.technologies).await?;

    let job = state
        .store
        .create_job(&job_input(&company, &req), &technology_ids)
        .await?;
    info!(job_id = %job.id, company_id = %company.id, "job created");
    Ok((StatusCode::CREATED, Json(job)))
}

/// `PUT /api/jobs/{id}` — update a posting owned by the caller's company.
pub async fn update(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<UpsertJobRequest>,
) -> Result<Json<Job>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;
    let company = require_company(&state, &user_id).await?;
    let technology_ids = resolve_technologies(&state, &req.technologies).await?;

    let existing = state.store.job_by_id(&id).await?.ok_or(ApiError::NotFound)?;
    if existing.company_id != company.id {
        return Err(ApiError::Forbidden(
            "you do not have permission to edit this job".to_string(),
        ));
    }

    let job = state
        .store
        .update_job(&id, &job_input(&company, &req), &technology_ids)
        .await?;
    Ok(Json(job))
}

/// `DELETE /api/jobs/{id}` — delete a posting owned by the caller's company.
pub async fn remove(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<AckResponse>, ApiError> {
    let company = require_company(&state, &user_id).await?;

    let existing = state.store.job_by_id(&id).await?.ok_or(ApiError::NotFound)?;
    if existing.company_id != company.id {
        return Err(ApiError::Forbidden(
            "you do not have permission to delete this job".to_string(),
        ));
    }

    state.store.delete_job(&id).await?;
    info!(job_id = %id, "job deleted");
    Ok(Json(AckResponse { acknowledged: true }))
}

/// The caller's company, or the 400 that tells them to create one first.
pub(crate) async fn require_company(
    state: &ApiState,
    user_id: &str,
) -> Result<Company, ApiError> {
    state
        .store
        .company_for_user(user_id)
        .await?
        .ok_or(ApiError::CompanyRequired)
}

/// Dedupe the requested technology ids and verify each exists.
async fn resolve_technologies(
    state: &ApiState,
    requested: &[String],
) -> Result<Vec<String>, ApiError> {
    let mut ids: Vec<String> = Vec::with_capacity(requested.len());
    for id in requested {
        if !ids.contains(id) {
            ids.push(id.clone());
        }
    }

    let found = state.store.technologies_by_ids(&ids).await?;
    if found.len() != ids.len() {
        return Err(ApiError::Validation(
            "one or more technologies are invalid".to_string(),
        ));
    }
    Ok(ids)
}

fn job_input(company: &Company, req: &UpsertJobRequest) -> JobInput {
    JobInput {
        company_id: company.id.clone(),
        title: req.title.clone(),
        location: req.location.clone(),
        salary: req.salary,
        description: req.description.clone(),
        requirements: req.requirements.clone(),
        remote: req.remote,
        level: req.level,
    }
}
