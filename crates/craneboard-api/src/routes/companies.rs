//! Company profile endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use craneboard_core::api::UpsertCompanyRequest;
use craneboard_core::model::Company;
use craneboard_store::companies::CompanyInput;
use tracing::info;

use crate::error::ApiError;
use crate::identity::CurrentUser;
use crate::server::ApiState;

/// `GET /api/company` — the caller's company, 404 when none exists.
pub async fn show(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Company>, ApiError> {
    let company = state
        .store
        .company_for_user(&user_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(company))
}

/// `PUT /api/company` — create or replace the caller's company profile.
pub async fn upsert(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<UpsertCompanyRequest>,
) -> Result<Json<Company>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let input = CompanyInput {
        name: req.name,
        size: req.size,
        location: req.location,
        about: req.about,
    };
    let company = state.store.upsert_company(&user_id, &input).await?;
    info!(company_id = %company.id, "company upserted");
    Ok(Json(company))
}
