//! Technology catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use craneboard_core::api::{AckResponse, CreateTechnologyRequest, PageQuery, Paged};
use craneboard_core::model::Technology;
use craneboard_core::slug::slugify;
use tracing::info;

use crate::error::ApiError;
use crate::identity::CurrentUser;
use crate::server::ApiState;

/// `GET /api/technologies` — paged catalog listing.
pub async fn list(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Paged<Technology>>, ApiError> {
    let (page, limit) = query.resolve(
        state.pagination.default_limit,
        state.pagination.max_limit,
    );
    let (data, count) = state.store.list_technologies(page, limit).await?;
    Ok(Json(Paged::new(data, count, page, limit)))
}

/// `GET /api/technologies/all` — the whole catalog, for pickers.
pub async fn all(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Technology>>, ApiError> {
    Ok(Json(state.store.all_technologies().await?))
}

/// `POST /api/technologies` — add a technology with a generated slug.
pub async fn create(
    State(state): State<Arc<ApiState>>,
    CurrentUser(_user_id): CurrentUser,
    Json(req): Json<CreateTechnologyRequest>,
) -> Result<(StatusCode, Json<Technology>), ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    // Slug carries the catalog position so duplicate titles stay unique
    let count = state.store.count_technologies().await?;
    let slug = slugify(&format!("{} {}", count + 1, req.title));

    let technology = state.store.create_technology(&req.title, &slug).await?;
    info!(technology_id = %technology.id, slug = %technology.slug, "technology created");
    Ok((StatusCode::CREATED, Json(technology)))
}

/// `DELETE /api/technologies/{id}`.
pub async fn remove(
    State(state): State<Arc<ApiState>>,
    CurrentUser(_user_id): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<AckResponse>, ApiError> {
    state.store.delete_technology(&id).await?;
    Ok(Json(AckResponse { acknowledged: true }))
}
