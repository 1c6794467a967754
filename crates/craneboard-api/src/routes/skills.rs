//! Skill registration endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use craneboard_core::api::{AckResponse, UpsertSkillRequest};
use craneboard_core::model::{UserSkill, UserSkillWithTechnology};

use crate::error::ApiError;
use crate::identity::CurrentUser;
use crate::server::ApiState;

/// `GET /api/skills` — the caller's registered skills.
pub async fn list(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<UserSkillWithTechnology>>, ApiError> {
    Ok(Json(state.store.user_skills(&user_id).await?))
}

/// `PUT /api/skills` — register a skill or update its years.
pub async fn upsert(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<UpsertSkillRequest>,
) -> Result<Json<UserSkill>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let known = state
        .store
        .technologies_by_ids(std::slice::from_ref(&req.technology_id))
        .await?;
    if known.is_empty() {
        return Err(ApiError::Validation(
            "technology is invalid".to_string(),
        ));
    }

    let skill = state
        .store
        .upsert_user_skill(&user_id, &req.technology_id, req.years)
        .await?;
    Ok(Json(skill))
}

/// `DELETE /api/skills/{technology_id}` — drop a registered skill.
pub async fn remove(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
    Path(technology_id): Path<String>,
) -> Result<Json<AckResponse>, ApiError> {
    state.store.remove_user_skill(&user_id, &technology_id).await?;
    Ok(Json(AckResponse { acknowledged: true }))
}
