//! Handlers for message template groups.
//!
//! Every endpoint requires authentication via [`AuthUser`]; the caller's id
//! scopes all repository calls, so another user's group is reported as not
//! found rather than forbidden.

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use textbee_core::error::CoreError;
use textbee_core::message_template::{validate_description, validate_name};
use textbee_core::types::DbId;
use textbee_db::models::template_group::{
    CreateTemplateGroup, ReorderTemplateGroups, TemplateGroupWithTemplates, UpdateTemplateGroup,
};
use textbee_db::repositories::TemplateGroupRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Template group";
const NAME_LABEL: &str = "Template group name";

/// POST /api/v1/campaigns/template-groups
pub async fn create_template_group(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTemplateGroup>,
) -> AppResult<impl IntoResponse> {
    validate_name(NAME_LABEL, &input.name)?;
    if let Some(description) = &input.description {
        validate_description(description)?;
    }

    let group = TemplateGroupRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(group_id = %group.id, user_id = %auth.user_id, "Template group created");

    Ok((
        StatusCode::CREATED,
        Json(TemplateGroupWithTemplates {
            group,
            templates: Vec::new(),
        }),
    ))
}

/// GET /api/v1/campaigns/template-groups
///
/// All of the caller's groups in display order, each with its templates.
pub async fn list_template_groups(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let groups = TemplateGroupRepo::list_with_templates(&state.pool, auth.user_id).await?;
    Ok(Json(groups))
}

/// GET /api/v1/campaigns/template-groups/{id}
pub async fn get_template_group(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let group = TemplateGroupRepo::find_by_id_with_templates(&state.pool, auth.user_id, group_id)
        .await?
        .ok_or(not_found(group_id))?;

    Ok(Json(group))
}

/// PUT /api/v1/campaigns/template-groups/reorder
///
/// Persist the caller's display order. All ids must be the caller's groups;
/// otherwise nothing changes. Returns the reordered list.
pub async fn reorder_template_groups(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ReorderTemplateGroups>,
) -> AppResult<impl IntoResponse> {
    validate_reorder(&input.template_group_ids)?;

    let unresolved =
        TemplateGroupRepo::reorder(&state.pool, auth.user_id, &input.template_group_ids).await?;
    if let Some(&missing) = unresolved.first() {
        return Err(not_found(missing));
    }

    tracing::info!(
        user_id = %auth.user_id,
        count = input.template_group_ids.len(),
        "Template groups reordered",
    );

    let groups = TemplateGroupRepo::list_with_templates(&state.pool, auth.user_id).await?;
    Ok(Json(groups))
}

/// PUT /api/v1/campaigns/template-groups/{id}
pub async fn update_template_group(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
    Json(input): Json<UpdateTemplateGroup>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate_name(NAME_LABEL, name)?;
    }
    if let Some(description) = &input.description {
        validate_description(description)?;
    }

    let group = TemplateGroupRepo::update(&state.pool, auth.user_id, group_id, &input)
        .await?
        .ok_or(not_found(group_id))?;

    tracing::info!(group_id = %group.id, user_id = %auth.user_id, "Template group updated");

    let with_templates =
        TemplateGroupRepo::find_by_id_with_templates(&state.pool, auth.user_id, group.id)
            .await?
            .ok_or(not_found(group_id))?;

    Ok(Json(with_templates))
}

/// DELETE /api/v1/campaigns/template-groups/{id}
///
/// Removes the group and every template in it.
pub async fn delete_template_group(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let templates_removed = TemplateGroupRepo::delete(&state.pool, auth.user_id, group_id)
        .await?
        .ok_or(not_found(group_id))?;

    tracing::info!(
        group_id = %group_id,
        user_id = %auth.user_id,
        templates_removed,
        "Template group deleted",
    );

    Ok(Json(MessageResponse {
        message: "Template group deleted successfully",
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// A reorder must list at least one group and no group twice.
fn validate_reorder(ids: &[DbId]) -> Result<(), CoreError> {
    if ids.is_empty() {
        return Err(CoreError::Validation(
            "templateGroupIds must not be empty".into(),
        ));
    }
    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(dup) = ids.iter().find(|id| !seen.insert(**id)) {
        return Err(CoreError::Validation(format!(
            "templateGroupIds contains {dup} more than once"
        )));
    }
    Ok(())
}
