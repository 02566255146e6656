//! Handlers for message templates.
//!
//! All endpoints require authentication via [`AuthUser`] and only ever see
//! the caller's own templates.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use textbee_core::error::CoreError;
use textbee_core::message_template::{
    render, unknown_variables, validate_content, validate_name,
};
use textbee_core::types::DbId;
use textbee_db::models::template::{
    CreateTemplate, PreviewTemplateRequest, TemplateListParams, UpdateTemplate,
};
use textbee_db::repositories::TemplateRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

const NAME_LABEL: &str = "Template name";

/// POST /api/v1/campaigns/templates
///
/// The target group must exist and belong to the caller.
pub async fn create_template(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTemplate>,
) -> AppResult<impl IntoResponse> {
    validate_name(NAME_LABEL, &input.name)?;
    validate_content(&input.content)?;

    let template = TemplateRepo::create(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template group",
            id: input.group_id,
        }))?;

    let unknown = unknown_variables(&template.content);
    if !unknown.is_empty() {
        tracing::debug!(template_id = %template.id, ?unknown, "Template uses unknown variables");
    }
    tracing::info!(
        template_id = %template.id,
        group_id = %template.group_id,
        user_id = %auth.user_id,
        "Template created",
    );

    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /api/v1/campaigns/templates?groupId=
///
/// The caller's templates, oldest first, optionally limited to one group.
pub async fn list_templates(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TemplateListParams>,
) -> AppResult<impl IntoResponse> {
    let templates = TemplateRepo::list(&state.pool, auth.user_id, params.group_id).await?;
    Ok(Json(templates))
}

/// GET /api/v1/campaigns/templates/{id}
pub async fn get_template(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::find_by_id(&state.pool, auth.user_id, template_id)
        .await?
        .ok_or(not_found(template_id))?;

    Ok(Json(template))
}

/// PUT /api/v1/campaigns/templates/{id}
pub async fn update_template(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
    Json(input): Json<UpdateTemplate>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate_name(NAME_LABEL, name)?;
    }
    if let Some(content) = &input.content {
        validate_content(content)?;
    }

    let template = TemplateRepo::update(&state.pool, auth.user_id, template_id, &input)
        .await?
        .ok_or(not_found(template_id))?;

    tracing::info!(template_id = %template.id, user_id = %auth.user_id, "Template updated");

    Ok(Json(template))
}

/// DELETE /api/v1/campaigns/templates/{id}
pub async fn delete_template(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TemplateRepo::delete(&state.pool, auth.user_id, template_id).await?;

    if !deleted {
        return Err(not_found(template_id));
    }

    tracing::info!(template_id = %template_id, user_id = %auth.user_id, "Template deleted");

    Ok(Json(MessageResponse {
        message: "Template deleted successfully",
    }))
}

/// POST /api/v1/campaigns/templates/{id}/preview
///
/// Render the template with sample values. Placeholders without a value
/// are left as written and reported in `missing`.
pub async fn preview_template(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(template_id): Path<DbId>,
    Json(input): Json<PreviewTemplateRequest>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateRepo::find_by_id(&state.pool, auth.user_id, template_id)
        .await?
        .ok_or(not_found(template_id))?;

    Ok(Json(render(&template.content, &input.variables)))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Template",
        id,
    })
}
