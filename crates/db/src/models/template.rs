//! Message template model and DTOs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use textbee_core::types::{DbId, Timestamp};

/// A row from the `templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub user_id: DbId,
    pub group_id: DbId,
    pub name: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new template inside an existing group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplate {
    pub group_id: DbId,
    pub name: String,
    pub content: String,
}

/// DTO for updating a template. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTemplate {
    pub name: Option<String>,
    pub content: Option<String>,
}

/// Query parameters for `GET /campaigns/templates`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateListParams {
    pub group_id: Option<DbId>,
}

/// Body for `POST /campaigns/templates/{id}/preview`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewTemplateRequest {
    #[serde(default)]
    pub variables: HashMap<String, String>,
}
