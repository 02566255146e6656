//! Message template group model and DTOs.
//!
//! Field names on the wire follow the browser client: `_id`, `userId`,
//! `order`, camelCase timestamps.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use textbee_core::types::{DbId, Timestamp};

use super::template::Template;

/// A row from the `template_groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateGroup {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A template group enriched with its templates (oldest first).
#[derive(Debug, Clone, Serialize)]
pub struct TemplateGroupWithTemplates {
    #[serde(flatten)]
    pub group: TemplateGroup,
    pub templates: Vec<Template>,
}

/// DTO for creating a new template group.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplateGroup {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a template group. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTemplateGroup {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// DTO for reordering template groups: ids in the desired display order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderTemplateGroups {
    pub template_group_ids: Vec<DbId>,
}
