//! Repository for the `templates` table.
//!
//! Every query is scoped by `user_id` before the row id.

use sqlx::PgPool;
use textbee_core::types::{new_id, DbId};

use crate::models::template::{CreateTemplate, Template, UpdateTemplate};

/// Column list for templates queries.
const COLUMNS: &str = "id, user_id, group_id, name, content, created_at, updated_at";

/// Provides owner-scoped CRUD operations for message templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// Insert a template into one of the owner's groups.
    ///
    /// The group lookup and the insert are a single statement, so `None`
    /// means the group does not exist or belongs to someone else, and no
    /// row was written.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTemplate,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query = format!(
            "INSERT INTO templates (id, user_id, group_id, name, content)
             SELECT $1, g.user_id, g.id, $4, $5
             FROM template_groups g
             WHERE g.id = $3 AND g.user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(new_id())
            .bind(user_id)
            .bind(input.group_id)
            .bind(input.name.trim())
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// List the owner's templates, optionally limited to one group, oldest first.
    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        group_id: Option<DbId>,
    ) -> Result<Vec<Template>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM templates
             WHERE user_id = $1 AND ($2::uuid IS NULL OR group_id = $2)
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(user_id)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    /// Find one of the owner's templates by id.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM templates WHERE user_id = $1 AND id = $2");
        sqlx::query_as::<_, Template>(&query)
            .bind(user_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply the present fields of `input` and refresh `updated_at`.
    ///
    /// Returns `None` if the owner has no template with this id.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateTemplate,
    ) -> Result<Option<Template>, sqlx::Error> {
        let query = format!(
            "UPDATE templates SET
                name = COALESCE($3, name),
                content = COALESCE($4, content),
                updated_at = NOW()
             WHERE user_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Template>(&query)
            .bind(user_id)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.content.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the owner's templates. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM templates WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
