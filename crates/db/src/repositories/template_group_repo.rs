//! Repository for the `template_groups` table.
//!
//! Every query is scoped by `user_id` before the row id. Deleting a group
//! and reordering groups each run in a single transaction.

use std::collections::{HashMap, HashSet};

use sqlx::PgPool;
use textbee_core::types::{new_id, DbId};

use crate::models::template::Template;
use crate::models::template_group::{
    CreateTemplateGroup, TemplateGroup, TemplateGroupWithTemplates, UpdateTemplateGroup,
};
use crate::repositories::TemplateRepo;

/// Column list for template_groups queries.
const COLUMNS: &str = "id, user_id, name, description, sort_order, created_at, updated_at";

/// Display order: explicit position first, then newest first.
const ORDER_BY: &str = "ORDER BY sort_order ASC, created_at DESC, id DESC";

/// Provides owner-scoped CRUD and reorder operations for template groups.
pub struct TemplateGroupRepo;

impl TemplateGroupRepo {
    /// Insert a new group for `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTemplateGroup,
    ) -> Result<TemplateGroup, sqlx::Error> {
        let query = format!(
            "INSERT INTO template_groups (id, user_id, name, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TemplateGroup>(&query)
            .bind(new_id())
            .bind(user_id)
            .bind(input.name.trim())
            .bind(input.description.as_deref())
            .fetch_one(pool)
            .await
    }

    /// List the owner's groups in display order.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<TemplateGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM template_groups WHERE user_id = $1 {ORDER_BY}");
        sqlx::query_as::<_, TemplateGroup>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List the owner's groups, each with its templates.
    ///
    /// Templates are fetched with one query for the whole owner and grouped
    /// in memory, so the cost is two round trips regardless of group count.
    pub async fn list_with_templates(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<TemplateGroupWithTemplates>, sqlx::Error> {
        let groups = Self::list(pool, user_id).await?;
        let templates = TemplateRepo::list(pool, user_id, None).await?;
        Ok(attach_templates(groups, templates))
    }

    /// Find one of the owner's groups by id.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<TemplateGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM template_groups WHERE user_id = $1 AND id = $2");
        sqlx::query_as::<_, TemplateGroup>(&query)
            .bind(user_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find one of the owner's groups by id, enriched with its templates.
    pub async fn find_by_id_with_templates(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<TemplateGroupWithTemplates>, sqlx::Error> {
        match Self::find_by_id(pool, user_id, id).await? {
            Some(group) => {
                let templates = TemplateRepo::list(pool, user_id, Some(group.id)).await?;
                Ok(Some(TemplateGroupWithTemplates { group, templates }))
            }
            None => Ok(None),
        }
    }

    /// Apply the present fields of `input` and refresh `updated_at`.
    ///
    /// Returns `None` if the owner has no group with this id.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateTemplateGroup,
    ) -> Result<Option<TemplateGroup>, sqlx::Error> {
        let query = format!(
            "UPDATE template_groups SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                updated_at = NOW()
             WHERE user_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TemplateGroup>(&query)
            .bind(user_id)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.description.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete one of the owner's groups together with its templates.
    ///
    /// Both deletes commit or roll back together. Returns the number of
    /// templates removed, or `None` if the owner has no group with this id.
    pub async fn delete(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM template_groups WHERE user_id = $1 AND id = $2 FOR UPDATE",
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if locked.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let templates = sqlx::query("DELETE FROM templates WHERE group_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM template_groups WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(templates.rows_affected()))
    }

    /// Persist `order = position` for each id in `ordered_ids`.
    ///
    /// All listed groups must belong to `user_id`; otherwise nothing changes
    /// and the ids that did not resolve are returned. An empty result means
    /// the reorder was applied. Rows already at their position are not
    /// touched, so repeating a reorder is a no-op. Groups not listed keep
    /// their current order. `ordered_ids` must not contain duplicates.
    ///
    /// Listed rows are locked in id order, so overlapping reorders queue
    /// behind each other and the last to commit wins.
    pub async fn reorder(
        pool: &PgPool,
        user_id: DbId,
        ordered_ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let owned: Vec<(DbId,)> = sqlx::query_as(
            "SELECT id FROM template_groups
             WHERE user_id = $1 AND id = ANY($2)
             ORDER BY id
             FOR UPDATE",
        )
        .bind(user_id)
        .bind(ordered_ids)
        .fetch_all(&mut *tx)
        .await?;

        if owned.len() != ordered_ids.len() {
            tx.rollback().await?;
            let owned: HashSet<DbId> = owned.into_iter().map(|(id,)| id).collect();
            return Ok(ordered_ids
                .iter()
                .filter(|id| !owned.contains(*id))
                .copied()
                .collect());
        }

        let result = sqlx::query(
            "UPDATE template_groups AS g SET
                sort_order = (o.position - 1)::int,
                updated_at = NOW()
             FROM UNNEST($2::uuid[]) WITH ORDINALITY AS o(id, position)
             WHERE g.id = o.id
               AND g.user_id = $1
               AND g.sort_order <> (o.position - 1)::int",
        )
        .bind(user_id)
        .bind(ordered_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            %user_id,
            requested = ordered_ids.len(),
            changed = result.rows_affected(),
            "Template groups reordered",
        );
        Ok(Vec::new())
    }
}

/// Distribute templates onto their groups, keeping each list's existing order.
fn attach_templates(
    groups: Vec<TemplateGroup>,
    templates: Vec<Template>,
) -> Vec<TemplateGroupWithTemplates> {
    let mut by_group: HashMap<DbId, Vec<Template>> = HashMap::new();
    for template in templates {
        by_group.entry(template.group_id).or_default().push(template);
    }

    groups
        .into_iter()
        .map(|group| {
            let templates = by_group.remove(&group.id).unwrap_or_default();
            TemplateGroupWithTemplates { group, templates }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn group(name: &str) -> TemplateGroup {
        let now = Utc::now();
        TemplateGroup {
            id: new_id(),
            user_id: new_id(),
            name: name.to_string(),
            description: None,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn template(group: &TemplateGroup, name: &str, age_secs: i64) -> Template {
        let at = Utc::now() - Duration::seconds(age_secs);
        Template {
            id: new_id(),
            user_id: group.user_id,
            group_id: group.id,
            name: name.to_string(),
            content: format!("Hi {{firstName}} from {name}"),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn attach_templates_keeps_group_order_and_template_order() {
        let a = group("A");
        let b = group("B");
        let templates = vec![
            template(&b, "b1", 30),
            template(&a, "a1", 20),
            template(&b, "b2", 10),
        ];

        let out = attach_templates(vec![b.clone(), a.clone()], templates);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].group.id, b.id);
        let b_names: Vec<_> = out[0].templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(b_names, vec!["b1", "b2"]);
        assert_eq!(out[1].group.id, a.id);
        assert_eq!(out[1].templates.len(), 1);
    }

    #[test]
    fn attach_templates_gives_empty_list_to_groups_without_templates() {
        let a = group("Empty");
        let out = attach_templates(vec![a], Vec::new());
        assert!(out[0].templates.is_empty());
    }

    #[test]
    fn group_serializes_with_client_field_names() {
        let g = group("Welcome");
        let json = serde_json::to_value(TemplateGroupWithTemplates {
            group: g.clone(),
            templates: Vec::new(),
        })
        .unwrap();

        assert_eq!(json["_id"], g.id.to_string());
        assert_eq!(json["userId"], g.user_id.to_string());
        assert_eq!(json["order"], 0);
        assert!(json["createdAt"].is_string());
        assert!(json.get("description").is_none());
        assert!(json["templates"].as_array().unwrap().is_empty());
    }
}
