//! Route definitions for campaign message templates.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{template_groups, templates};
use crate::state::AppState;

/// Campaign routes mounted at `/campaigns`.
///
/// ```text
/// GET    /template-groups            -> list_template_groups
/// POST   /template-groups            -> create_template_group
/// PUT    /template-groups/reorder    -> reorder_template_groups
/// GET    /template-groups/{id}       -> get_template_group
/// PUT    /template-groups/{id}       -> update_template_group
/// DELETE /template-groups/{id}       -> delete_template_group
///
/// GET    /templates                  -> list_templates (?groupId=)
/// POST   /templates                  -> create_template
/// GET    /templates/{id}             -> get_template
/// PUT    /templates/{id}             -> update_template
/// DELETE /templates/{id}             -> delete_template
/// POST   /templates/{id}/preview     -> preview_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/template-groups",
            get(template_groups::list_template_groups)
                .post(template_groups::create_template_group),
        )
        .route(
            "/template-groups/reorder",
            put(template_groups::reorder_template_groups),
        )
        .route(
            "/template-groups/{id}",
            get(template_groups::get_template_group)
                .put(template_groups::update_template_group)
                .delete(template_groups::delete_template_group),
        )
        .route(
            "/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route(
            "/templates/{id}",
            get(templates::get_template)
                .put(templates::update_template)
                .delete(templates::delete_template),
        )
        .route("/templates/{id}/preview", post(templates::preview_template))
}
