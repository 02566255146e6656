pub mod campaigns;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /campaigns/template-groups                  list, create
/// /campaigns/template-groups/reorder          reorder (PUT)
/// /campaigns/template-groups/{id}             get, update, delete
/// /campaigns/templates                        list, create
/// /campaigns/templates/{id}                   get, update, delete
/// /campaigns/templates/{id}/preview           render preview (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/campaigns", campaigns::router())
}
