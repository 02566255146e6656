//! Request handlers for the campaigns API.
//!
//! Each submodule provides async handler functions for one entity type.
//! Handlers validate input with `textbee_core`, delegate to the matching
//! repository in `textbee_db` scoped by the caller's id, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod template_groups;
pub mod templates;
