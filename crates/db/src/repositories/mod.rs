//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` first and the owning user's id second.

pub mod template_group_repo;
pub mod template_repo;

pub use template_group_repo::TemplateGroupRepo;
pub use template_repo::TemplateRepo;
