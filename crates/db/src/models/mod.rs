pub mod template;
pub mod template_group;
