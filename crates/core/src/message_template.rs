//! Message template validation and `{variable}` placeholder handling.
//!
//! Template content is free SMS text in which `{firstName}`-style tokens are
//! substituted per contact at send time. This module owns the input limits
//! for template groups and templates, placeholder extraction, and preview
//! rendering.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for a template group or template name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for a template group description, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Maximum length for template content: ten concatenated SMS segments.
pub const MAX_CONTENT_LENGTH: usize = 1_600;

/// Contact fields the campaign sender knows how to fill in.
pub const KNOWN_VARIABLES: &[&str] = &["firstName", "lastName", "phone", "email", "propertyAddress"];

/// Regex pattern matching `{variable}` tokens in template content.
pub const PLACEHOLDER_PATTERN: &str = r"\{([^{}]+)\}";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a group or template name: non-blank and within the length limit.
///
/// `label` names the field in the error message (e.g. `"Template group name"`).
pub fn validate_name(label: &str, name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{label} must not be empty")));
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{label} exceeds maximum length of {MAX_NAME_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate a group description: length check only (may be empty).
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate template content: non-blank and within the length limit.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Template content must not be empty".to_string(),
        ));
    }
    let len = content.chars().count();
    if len > MAX_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Template content exceeds maximum length of {MAX_CONTENT_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Placeholder extraction
// ---------------------------------------------------------------------------

/// Extract the distinct `{variable}` names used in `content`.
///
/// Names are returned without braces, trimmed, in order of first occurrence.
/// Blank tokens such as `{ }` are ignored.
pub fn extract_variables(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    PLACEHOLDER_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(str::to_string)
        .collect()
}

/// Variables used in `content` that the sender cannot fill in.
pub fn unknown_variables(content: &str) -> Vec<String> {
    extract_variables(content)
        .into_iter()
        .filter(|name| !KNOWN_VARIABLES.contains(&name.as_str()))
        .collect()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Result of substituting values into template content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTemplate {
    /// Content with every supplied variable substituted.
    pub content: String,
    /// All variables the content uses, in order of first occurrence.
    pub variables: Vec<String>,
    /// Variables with no supplied value; their tokens are left verbatim.
    pub missing: Vec<String>,
    /// Variables outside [`KNOWN_VARIABLES`], which a campaign send cannot fill.
    pub unknown: Vec<String>,
}

/// Substitute `values` into `content`.
///
/// Placeholders without a value are kept as written so the preview shows
/// exactly what would go out unfilled.
pub fn render(content: &str, values: &HashMap<String, String>) -> RenderedTemplate {
    let rendered = PLACEHOLDER_RE.replace_all(content, |caps: &regex::Captures<'_>| {
        let name = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        match values.get(name) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        }
    });

    let variables = extract_variables(content);
    let missing = variables
        .iter()
        .filter(|name| !values.contains_key(name.as_str()))
        .cloned()
        .collect();
    let unknown = variables
        .iter()
        .filter(|name| !KNOWN_VARIABLES.contains(&name.as_str()))
        .cloned()
        .collect();

    RenderedTemplate {
        content: rendered.into_owned(),
        variables,
        missing,
        unknown,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
