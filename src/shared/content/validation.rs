// src/shared/content/validation.rs
//
// Field checks shared by the create/patch commands of every content module.

use email_address::EmailAddress;

use super::patch::PatchField;
use super::slug::validate_slug;

pub const MAX_TITLE_LEN: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

pub fn required_text(field: &'static str, value: &str, max_len: usize) -> Result<(), ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }

    if trimmed.chars().count() > max_len {
        return Err(ValidationError::new(
            field,
            format!("cannot be longer than {max_len} characters"),
        ));
    }

    Ok(())
}

pub fn slug(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    validate_slug(raw).map_err(|e| ValidationError::new(field, e.to_string()))
}

pub fn optional_url(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        None => Ok(()),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => Ok(()),
        Some(_) => Err(ValidationError::new(
            field,
            "must be an absolute http(s) URL",
        )),
    }
}

pub fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if EmailAddress::is_valid(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new(field, "must be a valid email address"))
    }
}

/// List entries (tags, technologies, ...) may not be blank.
pub fn non_blank_items(field: &'static str, items: &[String]) -> Result<(), ValidationError> {
    if items.iter().any(|item| item.trim().is_empty()) {
        return Err(ValidationError::new(field, "entries cannot be blank"));
    }
    Ok(())
}

/// Required columns can be replaced by a patch but never cleared.
pub fn not_null<T>(field: &'static str, value: &PatchField<T>) -> Result<(), ValidationError> {
    if value.is_null() {
        return Err(ValidationError::new(field, "cannot be null"));
    }
    Ok(())
}
