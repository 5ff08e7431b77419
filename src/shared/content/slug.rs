// src/shared/content/slug.rs

pub const MAX_SLUG_LEN: usize = 150;

/// Lowercase alphanumeric runs joined by single hyphens.
fn is_url_safe(slug: &str) -> bool {
    slug.split('-').all(|part| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    })
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("slug cannot be empty")]
    Empty,

    #[error("slug is longer than 150 characters")]
    TooLong,

    #[error("slug may only contain lowercase letters, digits and single hyphens")]
    InvalidFormat,
}

/// Lookup form of a slug. Storage keeps slugs lowercased, so every read and
/// write goes through this.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn validate_slug(raw: &str) -> Result<String, SlugError> {
    let slug = normalize_slug(raw);

    if slug.is_empty() {
        return Err(SlugError::Empty);
    }

    if slug.chars().count() > MAX_SLUG_LEN {
        return Err(SlugError::TooLong);
    }

    if !is_url_safe(&slug) {
        return Err(SlugError::InvalidFormat);
    }

    Ok(slug)
}
