// src/modules/pages/application/render_context.rs

use serde::Serialize;
use utoipa::ToSchema;

crate::label_enum! {
    pub enum Theme: "theme" {
        Light => "light",
        Dark => "dark",
        System => "system",
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

impl Theme {
    /// Cookie values are client-controlled; anything unrecognized falls back
    /// to the OS preference.
    pub fn from_cookie(value: &str) -> Theme {
        value.trim().parse().unwrap_or_default()
    }
}

/// Per-request presentation state handed to every page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RenderContext {
    pub theme: Theme,
}
