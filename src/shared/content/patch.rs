// src/shared/content/patch.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (only for nullable fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Collapses the three states into what a nullable column should become:
    /// `None` keeps the column, `Some(None)` clears it, `Some(Some(v))` sets it.
    pub fn into_column_update(self) -> Option<Option<T>> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(None),
            PatchField::Value(v) => Some(Some(v)),
        }
    }
}
