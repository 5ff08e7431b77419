// src/modules/contact/application/ports/outgoing/contact_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{ContactInfo, ContactType};
use crate::shared::content::{Icon, PatchField};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateContactData {
    pub contact_type: ContactType,
    pub label: String,
    pub value: String,
    pub url: Option<String>,
    pub icon: Option<Icon>,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
}

/// `url`, `icon` and `description` may be cleared with `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchContactData {
    pub contact_type: PatchField<ContactType>,
    pub label: PatchField<String>,
    pub value: PatchField<String>,
    pub url: PatchField<String>,
    pub icon: PatchField<Icon>,
    pub description: PatchField<String>,
    pub display_order: PatchField<i32>,
    pub is_active: PatchField<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Contact info not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Any entry, active or not. Absent id is `NotFound`.
    async fn find_by_id(&self, contact_id: Uuid) -> Result<ContactInfo, ContactRepositoryError>;

    async fn create(&self, data: CreateContactData) -> Result<ContactInfo, ContactRepositoryError>;

    async fn patch(
        &self,
        contact_id: Uuid,
        data: PatchContactData,
    ) -> Result<ContactInfo, ContactRepositoryError>;

    async fn delete(&self, contact_id: Uuid) -> Result<bool, ContactRepositoryError>;
}
