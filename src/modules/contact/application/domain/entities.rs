// src/modules/contact/application/domain/entities.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::content::Icon;

crate::label_enum! {
    pub enum ContactType: "contact type" {
        Email => "email",
        Phone => "phone",
        Location => "location",
        Social => "social",
        Other => "other",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactInfo {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub label: String,
    pub value: String,
    pub url: Option<String>,
    pub icon: Option<Icon>,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContactInfo {
    /// Position in the "reach me directly" block: emails first, then
    /// locations. Other types are not listed there.
    pub fn direct_rank(&self) -> Option<u8> {
        match self.contact_type {
            ContactType::Email => Some(0),
            ContactType::Location => Some(1),
            _ => None,
        }
    }
}
