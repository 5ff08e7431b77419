use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_info;
use crate::modules::contact::application::domain::entities::{ContactInfo, ContactType};
use crate::modules::contact::application::ports::outgoing::CreateContactData;
use crate::shared::content::Icon;

pub fn contact_model(contact_type: &str, display_order: i32) -> contact_info::Model {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 7, 30, 0).unwrap().fixed_offset();

    contact_info::Model {
        id: Uuid::new_v4(),
        contact_type: contact_type.to_string(),
        label: "Email".to_string(),
        value: "hello@example.com".to_string(),
        url: Some("mailto:hello@example.com".to_string()),
        icon: Some("Mail".to_string()),
        description: None,
        display_order,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_contact(
    contact_type: ContactType,
    label: &str,
    display_order: i32,
    is_active: bool,
) -> ContactInfo {
    let now = Utc::now();

    ContactInfo {
        id: Uuid::new_v4(),
        contact_type,
        label: label.to_string(),
        value: format!("{label} value"),
        url: None,
        icon: None,
        description: None,
        display_order,
        is_active,
        created_at: now,
        updated_at: now,
    }
}

pub fn create_contact_data(contact_type: ContactType, label: &str) -> CreateContactData {
    CreateContactData {
        contact_type,
        label: label.to_string(),
        value: "hello@example.com".to_string(),
        url: None,
        icon: Some(Icon::Mail),
        description: None,
        display_order: 0,
        is_active: true,
    }
}

/// One inactive phone entry; the rest are active.
pub fn sample_contacts() -> Vec<ContactInfo> {
    vec![
        sample_contact(ContactType::Location, "Location", 2, true),
        sample_contact(ContactType::Email, "Email", 0, true),
        sample_contact(ContactType::Phone, "Phone", 1, false),
        sample_contact(ContactType::Social, "GitHub", 3, true),
        sample_contact(ContactType::Social, "LinkedIn", 4, true),
    ]
}
