use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::modules::timeline::adapter::outgoing::sea_orm_entity::timeline;
use crate::modules::timeline::application::domain::entities::{TimelineEntry, TimelineEntryType};
use crate::modules::timeline::application::ports::outgoing::CreateTimelineEntryData;

pub fn timeline_model(title: &str, order_index: i32) -> timeline::Model {
    let now = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap().fixed_offset();

    timeline::Model {
        id: Uuid::new_v4(),
        year: "2021-2023".to_string(),
        title: title.to_string(),
        entry_type: "work".to_string(),
        description: "Built and ran the content platform".to_string(),
        location: "Remote".to_string(),
        technologies: Some(serde_json::json!(["Rust"])),
        achievements: None,
        status: Some("Current".to_string()),
        order_index,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_entry(title: &str, entry_type: TimelineEntryType, order_index: i32) -> TimelineEntry {
    let now = Utc::now();

    TimelineEntry {
        id: Uuid::new_v4(),
        year: "2021-2023".to_string(),
        title: title.to_string(),
        entry_type,
        description: format!("{title} description"),
        location: "Remote".to_string(),
        technologies: None,
        achievements: None,
        status: None,
        order_index,
        created_at: now,
        updated_at: now,
    }
}

pub fn create_timeline_data(title: &str) -> CreateTimelineEntryData {
    CreateTimelineEntryData {
        year: "2021-2023".to_string(),
        title: title.to_string(),
        entry_type: TimelineEntryType::Work,
        description: "Built and ran the content platform".to_string(),
        location: "Remote".to_string(),
        technologies: Some(vec!["Rust".to_string()]),
        achievements: None,
        status: None,
        order_index: 0,
    }
}

pub fn sample_timeline() -> Vec<TimelineEntry> {
    vec![
        sample_entry("Lead Engineer", TimelineEntryType::Work, 0),
        sample_entry("Community Organizer", TimelineEntryType::Leadership, 1),
        sample_entry("BSc Computer Science", TimelineEntryType::Education, 2),
    ]
}
