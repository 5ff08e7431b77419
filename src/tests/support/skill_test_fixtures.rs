use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::modules::skill::application::domain::entities::{Skill, SkillLevel};
use crate::modules::skill::application::ports::outgoing::CreateSkillData;

pub fn skill_model(name: &str, order_index: i32) -> skills::Model {
    let now = Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap().fixed_offset();

    skills::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        level: "Proficient".to_string(),
        technologies: serde_json::json!(["Tokio", "actix-web"]),
        color: "orange".to_string(),
        order_index,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_skill(name: &str, level: SkillLevel, order_index: i32) -> Skill {
    let now = Utc::now();

    Skill {
        id: Uuid::new_v4(),
        name: name.to_string(),
        level,
        technologies: vec![],
        color: "orange".to_string(),
        order_index,
        created_at: now,
        updated_at: now,
    }
}

pub fn create_skill_data(name: &str) -> CreateSkillData {
    CreateSkillData {
        name: name.to_string(),
        level: SkillLevel::Proficient,
        technologies: vec!["Tokio".to_string(), "actix-web".to_string()],
        color: "orange".to_string(),
        order_index: 1,
    }
}

/// Unsorted on purpose; "Rust" and "Go" share an order_index.
pub fn sample_skills() -> Vec<Skill> {
    vec![
        sample_skill("Unity", SkillLevel::Expert, 0),
        sample_skill("SQL", SkillLevel::Intermediate, 2),
        sample_skill("Rust", SkillLevel::Proficient, 1),
        sample_skill("Go", SkillLevel::Rudimentary, 1),
    ]
}
