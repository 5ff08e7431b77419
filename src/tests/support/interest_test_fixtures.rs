use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::modules::interest::adapter::outgoing::sea_orm_entity::interests;
use crate::modules::interest::application::domain::entities::{
    Interest, InterestCategory, InterestType,
};
use crate::modules::interest::application::ports::outgoing::CreateInterestData;
use crate::shared::content::Icon;

pub fn interest_model(slug: &str) -> interests::Model {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap().fixed_offset();

    interests::Model {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: "Game Design".to_string(),
        excerpt: "Systems that make play feel right".to_string(),
        content: None,
        category: "Technical".to_string(),
        interest_type: "Creative Technology".to_string(),
        icon: "Gamepad2".to_string(),
        color: "purple".to_string(),
        tags: serde_json::json!(["Unity", "Level Design"]),
        featured: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_interest(slug: &str, title: &str, featured: bool) -> Interest {
    let now = Utc::now();

    Interest {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: format!("{title} excerpt"),
        content: None,
        category: InterestCategory::Technical,
        interest_type: InterestType::CreativeTechnology,
        icon: Icon::Code,
        color: "purple".to_string(),
        tags: vec![],
        featured,
        created_at: now,
        updated_at: now,
    }
}

pub fn create_interest_data(slug: &str) -> CreateInterestData {
    CreateInterestData {
        slug: slug.to_string(),
        title: "Game Design".to_string(),
        excerpt: "Systems that make play feel right".to_string(),
        content: None,
        category: InterestCategory::Technical,
        interest_type: InterestType::CreativeTechnology,
        icon: Icon::Gamepad2,
        color: "purple".to_string(),
        tags: vec!["Unity".to_string()],
        featured: true,
    }
}

/// Two featured (one technical, one social) and two regular interests.
pub fn sample_interests() -> Vec<Interest> {
    let mut film = sample_interest("film-analysis", "Film Analysis", true);
    film.category = InterestCategory::Social;
    film.interest_type = InterestType::ArtsAndCulture;
    film.icon = Icon::Film;
    film.tags = vec!["Cinema".to_string()];

    let mut ethics = sample_interest("tech-ethics", "Tech Ethics", false);
    ethics.category = InterestCategory::Social;
    ethics.interest_type = InterestType::PhilosophyAndEthics;

    let mut games = sample_interest("game-design", "Game Design", true);
    games.tags = vec!["Unity".to_string()];

    vec![
        games,
        film,
        sample_interest("creative-coding", "Creative Coding", false),
        ethics,
    ]
}
