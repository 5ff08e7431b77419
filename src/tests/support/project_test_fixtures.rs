use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::project::application::domain::entities::{
    Project, ProjectCategory, ProjectStatus, TechStack,
};
use crate::modules::project::application::ports::outgoing::CreateProjectData;

fn project_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

pub fn project_model(slug: &str) -> projects::Model {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap().fixed_offset();

    projects::Model {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: "CHIP-8 Emulator".to_string(),
        category: "System Programming".to_string(),
        description: "Interpreter for the CHIP-8 virtual machine".to_string(),
        long_description: "Opcodes, timers and a 64x32 display.".to_string(),
        image: None,
        status: "Completed".to_string(),
        project_date: project_date(),
        duration: Some("2 months".to_string()),
        team: Some("Solo".to_string()),
        role: Some("Developer".to_string()),
        tags: serde_json::json!(["C++", "SDL2"]),
        features: serde_json::json!(["Full opcode coverage"]),
        challenges: serde_json::json!(["Timing accuracy"]),
        solutions: serde_json::json!(["Fixed-step loop"]),
        screenshots: serde_json::json!([]),
        tech_stack: serde_json::json!({
            "frontend": [],
            "backend": ["C++"],
            "database": [],
            "deployment": []
        }),
        github_url: Some("https://github.com/example/chip8".to_string()),
        live_url: Some("https://chip8.example.com".to_string()),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_project(slug: &str, title: &str, category: ProjectCategory, tags: &[&str]) -> Project {
    let now = Utc::now();

    Project {
        id: Uuid::new_v4(),
        slug: slug.to_string(),
        title: title.to_string(),
        category,
        description: format!("{title} description"),
        long_description: String::new(),
        image: None,
        status: ProjectStatus::Completed,
        project_date: project_date(),
        duration: None,
        team: None,
        role: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        features: vec![],
        challenges: vec![],
        solutions: vec![],
        screenshots: vec![],
        tech_stack: TechStack::default(),
        github_url: None,
        live_url: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn create_project_data(slug: &str) -> CreateProjectData {
    CreateProjectData {
        slug: slug.to_string(),
        title: "CHIP-8 Emulator".to_string(),
        category: ProjectCategory::SystemProgramming,
        description: "Interpreter for the CHIP-8 virtual machine".to_string(),
        long_description: "Opcodes, timers and a 64x32 display.".to_string(),
        image: None,
        status: ProjectStatus::Completed,
        project_date: project_date(),
        duration: Some("2 months".to_string()),
        team: Some("Solo".to_string()),
        role: Some("Developer".to_string()),
        tags: vec!["C++".to_string(), "SDL2".to_string()],
        features: vec!["Full opcode coverage".to_string()],
        challenges: vec![],
        solutions: vec![],
        screenshots: vec![],
        tech_stack: TechStack {
            backend: vec!["C++".to_string()],
            ..Default::default()
        },
        github_url: Some("https://github.com/example/chip8".to_string()),
        live_url: None,
    }
}

/// The six-project listing used by page and filter tests: one game project,
/// one of them tagged "Unity".
pub fn six_projects() -> Vec<Project> {
    vec![
        sample_project("caks", "CAKS", ProjectCategory::WebApplication, &["Next.js", "Supabase"]),
        sample_project(
            "procurement-crawler",
            "Procurement Crawler",
            ProjectCategory::WebApplication,
            &["Node.js", "Puppeteer"],
        ),
        sample_project(
            "neutron-prototype",
            "Neutron Prototype",
            ProjectCategory::GameDevelopment,
            &["Unity", "C#"],
        ),
        sample_project(
            "chip8-emulator",
            "CHIP-8 Emulator",
            ProjectCategory::SystemProgramming,
            &["C++", "SDL2"],
        ),
        sample_project(
            "p2p-transfer",
            "P2P Transfer",
            ProjectCategory::SystemProgramming,
            &["C", "Sockets"],
        ),
        sample_project(
            "society-platform",
            "Society Platform",
            ProjectCategory::Collaboration,
            &["Teamwork"],
        ),
    ]
}
