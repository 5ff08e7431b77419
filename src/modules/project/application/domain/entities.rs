// src/modules/project/application/domain/entities.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::filter_view::Searchable;

crate::label_enum! {
    pub enum ProjectCategory: "project category" {
        WebApplication => "Web Application",
        GameDevelopment => "Game Development",
        SystemProgramming => "System Programming",
        Collaboration => "Collaboration",
    }
}

crate::label_enum! {
    pub enum ProjectStatus: "project status" {
        InProgress => "In Progress",
        Completed => "Completed",
        Planning => "Planning",
        OnHold => "On Hold",
        Cancelled => "Cancelled",
    }
}

/// Technologies grouped by layer; stored as one JSONB object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TechStack {
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub database: Vec<String>,
    #[serde(default)]
    pub deployment: Vec<String>,
}

impl TechStack {
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.frontend
            .iter()
            .chain(&self.backend)
            .chain(&self.database)
            .chain(&self.deployment)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub category: ProjectCategory,
    pub description: String,
    pub long_description: String,
    pub image: Option<String>,
    pub status: ProjectStatus,
    pub project_date: NaiveDate,
    pub duration: Option<String>,
    pub team: Option<String>,
    pub role: Option<String>,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub screenshots: Vec<String>,
    pub tech_stack: TechStack,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Searchable for Project {
    type Category = ProjectCategory;

    fn category(&self) -> ProjectCategory {
        self.category
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}
