// src/modules/project/adapter/outgoing/project_model_mapper.rs

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::project::application::domain::entities::Project;

/// Row to domain. The error string describes the first column that failed
/// to decode; callers wrap it in their own `SerializationError`.
pub(super) fn model_to_project(model: projects::Model) -> Result<Project, String> {
    Ok(Project {
        id: model.id,
        slug: model.slug,
        title: model.title,
        category: model.category.parse().map_err(|e| format!("{e}"))?,
        description: model.description,
        long_description: model.long_description,
        image: model.image,
        status: model.status.parse().map_err(|e| format!("{e}"))?,
        project_date: model.project_date,
        duration: model.duration,
        team: model.team,
        role: model.role,
        tags: from_json("tags", &model.tags)?,
        features: from_json("features", &model.features)?,
        challenges: from_json("challenges", &model.challenges)?,
        solutions: from_json("solutions", &model.solutions)?,
        screenshots: from_json("screenshots", &model.screenshots)?,
        tech_stack: from_json("tech_stack", &model.tech_stack)?,
        github_url: model.github_url,
        live_url: model.live_url,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn from_json<T: serde::de::DeserializeOwned>(
    column: &str,
    json: &serde_json::Value,
) -> Result<T, String> {
    serde_json::from_value(json.clone()).map_err(|e| format!("{column}: {e}"))
}
