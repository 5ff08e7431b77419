use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::project_model_mapper::model_to_project;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::content::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(data.slug.trim().to_lowercase()),
            title: Set(data.title.trim().to_string()),
            category: Set(data.category.as_str().to_string()),
            description: Set(data.description),
            long_description: Set(data.long_description),
            image: Set(data.image),
            status: Set(data.status.as_str().to_string()),
            project_date: Set(data.project_date),
            duration: Set(data.duration),
            team: Set(data.team),
            role: Set(data.role),
            tags: Set(to_json(&data.tags)?),
            features: Set(to_json(&data.features)?),
            challenges: Set(to_json(&data.challenges)?),
            solutions: Set(to_json(&data.solutions)?),
            screenshots: Set(to_json(&data.screenshots)?),
            tech_stack: Set(to_json(&data.tech_stack)?),
            github_url: Set(data.github_url),
            live_url: Set(data.live_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        to_domain(result)
    }

    async fn patch(
        &self,
        project_id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }

        if let PatchField::Value(category) = data.category {
            model.category = Set(category.as_str().to_string());
        }

        if let PatchField::Value(desc) = data.description {
            model.description = Set(desc);
        }

        if let PatchField::Value(long_desc) = data.long_description {
            model.long_description = Set(long_desc);
        }

        if let PatchField::Value(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }

        if let PatchField::Value(date) = data.project_date {
            model.project_date = Set(date);
        }

        if let PatchField::Value(tags) = data.tags {
            model.tags = Set(to_json(&tags)?);
        }

        if let PatchField::Value(features) = data.features {
            model.features = Set(to_json(&features)?);
        }

        if let PatchField::Value(challenges) = data.challenges {
            model.challenges = Set(to_json(&challenges)?);
        }

        if let PatchField::Value(solutions) = data.solutions {
            model.solutions = Set(to_json(&solutions)?);
        }

        if let PatchField::Value(screens) = data.screenshots {
            model.screenshots = Set(to_json(&screens)?);
        }

        if let PatchField::Value(stack) = data.tech_stack {
            model.tech_stack = Set(to_json(&stack)?);
        }

        if let Some(image) = data.image.into_column_update() {
            model.image = Set(image);
        }

        if let Some(duration) = data.duration.into_column_update() {
            model.duration = Set(duration);
        }

        if let Some(team) = data.team.into_column_update() {
            model.team = Set(team);
        }

        if let Some(role) = data.role.into_column_update() {
            model.role = Set(role);
        }

        if let Some(url) = data.github_url.into_column_update() {
            model.github_url = Set(url);
        }

        if let Some(url) = data.live_url.into_column_update() {
            model.live_url = Set(url);
        }

        if !model.is_changed() {
            let result = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return to_domain(result);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        to_domain(result)
    }

    async fn delete(&self, project_id: Uuid) -> Result<bool, ProjectRepositoryError> {
        let res = Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(res.rows_affected > 0)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_domain(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    model_to_project(model).map_err(ProjectRepositoryError::SerializationError)
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        ProjectRepositoryError::SlugAlreadyExists
    } else {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
