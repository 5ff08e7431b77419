// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};
use std::sync::Arc;

use super::project_model_mapper::model_to_project;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectListFilter, ProjectOrder, ProjectQuery, ProjectQueryError, ProjectSortField,
};
use crate::shared::content::normalize_slug;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(
        &self,
        filter: ProjectListFilter,
        order: ProjectOrder,
    ) -> Result<Vec<Project>, ProjectQueryError> {
        let models = list_query(filter, order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(|m| model_to_project(m).map_err(ProjectQueryError::SerializationError))
            .collect()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Project, ProjectQueryError> {
        let model = by_slug_query(slug)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        model_to_project(model).map_err(ProjectQueryError::SerializationError)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn list_query(filter: ProjectListFilter, order: ProjectOrder) -> Select<Entity> {
    let mut query = Entity::find();

    if let Some(category) = filter.category {
        query = query.filter(Column::Category.eq(category.as_str()));
    }

    // Ties keep insertion order
    query = query
        .order_by(sort_column(order.field), order.direction.into())
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id);

    if let Some(limit) = filter.limit {
        query = query.limit(limit);
    }

    query
}

fn by_slug_query(slug: &str) -> Select<Entity> {
    Entity::find().filter(Column::Slug.eq(normalize_slug(slug)))
}

fn sort_column(field: ProjectSortField) -> Column {
    match field {
        ProjectSortField::CreatedAt => Column::CreatedAt,
        ProjectSortField::UpdatedAt => Column::UpdatedAt,
        ProjectSortField::ProjectDate => Column::ProjectDate,
        ProjectSortField::Title => Column::Title,
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
