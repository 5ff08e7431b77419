use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::timeline_model_mapper::model_to_entry;
use crate::modules::timeline::adapter::outgoing::sea_orm_entity::timeline::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::modules::timeline::application::ports::outgoing::timeline_repository::{
    CreateTimelineEntryData, PatchTimelineEntryData, TimelineRepository, TimelineRepositoryError,
};
use crate::shared::content::PatchField;

#[derive(Clone)]
pub struct TimelineRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TimelineRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TimelineRepository for TimelineRepositoryPostgres {
    async fn create(
        &self,
        data: CreateTimelineEntryData,
    ) -> Result<TimelineEntry, TimelineRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            year: Set(data.year),
            title: Set(data.title),
            entry_type: Set(data.entry_type.as_str().to_string()),
            description: Set(data.description),
            location: Set(data.location),
            technologies: Set(optional_list_json(data.technologies)?),
            achievements: Set(optional_list_json(data.achievements)?),
            status: Set(data.status),
            order_index: Set(data.order_index),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        to_domain(result)
    }

    async fn patch(
        &self,
        entry_id: Uuid,
        data: PatchTimelineEntryData,
    ) -> Result<TimelineEntry, TimelineRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(year) = data.year {
            model.year = Set(year);
        }
        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let PatchField::Value(entry_type) = data.entry_type {
            model.entry_type = Set(entry_type.as_str().to_string());
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(location) = data.location {
            model.location = Set(location);
        }
        if let Some(technologies) = data.technologies.into_column_update() {
            model.technologies = Set(optional_list_json(technologies)?);
        }
        if let Some(achievements) = data.achievements.into_column_update() {
            model.achievements = Set(optional_list_json(achievements)?);
        }
        if let Some(status) = data.status.into_column_update() {
            model.status = Set(status);
        }
        if let PatchField::Value(order_index) = data.order_index {
            model.order_index = Set(order_index);
        }

        if !model.is_changed() {
            let current = Entity::find_by_id(entry_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(TimelineRepositoryError::NotFound)?;

            return to_domain(current);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(entry_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(TimelineRepositoryError::NotFound)?;

        to_domain(updated)
    }

    async fn delete(&self, entry_id: Uuid) -> Result<bool, TimelineRepositoryError> {
        let res = Entity::delete_by_id(entry_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(res.rows_affected > 0)
    }
}

fn to_domain(model: timeline::Model) -> Result<TimelineEntry, TimelineRepositoryError> {
    model_to_entry(model).map_err(TimelineRepositoryError::SerializationError)
}

fn optional_list_json(
    items: Option<Vec<String>>,
) -> Result<Option<serde_json::Value>, TimelineRepositoryError> {
    items
        .map(|items| {
            serde_json::to_value(items)
                .map_err(|e| TimelineRepositoryError::SerializationError(e.to_string()))
        })
        .transpose()
}

fn map_db_err(e: DbErr) -> TimelineRepositoryError {
    TimelineRepositoryError::DatabaseError(e.to_string())
}
