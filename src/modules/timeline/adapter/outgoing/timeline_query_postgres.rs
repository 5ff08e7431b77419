// src/modules/timeline/adapter/outgoing/timeline_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Select};
use std::sync::Arc;

use super::timeline_model_mapper::model_to_entry;
use crate::modules::timeline::adapter::outgoing::sea_orm_entity::timeline::{Column, Entity};
use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::modules::timeline::application::ports::outgoing::timeline_query::{
    TimelineOrder, TimelineQuery, TimelineQueryError, TimelineSortField,
};

#[derive(Clone)]
pub struct TimelineQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TimelineQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TimelineQuery for TimelineQueryPostgres {
    async fn list(&self, order: TimelineOrder) -> Result<Vec<TimelineEntry>, TimelineQueryError> {
        let models = list_query(order)
            .all(&*self.db)
            .await
            .map_err(|e| TimelineQueryError::DatabaseError(e.to_string()))?;

        models
            .into_iter()
            .map(|m| model_to_entry(m).map_err(TimelineQueryError::SerializationError))
            .collect()
    }
}

fn list_query(order: TimelineOrder) -> Select<Entity> {
    let column = match order.field {
        TimelineSortField::OrderIndex => Column::OrderIndex,
        TimelineSortField::Year => Column::Year,
        TimelineSortField::CreatedAt => Column::CreatedAt,
    };

    Entity::find()
        .order_by(column, order.direction.into())
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
}
