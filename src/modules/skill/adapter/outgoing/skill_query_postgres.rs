// src/modules/skill/adapter/outgoing/skill_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Select};
use std::sync::Arc;

use super::skill_model_mapper::model_to_skill;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{Column, Entity};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::skill_query::{
    SkillOrder, SkillQuery, SkillQueryError, SkillSortField,
};

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list(&self, order: SkillOrder) -> Result<Vec<Skill>, SkillQueryError> {
        let models = list_query(order)
            .all(&*self.db)
            .await
            .map_err(|e| SkillQueryError::DatabaseError(e.to_string()))?;

        models
            .into_iter()
            .map(|m| model_to_skill(m).map_err(SkillQueryError::SerializationError))
            .collect()
    }
}

fn list_query(order: SkillOrder) -> Select<Entity> {
    let column = match order.field {
        SkillSortField::OrderIndex => Column::OrderIndex,
        SkillSortField::Name => Column::Name,
        SkillSortField::CreatedAt => Column::CreatedAt,
    };

    Entity::find()
        .order_by(column, order.direction.into())
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
}
