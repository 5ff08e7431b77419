// src/modules/interest/adapter/outgoing/interest_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};
use std::sync::Arc;

use super::interest_model_mapper::model_to_interest;
use crate::modules::interest::adapter::outgoing::sea_orm_entity::interests::{Column, Entity};
use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::interest::application::ports::outgoing::interest_query::{
    InterestListFilter, InterestOrder, InterestQuery, InterestQueryError, InterestSortField,
};
use crate::shared::content::normalize_slug;

#[derive(Clone)]
pub struct InterestQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InterestQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InterestQuery for InterestQueryPostgres {
    async fn list(
        &self,
        filter: InterestListFilter,
        order: InterestOrder,
    ) -> Result<Vec<Interest>, InterestQueryError> {
        let models = list_query(filter, order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(|m| model_to_interest(m).map_err(InterestQueryError::SerializationError))
            .collect()
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Interest, InterestQueryError> {
        let model = Entity::find()
            .filter(Column::Slug.eq(normalize_slug(slug)))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(InterestQueryError::NotFound)?;

        model_to_interest(model).map_err(InterestQueryError::SerializationError)
    }
}

fn list_query(filter: InterestListFilter, order: InterestOrder) -> Select<Entity> {
    let mut query = Entity::find();

    if let Some(category) = filter.category {
        query = query.filter(Column::Category.eq(category.as_str()));
    }
    if let Some(featured) = filter.featured {
        query = query.filter(Column::Featured.eq(featured));
    }
    if let Some(interest_type) = filter.interest_type {
        query = query.filter(Column::InterestType.eq(interest_type.as_str()));
    }

    let column = match order.field {
        InterestSortField::CreatedAt => Column::CreatedAt,
        InterestSortField::UpdatedAt => Column::UpdatedAt,
        InterestSortField::Title => Column::Title,
    };

    query
        .order_by(column, order.direction.into())
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
}

fn map_db_err(e: DbErr) -> InterestQueryError {
    InterestQueryError::DatabaseError(e.to_string())
}
