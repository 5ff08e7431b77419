// src/modules/contact/adapter/outgoing/contact_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};
use std::sync::Arc;

use super::contact_model_mapper::model_to_contact;
use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_info::{Column, Entity};
use crate::modules::contact::application::domain::entities::ContactInfo;
use crate::modules::contact::application::ports::outgoing::contact_query::{
    ContactListFilter, ContactOrder, ContactQuery, ContactQueryError, ContactSortField,
};

#[derive(Clone)]
pub struct ContactQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactQuery for ContactQueryPostgres {
    async fn list(
        &self,
        filter: ContactListFilter,
        order: ContactOrder,
    ) -> Result<Vec<ContactInfo>, ContactQueryError> {
        let models = list_query(filter, order)
            .all(&*self.db)
            .await
            .map_err(|e| ContactQueryError::DatabaseError(e.to_string()))?;

        models
            .into_iter()
            .map(|m| model_to_contact(m).map_err(ContactQueryError::SerializationError))
            .collect()
    }
}

fn list_query(filter: ContactListFilter, order: ContactOrder) -> Select<Entity> {
    let mut query = Entity::find().filter(Column::IsActive.eq(true));

    if let Some(contact_type) = filter.contact_type {
        query = query.filter(Column::ContactType.eq(contact_type.as_str()));
    }

    let column = match order.field {
        ContactSortField::DisplayOrder => Column::DisplayOrder,
        ContactSortField::Label => Column::Label,
        ContactSortField::CreatedAt => Column::CreatedAt,
    };

    query
        .order_by(column, order.direction.into())
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
}
