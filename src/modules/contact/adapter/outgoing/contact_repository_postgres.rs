use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::contact_model_mapper::model_to_contact;
use crate::modules::contact::adapter::outgoing::sea_orm_entity::contact_info::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::contact::application::domain::entities::ContactInfo;
use crate::modules::contact::application::ports::outgoing::contact_repository::{
    ContactRepository, ContactRepositoryError, CreateContactData, PatchContactData,
};
use crate::shared::content::PatchField;

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn find_by_id(&self, contact_id: Uuid) -> Result<ContactInfo, ContactRepositoryError> {
        let model = Entity::find_by_id(contact_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContactRepositoryError::NotFound)?;

        to_domain(model)
    }

    async fn create(&self, data: CreateContactData) -> Result<ContactInfo, ContactRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            contact_type: Set(data.contact_type.as_str().to_string()),
            label: Set(data.label),
            value: Set(data.value),
            url: Set(data.url),
            icon: Set(data.icon.map(|icon| icon.as_str().to_string())),
            description: Set(data.description),
            display_order: Set(data.display_order),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        to_domain(result)
    }

    async fn patch(
        &self,
        contact_id: Uuid,
        data: PatchContactData,
    ) -> Result<ContactInfo, ContactRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(contact_type) = data.contact_type {
            model.contact_type = Set(contact_type.as_str().to_string());
        }
        if let PatchField::Value(label) = data.label {
            model.label = Set(label.trim().to_string());
        }
        if let PatchField::Value(value) = data.value {
            model.value = Set(value);
        }
        if let Some(url) = data.url.into_column_update() {
            model.url = Set(url);
        }
        if let Some(icon) = data.icon.into_column_update() {
            model.icon = Set(icon.map(|icon| icon.as_str().to_string()));
        }
        if let Some(description) = data.description.into_column_update() {
            model.description = Set(description);
        }
        if let PatchField::Value(display_order) = data.display_order {
            model.display_order = Set(display_order);
        }
        if let PatchField::Value(is_active) = data.is_active {
            model.is_active = Set(is_active);
        }

        if !model.is_changed() {
            return self.find_by_id(contact_id).await;
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(contact_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ContactRepositoryError::NotFound)?;

        to_domain(updated)
    }

    async fn delete(&self, contact_id: Uuid) -> Result<bool, ContactRepositoryError> {
        let res = Entity::delete_by_id(contact_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(res.rows_affected > 0)
    }
}

fn to_domain(model: contact_info::Model) -> Result<ContactInfo, ContactRepositoryError> {
    model_to_contact(model).map_err(ContactRepositoryError::SerializationError)
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
