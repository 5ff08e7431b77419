use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::interest_model_mapper::model_to_interest;
use crate::modules::interest::adapter::outgoing::sea_orm_entity::interests::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::interest::application::ports::outgoing::interest_repository::{
    CreateInterestData, InterestRepository, InterestRepositoryError, PatchInterestData,
};
use crate::shared::content::PatchField;

#[derive(Clone)]
pub struct InterestRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InterestRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InterestRepository for InterestRepositoryPostgres {
    async fn create(&self, data: CreateInterestData) -> Result<Interest, InterestRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(data.slug),
            title: Set(data.title),
            excerpt: Set(data.excerpt),
            content: Set(data.content),
            category: Set(data.category.as_str().to_string()),
            interest_type: Set(data.interest_type.as_str().to_string()),
            icon: Set(data.icon.as_str().to_string()),
            color: Set(data.color),
            tags: Set(tags_json(&data.tags)?),
            featured: Set(data.featured),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_slug_error)?;

        to_domain(result)
    }

    async fn patch(
        &self,
        interest_id: Uuid,
        data: PatchInterestData,
    ) -> Result<Interest, InterestRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title.trim().to_string());
        }
        if let PatchField::Value(excerpt) = data.excerpt {
            model.excerpt = Set(excerpt);
        }
        if let Some(content) = data.content.into_column_update() {
            model.content = Set(content);
        }
        if let PatchField::Value(category) = data.category {
            model.category = Set(category.as_str().to_string());
        }
        if let PatchField::Value(interest_type) = data.interest_type {
            model.interest_type = Set(interest_type.as_str().to_string());
        }
        if let PatchField::Value(icon) = data.icon {
            model.icon = Set(icon.as_str().to_string());
        }
        if let PatchField::Value(color) = data.color {
            model.color = Set(color);
        }
        if let PatchField::Value(tags) = data.tags {
            model.tags = Set(tags_json(&tags)?);
        }
        if let PatchField::Value(featured) = data.featured {
            model.featured = Set(featured);
        }

        if !model.is_changed() {
            let current = Entity::find_by_id(interest_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(InterestRepositoryError::NotFound)?;

            return to_domain(current);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(interest_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(InterestRepositoryError::NotFound)?;

        to_domain(updated)
    }

    async fn delete(&self, interest_id: Uuid) -> Result<bool, InterestRepositoryError> {
        let res = Entity::delete_by_id(interest_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(res.rows_affected > 0)
    }
}

fn to_domain(model: interests::Model) -> Result<Interest, InterestRepositoryError> {
    model_to_interest(model).map_err(InterestRepositoryError::SerializationError)
}

fn tags_json(tags: &[String]) -> Result<serde_json::Value, InterestRepositoryError> {
    serde_json::to_value(tags).map_err(|e| InterestRepositoryError::SerializationError(e.to_string()))
}

fn map_slug_error(e: DbErr) -> InterestRepositoryError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        InterestRepositoryError::SlugAlreadyExists
    } else {
        InterestRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> InterestRepositoryError {
    InterestRepositoryError::DatabaseError(e.to_string())
}
