use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub slug: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    // Label of ProjectCategory
    #[sea_orm(column_type = "Text")]
    pub category: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub long_description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,

    // Label of ProjectStatus
    #[sea_orm(column_type = "Text")]
    pub status: String,

    pub project_date: Date,

    #[sea_orm(column_type = "Text", nullable)]
    pub duration: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub team: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub role: Option<String>,

    // JSONB arrays of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub challenges: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub solutions: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub screenshots: Json,

    // JSONB object {frontend, backend, database, deployment}
    #[sea_orm(column_type = "JsonBinary")]
    pub tech_stack: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub live_url: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        Ok(self)
    }
}
