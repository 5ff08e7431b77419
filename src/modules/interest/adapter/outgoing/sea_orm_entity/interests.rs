use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "interests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub slug: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub excerpt: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub category: String,

    #[sea_orm(column_name = "type", column_type = "Text")]
    pub interest_type: String,

    // Icon name; read leniently
    #[sea_orm(column_type = "Text")]
    pub icon: String,

    #[sea_orm(column_type = "Text")]
    pub color: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,

    pub featured: bool,

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
