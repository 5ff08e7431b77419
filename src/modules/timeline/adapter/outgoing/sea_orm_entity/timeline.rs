use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "timeline")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub year: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    // Lowercase tag of TimelineEntryType
    #[sea_orm(column_name = "type", column_type = "Text")]
    pub entry_type: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub location: String,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub technologies: Option<Json>,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub achievements: Option<Json>,

    #[sea_orm(column_type = "Text", nullable)]
    pub status: Option<String>,

    pub order_index: i32,

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
        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        Ok(self)
    }
}
