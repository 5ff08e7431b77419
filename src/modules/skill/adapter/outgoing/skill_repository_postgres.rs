use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::skill_model_mapper::model_to_skill;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    CreateSkillData, PatchSkillData, SkillRepository, SkillRepositoryError,
};
use crate::shared::content::PatchField;

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create(&self, data: CreateSkillData) -> Result<Skill, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            level: Set(data.level.as_str().to_string()),
            technologies: Set(technologies_json(&data.technologies)?),
            color: Set(data.color),
            order_index: Set(data.order_index),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        to_domain(result)
    }

    async fn patch(
        &self,
        skill_id: Uuid,
        data: PatchSkillData,
    ) -> Result<Skill, SkillRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name.trim().to_string());
        }
        if let PatchField::Value(level) = data.level {
            model.level = Set(level.as_str().to_string());
        }
        if let PatchField::Value(technologies) = data.technologies {
            model.technologies = Set(technologies_json(&technologies)?);
        }
        if let PatchField::Value(color) = data.color {
            model.color = Set(color);
        }
        if let PatchField::Value(order_index) = data.order_index {
            model.order_index = Set(order_index);
        }

        if !model.is_changed() {
            let current = Entity::find_by_id(skill_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(SkillRepositoryError::NotFound)?;

            return to_domain(current);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(skill_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(SkillRepositoryError::NotFound)?;

        to_domain(updated)
    }

    async fn delete(&self, skill_id: Uuid) -> Result<bool, SkillRepositoryError> {
        let res = Entity::delete_by_id(skill_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(res.rows_affected > 0)
    }
}

fn to_domain(model: skills::Model) -> Result<Skill, SkillRepositoryError> {
    model_to_skill(model).map_err(SkillRepositoryError::SerializationError)
}

fn technologies_json(items: &[String]) -> Result<serde_json::Value, SkillRepositoryError> {
    serde_json::to_value(items).map_err(|e| SkillRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::modules::skill::application::domain::entities::SkillLevel;
    use crate::tests::support::skill_test_fixtures::{create_skill_data, skill_model};

    #[tokio::test]
    async fn test_create_skill() {
        let model = skill_model("Rust", 1);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let skill = repo.create(create_skill_data("Rust")).await.unwrap();

        assert_eq!(skill.id, model.id);
        assert_eq!(skill.level, SkillLevel::Proficient);
    }

    #[tokio::test]
    async fn test_patch_keeps_identity_and_created_at() {
        let original = skill_model("Rust", 1);
        let mut updated = original.clone();
        updated.level = "Expert".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let skill = repo
            .patch(
                original.id,
                PatchSkillData {
                    level: PatchField::Value(SkillLevel::Expert),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(skill.id, original.id);
        assert_eq!(skill.created_at, original.created_at);
        assert_eq!(skill.level, SkillLevel::Expert);
    }

    #[tokio::test]
    async fn test_empty_patch_reads_current_row() {
        let model = skill_model("Rust", 1);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let skill = repo.patch(model.id, PatchSkillData::default()).await.unwrap();

        assert_eq!(skill.name, "Rust");
    }

    #[tokio::test]
    async fn test_empty_patch_unknown_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<skills::Model>::new()])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.patch(Uuid::new_v4(), PatchSkillData::default()).await,
            Err(SkillRepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_false() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));

        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
    }
}
