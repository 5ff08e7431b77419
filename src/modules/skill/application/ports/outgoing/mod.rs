pub mod skill_query;
pub mod skill_repository;

pub use skill_query::{default_skill_order, SkillOrder, SkillQuery, SkillQueryError, SkillSortField};
pub use skill_repository::{CreateSkillData, PatchSkillData, SkillRepository, SkillRepositoryError};
