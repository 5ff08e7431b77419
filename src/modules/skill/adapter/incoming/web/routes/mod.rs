mod create_skill;
mod delete_skill;
mod get_skills;
mod patch_skill;

pub use create_skill::*;
pub use delete_skill::*;
pub use get_skills::*;
pub use patch_skill::*;
