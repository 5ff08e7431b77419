pub mod entities;

pub use entities::{Skill, SkillLevel};
