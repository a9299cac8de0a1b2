mod get_skills;

pub use get_skills::{GetSkillsUseCase, SkillsOverview};
