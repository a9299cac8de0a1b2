use async_trait::async_trait;

use crate::modules::skill::domain::entities::{Certification, Skill};

/// Everything the Skills view shows, gathered in one round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsOverview {
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Returns the published skills and certification lines, in authored
/// order. Fixed content, so there is no failure mode.
#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> SkillsOverview;
}
