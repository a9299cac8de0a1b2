use async_trait::async_trait;

use crate::modules::skill::domain::entities::{Certification, Skill};

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

/// Source of the published skill ratings and certification lines.
/// Content is fixed for the process lifetime, so there is no error path.
#[async_trait]
pub trait SkillInventory: Send + Sync {
    async fn skills(&self) -> Vec<Skill>;
    async fn certifications(&self) -> Vec<Certification>;
}
