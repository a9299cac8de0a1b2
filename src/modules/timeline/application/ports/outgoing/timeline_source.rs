use async_trait::async_trait;

use crate::modules::timeline::domain::entities::TimelineEvent;

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

/// Source of the pre-ordered timeline milestones. Fixed content, no
/// error path.
#[async_trait]
pub trait TimelineSource: Send + Sync {
    async fn events(&self) -> Vec<TimelineEvent>;
}
