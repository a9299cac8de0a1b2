use async_trait::async_trait;

use crate::modules::timeline::domain::entities::TimelineEvent;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Returns the timeline milestones in authored order, oldest first.
#[async_trait]
pub trait GetTimelineUseCase: Send + Sync {
    async fn execute(&self) -> Vec<TimelineEvent>;
}
