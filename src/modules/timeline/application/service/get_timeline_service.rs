use async_trait::async_trait;

use crate::modules::timeline::application::ports::incoming::use_cases::GetTimelineUseCase;
use crate::modules::timeline::application::ports::outgoing::timeline_source::TimelineSource;
use crate::modules::timeline::domain::entities::TimelineEvent;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetTimelineService<S>
where
    S: TimelineSource,
{
    source: S,
}

impl<S> GetTimelineService<S>
where
    S: TimelineSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> GetTimelineUseCase for GetTimelineService<S>
where
    S: TimelineSource + Send + Sync,
{
    async fn execute(&self) -> Vec<TimelineEvent> {
        self.source.events().await
    }
}
