use async_trait::async_trait;

use crate::modules::profile::application::ports::incoming::use_cases::GetProfileUseCase;
use crate::modules::profile::application::ports::outgoing::profile_source::ProfileSource;
use crate::modules::profile::domain::entities::Profile;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProfileService<S>
where
    S: ProfileSource,
{
    source: S,
}

impl<S> GetProfileService<S>
where
    S: ProfileSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> GetProfileUseCase for GetProfileService<S>
where
    S: ProfileSource + Send + Sync,
{
    async fn execute(&self) -> Profile {
        self.source.profile().await
    }
}
