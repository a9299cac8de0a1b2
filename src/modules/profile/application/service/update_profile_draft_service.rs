use async_trait::async_trait;
use tracing::info;

use crate::modules::profile::application::ports::incoming::use_cases::{
    ProfileDraft, UpdateProfileDraftUseCase,
};
use crate::modules::profile::application::ports::outgoing::profile_source::ProfileSource;
use crate::modules::profile::domain::entities::Profile;

// ============================================================================
// Service Implementation
// ============================================================================

/// Merges a Settings submission over the seeded profile for the echo
/// response. Intentionally a sink: the merged profile lives for one
/// response only and nothing is persisted.
pub struct UpdateProfileDraftService<S>
where
    S: ProfileSource,
{
    source: S,
}

impl<S> UpdateProfileDraftService<S>
where
    S: ProfileSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> UpdateProfileDraftUseCase for UpdateProfileDraftService<S>
where
    S: ProfileSource + Send + Sync,
{
    async fn execute(&self, draft: ProfileDraft) -> Profile {
        let seed = self.source.profile().await;

        info!(
            full_name = %draft.full_name,
            "settings submission acknowledged; changes are not persisted"
        );

        Profile {
            full_name: draft.full_name,
            email: draft.email,
            location: draft.location,
            university: draft.university,
            field_of_study: draft.field_of_study,
            year_of_study: draft.year_of_study,
            github_url: draft.github_url,
            linkedin_url: draft.linkedin_url,
            ..seed
        }
    }
}
