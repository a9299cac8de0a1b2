use async_trait::async_trait;

use crate::modules::profile::domain::entities::Profile;

/// The editable subset of the profile collected by the Settings form.
/// Values arrive exactly as typed; nothing beyond presence is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub university: String,
    pub field_of_study: String,
    pub year_of_study: String,
    pub github_url: String,
    pub linkedin_url: String,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Acknowledges a Settings submission. Produces the transient profile
/// used to echo the submitted values back in the response; the draft
/// is discarded afterwards and the seed stays untouched.
#[async_trait]
pub trait UpdateProfileDraftUseCase: Send + Sync {
    async fn execute(&self, draft: ProfileDraft) -> Profile;
}
