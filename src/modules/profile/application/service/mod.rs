mod get_profile_service;
mod update_profile_draft_service;

pub use get_profile_service::GetProfileService;
pub use update_profile_draft_service::UpdateProfileDraftService;
