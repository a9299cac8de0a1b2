mod get_profile;
mod update_profile_draft;

pub use get_profile::GetProfileUseCase;
pub use update_profile_draft::{ProfileDraft, UpdateProfileDraftUseCase};
