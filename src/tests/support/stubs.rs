//! Stub use cases backing `TestAppStateBuilder::default()`. Content
//! stubs answer with the seed data, so a default-built state renders
//! every page; the form sinks acknowledge and drop.

use async_trait::async_trait;

use crate::asset::application::ports::incoming::use_cases::{
    AcceptUploadError, AcceptUploadUseCase, FetchAssetError, FetchAssetUseCase,
};
use crate::asset::domain::entities::{AssetKind, StoredAsset, UploadedFile};
use crate::contact::application::ports::incoming::use_cases::{
    ContactMessage, SubmitContactMessageUseCase,
};
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, ProfileDraft, UpdateProfileDraftUseCase,
};
use crate::profile::domain::entities::Profile;
use crate::project::adapter::outgoing::SeedProjectCatalog;
use crate::project::application::ports::incoming::use_cases::ListProjectsUseCase;
use crate::project::domain::entities::Project;
use crate::project::domain::filter::ProjectFilter;
use crate::skill::adapter::outgoing::SeedSkillInventory;
use crate::skill::application::ports::incoming::use_cases::{GetSkillsUseCase, SkillsOverview};
use crate::testimonial::adapter::outgoing::SeedTestimonials;
use crate::testimonial::application::ports::incoming::use_cases::{
    ListTestimonialsUseCase, NewTestimonial, SubmitTestimonialUseCase,
};
use crate::testimonial::domain::entities::Testimonial;
use crate::tests::support::fixtures::seed_profile_fixture;
use crate::timeline::adapter::outgoing::SeedTimeline;
use crate::timeline::application::ports::incoming::use_cases::GetTimelineUseCase;
use crate::timeline::domain::entities::TimelineEvent;

#[derive(Default, Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self) -> Profile {
        seed_profile_fixture()
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileDraftUseCase;

#[async_trait]
impl UpdateProfileDraftUseCase for StubUpdateProfileDraftUseCase {
    async fn execute(&self, _draft: ProfileDraft) -> Profile {
        // Ignores the draft; tests that assert on the echo install a
        // recording mock instead.
        seed_profile_fixture()
    }
}

#[derive(Default, Clone)]
pub struct StubListProjectsUseCase;

#[async_trait]
impl ListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(&self, _filter: ProjectFilter) -> Vec<Project> {
        SeedProjectCatalog::projects()
    }
}

#[derive(Default, Clone)]
pub struct StubGetSkillsUseCase;

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> SkillsOverview {
        SkillsOverview {
            skills: SeedSkillInventory::skills(),
            certifications: SeedSkillInventory::certifications(),
        }
    }
}

#[derive(Default, Clone)]
pub struct StubGetTimelineUseCase;

#[async_trait]
impl GetTimelineUseCase for StubGetTimelineUseCase {
    async fn execute(&self) -> Vec<TimelineEvent> {
        SeedTimeline::events()
    }
}

#[derive(Default, Clone)]
pub struct StubListTestimonialsUseCase;

#[async_trait]
impl ListTestimonialsUseCase for StubListTestimonialsUseCase {
    async fn execute(&self) -> Vec<Testimonial> {
        SeedTestimonials::testimonials()
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitTestimonialUseCase;

#[async_trait]
impl SubmitTestimonialUseCase for StubSubmitTestimonialUseCase {
    async fn execute(&self, _testimonial: NewTestimonial) {}
}

#[derive(Default, Clone)]
pub struct StubSubmitContactMessageUseCase;

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContactMessageUseCase {
    async fn execute(&self, _message: ContactMessage) {}
}

#[derive(Default, Clone)]
pub struct StubFetchAssetUseCase;

#[async_trait]
impl FetchAssetUseCase for StubFetchAssetUseCase {
    async fn execute(&self, _kind: AssetKind) -> Result<StoredAsset, FetchAssetError> {
        // No asset on disk is the default state of a fresh install.
        Err(FetchAssetError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubAcceptUploadUseCase;

#[async_trait]
impl AcceptUploadUseCase for StubAcceptUploadUseCase {
    async fn execute(
        &self,
        _kind: AssetKind,
        _upload: UploadedFile,
    ) -> Result<(), AcceptUploadError> {
        Ok(())
    }
}
