use crate::asset::application::ports::incoming::use_cases::{
    AcceptUploadUseCase, FetchAssetUseCase,
};
use crate::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpdateProfileDraftUseCase,
};
use crate::project::application::ports::incoming::use_cases::ListProjectsUseCase;
use crate::skill::application::ports::incoming::use_cases::GetSkillsUseCase;
use crate::testimonial::application::ports::incoming::use_cases::{
    ListTestimonialsUseCase, SubmitTestimonialUseCase,
};
use crate::tests::support::stubs::*;
use crate::timeline::application::ports::incoming::use_cases::GetTimelineUseCase;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    get_profile: Option<Arc<dyn GetProfileUseCase + Send + Sync>>,
    update_profile_draft: Option<Arc<dyn UpdateProfileDraftUseCase + Send + Sync>>,
    list_projects: Option<Arc<dyn ListProjectsUseCase + Send + Sync>>,
    get_skills: Option<Arc<dyn GetSkillsUseCase + Send + Sync>>,
    get_timeline: Option<Arc<dyn GetTimelineUseCase + Send + Sync>>,
    list_testimonials: Option<Arc<dyn ListTestimonialsUseCase + Send + Sync>>,
    submit_testimonial: Option<Arc<dyn SubmitTestimonialUseCase + Send + Sync>>,
    submit_contact: Option<Arc<dyn SubmitContactMessageUseCase + Send + Sync>>,
    fetch_asset: Option<Arc<dyn FetchAssetUseCase + Send + Sync>>,
    accept_upload: Option<Arc<dyn AcceptUploadUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_profile: Some(Arc::new(StubGetProfileUseCase)),
            update_profile_draft: Some(Arc::new(StubUpdateProfileDraftUseCase)),
            list_projects: Some(Arc::new(StubListProjectsUseCase)),
            get_skills: Some(Arc::new(StubGetSkillsUseCase)),
            get_timeline: Some(Arc::new(StubGetTimelineUseCase)),
            list_testimonials: Some(Arc::new(StubListTestimonialsUseCase)),
            submit_testimonial: Some(Arc::new(StubSubmitTestimonialUseCase)),
            submit_contact: Some(Arc::new(StubSubmitContactMessageUseCase)),
            fetch_asset: Some(Arc::new(StubFetchAssetUseCase)),
            accept_upload: Some(Arc::new(StubAcceptUploadUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_update_profile_draft(
        mut self,
        uc: impl UpdateProfileDraftUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_profile_draft = Some(Arc::new(uc));
        self
    }

    pub fn with_list_projects(
        mut self,
        uc: impl ListProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_projects = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_asset(mut self, uc: impl FetchAssetUseCase + Send + Sync + 'static) -> Self {
        self.fetch_asset = Some(Arc::new(uc));
        self
    }

    pub fn with_accept_upload(
        mut self,
        uc: impl AcceptUploadUseCase + Send + Sync + 'static,
    ) -> Self {
        self.accept_upload = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_profile_use_case: self.get_profile.unwrap(),
            update_profile_draft_use_case: self.update_profile_draft.unwrap(),
            list_projects_use_case: self.list_projects.unwrap(),
            get_skills_use_case: self.get_skills.unwrap(),
            get_timeline_use_case: self.get_timeline.unwrap(),
            list_testimonials_use_case: self.list_testimonials.unwrap(),
            submit_testimonial_use_case: self.submit_testimonial.unwrap(),
            submit_contact_use_case: self.submit_contact.unwrap(),
            fetch_asset_use_case: self.fetch_asset.unwrap(),
            accept_upload_use_case: self.accept_upload.unwrap(),
        })
    }
}
