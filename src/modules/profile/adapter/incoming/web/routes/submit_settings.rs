use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::profile::adapter::incoming::web::view::{
    render_settings_body, PROFILE_SAVED_MESSAGE,
};
use crate::modules::profile::application::ports::incoming::use_cases::ProfileDraft;
use crate::shared::markup::{render_layout, Page, PageResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Form DTO
// ──────────────────────────────────────────────────────────
//

/// Browsers submit every field of the Settings form, but each one is
/// optional on the wire; a missing field reads as cleared.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub year_of_study: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub linkedin_url: String,
}

impl From<SettingsForm> for ProfileDraft {
    fn from(form: SettingsForm) -> Self {
        ProfileDraft {
            full_name: form.full_name,
            email: form.email,
            location: form.location,
            university: form.university,
            field_of_study: form.field_of_study,
            year_of_study: form.year_of_study,
            github_url: form.github_url,
            linkedin_url: form.linkedin_url,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/settings")]
pub async fn submit_settings_handler(
    form: web::Form<SettingsForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = ProfileDraft::from(form.into_inner());
    let echoed = data.update_profile_draft_use_case.execute(draft).await;

    let body = render_settings_body(&echoed, Some(PROFILE_SAVED_MESSAGE));
    PageResponse::ok(render_layout(Page::Settings, &body))
}
