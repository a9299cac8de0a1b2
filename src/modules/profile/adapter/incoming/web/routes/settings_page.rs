use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::modules::profile::adapter::incoming::web::view::{
    render_settings_body, PHOTO_UPLOADED_MESSAGE, RESUME_UPLOADED_MESSAGE,
};
use crate::shared::markup::{render_layout, Page, PageResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

/// Set by the upload handlers when they redirect back here.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadNotice {
    Photo,
    Resume,
}

#[derive(Debug, Deserialize)]
pub struct SettingsPageQuery {
    #[serde(default)]
    pub uploaded: Option<UploadNotice>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/settings")]
pub async fn settings_page_handler(
    query: web::Query<SettingsPageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile = data.get_profile_use_case.execute().await;

    let notice = query.into_inner().uploaded.map(|notice| match notice {
        UploadNotice::Photo => PHOTO_UPLOADED_MESSAGE,
        UploadNotice::Resume => RESUME_UPLOADED_MESSAGE,
    });

    let body = render_settings_body(&profile, notice);
    PageResponse::ok(render_layout(Page::Settings, &body))
}
