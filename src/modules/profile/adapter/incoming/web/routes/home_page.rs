use actix_web::{get, web, Responder};
use tracing::warn;

use crate::modules::asset::application::ports::incoming::use_cases::FetchAssetError;
use crate::modules::asset::domain::entities::AssetKind;
use crate::modules::profile::adapter::incoming::web::view::render_home_body;
use crate::shared::markup::{render_layout, Page, PageResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/")]
pub async fn home_page_handler(data: web::Data<AppState>) -> impl Responder {
    let profile = data.get_profile_use_case.execute().await;

    // The photo and resume blocks need to know whether their file is
    // present. A failed read degrades to the missing-file rendering;
    // the page itself never fails.
    let photo_available = asset_available(&data, AssetKind::ProfileImage).await;
    let resume_available = asset_available(&data, AssetKind::Resume).await;

    let body = render_home_body(&profile, photo_available, resume_available);
    PageResponse::ok(render_layout(Page::Home, &body))
}

async fn asset_available(data: &web::Data<AppState>, kind: AssetKind) -> bool {
    match data.fetch_asset_use_case.execute(kind).await {
        Ok(_) => true,
        Err(FetchAssetError::NotFound) => false,
        Err(FetchAssetError::ReadFailed(msg)) => {
            warn!("Asset probe failed, treating {:?} as missing: {}", kind, msg);
            false
        }
    }
}
