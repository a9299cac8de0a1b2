use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::asset::application::ports::incoming::use_cases::FetchAssetError;
use crate::modules::asset::domain::entities::AssetKind;
use crate::shared::markup::PageResponse;
use crate::AppState;

/// File name offered to the browser for the resume download.
const RESUME_DOWNLOAD_NAME: &str = "Samuel_Cyuzuzo_Resume.pdf";

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[get("/assets/resume")]
pub async fn download_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.fetch_asset_use_case.execute(AssetKind::Resume).await {
        Ok(asset) => HttpResponse::Ok()
            .content_type(AssetKind::Resume.content_type())
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", RESUME_DOWNLOAD_NAME),
            ))
            .body(asset.bytes),

        Err(FetchAssetError::NotFound) => PageResponse::not_found(),

        Err(FetchAssetError::ReadFailed(msg)) => {
            error!("Failed to read resume: {}", msg);
            PageResponse::internal_error()
        }
    }
}

#[get("/assets/photo")]
pub async fn profile_photo_handler(data: web::Data<AppState>) -> impl Responder {
    match data
        .fetch_asset_use_case
        .execute(AssetKind::ProfileImage)
        .await
    {
        Ok(asset) => HttpResponse::Ok()
            .content_type(AssetKind::ProfileImage.content_type())
            .body(asset.bytes),

        Err(FetchAssetError::NotFound) => PageResponse::not_found(),

        Err(FetchAssetError::ReadFailed(msg)) => {
            error!("Failed to read profile image: {}", msg);
            PageResponse::internal_error()
        }
    }
}
