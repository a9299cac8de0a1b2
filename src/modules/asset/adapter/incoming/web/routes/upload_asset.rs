use actix_multipart::Multipart;
use actix_web::{http::header, post, web, HttpResponse};
use futures_util::TryStreamExt;
use tracing::warn;

use crate::modules::asset::application::ports::incoming::use_cases::AcceptUploadError;
use crate::modules::asset::domain::entities::{AssetKind, UploadedFile};
use crate::shared::markup::layout::unsupported_media_page;
use crate::shared::markup::PageResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[post("/settings/photo")]
pub async fn upload_photo_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    handle_upload(payload, data, "photo", AssetKind::ProfileImage).await
}

#[post("/settings/resume")]
pub async fn upload_resume_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> actix_web::Result<HttpResponse> {
    handle_upload(payload, data, "resume", AssetKind::Resume).await
}

//
// ──────────────────────────────────────────────────────────
// Shared plumbing
// ──────────────────────────────────────────────────────────
//

async fn handle_upload(
    payload: Multipart,
    data: web::Data<AppState>,
    field_name: &str,
    kind: AssetKind,
) -> actix_web::Result<HttpResponse> {
    let Some(upload) = collect_upload(payload, field_name).await? else {
        // Submit without a chosen file: nothing to acknowledge.
        return Ok(redirect_to_settings(None));
    };

    match data.accept_upload_use_case.execute(kind, upload).await {
        Ok(()) => {
            let notice = match kind {
                AssetKind::ProfileImage => "photo",
                AssetKind::Resume => "resume",
            };
            Ok(redirect_to_settings(Some(notice)))
        }

        Err(AcceptUploadError::UnsupportedMediaType {
            content_type,
            allowed,
        }) => {
            warn!(
                "Rejected {} upload with content type {}",
                field_name, content_type
            );
            Ok(PageResponse::unsupported_media_type(
                unsupported_media_page(allowed),
            ))
        }
    }
}

/// Walks the multipart stream looking for `field_name`, draining every
/// part so the connection stays usable. Returns `None` when the field
/// is absent or carries no file.
async fn collect_upload(
    mut payload: Multipart,
    field_name: &str,
) -> actix_web::Result<Option<UploadedFile>> {
    let mut upload = None;

    while let Some(mut field) = payload.try_next().await? {
        let is_target = field.name() == Some(field_name);

        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();

        let mut size = 0usize;
        while let Some(chunk) = field.try_next().await? {
            size += chunk.len();
        }

        if is_target && !(file_name.is_empty() && size == 0) {
            upload = Some(UploadedFile {
                file_name,
                content_type,
                size,
            });
        }
    }

    Ok(upload)
}

fn redirect_to_settings(notice: Option<&str>) -> HttpResponse {
    let location = match notice {
        Some(tag) => format!("/settings?uploaded={}", tag),
        None => "/settings".to_string(),
    };

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
