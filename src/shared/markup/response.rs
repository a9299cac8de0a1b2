// src/shared/markup/response.rs
use actix_web::http::header::ContentType;
use actix_web::{http::StatusCode, HttpResponse};

use super::layout::{error_page, not_found_page};

/// Builds `text/html` responses. Handlers never assemble an
/// `HttpResponse` by hand; every page and error goes through here so
/// the content type and status pairing stays in one place.
pub struct PageResponse;

impl PageResponse {
    pub fn ok(markup: String) -> HttpResponse {
        HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(markup)
    }

    pub fn error(status: StatusCode, markup: String) -> HttpResponse {
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(markup)
    }

    pub fn bad_request(markup: String) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, markup)
    }

    pub fn not_found() -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, not_found_page())
    }

    pub fn unsupported_media_type(markup: String) -> HttpResponse {
        Self::error(StatusCode::UNSUPPORTED_MEDIA_TYPE, markup)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, error_page())
    }
}
