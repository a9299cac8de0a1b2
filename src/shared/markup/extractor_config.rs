// src/shared/markup/extractor_config.rs
use actix_web::web::{FormConfig, QueryConfig};

use super::layout::bad_request_page;
use super::response::PageResponse;

/// Query extractor config that renders an HTML 400 page instead of the
/// plain-text default when deserialization fails (for example a
/// `filter` value outside the closed set).
pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            PageResponse::bad_request(bad_request_page()),
        )
        .into()
    })
}

/// Same treatment for urlencoded form bodies.
pub fn custom_form_config() -> FormConfig {
    FormConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            PageResponse::bad_request(bad_request_page()),
        )
        .into()
    })
}
