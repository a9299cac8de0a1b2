use actix_web::{get, web, Responder};

use crate::modules::testimonial::adapter::incoming::web::view::render_testimonials_body;
use crate::shared::markup::{render_layout, Page, PageResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/testimonials")]
pub async fn testimonials_page_handler(data: web::Data<AppState>) -> impl Responder {
    let testimonials = data.list_testimonials_use_case.execute().await;

    let body = render_testimonials_body(&testimonials, None);
    PageResponse::ok(render_layout(Page::Testimonials, &body))
}
