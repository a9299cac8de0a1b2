use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::testimonial::adapter::incoming::web::view::{
    render_testimonials_body, TESTIMONIAL_ACK_MESSAGE,
};
use crate::modules::testimonial::application::ports::incoming::use_cases::NewTestimonial;
use crate::shared::markup::{render_layout, Page, PageResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Form DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct TestimonialForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/testimonials")]
pub async fn submit_testimonial_handler(
    form: web::Form<TestimonialForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();
    data.submit_testimonial_use_case
        .execute(NewTestimonial {
            author: form.name,
            body: form.text,
        })
        .await;

    // The published cards come back unchanged; only the banner differs
    // from the plain page.
    let testimonials = data.list_testimonials_use_case.execute().await;
    let body = render_testimonials_body(&testimonials, Some(TESTIMONIAL_ACK_MESSAGE));
    PageResponse::ok(render_layout(Page::Testimonials, &body))
}
