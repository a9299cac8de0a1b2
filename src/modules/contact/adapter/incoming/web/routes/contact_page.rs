use actix_web::{get, web, Responder};

use crate::modules::contact::adapter::incoming::web::view::render_contact_body;
use crate::shared::markup::{render_layout, Page, PageResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/contact")]
pub async fn contact_page_handler(data: web::Data<AppState>) -> impl Responder {
    let profile = data.get_profile_use_case.execute().await;

    let body = render_contact_body(&profile, None);
    PageResponse::ok(render_layout(Page::Contact, &body))
}
