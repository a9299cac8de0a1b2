use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::modules::contact::adapter::incoming::web::view::{
    render_contact_body, CONTACT_ACK_MESSAGE,
};
use crate::modules::contact::application::ports::incoming::use_cases::ContactMessage;
use crate::shared::markup::{render_layout, Page, PageResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Form DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<ContactForm> for ContactMessage {
    fn from(form: ContactForm) -> Self {
        ContactMessage {
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/contact")]
pub async fn submit_contact_handler(
    form: web::Form<ContactForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    data.submit_contact_use_case
        .execute(ContactMessage::from(form.into_inner()))
        .await;

    let profile = data.get_profile_use_case.execute().await;
    let body = render_contact_body(&profile, Some(CONTACT_ACK_MESSAGE));
    PageResponse::ok(render_layout(Page::Contact, &body))
}
