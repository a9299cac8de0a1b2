use actix_web::{get, web, Responder};

use crate::modules::timeline::domain::entities::TimelineEvent;
use crate::shared::markup::{escape_html, render_layout, Page, PageResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/timeline")]
pub async fn timeline_page_handler(data: web::Data<AppState>) -> impl Responder {
    let events = data.get_timeline_use_case.execute().await;

    let body = render_body(&events);
    PageResponse::ok(render_layout(Page::Timeline, &body))
}

//
// ──────────────────────────────────────────────────────────
// Rendering
// ──────────────────────────────────────────────────────────
//

fn render_body(events: &[TimelineEvent]) -> String {
    let mut body = String::new();
    for event in events {
        body.push_str(&timeline_item(event));
    }
    body
}

fn timeline_item(event: &TimelineEvent) -> String {
    format!(
        r#"<div class="timeline-item">
<div class="timeline-dot"></div>
<div class="timeline-content">
<div class="timeline-date">{date}</div>
<div class="timeline-title">{title}</div>
<div>{description}</div>
</div>
</div>
"#,
        date = escape_html(&event.date),
        title = escape_html(&event.title),
        description = escape_html(&event.description),
    )
}
