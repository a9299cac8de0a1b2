use actix_web::{get, web, Responder};

use crate::modules::skill::application::ports::incoming::use_cases::SkillsOverview;
use crate::modules::skill::domain::entities::Skill;
use crate::shared::markup::{escape_html, render_layout, Page, PageResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/skills")]
pub async fn skills_page_handler(data: web::Data<AppState>) -> impl Responder {
    let overview = data.get_skills_use_case.execute().await;

    let body = render_body(&overview);
    PageResponse::ok(render_layout(Page::Skills, &body))
}

//
// ──────────────────────────────────────────────────────────
// Rendering
// ──────────────────────────────────────────────────────────
//

fn render_body(overview: &SkillsOverview) -> String {
    // The published layout shows the bars in two columns, first half
    // left, second half right.
    let half = (overview.skills.len() + 1) / 2;
    let (left, right) = overview.skills.split_at(half);

    let mut body = String::new();
    body.push_str("<h2>Programming Skills</h2>\n");
    body.push_str("<div class=\"columns\">\n<div>\n");
    for skill in left {
        body.push_str(&skill_bar(skill));
    }
    body.push_str("</div>\n<div>\n");
    for skill in right {
        body.push_str(&skill_bar(skill));
    }
    body.push_str("</div>\n</div>\n");

    body.push_str("<h2>Certifications &amp; Achievements</h2>\n");
    for certification in &overview.certifications {
        body.push_str(&format!(
            "<p>{}</p>\n",
            escape_html(&certification.description)
        ));
    }
    body
}

fn skill_bar(skill: &Skill) -> String {
    format!(
        r#"<p>{name}</p>
<div class="progress"><div class="progress-fill" style="width: {percent}%"></div></div>
"#,
        name = escape_html(&skill.name),
        percent = skill.rating_percent(),
    )
}
