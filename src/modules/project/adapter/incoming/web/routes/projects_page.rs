use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::modules::project::domain::entities::Project;
use crate::modules::project::domain::filter::ProjectFilter;
use crate::shared::markup::{escape_html, render_layout, Page, PageResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    #[serde(default)]
    pub filter: ProjectFilter,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/projects")]
pub async fn projects_page_handler(
    query: web::Query<ProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = query.into_inner().filter;
    let projects = data.list_projects_use_case.execute(filter).await;

    let body = render_body(filter, &projects);
    PageResponse::ok(render_layout(Page::Projects, &body))
}

//
// ──────────────────────────────────────────────────────────
// Rendering
// ──────────────────────────────────────────────────────────
//

fn render_body(active: ProjectFilter, projects: &[Project]) -> String {
    let mut body = String::new();
    body.push_str("<h2>🗂️ Filter Projects</h2>\n");
    body.push_str(&filter_form(active));
    for project in projects {
        body.push_str(&project_card(project));
    }
    body
}

fn filter_form(active: ProjectFilter) -> String {
    let mut options = String::new();
    for option in ProjectFilter::ALL_OPTIONS {
        let selected = if option == active { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            option.query_value(),
            selected,
            option.display_label()
        ));
    }

    format!(
        r#"<form method="get" action="/projects">
<label for="filter">Select project category:</label>
<select id="filter" name="filter">
{options}</select>
<button type="submit">Apply Filter</button>
</form>
"#,
        options = options
    )
}

fn project_card(project: &Project) -> String {
    let mut card = format!(
        r#"<div class="project-card">
<h3>📌 {title}</h3>
<p><strong>Type:</strong> {category}</p>
<p><strong>Description:</strong> {description}</p>
"#,
        title = escape_html(&project.title),
        category = escape_html(&project.category_label()),
        description = escape_html(&project.description),
    );

    if let Some(link) = &project.link {
        card.push_str(&format!(
            "<p><a href=\"{}\">View Code/Documentation</a></p>\n",
            escape_html(link)
        ));
    }

    card.push_str("</div>\n");
    card
}
