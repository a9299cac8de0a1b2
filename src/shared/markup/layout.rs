use super::escape::escape_html;
use super::page::Page;

/// Stylesheet inlined into every page. The animation and card classes
/// are shared by the view renderers; keep class names stable when
/// touching this.
const STYLE: &str = r#"
    body {
        margin: 0;
        font-family: "Segoe UI", Arial, sans-serif;
        color: #222;
        display: flex;
        min-height: 100vh;
    }
    .sidebar {
        width: 220px;
        flex-shrink: 0;
        background-color: #f0f2f6;
        padding: 20px;
    }
    .sidebar h2 {
        font-size: 1.1em;
    }
    .sidebar ul {
        list-style: none;
        padding: 0;
    }
    .sidebar li {
        margin-bottom: 8px;
    }
    .sidebar a {
        color: #222;
        text-decoration: none;
    }
    .sidebar a.active {
        color: #19A7CE;
        font-weight: bold;
    }
    .sidebar .footer {
        font-size: 0.8em;
        color: #555;
    }
    .content {
        flex-grow: 1;
        padding: 30px 40px;
        max-width: 900px;
    }
    .fade-in {
        animation: fadeIn 1.5s;
    }
    @keyframes fadeIn {
        0% { opacity: 0; }
        100% { opacity: 1; }
    }
    .project-card {
        transition: transform 0.3s ease;
        padding: 10px;
        border-radius: 5px;
        border: 1px solid #ddd;
        margin-bottom: 10px;
    }
    .project-card:hover {
        transform: translateY(-5px);
        box-shadow: 0 4px 8px rgba(0,0,0,0.1);
    }
    .testimonial {
        padding: 15px;
        border-left: 4px solid #19A7CE;
        background-color: #f8f9fa;
        margin-bottom: 15px;
        border-radius: 0px 5px 5px 0px;
    }
    .timeline-item {
        display: flex;
        margin-bottom: 20px;
    }
    .timeline-dot {
        min-width: 20px;
        height: 20px;
        background-color: #4682b4;
        border-radius: 50%;
        margin-right: 15px;
        margin-top: 5px;
    }
    .timeline-content {
        border-left: 2px solid #4682b4;
        padding-left: 15px;
        padding-bottom: 10px;
    }
    .timeline-date {
        font-weight: bold;
        color: #4682b4;
    }
    .timeline-title {
        font-weight: bold;
        margin-top: 5px;
    }
    .banner {
        padding: 12px 15px;
        border-radius: 5px;
        margin-bottom: 15px;
    }
    .banner-success {
        background-color: #d1e7dd;
        color: #0f5132;
    }
    .banner-warning {
        background-color: #fff3cd;
        color: #664d03;
    }
    .columns {
        display: flex;
        gap: 40px;
    }
    .columns > div {
        flex: 1;
    }
    .columns > .column-narrow {
        flex: 0 0 220px;
    }
    .caption {
        color: #777;
        font-size: 0.85em;
    }
    .progress {
        background-color: #e6e6e6;
        border-radius: 5px;
        height: 12px;
        margin: 5px 0 15px 0;
    }
    .progress-fill {
        background-color: #19A7CE;
        border-radius: 5px;
        height: 100%;
    }
    form label {
        display: block;
        margin-top: 12px;
        font-weight: bold;
    }
    form input[type="text"],
    form textarea {
        width: 100%;
        max-width: 500px;
        padding: 8px;
        margin-top: 4px;
        border: 1px solid #ccc;
        border-radius: 4px;
        box-sizing: border-box;
    }
    form button {
        margin-top: 15px;
        padding: 8px 18px;
        background-color: #4682b4;
        color: #fff;
        border: none;
        border-radius: 4px;
        cursor: pointer;
    }
    .profile-photo {
        width: 200px;
        border-radius: 5px;
    }
    .profile-photo-placeholder {
        height: 200px;
        background-color: #e6e6e6;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 3em;
    }
"#;

fn nav_items(active: Page) -> String {
    let mut items = String::new();
    for page in Page::ALL {
        let class = if page == active { r#" class="active""# } else { "" };
        items.push_str(&format!(
            "<li><a href=\"{}\"{}>{}</a></li>\n",
            page.path(),
            class,
            page.nav_label()
        ));
    }
    items
}

/// Wraps a rendered view body in the full document shell: stylesheet,
/// sidebar navigation with the active view marked, and the page
/// heading for `active`.
pub fn render_layout(active: Page, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Student Portfolio</title>
<style>{style}</style>
</head>
<body>
<aside class="sidebar">
<h2>📌 Navigation</h2>
<ul>
{nav}</ul>
<hr>
<p class="footer">🔹 Made with ❤ by Cyuzuzo Samuel</p>
<p class="footer">© 2025 - All Rights Reserved</p>
</aside>
<main class="content">
<div class="fade-in">
<h1>{title}</h1>
{body}
</div>
</main>
</body>
</html>
"#,
        style = STYLE,
        nav = nav_items(active),
        title = escape_html(active.title()),
        body = body,
    )
}

fn plain_shell(heading: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Student Portfolio</title>
<style>{style}</style>
</head>
<body>
<main class="content">
<div class="fade-in">
<h1>{heading}</h1>
<p>{message}</p>
<p><a href="/">← Back to Home</a></p>
</div>
</main>
</body>
</html>
"#,
        style = STYLE,
        heading = heading,
        message = message,
    )
}

pub fn not_found_page() -> String {
    plain_shell("Page not found", "The page you requested does not exist.")
}

pub fn bad_request_page() -> String {
    plain_shell(
        "Invalid request",
        "The request could not be understood. Check the address and try again.",
    )
}

pub fn unsupported_media_page(allowed: &[&str]) -> String {
    plain_shell(
        "Unsupported file type",
        &format!(
            "That file type is not accepted for this upload. Accepted: {}.",
            allowed.join(", ")
        ),
    )
}

pub fn error_page() -> String {
    plain_shell(
        "Something went wrong",
        "An unexpected error occurred. Please try again later.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_marks_the_active_view() {
        let html = render_layout(Page::Projects, "<p>cards</p>");

        assert!(html.contains(r#"<a href="/projects" class="active">Projects</a>"#));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains("<p>cards</p>"));
    }

    #[test]
    fn layout_lists_all_seven_views_in_order() {
        let html = render_layout(Page::Home, "");

        let mut last = 0;
        for page in Page::ALL {
            let needle = format!(">{}</a>", page.nav_label());
            let pos = html.find(&needle).expect("nav entry missing");
            assert!(pos > last, "nav out of order at {:?}", page);
            last = pos;
        }
    }

    #[test]
    fn layout_uses_the_view_title_as_heading() {
        let html = render_layout(Page::Skills, "");
        assert!(html.contains("<h1>⚡ Skills and Achievements</h1>"));
    }

    #[test]
    fn not_found_page_links_back_home() {
        let html = not_found_page();
        assert!(html.contains("Page not found"));
        assert!(html.contains(r#"<a href="/">"#));
    }

    #[test]
    fn unsupported_media_page_names_the_accepted_types() {
        let html = unsupported_media_page(&["image/jpeg", "image/png"]);
        assert!(html.contains("Accepted: image/jpeg, image/png."));
    }
}
