//! Body renderer shared by the Testimonials page and the form
//! acknowledgment response.

use crate::modules::testimonial::domain::entities::Testimonial;
use crate::shared::markup::escape_html;
use crate::shared::markup::widgets::{submit_button, success_banner, text_area, text_input};

pub const TESTIMONIAL_ACK_MESSAGE: &str =
    "Thank you for your testimonial! It will be reviewed and added to my portfolio.";

pub fn render_testimonials_body(testimonials: &[Testimonial], notice: Option<&str>) -> String {
    let mut body = String::new();
    for testimonial in testimonials {
        body.push_str(&testimonial_card(testimonial));
    }

    body.push_str("<h2>Add a New Testimonial</h2>\n");
    body.push_str(
        "<p>If you've worked with me and would like to leave a testimonial, \
         please fill out the form below:</p>\n",
    );
    if let Some(message) = notice {
        body.push_str(&success_banner(message));
        body.push('\n');
    }
    body.push_str(&testimonial_form());
    body
}

fn testimonial_card(testimonial: &Testimonial) -> String {
    // The quotes around the body are presentation, not content.
    format!(
        r#"<div class="testimonial">
<p><strong>{author}</strong></p>
<p>"{body}"</p>
</div>
"#,
        author = escape_html(&testimonial.author),
        body = escape_html(&testimonial.body),
    )
}

fn testimonial_form() -> String {
    format!(
        r#"<form method="post" action="/testimonials">
{name}
{text}
{submit}
</form>
"#,
        name = text_input("Your Name and Title/Position", "name", ""),
        text = text_area("Your Testimonial", "text", ""),
        submit = submit_button("Submit Testimonial"),
    )
}
