//! Body renderer shared by the Contact page and the form
//! acknowledgment response.

use crate::modules::profile::domain::entities::Profile;
use crate::shared::markup::escape_html;
use crate::shared::markup::widgets::{submit_button, success_banner, text_area, text_input};

pub const CONTACT_ACK_MESSAGE: &str = "✅ Message sent successfully! I'll get back to you soon.";

pub fn render_contact_body(profile: &Profile, notice: Option<&str>) -> String {
    let banner = match notice {
        Some(message) => success_banner(message),
        None => String::new(),
    };

    format!(
        r#"{banner}<div class="columns">
<div>
{form}</div>
<div class="column-narrow">
<h2>Connect With Me</h2>
<p>📧 Email: {email}</p>
<p><a href="{linkedin}">🔗 LinkedIn</a></p>
<p><a href="{github}">📂 GitHub</a></p>
<p>📱 Phone: {phone}</p>
<p>📍 {location}</p>
</div>
</div>
"#,
        banner = banner,
        form = contact_form(),
        email = escape_html(&profile.email),
        linkedin = escape_html(&profile.linkedin_url),
        github = escape_html(&profile.github_url),
        phone = escape_html(&profile.phone),
        location = escape_html(&profile.location),
    )
}

fn contact_form() -> String {
    format!(
        r#"<form method="post" action="/contact">
{name}
{email}
{subject}
{message}
{submit}
</form>
"#,
        name = text_input("Your Name", "name", ""),
        email = text_input("Your Email", "email", ""),
        subject = text_input("Subject", "subject", ""),
        message = text_area("Your Message", "message", ""),
        submit = submit_button("Send Message"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::seed_profile_fixture;

    #[test]
    fn body_renders_the_form_and_the_connect_column() {
        let body = render_contact_body(&seed_profile_fixture(), None);

        assert!(body.contains("Send Message"));
        assert!(body.contains("Connect With Me"));
        assert!(body.contains("📧 Email: ug23/20854@ines.ac.rw"));
        assert!(body.contains("📱 Phone: +250 788 123 456"));
        assert!(body.contains("📍 Musanze, Rwanda"));
        assert!(
            body.contains(r#"<a href="https://github.com/cyuzuzocyisezerano">📂 GitHub</a>"#)
        );
        assert!(!body.contains("banner-success"));
    }

    #[test]
    fn body_shows_the_acknowledgment_when_given() {
        let body = render_contact_body(&seed_profile_fixture(), Some(CONTACT_ACK_MESSAGE));
        assert!(body.contains(CONTACT_ACK_MESSAGE));
    }
}
