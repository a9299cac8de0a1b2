//! Body renderers for the Home and Settings views. Pure functions of
//! the profile they are given; the handlers decide which profile
//! (seed or transient draft echo) goes in.

use crate::modules::profile::domain::entities::Profile;
use crate::shared::markup::escape_html;
use crate::shared::markup::widgets::{submit_button, success_banner, text_input, warning_banner};

pub const PROFILE_SAVED_MESSAGE: &str = "Profile information updated successfully!";
pub const PHOTO_UPLOADED_MESSAGE: &str = "Image uploaded successfully!";
pub const RESUME_UPLOADED_MESSAGE: &str = "Resume uploaded successfully!";

pub const RESUME_MISSING_MESSAGE: &str =
    "Resume file not found. Please upload a resume.pdf file.";

const YEAR_OPTIONS: [&str; 4] = ["Year 1", "Year 2", "Year 3", "Year 4"];

//
// ──────────────────────────────────────────────────────────
// Home
// ──────────────────────────────────────────────────────────
//

pub fn render_home_body(
    profile: &Profile,
    photo_available: bool,
    resume_available: bool,
) -> String {
    format!(
        r#"<div class="columns">
<div class="column-narrow">
{photo_block}{photo_form}</div>
<div>
<h2>{name}</h2>
<p>📍 {location}</p>
<p>🎓 {university}</p>
<p>📚 {study_line}</p>
{resume_block}</div>
</div>
<hr>
<h2>About Me</h2>
<p>{about}</p>
"#,
        photo_block = photo_block(photo_available),
        photo_form = photo_upload_form("Upload Profile Picture"),
        name = escape_html(&profile.full_name),
        location = escape_html(&profile.location),
        university = escape_html(&profile.university),
        study_line = escape_html(&profile.study_line()),
        resume_block = resume_block(resume_available),
        about = escape_html(&profile.about),
    )
}

fn photo_block(photo_available: bool) -> String {
    if photo_available {
        r#"<img class="profile-photo" src="/assets/photo" alt="Profile picture">
<p class="caption">Default image</p>
"#
        .to_string()
    } else {
        // A placeholder block instead of an <img> that would 404.
        r#"<div class="profile-photo profile-photo-placeholder">👤</div>
<p class="caption">No photo uploaded</p>
"#
        .to_string()
    }
}

fn resume_block(resume_available: bool) -> String {
    if resume_available {
        r#"<p><a href="/assets/resume">📄 Download Resume</a></p>
"#
        .to_string()
    } else {
        format!(
            "{}\n{}",
            warning_banner(RESUME_MISSING_MESSAGE),
            resume_upload_form("Upload your resume (PDF)")
        )
    }
}

//
// ──────────────────────────────────────────────────────────
// Settings
// ──────────────────────────────────────────────────────────
//

pub fn render_settings_body(profile: &Profile, notice: Option<&str>) -> String {
    let banner = match notice {
        Some(message) => success_banner(message),
        None => String::new(),
    };

    format!(
        r#"{banner}<h2>Upload a Profile Picture</h2>
{photo_form}
<h2>✍ Edit Personal Information</h2>
<form method="post" action="/settings">
<div class="columns">
<div>
{full_name}
{email}
{location}
</div>
<div>
{university}
{field_of_study}
{year_select}
</div>
</div>
<h2>Social Media &amp; Professional Links</h2>
{github}
{linkedin}
{save}
</form>
<h2>Update Resume</h2>
{resume_form}
"#,
        banner = banner,
        photo_form = photo_upload_form("Choose a file"),
        full_name = text_input("Full Name:", "full_name", &profile.full_name),
        email = text_input("Email:", "email", &profile.email),
        location = text_input("Location:", "location", &profile.location),
        university = text_input("University:", "university", &profile.university),
        field_of_study = text_input("Field of Study:", "field_of_study", &profile.field_of_study),
        year_select = year_select(&profile.year_of_study),
        github = text_input("GitHub URL:", "github_url", &profile.github_url),
        linkedin = text_input("LinkedIn URL:", "linkedin_url", &profile.linkedin_url),
        save = submit_button("Save All Changes"),
        resume_form = resume_upload_form("Upload New Resume (PDF)"),
    )
}

fn year_select(current: &str) -> String {
    let mut options = String::new();
    for year in YEAR_OPTIONS {
        let selected = if year == current { " selected" } else { "" };
        options.push_str(&format!(
            "<option value=\"{year}\"{selected}>{year}</option>\n",
            year = year,
            selected = selected
        ));
    }

    format!(
        r#"<label for="year_of_study">Year of Study:</label>
<select id="year_of_study" name="year_of_study">
{options}</select>"#,
        options = options
    )
}

fn photo_upload_form(label: &str) -> String {
    format!(
        r#"<form method="post" action="/settings/photo" enctype="multipart/form-data">
<label for="photo">{label}</label>
<input type="file" id="photo" name="photo" accept="image/jpeg,image/png">
<button type="submit">Upload</button>
</form>
"#,
        label = escape_html(label)
    )
}

fn resume_upload_form(label: &str) -> String {
    format!(
        r#"<form method="post" action="/settings/resume" enctype="multipart/form-data">
<label for="resume">{label}</label>
<input type="file" id="resume" name="resume" accept="application/pdf">
<button type="submit">Upload</button>
</form>
"#,
        label = escape_html(label)
    )
}
