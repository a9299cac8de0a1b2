use super::escape::escape_html;

pub fn success_banner(message: &str) -> String {
    format!(
        r#"<div class="banner banner-success">{}</div>"#,
        escape_html(message)
    )
}

pub fn warning_banner(message: &str) -> String {
    format!(
        r#"<div class="banner banner-warning">{}</div>"#,
        escape_html(message)
    )
}

pub fn text_input(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{value}">"#,
        name = name,
        label = escape_html(label),
        value = escape_html(value),
    )
}

pub fn text_area(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<textarea id="{name}" name="{name}" rows="5">{value}</textarea>"#,
        name = name,
        label = escape_html(label),
        value = escape_html(value),
    )
}

pub fn submit_button(label: &str) -> String {
    format!(r#"<button type="submit">{}</button>"#, escape_html(label))
}
