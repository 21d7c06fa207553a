//! Low-level escaped tag builders for form controls.
//!
//! Everything that touches escaping or serialization lives here; the
//! renderers built on top only compose pre-escaped fragments.

use crate::attrs::Attrs;

/// Escapes HTML special characters.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Renders a generic element with an escaped text body.
pub fn content_tag(tag: &str, text: &str, attrs: &Attrs) -> String {
    format!("<{tag}{}>{}</{tag}>", attrs.to_html(), escape(text))
}

/// Renders an `<input>` element of the given type.
pub fn input_tag(input_type: &str, name: &str, value: Option<&str>, attrs: &Attrs) -> String {
    let value_attr = value
        .map(|v| format!(r#" value="{}""#, escape(v)))
        .unwrap_or_default();
    format!(
        r#"<input type="{input_type}" name="{}"{value_attr}{}>"#,
        escape(name),
        attrs.to_html()
    )
}

/// Renders a `<textarea>` element with an escaped body.
pub fn textarea_tag(name: &str, value: Option<&str>, attrs: &Attrs) -> String {
    format!(
        r#"<textarea name="{}"{}>{}</textarea>"#,
        escape(name),
        attrs.to_html(),
        value.map(escape).unwrap_or_default()
    )
}

/// Renders a `<select>` element with one `<option>` per choice.
///
/// The option whose value equals `selected` carries the `selected` flag.
pub fn select_tag(
    name: &str,
    options: &[(String, String)],
    selected: Option<&str>,
    attrs: &Attrs,
) -> String {
    let mut rendered = String::new();
    for (value, label) in options {
        let selected_attr = if selected == Some(value.as_str()) {
            " selected"
        } else {
            ""
        };
        rendered.push_str(&format!(
            r#"<option value="{}"{selected_attr}>{}</option>"#,
            escape(value),
            escape(label)
        ));
    }
    format!(
        r#"<select name="{}"{}>{}</select>"#,
        escape(name),
        attrs.to_html(),
        rendered
    )
}

/// Renders a checkbox `<input>` with a fixed `value="true"`.
pub fn checkbox_tag(name: &str, checked: bool, attrs: &Attrs) -> String {
    let checked_attr = if checked { " checked" } else { "" };
    format!(
        r#"<input type="checkbox" name="{}" value="true"{checked_attr}{}>"#,
        escape(name),
        attrs.to_html()
    )
}
