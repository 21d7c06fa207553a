//! Bootstrap form-group renderers.

use forma_core::tag::{checkbox_tag, content_tag, input_tag, select_tag, textarea_tag};
use forma_core::{Attrs, FormState};
use ironhtml::html;
use ironhtml_elements::Label;

use crate::config::{FieldConfig, InputKind};
use crate::settings::RenderSettings;

/// Renders Bootstrap form groups for the fields of a [`FormState`].
///
/// Every method is a pure transform from its arguments to a pre-escaped
/// markup fragment; identical inputs always produce identical output.
#[derive(Debug, Clone, Default)]
pub struct FormRenderer {
    settings: RenderSettings,
}

impl FormRenderer {
    /// Creates a renderer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with the given settings.
    pub const fn with_settings(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Renders a labelled, wrapped input control for a field.
    ///
    /// The effective kind is [`InputKind::Select`] when `options` is
    /// present, otherwise the configured `kind`, otherwise
    /// [`InputKind::Text`]. Computed `id`, `class` and `data-feedback-for`
    /// values are merged into the pass-through attributes only where the
    /// caller did not supply them.
    pub fn input(
        &self,
        form: &FormState,
        field: &str,
        label: Option<&str>,
        config: FieldConfig,
    ) -> String {
        let FieldConfig {
            kind,
            options,
            label_class,
            mut attrs,
        } = config;

        let id = form.input_id(field);
        let name = form.input_name(field);

        let kind = if options.is_some() {
            InputKind::Select
        } else {
            kind.unwrap_or_default()
        };

        let mut class = String::from("form-control");
        if form.has_error(field) {
            class.push_str(" is-invalid");
        }

        attrs.set_default("id", &id);
        attrs.set_default("class", class);
        attrs.set_default("data-feedback-for", &name);

        let value = form.value(field);
        let control = match kind {
            InputKind::Select => select_tag(&name, options.as_deref().unwrap_or(&[]), value, &attrs),
            InputKind::Textarea => textarea_tag(&name, value, &attrs),
            other => input_tag(other.as_str(), &name, value, &attrs),
        };

        self.wrap(form, field, label, label_class.as_deref(), &control)
    }

    /// Renders a textarea field; alias for [`Self::input`] with the kind
    /// forced to [`InputKind::Textarea`].
    pub fn textarea(
        &self,
        form: &FormState,
        field: &str,
        label: Option<&str>,
        config: FieldConfig,
    ) -> String {
        self.input(form, field, label, config.kind(InputKind::Textarea))
    }

    /// Renders a Bootstrap check wrapper with the checkbox inside its label.
    ///
    /// An error on the field only switches the wrapper class; no inline
    /// error element is rendered for checkboxes.
    pub fn checkbox(
        &self,
        form: &FormState,
        field: &str,
        label: Option<&str>,
        attrs: Attrs,
    ) -> String {
        let id = form.input_id(field);
        let name = form.input_name(field);

        let mut wrapper_class = String::from("form-check");
        if form.has_error(field) {
            wrapper_class.push_str(" has-danger");
        }

        let mut attrs = attrs;
        attrs.set_default("id", &id);
        attrs.set_default("class", "form-check-input");
        let checked = matches!(form.value(field), Some("true" | "on" | "1"));
        let control = checkbox_tag(&name, checked, &attrs);

        html! { div.class(#wrapper_class) }
            .data("feedback-for", &name)
            .child::<Label, _>(|l| {
                let l = l.class("form-check-label").raw(&control);
                match label {
                    Some(text) => l.text(text),
                    None => l,
                }
            })
            .render()
    }

    /// Renders a submit button inside a plain form group.
    pub fn submit(&self, label: &str) -> String {
        let text = label.to_string();
        let button = html! {
            button.type_("submit").class("btn btn-primary") { #text }
        };
        html! { div.class("form-group") }.raw(button.render()).render()
    }

    /// Wraps caller-supplied field markup in a form group that reflects the
    /// field's error state.
    pub fn form_group(&self, form: &FormState, field: &str, content: &str) -> String {
        let mut class = String::from("form-group");
        if form.has_error(field) {
            class.push_str(" has-danger");
        }
        html! { div.class(#class) }.raw(content).render()
    }

    /// Wraps a rendered control with the form-group div, the optional label
    /// and, on error, the inline feedback element.
    fn wrap(
        &self,
        form: &FormState,
        field: &str,
        label: Option<&str>,
        label_class: Option<&str>,
        control: &str,
    ) -> String {
        let id = form.input_id(field);
        let name = form.input_name(field);
        let error = form.error(field);

        let mut wrapper_class = String::from("form-group");
        if error.is_some() {
            wrapper_class.push_str(" has-danger");
        }

        let label_html = match label {
            Some(text) => {
                let class = label_class
                    .unwrap_or(self.settings.label_class.as_str())
                    .to_string();
                let text = text.to_string();
                html! { label.for_(#id).class(#class) { #text } }.render()
            }
            None => String::new(),
        };

        let error_html = match error {
            Some(message) => {
                let attrs = Attrs::new()
                    .with("class", "invalid-feedback")
                    .with("data-feedback-for", &name);
                content_tag(&self.settings.error_content_tag, message, &attrs)
            }
            None => String::new(),
        };

        html! { div.class(#wrapper_class) }
            .when(error.is_some(), |d| d.data("feedback-for", &name))
            .raw(&label_html)
            .raw(control)
            .raw(&error_html)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_form() -> FormState {
        FormState::new("user").with_value("email", "someone@example.com")
    }

    fn error_form() -> FormState {
        FormState::new("user")
            .with_value("email", "taken@example.com")
            .with_error("email", "has already been taken")
    }

    #[test]
    fn test_input_without_error() {
        let renderer = FormRenderer::new();
        let html = renderer.input(&clean_form(), "email", None, FieldConfig::new());

        assert!(html.contains("form-group"));
        assert!(!html.contains("has-danger"));
        assert!(!html.contains("is-invalid"));
        assert!(!html.contains("invalid-feedback"));
        assert!(html.contains(r#"<input type="text" name="user[email]""#));
        assert!(html.contains(r#"value="someone@example.com""#));
        assert!(html.contains(r#"id="user_email""#));
    }

    #[test]
    fn test_input_with_error() {
        let renderer = FormRenderer::new();
        let html = renderer.input(
            &error_form(),
            "email",
            Some("Your email"),
            FieldConfig::new().kind(InputKind::Email),
        );

        assert!(html.contains("form-group has-danger"));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"class="form-control is-invalid""#));
        assert!(html.contains(r#"for="user_email""#));
        assert!(html.contains("Your email"));
        assert!(html.contains(r#"<small class="invalid-feedback" data-feedback-for="user[email]">has already been taken</small>"#));
    }

    #[test]
    fn test_omitted_label_renders_no_label_element() {
        let renderer = FormRenderer::new();
        let html = renderer.input(&clean_form(), "email", None, FieldConfig::new());
        assert!(!html.contains("<label"));
    }

    #[test]
    fn test_label_uses_default_class_and_override() {
        let renderer = FormRenderer::new();
        let html = renderer.input(&clean_form(), "email", Some("Email"), FieldConfig::new());
        assert!(html.contains("form-control-label"));

        let html = renderer.input(
            &clean_form(),
            "email",
            Some("Email"),
            FieldConfig::new().label_class("sr-only"),
        );
        assert!(html.contains("sr-only"));
        assert!(!html.contains("form-control-label"));
    }

    #[test]
    fn test_options_force_select_over_type() {
        let renderer = FormRenderer::new();
        let form = FormState::new("user").with_value("role", "admin");
        let html = renderer.input(
            &form,
            "role",
            None,
            FieldConfig::new()
                .kind(InputKind::Email)
                .options(vec![("user", "User"), ("admin", "Administrator")]),
        );

        assert!(html.contains(r#"<select name="user[role]""#));
        assert!(html.contains(r#"<option value="admin" selected>Administrator</option>"#));
        assert!(!html.contains(r#"type="email""#));
    }

    #[test]
    fn test_textarea_alias() {
        let renderer = FormRenderer::new();
        let form = FormState::new("post").with_value("body", "Hello");
        let html = renderer.textarea(&form, "body", Some("Body"), FieldConfig::new());

        assert!(html.contains(r#"<textarea name="post[body]""#));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn test_pass_through_attributes_and_caller_precedence() {
        let renderer = FormRenderer::new();
        let html = renderer.input(
            &clean_form(),
            "email",
            None,
            FieldConfig::new()
                .attr("placeholder", "Enter email")
                .attr("class", "custom-control"),
        );

        assert!(html.contains(r#"placeholder="Enter email""#));
        assert!(html.contains(r#"class="custom-control""#));
        assert!(!html.contains("form-control "));
    }

    #[test]
    fn test_checkbox_without_error() {
        let renderer = FormRenderer::new();
        let form = FormState::new("user").with_value("accept", "true");
        let html = renderer.checkbox(&form, "accept", Some("I agree"), Attrs::new());

        assert!(html.contains("form-check"));
        assert!(html.contains("form-check-label"));
        assert!(html.contains(r#"class="form-check-input""#));
        assert!(html.contains(r#"name="user[accept]""#));
        assert!(html.contains(r#"id="user_accept""#));
        assert!(html.contains("checked"));
        assert!(html.contains("I agree"));
        assert!(!html.contains("has-danger"));
        assert!(!html.contains("invalid-feedback"));
    }

    #[test]
    fn test_checkbox_error_only_switches_wrapper_class() {
        let renderer = FormRenderer::new();
        let form = FormState::new("user").with_error("accept", "must be accepted");
        let html = renderer.checkbox(&form, "accept", Some("I agree"), Attrs::new());

        assert!(html.contains("form-check has-danger"));
        assert!(!html.contains("invalid-feedback"));
        assert!(!html.contains("must be accepted"));
    }

    #[test]
    fn test_submit() {
        let renderer = FormRenderer::new();
        let html = renderer.submit("Save");

        assert!(html.contains("form-group"));
        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains("btn btn-primary"));
        assert!(html.contains("Save"));
        assert!(!html.contains("has-danger"));
    }

    #[test]
    fn test_form_group_reflects_error_state() {
        let renderer = FormRenderer::new();
        let block = r#"<input type="color" name="user[shade]">"#;

        let html = renderer.form_group(&clean_form(), "shade", block);
        assert!(html.contains(block));
        assert!(!html.contains("has-danger"));

        let form = FormState::new("user").with_error("shade", "is not a color");
        let html = renderer.form_group(&form, "shade", block);
        assert!(html.contains("form-group has-danger"));
        assert!(html.contains(block));
    }

    #[test]
    fn test_custom_error_tag() {
        let renderer = FormRenderer::with_settings(RenderSettings {
            error_content_tag: "span".to_string(),
            ..RenderSettings::default()
        });
        let html = renderer.input(&error_form(), "email", None, FieldConfig::new());

        assert!(html.contains(r#"<span class="invalid-feedback""#));
        assert!(!html.contains("<small"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let renderer = FormRenderer::new();
        let form = error_form();
        let render = || {
            renderer.input(
                &form,
                "email",
                Some("Your email"),
                FieldConfig::new()
                    .kind(InputKind::Email)
                    .attr("placeholder", "Email"),
            )
        };
        assert_eq!(render(), render());
        assert_eq!(renderer.submit("Save"), renderer.submit("Save"));
    }
}
