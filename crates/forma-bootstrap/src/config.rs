//! Per-call field configuration.

use forma_core::Attrs;

/// The closed set of input kinds the field renderer knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Single-line text input, the default kind.
    #[default]
    Text,
    /// Email input.
    Email,
    /// Password input.
    Password,
    /// Number input.
    Number,
    /// Multi-line textarea.
    Textarea,
    /// Select dropdown.
    Select,
}

impl InputKind {
    /// Returns the HTML type token for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Select => "select",
        }
    }
}

/// Configuration for one render call.
///
/// `kind`, `options` and `label_class` drive the renderer; everything in
/// `attrs` is forwarded verbatim to the generated control, with computed
/// `id`/`class`/`data-feedback-for` values filled in only where the caller
/// did not supply them.
#[derive(Debug, Clone, Default)]
pub struct FieldConfig {
    /// Requested input kind; `options` forces [`InputKind::Select`].
    pub kind: Option<InputKind>,
    /// Selectable choices as `(value, label)` pairs.
    pub options: Option<Vec<(String, String)>>,
    /// CSS class override for the label.
    pub label_class: Option<String>,
    /// Pass-through HTML attributes.
    pub attrs: Attrs,
}

impl FieldConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input kind.
    #[must_use]
    pub const fn kind(mut self, kind: InputKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the selectable choices, forcing select output.
    #[must_use]
    pub fn options(mut self, options: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        self.options = Some(
            options
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
        );
        self
    }

    /// Sets the label class override.
    #[must_use]
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label_class = Some(class.into());
        self
    }

    /// Sets a pass-through HTML attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}
