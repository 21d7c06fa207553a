//! Renderer settings.

use serde::{Deserialize, Serialize};

/// Settings shared by every render call.
///
/// Passed explicitly to [`FormRenderer`](crate::FormRenderer) instead of
/// living in process-wide state; applications typically build one at startup
/// and reuse it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// HTML tag used to wrap inline error messages.
    pub error_content_tag: String,
    /// CSS class applied to generated labels when no per-call override is
    /// given.
    pub label_class: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            error_content_tag: "small".to_string(),
            label_class: "form-control-label".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.error_content_tag, "small");
        assert_eq!(settings.label_class, "form-control-label");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let settings: RenderSettings =
            serde_json::from_str(r#"{"error_content_tag": "span"}"#).unwrap();
        assert_eq!(settings.error_content_tag, "span");
        assert_eq!(settings.label_class, "form-control-label");
    }
}
