//! # forma-bootstrap
//!
//! Bootstrap form-group rendering over `forma-core` form state.
//!
//! Every renderer is a pure function of the form state, the field name, the
//! optional label and the per-call configuration: a wrapper `div`, an
//! optional `label`, the input control, and (when the field has a validation
//! error) an inline feedback element, all carrying Bootstrap class
//! conventions and `data-feedback-for` wiring for live validation.
//!
//! ## Quick Start
//!
//! ```rust
//! use forma_bootstrap::{FieldConfig, FormRenderer, InputKind};
//! use forma_core::FormState;
//!
//! let form = FormState::new("user")
//!     .with_value("email", "taken@example.com")
//!     .with_error("email", "has already been taken");
//!
//! let renderer = FormRenderer::new();
//! let html = renderer.input(
//!     &form,
//!     "email",
//!     Some("Your email"),
//!     FieldConfig::new().kind(InputKind::Email),
//! );
//!
//! assert!(html.contains("form-group has-danger"));
//! assert!(html.contains("form-control is-invalid"));
//! assert!(html.contains("has already been taken"));
//! ```
//!
//! ## Settings
//!
//! The error tag and default label class are injected through
//! [`RenderSettings`] rather than read from global state:
//!
//! ```rust
//! use forma_bootstrap::{FormRenderer, RenderSettings};
//! use forma_core::FormState;
//!
//! let renderer = FormRenderer::with_settings(RenderSettings {
//!     error_content_tag: "span".to_string(),
//!     ..RenderSettings::default()
//! });
//!
//! let form = FormState::new("user").with_error("email", "is invalid");
//! let html = renderer.input(&form, "email", None, forma_bootstrap::FieldConfig::new());
//! assert!(html.contains(r#"<span class="invalid-feedback""#));
//! ```

mod config;
mod renderer;
mod settings;

pub use config::{FieldConfig, InputKind};
pub use renderer::FormRenderer;
pub use settings::RenderSettings;
