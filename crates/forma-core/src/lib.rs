//! # forma-core
//!
//! Form state and HTML tag primitives for the forma renderers.
//!
//! This crate provides:
//! - An opaque form-state value with per-field value and error lookup
//! - Framework-convention id/name derivation (`form_field` / `form[field]`)
//! - Validation error collection
//! - An insertion-ordered attribute map with put-if-absent merging
//! - Escaped low-level tag builders for input controls
//!
//! ## Quick Start
//!
//! ```rust
//! use forma_core::{Attrs, FormState};
//! use forma_core::tag::input_tag;
//!
//! let form = FormState::new("user")
//!     .with_value("email", "taken@example.com")
//!     .with_error("email", "has already been taken");
//!
//! assert_eq!(form.input_id("email"), "user_email");
//! assert_eq!(form.input_name("email"), "user[email]");
//! assert_eq!(form.error("email"), Some("has already been taken"));
//!
//! let attrs = Attrs::new().with("id", form.input_id("email"));
//! let html = input_tag("email", &form.input_name("email"), form.value("email"), &attrs);
//! assert!(html.contains(r#"name="user[email]""#));
//! ```

mod attrs;
mod error;
mod form;
pub mod tag;

pub use attrs::Attrs;
pub use error::{FormError, Result, ValidationErrors};
pub use form::FormState;
