//! Ordered HTML attribute maps.

use crate::tag::escape;

/// An insertion-ordered mapping of HTML attribute names to values.
///
/// Order is preserved so that identical inputs always render identical
/// markup. Setting an existing key replaces its value in place; merging a
/// default leaves caller-supplied values untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    pairs: Vec<(String, String)>,
}

impl Attrs {
    /// Creates an empty attribute map.
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Sets an attribute, replacing any existing value without moving it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(pair) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            pair.1 = value;
        } else {
            self.pairs.push((key, value));
        }
    }

    /// Sets an attribute only if it is not already present.
    ///
    /// Caller-supplied values always win over computed defaults.
    pub fn set_default(&mut self, key: &str, value: impl Into<String>) {
        if self.get(key).is_none() {
            self.pairs.push((key.to_string(), value.into()));
        }
    }

    /// Returns the value for an attribute, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns whether the map holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Renders the attributes as an HTML attribute string.
    ///
    /// Every pair is emitted as ` key="value"` (leading space included) in
    /// insertion order, with the value entity-escaped.
    pub fn to_html(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, escape(v)))
            .collect()
    }
}
