//! Error types for page wiring and form validation.
//!
//! `LandingError` covers everything that can stop a component from mounting
//! or a browser call from succeeding. `ValidationError` is user-facing: its
//! `Display` text is exactly what the contact form shows in its alert.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure to mount a component or complete a browser call.
#[derive(Debug, thiserror::Error)]
pub enum LandingError {
    /// A component could not find an element it needs.
    #[error("{component}: required element `{selector}` not found")]
    MissingElement { component: &'static str, selector: String },
    /// Not running in a browser window.
    #[error("no global window")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// `localStorage` is missing or refused the operation.
    #[error("storage unavailable: {0}")]
    Storage(String),
    /// The host supplied an unusable `PageConfig`.
    #[error("invalid page config: {0}")]
    Config(String),
    /// A browser API threw.
    #[error("browser error: {0}")]
    Js(String),
}

impl LandingError {
    pub fn missing(component: &'static str, selector: impl Into<String>) -> Self {
        Self::MissingElement { component, selector: selector.into() }
    }
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => Self::Js(message),
            None => Self::Js(format!("{value:?}")),
        }
    }
}

impl From<serde_json::Error> for LandingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Reasons a contact submission is rejected before anything on the page changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}
