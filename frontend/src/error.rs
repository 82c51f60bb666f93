//! Error types for the site behaviors.
//!
//! - [`ValidationError`] - contact form input rejected before sending
//! - [`SubmitError`] - contact form request rejected or never completed
//! - [`SiteError`] - DOM setup failures while installing behaviors
//!
//! Form errors display as the Finnish message shown to the visitor.

use thiserror::Error;

use crate::types::Field;

// =============================================================================
// Contact Form Errors
// =============================================================================

/// Client-side validation failures, checked in declaration order.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty after trimming.
    #[error("Kirjoita nimesi ennen lähettämistä.")]
    MissingName,

    /// Neither phone nor email was given.
    #[error("Anna joko puhelinnumero tai sähköpostiosoite, jotta voimme olla yhteydessä.")]
    MissingContact,

    /// Email is present but not `local@domain.tld`.
    #[error("Tarkista sähköpostiosoitteen muoto.")]
    InvalidEmail,
}

impl ValidationError {
    /// Field that receives focus for this error.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingName => Field::Name,
            ValidationError::MissingContact => Field::Phone,
            ValidationError::InvalidEmail => Field::Email,
        }
    }
}

/// Failures after the request was started.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Endpoint answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Request could not complete.
    #[error("Yhteysvirhe. Tarkista verkkoyhteys tai ota yhteyttä puhelimitse.")]
    Transport(String),
}

// =============================================================================
// Setup Errors
// =============================================================================

/// Errors while wiring behaviors to the page.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Required element attribute is absent or blank.
    #[error("#{element} is missing the {attribute} attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// Browser API call failed.
    #[error("DOM call `{operation}` failed: {message}")]
    Dom {
        operation: &'static str,
        message: String,
    },
}

impl SiteError {
    /// Wrap a `JsValue` error thrown by a web-sys call.
    pub fn dom(operation: &'static str, err: wasm_bindgen::JsValue) -> Self {
        SiteError::Dom {
            operation,
            message: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
        }
    }
}

/// Result type for setup operations.
pub type SiteResult<T> = Result<T, SiteError>;
