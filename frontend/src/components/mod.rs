//! Leptos components rendered into the static page.
//!
//! - [`ContactForm`] - contact form with validation and submission feedback

mod contact_form;

pub use contact_form::*;
