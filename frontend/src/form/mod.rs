//! Contact form logic, independent of the DOM.
//!
//! - [`validation`] - ordered input rules
//! - [`state`] - submit lifecycle and what the form displays

pub mod state;
pub mod validation;

pub use state::*;
pub use validation::*;
