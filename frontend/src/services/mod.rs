//! External communication.
//!
//! # Services
//!
//! - [`contact`] - contact form delivery to the form endpoint

pub mod contact;

pub use contact::*;
