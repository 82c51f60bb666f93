//! Luova Kampaamo - site behaviors in Rust/Leptos
//!
//! A WebAssembly bundle loaded by the salon's static pages. It drives the
//! contact form and attaches the small interactions the markup relies on.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  boot()                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Behaviors  (attached to existing markup)                    │
//! │  nav · smooth-scroll · fade-in · active-link · trust-bar     │
//! │  contact-form (binds #contact-form)                          │
//! │  ├── FormState (validation, submit lifecycle)                │
//! │  └── HttpTransport (multipart POST, JSON errors)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ContactForm  (mounted into #contact-form-host otherwise)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - form fields, snapshot, status and button state
//! - [`form`] - validation rules and the submit state machine
//! - [`services`] - contact form delivery
//! - [`components`] - the Leptos contact form
//! - [`behaviors`] - page interactions wired with web-sys listeners

// =============================================================================
// Module declarations
// =============================================================================

pub mod behaviors;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod form;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Form
    ContactPayload, Field, FormSnapshot,
    // Presentation
    ButtonState, StatusKind, StatusLine,
};

// Errors
pub use error::{SiteError, SiteResult, SubmitError, ValidationError};

// Form logic
pub use form::{validate, FormState, Phase, Settled, SubmitDecision};

// Components
pub use components::*;

// Services
pub use services::*;

// Behaviors
pub use behaviors::{init_behaviors, BehaviorHandle, SiteHandle};

// =============================================================================
// Application Entry Point
// =============================================================================

/// Start everything. Called once from the trunk entry point.
pub fn boot() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("✂️ Luova Kampaamo - starting site behaviors");

    let site = init_behaviors();

    // A page without its own form markup may still ask for one.
    if !site.is_installed("contact-form") {
        match mount_contact_form() {
            Ok(true) => {}
            Ok(false) => log::debug!("No contact form on this page"),
            Err(e) => log::error!("❌ Contact form not mounted: {}", e),
        }
    }

    // Behaviors live as long as the page.
    site.keep_alive();
}
