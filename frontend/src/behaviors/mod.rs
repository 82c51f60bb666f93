//! Page behaviors attached to the static markup.
//!
//! Each behavior has one setup function that returns a [`BehaviorHandle`],
//! or `None` when the page lacks the elements it works on.
//!
//! - [`nav`] - header scroll state and the hamburger menu
//! - [`smooth_scroll`] - in-page anchor scrolling below the fixed nav
//! - [`fade_in`] - reveal sections as they enter the viewport
//! - [`active_link`] - highlight the nav link of the current section
//! - [`trust_bar`] - hover lift on trust bar items
//! - [`contact`] - submission controller for the page's own contact form

pub mod active_link;
pub mod contact;
pub mod fade_in;
pub mod nav;
pub mod smooth_scroll;
pub mod trust_bar;

use crate::dom::{Listener, Observer};
use crate::error::SiteResult;

/// Listeners and observers owned by one behavior.
///
/// Dropping the handle detaches everything it holds.
#[must_use = "dropping a BehaviorHandle detaches its listeners"]
pub struct BehaviorHandle {
    name: &'static str,
    listeners: Vec<Listener>,
    observer: Option<Observer>,
}

impl BehaviorHandle {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            listeners: Vec::new(),
            observer: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn push(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn set_observer(&mut self, observer: Observer) {
        self.observer = Some(observer);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Setup function of one behavior.
pub type Setup = fn() -> SiteResult<Option<BehaviorHandle>>;

/// Behaviors in installation order.
pub const BEHAVIORS: &[(&str, Setup)] = &[
    ("nav", nav::init_nav),
    ("smooth-scroll", smooth_scroll::init_smooth_scroll),
    ("fade-in", fade_in::init_fade_in),
    ("active-link", active_link::init_active_link),
    ("trust-bar", trust_bar::init_trust_bar),
    ("contact-form", contact::init_contact_form),
];

/// All installed behaviors.
#[must_use = "dropping a SiteHandle detaches every behavior"]
pub struct SiteHandle {
    behaviors: Vec<BehaviorHandle>,
}

impl SiteHandle {
    pub fn is_installed(&self, name: &str) -> bool {
        self.behaviors.iter().any(|b| b.name() == name)
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Detach every behavior.
    pub fn dispose(self) {
        log::debug!("Detaching {} behaviors", self.behaviors.len());
    }

    /// Keep the behaviors attached for the rest of the page's lifetime.
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

/// Run every setup function. A failing behavior is logged and skipped.
pub fn init_behaviors() -> SiteHandle {
    let mut behaviors = Vec::with_capacity(BEHAVIORS.len());

    for (name, setup) in BEHAVIORS {
        match setup() {
            Ok(Some(handle)) => {
                log::debug!("✨ {} ready ({} listeners)", name, handle.listener_count());
                behaviors.push(handle);
            }
            Ok(None) => log::debug!("{} skipped: elements not on this page", name),
            Err(e) => log::error!("❌ {} failed: {}", name, e),
        }
    }

    log::info!("✅ {} of {} behaviors installed", behaviors.len(), BEHAVIORS.len());
    SiteHandle { behaviors }
}
