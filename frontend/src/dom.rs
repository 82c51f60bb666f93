//! Thin helpers over web-sys used by the behaviors.
//!
//! Listeners and observers are owned values: dropping them detaches them
//! from the page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, NodeList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::config::{DEFAULT_NAV_HEIGHT_PX, NAV_HEIGHT_PROPERTY};
use crate::error::{SiteError, SiteResult};

// =============================================================================
// Listeners
// =============================================================================

/// An event listener attached to a target until dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `event` on `target`.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> SiteResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| SiteError::dom("addEventListener", e))?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Like [`Listener::new`] but registered as passive (scroll handlers).
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> SiteResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| SiteError::dom("addEventListener", e))?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// An intersection observer, disconnected when dropped.
pub struct Observer {
    inner: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new<F>(options: &web_sys::IntersectionObserverInit, mut on_entry: F) -> SiteResult<Self>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
            .map_err(|e| SiteError::dom("IntersectionObserver", e))?;

        Ok(Self {
            inner,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.inner.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}

// =============================================================================
// Queries
// =============================================================================

/// Collect the elements of a `NodeList`.
pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements matching `selector` in the document.
pub fn query_all(selector: &str) -> SiteResult<Vec<Element>> {
    gloo_utils::document()
        .query_selector_all(selector)
        .map(elements)
        .map_err(|e| SiteError::dom("querySelectorAll", e))
}

/// First element matching `selector`; an invalid selector counts as no match.
pub fn query(selector: &str) -> Option<Element> {
    gloo_utils::document().query_selector(selector).ok().flatten()
}

pub fn by_id(id: &str) -> Option<Element> {
    gloo_utils::document().get_element_by_id(id)
}

// =============================================================================
// Mutation
// =============================================================================

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("Could not toggle .{}: {:?}", class, e);
    }
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Set an inline style property; an empty value removes it.
pub fn set_style(element: &Element, property: &str, value: &str) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("Could not set {}: {:?}", property, e);
    }
}

pub fn set_attribute(element: &Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        log::warn!("Could not set [{}]: {:?}", name, e);
    }
}

pub fn focus(element: &Element) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.focus();
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Smoothly bring `element` into view, moving as little as possible.
pub fn reveal(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap_or(0.0)
}

/// Navigation bar height from the root `--nav-height` property.
pub fn nav_height() -> f64 {
    let value = gloo_utils::window()
        .get_computed_style(&gloo_utils::document_element())
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value(NAV_HEIGHT_PROPERTY).ok())
        .unwrap_or_default();
    parse_nav_height(&value)
}

/// Leading integer of a CSS length (`"72px"` → 72), like `parseInt`.
///
/// Missing, unparseable and zero values give [`DEFAULT_NAV_HEIGHT_PX`].
pub fn parse_nav_height(value: &str) -> f64 {
    let value = value.trim_start();
    let (sign, digits) = match value.as_bytes().first() {
        Some(b'-') => (-1.0, &value[1..]),
        Some(b'+') => (1.0, &value[1..]),
        _ => (1.0, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<f64>() {
        Ok(n) if n != 0.0 => sign * n,
        _ => DEFAULT_NAV_HEIGHT_PX,
    }
}
