//! Header scroll state and the mobile hamburger menu.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, Node};

use super::BehaviorHandle;
use crate::config::{MENU_CLOSE_LABEL, MENU_OPEN_LABEL, SCROLLED_THRESHOLD_PX};
use crate::dom::{self, Listener};
use crate::error::SiteResult;

const OPEN_CLASS: &str = "open";
const SCROLLED_CLASS: &str = "scrolled";

/// Whether the header should carry the `scrolled` class.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// Hamburger `aria-label` for a menu state.
pub fn menu_label(open: bool) -> &'static str {
    if open {
        MENU_CLOSE_LABEL
    } else {
        MENU_OPEN_LABEL
    }
}

/// The menu and its toggle; the `open` class on the menu is the state.
#[derive(Clone)]
struct Menu {
    menu: Element,
    hamburger: Element,
}

impl Menu {
    fn is_open(&self) -> bool {
        dom::has_class(&self.menu, OPEN_CLASS)
    }

    fn set_open(&self, open: bool) {
        dom::set_class(&self.menu, OPEN_CLASS, open);
        dom::set_class(&self.hamburger, OPEN_CLASS, open);
        dom::set_attribute(&self.hamburger, "aria-expanded", if open { "true" } else { "false" });
        dom::set_attribute(&self.hamburger, "aria-label", menu_label(open));
        dom::set_style(&gloo_utils::body(), "overflow", if open { "hidden" } else { "" });
    }

    fn toggle(&self) {
        self.set_open(!self.is_open());
    }

    /// Whether `event` started outside both the menu and the toggle.
    fn is_outside(&self, event: &Event) -> bool {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let target = target.as_ref();
        !self.menu.contains(target) && !self.hamburger.contains(target)
    }
}

/// Wire the header and the menu. Skipped when any of them is missing.
pub fn init_nav() -> SiteResult<Option<BehaviorHandle>> {
    let (Some(header), Some(hamburger), Some(menu)) = (
        dom::query(".site-header"),
        dom::by_id("hamburger"),
        dom::by_id("nav-menu"),
    ) else {
        return Ok(None);
    };

    let mut handle = BehaviorHandle::new("nav");
    let window = gloo_utils::window();
    let document = gloo_utils::document();

    // Header style follows the scroll position.
    let sync_header = move || dom::set_class(&header, SCROLLED_CLASS, is_scrolled(dom::scroll_y()));
    sync_header();
    handle.push(Listener::passive(&window, "scroll", move |_| sync_header())?);

    let nav = Menu { menu, hamburger };

    let toggle = nav.clone();
    handle.push(Listener::new(&nav.hamburger, "click", move |_| toggle.toggle())?);

    let links = nav
        .menu
        .query_selector_all(".nav-link, .nav-cta")
        .map(dom::elements)
        .unwrap_or_default();
    for link in links {
        let close = nav.clone();
        handle.push(Listener::new(&link, "click", move |_| close.set_open(false))?);
    }

    let escape = nav.clone();
    handle.push(Listener::new(&document, "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .map(|k| k.key() == "Escape")
            .unwrap_or(false);
        if is_escape && escape.is_open() {
            escape.set_open(false);
            dom::focus(&escape.hamburger);
        }
    })?);

    let outside = nav;
    handle.push(Listener::new(&document, "click", move |event| {
        if outside.is_open() && outside.is_outside(&event) {
            outside.set_open(false);
        }
    })?);

    Ok(Some(handle))
}
