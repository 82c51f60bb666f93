//! Smooth scrolling for in-page anchors, stopping below the fixed nav bar.

use web_sys::{ScrollBehavior, ScrollToOptions};

use super::BehaviorHandle;
use crate::config::ANCHOR_GAP_PX;
use crate::dom::{self, Listener};
use crate::error::SiteResult;

/// Selector for an anchor's `href`, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.is_empty() || href == "#" {
        None
    } else {
        Some(href)
    }
}

/// Document offset to scroll to so the target sits below the nav bar.
pub fn scroll_offset(target_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    target_top + scroll_y - nav_height - ANCHOR_GAP_PX
}

pub fn init_smooth_scroll() -> SiteResult<Option<BehaviorHandle>> {
    let anchors = dom::query_all(r##"a[href^="#"]"##)?;
    if anchors.is_empty() {
        return Ok(None);
    }

    let mut handle = BehaviorHandle::new("smooth-scroll");

    for anchor in anchors {
        let source = anchor.clone();
        handle.push(Listener::new(&anchor, "click", move |event| {
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_target(&href).and_then(dom::query) else {
                return;
            };

            event.prevent_default();

            let top = scroll_offset(
                target.get_bounding_client_rect().top(),
                dom::scroll_y(),
                dom::nav_height(),
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            gloo_utils::window().scroll_to_with_scroll_to_options(&options);
        })?);
    }

    Ok(Some(handle))
}
