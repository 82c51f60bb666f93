//! Reveal content blocks as they scroll into view.
//!
//! Blocks get `fade-in` up front and `visible` once they intersect the
//! viewport. Siblings are staggered so grid rows cascade. Nothing happens for
//! visitors who prefer reduced motion.

use wasm_bindgen::JsValue;
use web_sys::{Element, IntersectionObserverInit};

use super::BehaviorHandle;
use crate::config::{
    FADE_IN_SELECTORS, FADE_ROOT_MARGIN, FADE_STAGGER_MAX_MS, FADE_STAGGER_STEP_MS, FADE_THRESHOLD,
};
use crate::dom::{self, Observer};
use crate::error::SiteResult;

const FADE_CLASS: &str = "fade-in";
const VISIBLE_CLASS: &str = "visible";

/// Transition delay for the element at `sibling_index` among its siblings.
pub fn stagger_delay_ms(sibling_index: u32) -> u32 {
    sibling_index
        .saturating_mul(FADE_STAGGER_STEP_MS)
        .min(FADE_STAGGER_MAX_MS)
}

fn prefers_reduced_motion() -> bool {
    gloo_utils::window()
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn supports_intersection_observer() -> bool {
    js_sys::Reflect::has(&gloo_utils::window(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

fn sibling_index(element: &Element) -> Option<u32> {
    let children = element.parent_element()?.children();
    (0..children.length()).find(|&i| children.item(i).as_ref() == Some(element))
}

pub fn init_fade_in() -> SiteResult<Option<BehaviorHandle>> {
    if prefers_reduced_motion() {
        return Ok(None);
    }

    let targets = dom::query_all(&FADE_IN_SELECTORS.join(", "))?;
    if targets.is_empty() {
        return Ok(None);
    }

    for target in &targets {
        dom::set_class(target, FADE_CLASS, true);
        if let Some(index) = sibling_index(target) {
            dom::set_style(target, "transition-delay", &format!("{}ms", stagger_delay_ms(index)));
        }
    }

    let mut handle = BehaviorHandle::new("fade-in");

    if !supports_intersection_observer() {
        log::debug!("IntersectionObserver unavailable, revealing {} blocks", targets.len());
        for target in &targets {
            dom::set_class(target, VISIBLE_CLASS, true);
        }
        return Ok(Some(handle));
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FADE_THRESHOLD));
    options.set_root_margin(FADE_ROOT_MARGIN);

    let observer = Observer::new(&options, |entry, observer| {
        if entry.is_intersecting() {
            let target = entry.target();
            dom::set_class(&target, VISIBLE_CLASS, true);
            observer.unobserve(&target);
        }
    })?;

    for target in &targets {
        observer.observe(target);
    }
    handle.set_observer(observer);

    Ok(Some(handle))
}
