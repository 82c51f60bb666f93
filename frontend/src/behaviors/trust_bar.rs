//! Hover lift on trust bar items.

use super::BehaviorHandle;
use crate::dom::{self, Listener};
use crate::error::SiteResult;

const LIFT: &str = "translateY(-2px)";
const LIFT_TRANSITION: &str = "transform 200ms ease";

pub fn init_trust_bar() -> SiteResult<Option<BehaviorHandle>> {
    let items = dom::query_all(".trust-item")?;
    if items.is_empty() {
        return Ok(None);
    }

    let mut handle = BehaviorHandle::new("trust-bar");

    for item in items {
        let lifted = item.clone();
        handle.push(Listener::new(&item, "mouseenter", move |_| {
            dom::set_style(&lifted, "transform", LIFT);
            dom::set_style(&lifted, "transition", LIFT_TRANSITION);
        })?);

        let settled = item.clone();
        handle.push(Listener::new(&item, "mouseleave", move |_| {
            dom::set_style(&settled, "transform", "");
        })?);
    }

    Ok(Some(handle))
}
