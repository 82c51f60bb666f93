//! Highlight the nav link of the section currently under the nav bar.

use web_sys::Element;

use super::BehaviorHandle;
use crate::config::ACTIVE_SECTION_SLACK_PX;
use crate::dom::{self, Listener};
use crate::error::SiteResult;

const ACTIVE_CLASS: &str = "nav-link--active";

/// Id of the last section (in document order) whose top has reached the
/// nav bar. Empty when none has.
pub fn current_section<'a, I>(sections: I, nav_height: f64) -> &'a str
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| *top <= nav_height + ACTIVE_SECTION_SLACK_PX)
        .last()
        .map(|(id, _)| id)
        .unwrap_or("")
}

/// Whether a link `href` points at section `current`.
pub fn is_active_href(href: Option<&str>, current: &str) -> bool {
    href.and_then(|h| h.strip_prefix('#')) == Some(current)
}

fn update_links(sections: &[Element], links: &[Element], nav_height: f64) {
    let tops: Vec<(String, f64)> = sections
        .iter()
        .map(|s| (s.id(), s.get_bounding_client_rect().top()))
        .collect();
    let current = current_section(tops.iter().map(|(id, top)| (id.as_str(), *top)), nav_height);

    for link in links {
        let href = link.get_attribute("href");
        if is_active_href(href.as_deref(), current) {
            dom::set_attribute(link, "aria-current", "true");
            dom::set_style(link, "color", "");
            dom::set_class(link, ACTIVE_CLASS, true);
        } else {
            let _ = link.remove_attribute("aria-current");
            dom::set_class(link, ACTIVE_CLASS, false);
        }
    }
}

pub fn init_active_link() -> SiteResult<Option<BehaviorHandle>> {
    let sections = dom::query_all("section[id]")?;
    let links = dom::query_all(".nav-link")?;
    if sections.is_empty() || links.is_empty() {
        return Ok(None);
    }

    // Read once; the nav bar height does not change while scrolling.
    let nav_height = dom::nav_height();
    update_links(&sections, &links, nav_height);

    let mut handle = BehaviorHandle::new("active-link");
    handle.push(Listener::passive(&gloo_utils::window(), "scroll", move |_| {
        update_links(&sections, &links, nav_height)
    })?);

    Ok(Some(handle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_reached_section_wins() {
        let sections = [("etusivu", -900.0), ("palvelut", -200.0), ("hinnasto", 120.0), ("yhteys", 800.0)];
        assert_eq!(current_section(sections, 68.0), "hinnasto");
        assert_eq!(current_section(sections, 40.0), "palvelut");
    }

    #[test]
    fn test_no_section_reached() {
        assert_eq!(current_section([("palvelut", 400.0)], 68.0), "");
        assert_eq!(current_section(std::iter::empty::<(&str, f64)>(), 68.0), "");
    }

    #[test]
    fn test_active_href_matching() {
        assert!(is_active_href(Some("#palvelut"), "palvelut"));
        assert!(!is_active_href(Some("#hinnasto"), "palvelut"));
        assert!(!is_active_href(Some("/palvelut"), "palvelut"));
        assert!(!is_active_href(None, "palvelut"));
    }
}
