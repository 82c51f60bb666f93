//! Site configuration.
//!
//! Centralized constants for the Luova Kampaamo behaviors. Page-specific
//! values that the static HTML owns (the form destination, the button label)
//! are read from the contact form host element when the page mounts the
//! form instead of carrying its own `#contact-form`.

use crate::error::{SiteError, SiteResult};

/// Console log level.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

// =============================================================================
// Navigation
// =============================================================================

/// Scroll offset (px) after which the header gets the `scrolled` class.
pub const SCROLLED_THRESHOLD_PX: f64 = 40.0;

/// Navigation bar height used when `--nav-height` is missing or zero.
pub const DEFAULT_NAV_HEIGHT_PX: f64 = 68.0;

/// Root CSS custom property holding the navigation bar height.
pub const NAV_HEIGHT_PROPERTY: &str = "--nav-height";

/// Extra gap kept between the nav bar and an anchor target.
pub const ANCHOR_GAP_PX: f64 = 8.0;

/// How far below the nav bar a section may start and still count as current.
pub const ACTIVE_SECTION_SLACK_PX: f64 = 60.0;

/// `aria-label` of the hamburger while the menu is closed.
pub const MENU_OPEN_LABEL: &str = "Avaa valikko";

/// `aria-label` of the hamburger while the menu is open.
pub const MENU_CLOSE_LABEL: &str = "Sulje valikko";

// =============================================================================
// Fade-in
// =============================================================================

/// Elements revealed on scroll.
pub const FADE_IN_SELECTORS: &[&str] = &[
    ".service-card",
    ".pricing-category",
    ".about-image-col",
    ".about-content-col",
    ".section-header",
    ".trust-item",
    ".mid-cta-inner",
    ".contact-info",
    ".contact-form-wrap",
];

/// Delay added per sibling position.
pub const FADE_STAGGER_STEP_MS: u32 = 80;

/// Upper bound for the stagger delay.
pub const FADE_STAGGER_MAX_MS: u32 = 320;

/// Visible ratio that triggers a reveal.
pub const FADE_THRESHOLD: f64 = 0.12;

/// Observer root margin; reveals slightly before the bottom edge.
pub const FADE_ROOT_MARGIN: &str = "0px 0px -40px 0px";

// =============================================================================
// Contact form
// =============================================================================

/// Element the contact form is mounted into.
pub const CONTACT_FORM_HOST_ID: &str = "contact-form-host";

/// Host attribute with the form destination URL.
pub const ACTION_ATTRIBUTE: &str = "data-action";

/// Host attribute overriding the idle submit label.
pub const SUBMIT_LABEL_ATTRIBUTE: &str = "data-submit-label";

/// Idle submit label when the host does not set one.
pub const DEFAULT_SUBMIT_LABEL: &str = "Lähetä viesti";

/// Button label while the request is in flight.
pub const SENDING_LABEL: &str = "Lähetetään…";

/// Button label after a successful send.
pub const SENT_LABEL: &str = "Lähetetty ✓";

/// Status message after a successful send.
pub const SUCCESS_MESSAGE: &str = "✓ Viesti lähetetty! Palaamme sinulle pian.";

/// Status message for a rejection without structured errors.
pub const REJECTED_FALLBACK_MESSAGE: &str =
    "Lähetys epäonnistui. Kokeile soittaa tai laita sähköpostia.";

/// Runtime settings of the contact form, taken from its host element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormConfig {
    /// Endpoint the form posts to.
    pub action: String,
    /// Button label while idle.
    pub submit_label: String,
}

impl ContactFormConfig {
    /// Build from the raw host attributes.
    ///
    /// The action is required; a blank label falls back to
    /// [`DEFAULT_SUBMIT_LABEL`].
    pub fn from_attributes(action: Option<String>, submit_label: Option<String>) -> SiteResult<Self> {
        let action = action
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .ok_or(SiteError::MissingAttribute {
                element: CONTACT_FORM_HOST_ID,
                attribute: ACTION_ATTRIBUTE,
            })?;

        let submit_label = submit_label
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBMIT_LABEL.to_string());

        Ok(Self { action, submit_label })
    }

    /// Read the settings from the host element.
    pub fn from_host(host: &web_sys::Element) -> SiteResult<Self> {
        Self::from_attributes(
            host.get_attribute(ACTION_ATTRIBUTE),
            host.get_attribute(SUBMIT_LABEL_ATTRIBUTE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_action() {
        let err = ContactFormConfig::from_attributes(None, None).unwrap_err();
        assert!(err.to_string().contains(ACTION_ATTRIBUTE));

        let err = ContactFormConfig::from_attributes(Some("   ".into()), None).unwrap_err();
        assert!(matches!(err, SiteError::MissingAttribute { .. }));
    }

    #[test]
    fn test_config_label_fallback() {
        let config = ContactFormConfig::from_attributes(
            Some(" https://formspree.io/f/abc ".into()),
            Some("".into()),
        )
        .unwrap();
        assert_eq!(config.action, "https://formspree.io/f/abc");
        assert_eq!(config.submit_label, DEFAULT_SUBMIT_LABEL);

        let config = ContactFormConfig::from_attributes(
            Some("/contact".into()),
            Some("Varaa aika".into()),
        )
        .unwrap();
        assert_eq!(config.submit_label, "Varaa aika");
    }
}
