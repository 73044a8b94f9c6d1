//! Page configuration: the DOM contract and the tunable burst counts.
//!
//! Defaults describe the stock landing page markup. A host page that renames
//! an element passes a JSON override to `boot_with_config`; any field left out
//! keeps its default.

use serde::Deserialize;

use crate::consts::{
    BURST_STAGGER_MS, CONFETTI_PER_BURST, CONTACT_BURSTS, ENROLLMENT_BURSTS, MAX_BURST_STAGGER_MS, MAX_BURSTS,
    MAX_CONFETTI_PER_BURST,
};
use crate::error::LandingError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    // Theme
    /// Button that flips the theme.
    pub theme_toggle_id: String,
    /// Icon shown while the light theme is active.
    pub theme_icon_light_id: String,
    /// Icon shown while the dark theme is active.
    pub theme_icon_dark_id: String,
    /// `localStorage` key holding `light` or `dark`.
    pub theme_storage_key: String,
    /// Class toggled on `<body>` for the dark theme.
    pub dark_class: String,

    // Drawer
    /// Hamburger button that toggles the drawer.
    pub menu_button_id: String,
    /// Slide-in drawer panel.
    pub drawer_id: String,
    /// Backdrop behind the open drawer.
    pub drawer_overlay_id: String,
    /// Close button inside the drawer.
    pub drawer_close_id: String,
    /// Navigation links inside the drawer.
    pub drawer_link_selector: String,

    // Scroll
    /// Fixed navigation bar that gains a shadow on scroll.
    pub nav_selector: String,
    /// Sections revealed on viewport entry. The first one is the hero.
    pub section_selector: String,
    /// Pricing section whose reach relabels the CTA.
    pub pricing_id: String,
    /// Call-to-action links pointing at pricing.
    pub pricing_cta_selector: String,
    /// In-page links that smooth-scroll.
    pub anchor_selector: String,

    // Decoration
    /// Elements that spawn a ripple on click.
    pub ripple_selector: String,
    /// Cards that lift on hover.
    pub card_selector: String,
    /// Emojis given staggered pulse delays.
    pub pulse_selector: String,

    // Forms
    /// Enrollment form.
    pub enrollment_form_id: String,
    /// Contact form.
    pub contact_form_id: String,
    /// Particles per confetti burst.
    pub confetti_per_burst: usize,
    /// Bursts after an enrollment.
    pub enrollment_bursts: u32,
    /// Bursts after a contact submission.
    pub contact_bursts: u32,
    /// Delay between consecutive bursts.
    pub burst_stagger_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_toggle_id: "theme-toggle".to_owned(),
            theme_icon_light_id: "theme-icon-light".to_owned(),
            theme_icon_dark_id: "theme-icon-dark".to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            dark_class: "dark-mode".to_owned(),
            menu_button_id: "mobile-menu-button".to_owned(),
            drawer_id: "mobile-drawer".to_owned(),
            drawer_overlay_id: "mobile-drawer-overlay".to_owned(),
            drawer_close_id: "close-drawer".to_owned(),
            drawer_link_selector: ".drawer-link".to_owned(),
            nav_selector: "nav".to_owned(),
            section_selector: "section".to_owned(),
            pricing_id: "pricing".to_owned(),
            pricing_cta_selector: "a[href=\"#pricing\"]".to_owned(),
            anchor_selector: "a[href^=\"#\"]".to_owned(),
            ripple_selector: "button, a[class*=\"bg-primary\"], a[class*=\"bg-secondary\"]".to_owned(),
            card_selector: ".card-hover".to_owned(),
            pulse_selector: ".pulse".to_owned(),
            enrollment_form_id: "enrollment-form".to_owned(),
            contact_form_id: "contact-form".to_owned(),
            confetti_per_burst: CONFETTI_PER_BURST,
            enrollment_bursts: ENROLLMENT_BURSTS,
            contact_bursts: CONTACT_BURSTS,
            burst_stagger_ms: BURST_STAGGER_MS,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override. Missing fields keep their defaults; unknown
    /// fields are rejected.
    pub fn from_json(raw: &str) -> Result<Self, LandingError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(trimmed)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), LandingError> {
        if self.theme_storage_key.is_empty() {
            return Err(LandingError::Config("theme_storage_key must not be empty".into()));
        }
        if !(1..=MAX_CONFETTI_PER_BURST).contains(&self.confetti_per_burst) {
            return Err(LandingError::Config(format!(
                "confetti_per_burst must be between 1 and {MAX_CONFETTI_PER_BURST}"
            )));
        }
        for (field, count) in [("enrollment_bursts", self.enrollment_bursts), ("contact_bursts", self.contact_bursts)] {
            if count > MAX_BURSTS {
                return Err(LandingError::Config(format!("{field} must be at most {MAX_BURSTS}")));
            }
        }
        if self.burst_stagger_ms > MAX_BURST_STAGGER_MS {
            return Err(LandingError::Config(format!("burst_stagger_ms must be at most {MAX_BURST_STAGGER_MS}")));
        }
        Ok(())
    }
}
