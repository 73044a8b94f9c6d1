//! Scroll-linked effects: nav shadow, hero parallax, pricing CTA relabel,
//! and offset smooth-scrolling for in-page anchors.
//!
//! Every scroll event recomputes the full `ScrollFrame` from the current
//! offset alone. Nothing depends on scroll direction or history.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::PageConfig;
use crate::consts::{ANCHOR_SCROLL_OFFSET_PX, HERO_PARALLAX_FACTOR, NAV_SHADOW_THRESHOLD_PX};
use crate::dom::{Listener, Mounted, optional_id, query_all, report, require_selector, set_style};
use crate::error::LandingError;

const NAME: &str = "scroll";
const ANCHOR_NAME: &str = "anchors";
const SHADOW_CLASS: &str = "shadow-lg";
const CHOOSE_PLAN_HTML: &str =
    r#"<span class="material-symbols-outlined inline-block align-middle">rocket_launch</span> Choose Plan"#;
const START_FREE_TEXT: &str = "Start Free Today";

#[must_use]
pub fn nav_shadow(scroll_y: f64) -> bool {
    scroll_y > NAV_SHADOW_THRESHOLD_PX
}

#[must_use]
pub fn hero_offset(scroll_y: f64) -> f64 {
    scroll_y * HERO_PARALLAX_FACTOR
}

/// Window scroll target for an anchor whose section starts at `offset_top`.
#[must_use]
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - ANCHOR_SCROLL_OFFSET_PX
}

/// Everything the scroll handler writes for one scroll position.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    pub shadow: bool,
    pub hero_transform: String,
}

impl ScrollFrame {
    #[must_use]
    pub fn at(scroll_y: f64) -> Self {
        Self { shadow: nav_shadow(scroll_y), hero_transform: format!("translateY({}px)", hero_offset(scroll_y)) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaLabel {
    ChoosePlan,
    StartFree,
}

/// Whether the bottom edge of the viewport has passed the pricing section top.
#[must_use]
pub fn pricing_in_reach(scroll_y: f64, viewport_height: f64, pricing_top: f64) -> bool {
    scroll_y + viewport_height > pricing_top
}

/// The label a CTA should switch to, if any, given its current text.
#[must_use]
pub fn cta_relabel(current: &str, in_reach: bool) -> Option<CtaLabel> {
    if in_reach {
        (current.contains("Get Started") || current.contains("Start Free")).then_some(CtaLabel::ChoosePlan)
    } else {
        current.contains("Choose").then_some(CtaLabel::StartFree)
    }
}

fn apply_label(cta: &HtmlElement, label: CtaLabel) {
    match label {
        CtaLabel::ChoosePlan => cta.set_inner_html(CHOOSE_PLAN_HTML),
        CtaLabel::StartFree => cta.set_text_content(Some(START_FREE_TEXT)),
    }
}

struct PricingCtas {
    section: HtmlElement,
    ctas: Vec<HtmlElement>,
}

impl PricingCtas {
    fn update(&self, scroll_y: f64, viewport_height: f64) {
        let in_reach = pricing_in_reach(scroll_y, viewport_height, f64::from(self.section.offset_top()));
        for cta in &self.ctas {
            let text = cta.text_content().unwrap_or_default();
            if let Some(label) = cta_relabel(&text, in_reach) {
                apply_label(cta, label);
            }
        }
    }
}

struct ScrollView {
    window: Window,
    nav: HtmlElement,
    hero: HtmlElement,
    pricing: Option<PricingCtas>,
}

impl ScrollView {
    fn on_scroll(&self) -> Result<(), LandingError> {
        let scroll_y = self.window.scroll_y()?;
        let frame = ScrollFrame::at(scroll_y);
        self.nav.class_list().toggle_with_force(SHADOW_CLASS, frame.shadow)?;
        set_style(&self.hero, "transform", &frame.hero_transform)?;

        if let Some(pricing) = &self.pricing {
            let viewport_height = self.window.inner_height()?.as_f64().unwrap_or(0.0);
            pricing.update(scroll_y, viewport_height);
        }
        Ok(())
    }
}

/// Nav shadow, hero parallax and pricing CTA relabel, recomputed on every
/// scroll event.
pub struct ScrollEffects {
    _scroll: Listener,
}

impl ScrollEffects {
    pub fn mount(window: &Window, document: &Document, config: &PageConfig) -> Result<Self, LandingError> {
        let nav = require_selector(document, NAME, &config.nav_selector)?;
        let hero = require_selector(document, NAME, &config.section_selector)?;
        let pricing = match optional_id(document, &config.pricing_id) {
            Some(section) => Some(PricingCtas { section, ctas: query_all(document, &config.pricing_cta_selector)? }),
            None => {
                log::debug!("{NAME}: no #{} section, CTA relabel disabled", config.pricing_id);
                None
            }
        };

        let view = ScrollView { window: window.clone(), nav, hero, pricing };
        let scroll = Listener::passive(window, "scroll", move |_| report(NAME, view.on_scroll()))?;
        Ok(Self { _scroll: scroll })
    }
}

impl Mounted for ScrollEffects {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dispose(self: Box<Self>) {}
}

/// Smooth-scrolls in-page `#anchor` links to their target, leaving room for
/// the fixed nav.
pub struct AnchorScroll {
    _clicks: Vec<Listener>,
}

impl AnchorScroll {
    pub fn mount(window: &Window, document: &Document, config: &PageConfig) -> Result<Self, LandingError> {
        let mut clicks = Vec::new();
        for anchor in query_all(document, &config.anchor_selector)? {
            let window = window.clone();
            let document = document.clone();
            let link = anchor.clone();
            clicks.push(Listener::new(&anchor, "click", move |event| {
                event.prevent_default();
                report(ANCHOR_NAME, scroll_to_anchor(&window, &document, &link));
            })?);
        }
        log::debug!("{ANCHOR_NAME}: {} in-page links", clicks.len());
        Ok(Self { _clicks: clicks })
    }
}

fn scroll_to_anchor(window: &Window, document: &Document, link: &HtmlElement) -> Result<(), LandingError> {
    let Some(href) = link.get_attribute("href") else {
        return Ok(());
    };
    if href.len() < 2 {
        return Ok(());
    }
    let Some(target) = document.query_selector(&href)? else {
        return Ok(());
    };
    let Some(target) = target.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

impl Mounted for AnchorScroll {
    fn name(&self) -> &'static str {
        ANCHOR_NAME
    }

    fn dispose(self: Box<Self>) {}
}
