//! Material-style click ripple.
//!
//! Each click appends a square `span.ripple-effect` centered on the pointer
//! and removes it after `RIPPLE_LIFETIME_MS`, whether or not the CSS
//! animation has finished. Ripples are not pooled; rapid clicks stack.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, HtmlElement, MouseEvent};

use crate::config::PageConfig;
use crate::consts::RIPPLE_LIFETIME_MS;
use crate::dom::{Listener, Mounted, query_all, report, set_style};
use crate::error::LandingError;

const NAME: &str = "ripple";
const STYLE_ID: &str = "ripple-effect-style";
const RIPPLE_CLASS: &str = "ripple-effect";
const RIPPLE_CSS: &str = "
    .ripple-effect {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.6);
        transform: scale(0);
        animation: ripple-animation 0.6s ease-out;
        pointer-events: none;
    }

    @keyframes ripple-animation {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
";

/// Client-space bounding box of the clicked element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<&DomRect> for Bounds {
    fn from(rect: &DomRect) -> Self {
        Self { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
    }
}

/// Size and element-local position of one ripple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    #[must_use]
    pub fn at(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let size = bounds.width.max(bounds.height);
        Self { size, left: client_x - bounds.left - size / 2.0, top: client_y - bounds.top - size / 2.0 }
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.size / 2.0, self.top + self.size / 2.0)
    }
}

/// Counts ripples currently in the document.
#[derive(Debug, Default)]
pub struct RippleTracker {
    live: usize,
    peak: usize,
}

impl RippleTracker {
    pub fn spawned(&mut self) {
        self.live += 1;
        self.peak = self.peak.max(self.live);
    }

    pub fn expired(&mut self) {
        self.live = self.live.saturating_sub(1);
    }

    #[must_use]
    pub fn live(&self) -> usize {
        self.live
    }

    #[must_use]
    pub fn peak(&self) -> usize {
        self.peak
    }
}

pub struct Ripple {
    tracker: Rc<RefCell<RippleTracker>>,
    _clicks: Vec<Listener>,
}

impl Ripple {
    pub fn mount(document: &Document, config: &PageConfig) -> Result<Self, LandingError> {
        inject_stylesheet(document)?;

        let tracker = Rc::new(RefCell::new(RippleTracker::default()));
        let mut clicks = Vec::new();
        for host in query_all(document, &config.ripple_selector)? {
            let document = document.clone();
            let target = host.clone();
            let tracker = Rc::clone(&tracker);
            clicks.push(Listener::new(&host, "click", move |event| {
                let Some(click) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                report(NAME, spawn(&document, &target, click, &tracker));
            })?);
        }

        log::debug!("{NAME}: {} hosts", clicks.len());
        Ok(Self { tracker, _clicks: clicks })
    }
}

fn inject_stylesheet(document: &Document) -> Result<(), LandingError> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or_else(|| LandingError::missing(NAME, "head"))?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(RIPPLE_CSS));
    head.append_child(&style)?;
    Ok(())
}

fn spawn(
    document: &Document,
    host: &HtmlElement,
    click: &MouseEvent,
    tracker: &Rc<RefCell<RippleTracker>>,
) -> Result<(), LandingError> {
    let bounds = Bounds::from(&host.get_bounding_client_rect());
    let geometry = RippleGeometry::at(bounds, f64::from(click.client_x()), f64::from(click.client_y()));

    let ripple = document.create_element("span")?.unchecked_into::<HtmlElement>();
    let size = format!("{}px", geometry.size);
    set_style(&ripple, "width", &size)?;
    set_style(&ripple, "height", &size)?;
    set_style(&ripple, "left", &format!("{}px", geometry.left))?;
    set_style(&ripple, "top", &format!("{}px", geometry.top))?;
    ripple.class_list().add_1(RIPPLE_CLASS)?;
    host.append_child(&ripple)?;
    tracker.borrow_mut().spawned();

    let tracker = Rc::clone(tracker);
    Timeout::new(RIPPLE_LIFETIME_MS, move || {
        ripple.remove();
        tracker.borrow_mut().expired();
    })
    .forget();
    Ok(())
}

impl Mounted for Ripple {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dispose(self: Box<Self>) {
        let tracker = self.tracker.borrow();
        log::debug!("{NAME}: disposed with {} live, peak {}", tracker.live(), tracker.peak());
    }
}
