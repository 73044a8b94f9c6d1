//! Scroll-triggered section reveal.
//!
//! Every section starts transparent and 30px low. The first intersection
//! report for a section moves it to full opacity and zero offset. Reveal is
//! one-shot: sections are never re-hidden, and later reports for a visible
//! section are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::PageConfig;
use crate::consts::{REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, REVEAL_TRANSITION};
use crate::dom::{Mounted, query_all, report, set_style};
use crate::error::LandingError;

const NAME: &str = "reveal";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// CSS `(opacity, transform)` for this state.
    #[must_use]
    pub fn style(self) -> (&'static str, String) {
        match self {
            Self::Hidden => ("0", format!("translateY({REVEAL_OFFSET_PX}px)")),
            Self::Visible => ("1", "translateY(0)".to_owned()),
        }
    }
}

/// Per-section reveal state, indexed in document order.
#[derive(Debug)]
pub struct RevealCore {
    states: Vec<RevealState>,
}

impl RevealCore {
    #[must_use]
    pub fn new(sections: usize) -> Self {
        Self { states: vec![RevealState::Hidden; sections] }
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Record an intersection report. Returns `true` only on the report that
    /// first reveals the section.
    pub fn report(&mut self, index: usize, intersecting: bool) -> bool {
        let Some(state) = self.states.get_mut(index) else {
            return false;
        };
        if !intersecting || *state == RevealState::Visible {
            return false;
        }
        *state = RevealState::Visible;
        true
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.states.iter().filter(|s| **s == RevealState::Visible).count()
    }
}

fn apply(section: &HtmlElement, state: RevealState) -> Result<(), LandingError> {
    let (opacity, transform) = state.style();
    set_style(section, "opacity", opacity)?;
    set_style(section, "transform", &transform)
}

pub struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Reveal {
    pub fn mount(document: &Document, config: &PageConfig) -> Result<Self, LandingError> {
        let sections = query_all(document, &config.section_selector)?;
        for section in &sections {
            apply(section, RevealState::Hidden)?;
            set_style(section, "transition", REVEAL_TRANSITION)?;
        }

        let core = Rc::new(RefCell::new(RevealCore::new(sections.len())));
        let targets = sections.clone();
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = targets.iter().position(|s| AsRef::<Element>::as_ref(s) == &target) else {
                    continue;
                };
                if core.borrow_mut().report(index, entry.is_intersecting()) {
                    report(NAME, apply(&targets[index], RevealState::Visible));
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for section in &sections {
            observer.observe(section);
        }

        log::debug!("{NAME}: observing {} sections", sections.len());
        Ok(Self { observer, _callback: callback })
    }
}

impl Mounted for Reveal {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dispose(self: Box<Self>) {
        self.observer.disconnect();
    }
}
