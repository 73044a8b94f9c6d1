//! Page lifecycle: mounts every component with injected handles and keeps
//! them alive until `dispose`.
//!
//! A component whose required elements are missing is skipped with a
//! warning naming the component and the selector; the rest of the page still
//! mounts.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::cards::Cards;
use crate::confetti::{Confetti, CtaConfetti};
use crate::config::PageConfig;
use crate::dom::{self, Listener, Mounted, body};
use crate::drawer::Drawer;
use crate::error::LandingError;
use crate::forms::{FormHandler, FormKind};
use crate::konami::Konami;
use crate::reveal::Reveal;
use crate::ripple::Ripple;
use crate::scroll::{AnchorScroll, ScrollEffects};
use crate::theme::ThemeToggle;

const LOADED_CLASS: &str = "loaded";

/// Adds `loaded` to `<body>` once the window has finished loading, so CSS
/// can hold back entrance animations until then.
struct LoadMarker {
    _load: Option<Listener>,
}

impl LoadMarker {
    fn mount(window: &Window, document: &Document) -> Result<Self, LandingError> {
        let body = body(document, "load-marker")?;
        if document.ready_state() == "complete" {
            body.class_list().add_1(LOADED_CLASS)?;
            return Ok(Self { _load: None });
        }
        let load = Listener::new(window, "load", move |_| {
            dom::report("load-marker", body.class_list().add_1(LOADED_CLASS).map_err(LandingError::from));
        })?;
        Ok(Self { _load: Some(load) })
    }
}

impl Mounted for LoadMarker {
    fn name(&self) -> &'static str {
        "load-marker"
    }

    fn dispose(self: Box<Self>) {}
}

/// Handle returned to the host page. Dropping it without `dispose` leaves the
/// listeners attached for the page lifetime.
#[wasm_bindgen]
pub struct LandingPage {
    mounted: Vec<Box<dyn Mounted>>,
}

impl LandingPage {
    pub fn mount(config: &PageConfig) -> Result<Self, LandingError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let mut page = Self { mounted: Vec::new() };

        page.attach(ThemeToggle::mount(&window, &document, config));
        page.attach(Drawer::mount(&document, config));
        page.attach(AnchorScroll::mount(&window, &document, config));
        page.attach(ScrollEffects::mount(&window, &document, config));
        page.attach(Reveal::mount(&document, config));
        page.attach(Cards::mount(&document, config));
        page.attach(Ripple::mount(&document, config));
        page.attach(Konami::mount(&document));
        page.attach(LoadMarker::mount(&window, &document));

        match Confetti::new(&window, &document, config) {
            Ok(confetti) => {
                page.attach(CtaConfetti::mount(&document, config, &confetti));
                page.attach(FormHandler::mount(&window, &document, config, FormKind::Enrollment, &confetti));
                page.attach(FormHandler::mount(&window, &document, config, FormKind::Contact, &confetti));
            }
            Err(err) => log::warn!("confetti unavailable, forms not mounted: {err}"),
        }

        log::info!("🎉 TaskBnb loaded successfully! ({} components)", page.mounted.len());
        Ok(page)
    }

    fn attach<C: Mounted + 'static>(&mut self, result: Result<C, LandingError>) {
        match result {
            Ok(component) => {
                log::debug!("mounted {}", component.name());
                self.mounted.push(Box::new(component));
            }
            Err(err) => log::warn!("skipped: {err}"),
        }
    }
}

#[wasm_bindgen]
impl LandingPage {
    /// Names of the components that mounted, in mount order.
    #[wasm_bindgen(js_name = mountedComponents)]
    pub fn mounted_components(&self) -> Vec<String> {
        self.mounted.iter().map(|c| c.name().to_owned()).collect()
    }

    /// Detach every listener and release page-level effects.
    pub fn dispose(&mut self) {
        for component in self.mounted.drain(..).rev() {
            log::debug!("disposing {}", component.name());
            component.dispose();
        }
    }
}
