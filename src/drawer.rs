//! Mobile navigation drawer.
//!
//! `DrawerState` is the source of truth; the `translate-x-full` class, the
//! overlay visibility, the body scroll lock and the hamburger-to-X morph are
//! effects applied when the state actually changes.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::config::PageConfig;
use crate::dom::{Listener, Mounted, body, query_all, query_all_in, report, require_id, set_style};
use crate::error::LandingError;

const NAME: &str = "drawer";
const HIDDEN_CLASS: &str = "translate-x-full";
const OVERLAY_HIDDEN: [&str; 2] = ["opacity-0", "pointer-events-none"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    /// Hamburger button.
    Toggle,
    /// Explicit close button inside the drawer.
    CloseButton,
    Overlay,
    Escape,
    /// A navigation link inside the drawer.
    LinkClick,
}

impl DrawerState {
    #[must_use]
    pub fn next(self, event: DrawerEvent) -> Self {
        match (self, event) {
            (Self::Closed, DrawerEvent::Toggle) => Self::Open,
            _ => Self::Closed,
        }
    }
}

/// Drawer state plus change detection.
#[derive(Debug, Default)]
pub struct DrawerCore {
    state: DrawerState,
}

impl DrawerCore {
    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Apply `event`; returns the new state only when it differs.
    pub fn handle(&mut self, event: DrawerEvent) -> Option<DrawerState> {
        let next = self.state.next(event);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

struct DrawerView {
    drawer: HtmlElement,
    overlay: HtmlElement,
    body: HtmlElement,
    bars: [HtmlElement; 3],
}

impl DrawerView {
    fn render(&self, state: DrawerState) -> Result<(), LandingError> {
        let open = state == DrawerState::Open;
        self.drawer.class_list().toggle_with_force(HIDDEN_CLASS, !open)?;
        for class in OVERLAY_HIDDEN {
            self.overlay.class_list().toggle_with_force(class, !open)?;
        }
        set_style(&self.body, "overflow", if open { "hidden" } else { "" })?;

        let [top, middle, bottom] = &self.bars;
        if open {
            set_style(top, "transform", "rotate(45deg) translate(6px, 6px)")?;
            set_style(middle, "opacity", "0")?;
            set_style(bottom, "transform", "rotate(-45deg) translate(6px, -6px)")?;
        } else {
            set_style(top, "transform", "")?;
            set_style(middle, "opacity", "1")?;
            set_style(bottom, "transform", "")?;
        }
        Ok(())
    }
}

struct DrawerShared {
    core: RefCell<DrawerCore>,
    view: DrawerView,
}

impl DrawerShared {
    fn dispatch(&self, event: DrawerEvent) {
        let changed = self.core.borrow_mut().handle(event);
        if let Some(state) = changed {
            log::debug!("{NAME}: {event:?} -> {state:?}");
            report(NAME, self.view.render(state));
        }
    }
}

pub struct Drawer {
    shared: Rc<DrawerShared>,
    _listeners: Vec<Listener>,
}

impl Drawer {
    pub fn mount(document: &Document, config: &PageConfig) -> Result<Self, LandingError> {
        let button = require_id(document, NAME, &config.menu_button_id)?;
        let close = require_id(document, NAME, &config.drawer_close_id)?;
        let overlay = require_id(document, NAME, &config.drawer_overlay_id)?;
        let drawer = require_id(document, NAME, &config.drawer_id)?;
        let bars = three_bars(&button, &config.menu_button_id)?;

        let shared = Rc::new(DrawerShared {
            core: RefCell::new(DrawerCore::default()),
            view: DrawerView { drawer, overlay: overlay.clone(), body: body(document, NAME)?, bars },
        });

        let mut listeners = vec![
            on_click(&button, &shared, DrawerEvent::Toggle)?,
            on_click(&close, &shared, DrawerEvent::CloseButton)?,
            on_click(&overlay, &shared, DrawerEvent::Overlay)?,
        ];
        for link in query_all(document, &config.drawer_link_selector)? {
            listeners.push(on_click(&link, &shared, DrawerEvent::LinkClick)?);
        }

        let keys = Rc::clone(&shared);
        listeners.push(Listener::new(document, "keydown", move |event| {
            let is_escape = event.dyn_ref::<KeyboardEvent>().is_some_and(|key| key.key() == "Escape");
            if is_escape && keys.core.borrow().state() == DrawerState::Open {
                keys.dispatch(DrawerEvent::Escape);
            }
        })?);

        log::debug!("{NAME}: mounted with {} listeners", listeners.len());
        Ok(Self { shared, _listeners: listeners })
    }
}

fn three_bars(button: &HtmlElement, button_id: &str) -> Result<[HtmlElement; 3], LandingError> {
    let mut spans = query_all_in(button, "span")?.into_iter();
    match (spans.next(), spans.next(), spans.next()) {
        (Some(top), Some(middle), Some(bottom)) => Ok([top, middle, bottom]),
        _ => Err(LandingError::missing(NAME, format!("#{button_id} span:nth-of-type(3)"))),
    }
}

fn on_click(target: &HtmlElement, shared: &Rc<DrawerShared>, event: DrawerEvent) -> Result<Listener, LandingError> {
    let shared = Rc::clone(shared);
    Listener::new(target, "click", move |_| shared.dispatch(event))
}

impl Mounted for Drawer {
    fn name(&self) -> &'static str {
        NAME
    }

    /// Closes an open drawer so the scroll lock never outlives the component.
    fn dispose(self: Box<Self>) {
        self.shared.dispatch(DrawerEvent::CloseButton);
    }
}
