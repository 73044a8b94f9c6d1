//! DOM lookup and event-listener plumbing shared by every component.
//!
//! Components never reach for ambient globals: the page hands them a
//! `Window` and `Document`, and they resolve their required handles through
//! `require_id` / `require_selector`, which turn an absent element into a
//! `LandingError::MissingElement` naming the component.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::LandingError;

/// A mounted component. Disposing detaches its listeners and undoes any
/// page-level side effect it still holds (scroll lock, for example).
pub trait Mounted {
    fn name(&self) -> &'static str;
    fn dispose(self: Box<Self>);
}

pub fn window() -> Result<Window, LandingError> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, LandingError> {
    window.document().ok_or(LandingError::NoDocument)
}

pub fn body(document: &Document, component: &'static str) -> Result<HtmlElement, LandingError> {
    document.body().ok_or_else(|| LandingError::missing(component, "body"))
}

fn as_html(element: &Element) -> Option<HtmlElement> {
    element.dyn_ref::<HtmlElement>().cloned()
}

/// Resolve an element by id or fail with a diagnostic naming `component`.
pub fn require_id(document: &Document, component: &'static str, id: &str) -> Result<HtmlElement, LandingError> {
    document
        .get_element_by_id(id)
        .as_ref()
        .and_then(as_html)
        .ok_or_else(|| LandingError::missing(component, format!("#{id}")))
}

/// Resolve the first element matching `selector` or fail.
pub fn require_selector(
    document: &Document,
    component: &'static str,
    selector: &str,
) -> Result<HtmlElement, LandingError> {
    document
        .query_selector(selector)?
        .as_ref()
        .and_then(as_html)
        .ok_or_else(|| LandingError::missing(component, selector))
}

/// Resolve an element by id when the page may legitimately omit it.
pub fn optional_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).as_ref().and_then(as_html)
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, LandingError> {
    Ok(collect_html(&document.query_selector_all(selector)?))
}

/// Every element matching `selector` below `root`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, LandingError> {
    Ok(collect_html(&root.query_selector_all(selector)?))
}

fn collect_html(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<HtmlElement>().cloned())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), LandingError> {
    element.style().set_property(property, value)?;
    Ok(())
}

/// An attached event listener. Dropping it detaches the callback.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, LandingError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), kind, callback })
    }

    /// Attach with `passive: true`, for scroll handlers that never cancel.
    pub fn passive(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, LandingError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("failed to detach {} listener: {err:?}", self.kind);
        }
    }
}

/// Log a failed effect inside an event handler, where there is no caller to
/// propagate to.
pub fn report(component: &'static str, result: Result<(), LandingError>) {
    if let Err(err) = result {
        log::warn!("{component}: {err}");
    }
}
