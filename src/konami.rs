//! Konami-code easter egg.

#[cfg(test)]
#[path = "konami_test.rs"]
mod konami_test;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::consts::WIGGLE_MS;
use crate::dom::{Listener, Mounted, body, report, set_style};
use crate::error::LandingError;

const NAME: &str = "konami";

pub const SEQUENCE: [&str; 10] =
    ["ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft", "ArrowRight", "b", "a"];

/// The most recent keys, capped at the sequence length.
#[derive(Debug, Default)]
pub struct KeyBuffer {
    keys: VecDeque<String>,
}

impl KeyBuffer {
    /// Record `key`; returns `true` when the buffer now spells the sequence.
    pub fn push(&mut self, key: &str) -> bool {
        if self.keys.len() == SEQUENCE.len() {
            self.keys.pop_front();
        }
        self.keys.push_back(key.to_owned());
        self.matches()
    }

    #[must_use]
    pub fn matches(&self) -> bool {
        self.keys.len() == SEQUENCE.len() && self.keys.iter().zip(SEQUENCE).all(|(key, want)| key == want)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

pub struct Konami {
    _keydown: Listener,
}

impl Konami {
    pub fn mount(document: &Document) -> Result<Self, LandingError> {
        let body = body(document, NAME)?;
        let buffer = Rc::new(RefCell::new(KeyBuffer::default()));
        let keydown = Listener::new(document, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if buffer.borrow_mut().push(&key) {
                report(NAME, wiggle(&body));
            }
        })?;
        Ok(Self { _keydown: keydown })
    }
}

fn wiggle(body: &HtmlElement) -> Result<(), LandingError> {
    set_style(body, "animation", "wiggle 0.5s ease")?;
    log::info!("🎮 Secret code activated! You are a property management ninja! 🥷");
    let body = body.clone();
    Timeout::new(WIGGLE_MS, move || report(NAME, set_style(&body, "animation", ""))).forget();
    Ok(())
}

impl Mounted for Konami {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dispose(self: Box<Self>) {}
}
