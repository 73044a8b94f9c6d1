//! Card hover lift and staggered emoji pulses.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use web_sys::Document;

use crate::config::PageConfig;
use crate::consts::PULSE_STAGGER_MS;
use crate::dom::{Listener, Mounted, query_all, report, set_style};
use crate::error::LandingError;

const NAME: &str = "cards";
const LIFTED: &str = "translateY(-8px) scale(1.02)";
const RESTING: &str = "translateY(0) scale(1)";

/// `animation-delay` for the `index`-th pulsing emoji.
#[must_use]
pub fn pulse_delay(index: usize) -> String {
    format!("{}ms", index * PULSE_STAGGER_MS)
}

pub struct Cards {
    _hover: Vec<Listener>,
}

impl Cards {
    pub fn mount(document: &Document, config: &PageConfig) -> Result<Self, LandingError> {
        let mut hover = Vec::new();
        for card in query_all(document, &config.card_selector)? {
            let enter = card.clone();
            hover.push(Listener::new(&card, "mouseenter", move |_| {
                report(NAME, set_style(&enter, "transform", LIFTED));
            })?);
            let leave = card.clone();
            hover.push(Listener::new(&card, "mouseleave", move |_| {
                report(NAME, set_style(&leave, "transform", RESTING));
            })?);
        }

        let pulses = query_all(document, &config.pulse_selector)?;
        for (index, emoji) in pulses.iter().enumerate() {
            set_style(emoji, "animation-delay", &pulse_delay(index))?;
        }

        log::debug!("{NAME}: {} hover listeners, {} pulses", hover.len(), pulses.len());
        Ok(Self { _hover: hover })
    }
}

impl Mounted for Cards {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dispose(self: Box<Self>) {}
}
