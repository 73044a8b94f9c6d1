//! Interaction layer for the TaskBnb marketing landing page.
//!
//! This crate is compiled to WebAssembly and attaches to server-rendered
//! static markup. Each component keeps its decisions in a plain type that is
//! tested natively (`DrawerCore`, `RevealCore`, `ScrollFrame`, `Burst`,
//! `Intake::submit`, ...) and wraps it in a thin browser binding that owns
//! the DOM handles and listener closures.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Mounts every component and owns their lifecycle |
//! | [`theme`] | Light/dark preference store and toggle |
//! | [`drawer`] | Mobile navigation drawer state machine |
//! | [`reveal`] | One-shot section reveal on viewport entry |
//! | [`scroll`] | Nav shadow, hero parallax, CTA relabel, anchor scrolling |
//! | [`ripple`] | Click ripple overlay |
//! | [`particle`] | Confetti physics, frame clock and bursts |
//! | [`confetti`] | Confetti rendering and the CTA trigger |
//! | [`forms`] | Enrollment and contact submission |
//! | [`cards`] | Card hover lift and pulse stagger |
//! | [`konami`] | Easter egg key buffer |
//! | [`config`] | DOM contract and tunables |
//! | [`dom`] | Element lookup and listener plumbing |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants |
//!
//! ## Host usage
//!
//! ```js
//! import init, { boot } from "./pkg/landing.js";
//! await init();
//! const page = boot();
//! ```
//!
//! Call `boot` after `DOMContentLoaded`; it resolves elements once.

pub mod cards;
pub mod confetti;
pub mod config;
pub mod consts;
pub mod dom;
pub mod drawer;
pub mod error;
pub mod forms;
pub mod konami;
pub mod page;
pub mod particle;
pub mod reveal;
pub mod ripple;
pub mod scroll;
pub mod theme;

use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::error::LandingError;
use crate::page::LandingPage;

impl From<LandingError> for JsValue {
    fn from(err: LandingError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Module initialisation: panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        // A second module instance on the same page already installed one.
        log::debug!("logger already installed: {err}");
    }
}

/// Mount the page with the stock DOM contract.
#[wasm_bindgen]
pub fn boot() -> Result<LandingPage, JsValue> {
    Ok(LandingPage::mount(&PageConfig::default())?)
}

/// Mount the page with a JSON `PageConfig` override.
#[wasm_bindgen(js_name = bootWithConfig)]
pub fn boot_with_config(config: &str) -> Result<LandingPage, JsValue> {
    let config = PageConfig::from_json(config)?;
    Ok(LandingPage::mount(&config)?)
}
