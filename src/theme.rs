//! Theme preference and the light/dark toggle.
//!
//! The preference is one `localStorage` entry (`theme` = `light` | `dark`),
//! written on every toggle and never removed. `PreferenceStore` is generic
//! over the storage backend so the round-trip logic is testable without a
//! browser.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed write is logged and the in-page
//! theme change still happens.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;

use web_sys::{Document, HtmlElement, Storage, Window};

use crate::config::PageConfig;
use crate::dom::{Listener, Mounted, body, report, require_id};
use crate::error::LandingError;

const NAME: &str = "theme";
const HIDDEN_CLASS: &str = "hidden";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `dark` reads as light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Minimal string key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, LandingError>;
    fn set(&self, key: &str, value: &str) -> Result<(), LandingError>;
}

pub struct PreferenceStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    /// The stored theme, or `Light` when nothing readable is stored.
    pub fn get(&self) -> Theme {
        match self.backend.get(&self.key) {
            Ok(raw) => Theme::from_stored(raw.as_deref()),
            Err(err) => {
                log::warn!("{NAME}: reading preference failed: {err}");
                Theme::Light
            }
        }
    }

    pub fn set(&self, theme: Theme) -> Result<(), LandingError> {
        self.backend.set(&self.key, theme.as_str())
    }
}

/// `window.localStorage`, when the browser exposes it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("{NAME}: localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, LandingError> {
        self.storage
            .as_ref()
            .ok_or_else(|| LandingError::Storage("localStorage is disabled".into()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, LandingError> {
        match &self.storage {
            Some(storage) => Ok(storage.get_item(key)?),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| LandingError::Storage(format!("{err:?}")))
    }
}

struct ThemeView {
    body: HtmlElement,
    icon_light: HtmlElement,
    icon_dark: HtmlElement,
    dark_class: String,
}

impl ThemeView {
    fn apply(&self, theme: Theme) -> Result<(), LandingError> {
        let dark = theme.is_dark();
        self.body.class_list().toggle_with_force(&self.dark_class, dark)?;
        self.icon_light.class_list().toggle_with_force(HIDDEN_CLASS, dark)?;
        self.icon_dark.class_list().toggle_with_force(HIDDEN_CLASS, !dark)?;
        Ok(())
    }
}

/// Applies the stored theme at mount and flips it on each toggle click.
pub struct ThemeToggle {
    _click: Listener,
}

impl ThemeToggle {
    pub fn mount(window: &Window, document: &Document, config: &PageConfig) -> Result<Self, LandingError> {
        let button = require_id(document, NAME, &config.theme_toggle_id)?;
        let view = ThemeView {
            body: body(document, NAME)?,
            icon_light: require_id(document, NAME, &config.theme_icon_light_id)?,
            icon_dark: require_id(document, NAME, &config.theme_icon_dark_id)?,
            dark_class: config.dark_class.clone(),
        };
        let store = PreferenceStore::new(LocalStorage::open(window), config.theme_storage_key.clone());

        let initial = store.get();
        view.apply(initial)?;
        let state = Cell::new(initial);

        let click = Listener::new(&button, "click", move |_| {
            let next = state.get().toggled();
            state.set(next);
            report(NAME, view.apply(next));
            if let Err(err) = store.set(next) {
                log::warn!("{NAME}: preference not saved: {err}");
            }
        })?;

        log::debug!("{NAME}: mounted with {}", initial.as_str());
        Ok(Self { _click: click })
    }
}

impl Mounted for ThemeToggle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dispose(self: Box<Self>) {}
}
