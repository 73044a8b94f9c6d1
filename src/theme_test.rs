use super::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::collections::HashMap;

#[derive(Clone, Default)]
struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, LandingError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, LandingError> {
        Err(LandingError::Storage("quota".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), LandingError> {
        Err(LandingError::Storage("quota".into()))
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn from_stored_only_recognizes_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn stored_values_are_literal_names() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

// =============================================================
// PreferenceStore
// =============================================================

#[test]
fn unset_preference_reads_light() {
    let store = PreferenceStore::new(MemoryStore::default(), "theme");
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn set_then_get_round_trips() {
    let store = PreferenceStore::new(MemoryStore::default(), "theme");
    store.set(Theme::Dark).unwrap();
    assert_eq!(store.get(), Theme::Dark);
    store.set(Theme::Light).unwrap();
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn preference_survives_reload() {
    let backend = MemoryStore::default();
    PreferenceStore::new(backend.clone(), "theme").set(Theme::Dark).unwrap();

    let reloaded = PreferenceStore::new(backend.clone(), "theme");
    assert_eq!(reloaded.get(), Theme::Dark);
    assert_eq!(backend.entries.borrow().get("theme").map(String::as_str), Some("dark"));
}

#[test]
fn set_is_idempotent() {
    let backend = MemoryStore::default();
    let store = PreferenceStore::new(backend.clone(), "theme");
    store.set(Theme::Dark).unwrap();
    store.set(Theme::Dark).unwrap();
    assert_eq!(store.get(), Theme::Dark);
    assert_eq!(backend.entries.borrow().len(), 1);
}

#[test]
fn unreadable_backend_falls_back_to_light() {
    let store = PreferenceStore::new(BrokenStore, "theme");
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn failed_write_surfaces_storage_error() {
    let store = PreferenceStore::new(BrokenStore, "theme");
    assert!(matches!(store.set(Theme::Dark), Err(LandingError::Storage(_))));
}
