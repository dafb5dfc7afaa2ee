use folio3d::theme::{MemoryStore, PreferenceStore, Theme, ThemeController, THEME_KEY};
use folio3d::{PortfolioError, Result};

/// A store that refuses every read and write, like a locked-down browser.
struct BlockedStore;

impl PreferenceStore for BlockedStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(PortfolioError::Storage("blocked".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(PortfolioError::Storage("blocked".into()))
    }
}

#[test]
fn saved_preference_wins_over_os() {
    let store = MemoryStore::new();
    store.set(THEME_KEY, "light").unwrap();
    let ctl = ThemeController::init(store, true);
    assert_eq!(ctl.current(), Theme::Light);
}

#[test]
fn os_preference_when_nothing_saved() {
    assert_eq!(ThemeController::init(MemoryStore::new(), true).current(), Theme::Dark);
    assert_eq!(ThemeController::init(MemoryStore::new(), false).current(), Theme::Light);
}

#[test]
fn unknown_saved_value_is_ignored() {
    let store = MemoryStore::new();
    store.set(THEME_KEY, "sepia").unwrap();
    assert_eq!(ThemeController::init(store, true).current(), Theme::Dark);
}

#[test]
fn toggle_persists() {
    let mut ctl = ThemeController::init(MemoryStore::new(), false);
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(ctl.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn toggling_twice_restores_persisted_value() {
    let store = MemoryStore::new();
    store.set(THEME_KEY, "dark").unwrap();
    let mut ctl = ThemeController::init(store, false);
    ctl.toggle();
    ctl.toggle();
    assert_eq!(ctl.current(), Theme::Dark);
    assert_eq!(ctl.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn blocked_storage_still_toggles_for_the_session() {
    let mut ctl = ThemeController::init(BlockedStore, false);
    assert_eq!(ctl.current(), Theme::Light);
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(ctl.current(), Theme::Dark);
}

#[test]
fn theme_strings_and_icons() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggle_icon(), "fa-sun");
    assert_eq!(Theme::Light.toggle_icon(), "fa-moon");
}
