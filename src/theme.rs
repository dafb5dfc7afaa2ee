//! Light/dark theme with a persisted preference.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::error::Result;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Page background color to animate toward.
    pub fn background(self) -> &'static str {
        match self {
            Theme::Light => "#f8f9fa",
            Theme::Dark => "#1a1a2e",
        }
    }

    /// Font Awesome icon shown on the toggle: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store, used in tests and when browser storage is blocked.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _ = self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the starting theme: a saved preference wins, otherwise the OS
    /// preference. A failed read is treated as "nothing saved".
    pub fn init(store: S, prefers_dark: bool) -> Self {
        let saved = match store.get(THEME_KEY) {
            Ok(v) => v.as_deref().and_then(Theme::parse),
            Err(e) => {
                log::warn!("could not read theme preference: {e}");
                None
            }
        };
        let current = saved.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light });
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it. The in-memory theme changes even when
    /// the write fails.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.current.as_str()) {
            log::warn!("could not persist theme preference: {e}");
        }
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
