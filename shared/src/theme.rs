//! Light/dark display preference.
//!
//! A page with nothing persisted starts light, whatever the OS says. Until
//! the user flips the toggle, OS colour-scheme changes are followed; after
//! the first explicit choice they are ignored.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Storage key holding the explicit choice.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Theme selected by the toggle control's checked state.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Checked state the toggle control should show.
    pub fn is_checked(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Value of the `data-theme` attribute on the document root; `None`
    /// means the attribute is removed.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some("dark"),
            Theme::Light => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = std::convert::Infallible;

    /// Anything other than `"dark"` reads as light.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(if s == "dark" { Theme::Dark } else { Theme::Light })
    }
}

/// Browser-scoped key/value storage for preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory [`PreferenceStore`], used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme rules on top of a [`PreferenceStore`].
pub struct ThemeController<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The persisted explicit choice, if the user ever made one.
    pub fn saved(&self) -> Option<Theme> {
        self.store
            .get(THEME_STORAGE_KEY)
            .map(|value| value.parse().unwrap_or_default())
    }

    /// Theme to apply on page load.
    pub fn initial(&self) -> Theme {
        self.saved().unwrap_or(Theme::Light)
    }

    /// Handles a change of the toggle control and persists the result.
    pub fn toggle(&self, checked: bool) -> Result<Theme> {
        let theme = Theme::from_checked(checked);
        log::debug!("Toggling to {}", theme);
        self.store.set(THEME_STORAGE_KEY, theme.as_str())?;
        Ok(theme)
    }

    /// Handles an OS colour-scheme change. Returns the theme to apply, or
    /// `None` when an explicit choice exists.
    pub fn system_changed(&self, prefers_dark: bool) -> Option<Theme> {
        if self.store.get(THEME_STORAGE_KEY).is_some() {
            None
        } else {
            Some(Theme::from_checked(prefers_dark))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(None, Theme::Light, None, false)]
    #[case(Some("light"), Theme::Light, None, false)]
    #[case(Some("dark"), Theme::Dark, Some("dark"), true)]
    fn test_initial_theme(
        #[case] saved: Option<&str>,
        #[case] expected: Theme,
        #[case] marker: Option<&str>,
        #[case] checked: bool,
    ) {
        let store = match saved {
            Some(value) => MemoryStore::with(THEME_STORAGE_KEY, value),
            None => MemoryStore::new(),
        };
        let controller = ThemeController::new(store);
        let theme = controller.initial();
        assert_eq!(theme, expected);
        assert_eq!(theme.marker(), marker);
        assert_eq!(theme.is_checked(), checked);
    }

    #[test]
    fn test_unknown_saved_value_is_light_but_explicit() {
        let controller = ThemeController::new(MemoryStore::with(THEME_STORAGE_KEY, "sepia"));
        assert_eq!(controller.initial(), Theme::Light);
        assert_eq!(controller.system_changed(true), None);
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let controller = ThemeController::new(MemoryStore::new());
        let start = controller.initial();
        let once = controller.toggle(!start.is_checked()).unwrap();
        let twice = controller.toggle(!once.is_checked()).unwrap();
        assert_eq!(once, Theme::Dark);
        assert_eq!(twice.marker(), start.marker());
        assert_eq!(controller.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_system_change_followed_until_explicit_choice() {
        let controller = ThemeController::new(MemoryStore::new());
        assert_eq!(controller.system_changed(true), Some(Theme::Dark));
        assert_eq!(controller.system_changed(false), Some(Theme::Light));

        controller.toggle(false).unwrap();
        assert_eq!(controller.system_changed(true), None);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
