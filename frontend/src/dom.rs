//! Small helpers over the document root. Every helper is a no-op when the
//! element or API it needs is absent.

use crate::config::Config;
use gloo::events::EventListener;
use log::{debug, warn};
use shared::Theme;
use wasm_bindgen::JsCast;
use web_sys::{Element, MediaQueryListEvent};

pub fn document_root() -> Option<Element> {
    web_sys::window()?.document()?.document_element()
}

/// Sets or clears the theme marker attribute on `<html>`.
pub fn apply_theme(theme: Theme) {
    debug!("Applying theme: {}", theme);
    let Some(root) = document_root() else {
        return;
    };
    let result = match theme.marker() {
        Some(value) => root.set_attribute(Config::THEME_ATTRIBUTE, value),
        None => root.remove_attribute(Config::THEME_ATTRIBUTE),
    };
    if let Err(e) = result {
        warn!("Failed to apply theme {}: {:?}", theme, e);
    }
}

/// Toggles a class on `<html>` and returns whether it is now present.
pub fn toggle_root_class(class: &str) -> bool {
    document_root()
        .and_then(|root| root.class_list().toggle(class).ok())
        .unwrap_or(false)
}

/// Calls `on_change` with the new "prefers dark" value whenever the OS
/// colour scheme changes. The subscription lasts as long as the returned
/// listener.
pub fn watch_color_scheme<F>(on_change: F) -> Option<EventListener>
where
    F: Fn(bool) + 'static,
{
    let query = web_sys::window()?
        .match_media(Config::DARK_SCHEME_QUERY)
        .ok()
        .flatten()?;
    Some(EventListener::new(&query, "change", move |event| {
        if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
            on_change(event.matches());
        }
    }))
}
