use crate::config::Config;
use js_sys::Array;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Watches every reveal target on the page and marks it the first time it
/// scrolls into view. Disconnects when dropped.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn attach() -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        // Adding a class twice is harmless.
                        let _ = entry.target().class_list().add_1(Config::REVEAL_CLASS);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(Config::REVEAL_THRESHOLD));
        options.set_root_margin(Config::REVEAL_ROOT_MARGIN);

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(e) => {
                    warn!("Scroll reveal unavailable: {:?}", e);
                    return None;
                }
            };

        let targets = document.query_selector_all(Config::REVEAL_SELECTOR).ok()?;
        for index in 0..targets.length() {
            if let Some(element) = targets.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes the reveal targets rendered by the calling component.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with((), |_| {
        let observer = RevealObserver::attach();
        move || drop(observer)
    });
}
