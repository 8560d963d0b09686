use crate::config::Config;
use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::ServiceWorkerRegistration;

/// Registers the offline worker when the browser supports it. Failures are
/// only logged.
pub async fn register() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    if !js_sys::Reflect::has(&navigator, &"serviceWorker".into()).unwrap_or(false) {
        return;
    }

    let promise = navigator
        .service_worker()
        .register(Config::SERVICE_WORKER_PATH);
    match JsFuture::from(promise).await {
        Ok(value) => {
            let scope = value
                .dyn_into::<ServiceWorkerRegistration>()
                .map(|registration| registration.scope())
                .unwrap_or_default();
            info!("Service Worker registered successfully: {}", scope);
        }
        Err(e) => warn!("Service Worker registration failed: {:?}", e),
    }
}
