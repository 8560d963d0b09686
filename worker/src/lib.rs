use crate::browser::BrowserCache;
use js_sys::Promise;
use log::{info, warn};
use shared::offline::push::{handle_sync, notification_for_push, NotificationSpec};
use shared::{CacheManifest, OfflineCache};
use std::cell::OnceCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{NotificationOptions, Request, ServiceWorkerGlobalScope};

pub mod browser;

type Worker = OfflineCache<BrowserCache>;

thread_local! {
    static WORKER: OnceCell<Rc<Worker>> = OnceCell::new();
}

fn worker() -> Result<Rc<Worker>, JsValue> {
    WORKER.with(|cell| {
        if let Some(worker) = cell.get() {
            return Ok(worker.clone());
        }
        let scope: ServiceWorkerGlobalScope = js_sys::global().dyn_into()?;
        let worker = Rc::new(OfflineCache::new(
            CacheManifest::default(),
            BrowserCache::new(scope),
        ));
        let _ = cell.set(worker.clone());
        Ok(worker)
    })
}

#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn on_install() -> Result<Promise, JsValue> {
    let worker = worker()?;
    Ok(future_to_promise(async move {
        worker.install().await;
        Ok(JsValue::UNDEFINED)
    }))
}

#[wasm_bindgen]
pub fn on_activate() -> Result<Promise, JsValue> {
    let worker = worker()?;
    Ok(future_to_promise(async move {
        match worker.activate().await {
            Ok(cleared) => info!("Service Worker: Activated, cleared {} old caches", cleared.len()),
            Err(e) => warn!("Service Worker: Cache cleanup failed: {}", e),
        }
        Ok(JsValue::UNDEFINED)
    }))
}

/// Resolves with the response for `request`; rejects when neither cache,
/// network nor offline page can answer it.
#[wasm_bindgen]
pub fn on_fetch(request: Request) -> Result<Promise, JsValue> {
    let worker = worker()?;
    Ok(future_to_promise(async move {
        worker
            .respond(&request)
            .await
            .map(JsValue::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }))
}

#[wasm_bindgen]
pub fn on_sync(tag: String) {
    handle_sync(&tag);
}

fn notification_options(spec: &NotificationSpec) -> Result<NotificationOptions, JsValue> {
    let options = NotificationOptions::new();
    options.set_body(&spec.body);
    options.set_icon(&spec.icon);
    options.set_badge(&spec.badge);

    let vibrate: js_sys::Array = spec.vibrate.iter().map(|ms| JsValue::from(*ms)).collect();
    options.set_vibrate(&vibrate);

    let data = serde_json::to_string(&spec.data).map_err(|e| JsValue::from_str(&e.to_string()))?;
    options.set_data(&js_sys::JSON::parse(&data)?);
    Ok(options)
}

/// Shows a notification for a push message. Missing or malformed payloads
/// resolve without showing anything.
#[wasm_bindgen]
pub fn on_push(payload: Option<String>) -> Result<Promise, JsValue> {
    let worker = worker()?;
    let Some(spec) = notification_for_push(payload.as_deref(), worker.manifest(), js_sys::Date::now())
    else {
        return Ok(Promise::resolve(&JsValue::UNDEFINED));
    };

    let options = notification_options(&spec)?;
    worker
        .backend()
        .scope()
        .registration()
        .show_notification_with_options(&spec.title, &options)
}
