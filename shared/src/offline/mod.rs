//! Offline cache lifecycle run by the service worker.
//!
//! [`OfflineCache`] holds the install/activate/fetch rules and talks to the
//! browser through a [`CacheBackend`], which the worker crate implements on
//! top of `CacheStorage` and `fetch`. [`memory::MemoryCache`] is an
//! in-process backend with the same semantics.

pub mod memory;
pub mod push;

use crate::error::Result;
use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const CACHE_NAME: &str = "uk-ir-pubg-v1";
pub const OFFLINE_PAGE: &str = "/index.html";
pub const NOTIFICATION_IMAGE: &str = "/assets/images/IMG_6841-compressed.png";
/// The worker's own module. It is precached because a worker restarted while
/// offline has to load it before it can answer any request.
pub const WORKER_MODULE: &str = "/pkg/worker_bg.wasm";

/// What gets cached, and under which bucket name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheManifest {
    /// Bucket name; bumping it retires every older bucket on activation.
    pub version: String,
    pub urls: Vec<String>,
    /// Served to navigations when both cache and network miss.
    pub offline_page: String,
    pub notification_icon: String,
    pub notification_badge: String,
}

impl Default for CacheManifest {
    fn default() -> Self {
        Self {
            version: CACHE_NAME.to_string(),
            urls: [
                "/",
                "/index.html",
                "/about.html",
                "/events.html",
                "/assets/css/style.css",
                "/assets/data/events.json",
                "/assets/images/IMG_6841-compressed.png",
                "/pkg/frontend.js",
                "/pkg/frontend_bg.wasm",
                "/pkg/worker.js",
                WORKER_MODULE,
            ]
            .iter()
            .map(|url| url.to_string())
            .collect(),
            offline_page: OFFLINE_PAGE.to_string(),
            notification_icon: NOTIFICATION_IMAGE.to_string(),
            notification_badge: NOTIFICATION_IMAGE.to_string(),
        }
    }
}

impl CacheManifest {
    pub fn new(version: impl Into<String>, urls: &[&str]) -> Self {
        Self {
            version: version.into(),
            urls: urls.iter().map(|url| url.to_string()).collect(),
            ..Self::default()
        }
    }
}

/// Cache storage plus network, as seen from inside the worker.
#[async_trait(?Send)]
pub trait CacheBackend {
    type Request;
    type Response;

    /// Opens (creating if absent) `bucket` and stores every URL in it. Either
    /// all URLs are stored or the call fails.
    async fn add_all(&self, bucket: &str, urls: &[String]) -> Result<()>;

    async fn bucket_names(&self) -> Result<Vec<String>>;

    /// Returns whether a bucket was deleted.
    async fn delete_bucket(&self, name: &str) -> Result<bool>;

    /// Looks the request up across every bucket.
    async fn match_request(&self, request: &Self::Request) -> Result<Option<Self::Response>>;

    async fn match_url(&self, url: &str) -> Result<Option<Self::Response>>;

    async fn fetch(&self, request: &Self::Request) -> Result<Self::Response>;

    /// Whether the request is a full document navigation.
    fn is_navigation(&self, request: &Self::Request) -> bool;
}

pub struct OfflineCache<B: CacheBackend> {
    manifest: CacheManifest,
    backend: B,
}

impl<B: CacheBackend> OfflineCache<B> {
    pub fn new(manifest: CacheManifest, backend: B) -> Self {
        Self { manifest, backend }
    }

    pub fn manifest(&self) -> &CacheManifest {
        &self.manifest
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Stores the allow-list in the current bucket.
    pub async fn precache(&self) -> Result<()> {
        info!("Service Worker: Caching files");
        self.backend
            .add_all(&self.manifest.version, &self.manifest.urls)
            .await
    }

    /// Install handler. A failed precache is logged and does not fail the
    /// worker registration.
    pub async fn install(&self) {
        if let Err(e) = self.precache().await {
            warn!("Service Worker: Cache failed: {}", e);
        }
    }

    /// Activate handler: deletes every bucket not named for the current
    /// version and returns the names it removed. A failed delete does not
    /// stop the others; the first failure is returned once all were tried.
    pub async fn activate(&self) -> Result<Vec<String>> {
        let mut cleared = Vec::new();
        let mut first_error = None;
        for name in self.backend.bucket_names().await? {
            if name == self.manifest.version {
                continue;
            }
            info!("Service Worker: Clearing old cache {}", name);
            match self.backend.delete_bucket(&name).await {
                Ok(true) => cleared.push(name),
                Ok(false) => {}
                Err(e) => {
                    warn!("Service Worker: Could not clear {}: {}", name, e);
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(cleared),
        }
    }

    /// Fetch handler: cache first, then network, then the offline page for
    /// navigations.
    pub async fn respond(&self, request: &B::Request) -> Result<B::Response> {
        match self.backend.match_request(request).await {
            Ok(Some(cached)) => {
                debug!("Service Worker: Serving from cache");
                return Ok(cached);
            }
            Ok(None) => {}
            Err(e) => warn!("Service Worker: Cache lookup failed: {}", e),
        }

        match self.backend.fetch(request).await {
            Ok(response) => Ok(response),
            Err(err) => {
                warn!("Service Worker: Fetch failed: {}", err);
                if self.backend.is_navigation(request) {
                    if let Ok(Some(page)) = self.backend.match_url(&self.manifest.offline_page).await {
                        return Ok(page);
                    }
                }
                Err(err)
            }
        }
    }
}
