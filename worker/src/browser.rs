use async_trait::async_trait;
use js_sys::Array;
use shared::offline::CacheBackend;
use shared::{Result, SiteError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Cache, CacheStorage, Request, RequestDestination, Response, ServiceWorkerGlobalScope};

fn cache_error(context: &str, e: JsValue) -> SiteError {
    SiteError::Cache(format!("{}: {:?}", context, e))
}

/// [`CacheBackend`] over the worker's `caches` and `fetch`.
pub struct BrowserCache {
    scope: ServiceWorkerGlobalScope,
}

impl BrowserCache {
    pub fn new(scope: ServiceWorkerGlobalScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> &ServiceWorkerGlobalScope {
        &self.scope
    }

    fn caches(&self) -> Result<CacheStorage> {
        self.scope
            .caches()
            .map_err(|e| cache_error("CacheStorage unavailable", e))
    }

    async fn lookup(&self, promise: js_sys::Promise) -> Result<Option<Response>> {
        let found = JsFuture::from(promise)
            .await
            .map_err(|e| cache_error("Cache lookup failed", e))?;
        if found.is_undefined() {
            Ok(None)
        } else {
            Ok(Some(found.unchecked_into()))
        }
    }
}

#[async_trait(?Send)]
impl CacheBackend for BrowserCache {
    type Request = Request;
    type Response = Response;

    async fn add_all(&self, bucket: &str, urls: &[String]) -> Result<()> {
        let cache: Cache = JsFuture::from(self.caches()?.open(bucket))
            .await
            .map_err(|e| cache_error("Opening cache failed", e))?
            .unchecked_into();
        let list: Array = urls.iter().map(|url| JsValue::from_str(url)).collect();
        JsFuture::from(cache.add_all_with_str_sequence(&list))
            .await
            .map_err(|e| cache_error("Adding files failed", e))?;
        Ok(())
    }

    async fn bucket_names(&self) -> Result<Vec<String>> {
        let keys = JsFuture::from(self.caches()?.keys())
            .await
            .map_err(|e| cache_error("Listing caches failed", e))?;
        Ok(Array::from(&keys)
            .iter()
            .filter_map(|name| name.as_string())
            .collect())
    }

    async fn delete_bucket(&self, name: &str) -> Result<bool> {
        let deleted = JsFuture::from(self.caches()?.delete(name))
            .await
            .map_err(|e| cache_error("Deleting cache failed", e))?;
        Ok(deleted.as_bool().unwrap_or(false))
    }

    async fn match_request(&self, request: &Request) -> Result<Option<Response>> {
        self.lookup(self.caches()?.match_with_request(request)).await
    }

    async fn match_url(&self, url: &str) -> Result<Option<Response>> {
        self.lookup(self.caches()?.match_with_str(url)).await
    }

    async fn fetch(&self, request: &Request) -> Result<Response> {
        JsFuture::from(self.scope.fetch_with_request(request))
            .await
            .map(|response| response.unchecked_into())
            .map_err(|e| SiteError::Network(format!("{} unreachable: {:?}", request.url(), e)))
    }

    fn is_navigation(&self, request: &Request) -> bool {
        request.destination() == RequestDestination::Document
    }
}
