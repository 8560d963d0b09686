use super::CacheBackend;
use crate::error::{Result, SiteError};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub url: String,
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl CachedResponse {
    pub fn new(url: &str, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.to_string(),
            status: 200,
            content_type: content_type.to_string(),
            body: body.into(),
        }
    }

    pub fn not_found(url: &str) -> Self {
        Self {
            url: url.to_string(),
            status: 404,
            content_type: "text/plain".to_string(),
            body: Vec::new(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRequest {
    pub url: String,
    pub navigation: bool,
}

impl MemoryRequest {
    pub fn get(url: &str) -> Self {
        Self {
            url: url.to_string(),
            navigation: false,
        }
    }

    pub fn navigate(url: &str) -> Self {
        Self {
            url: url.to_string(),
            navigation: true,
        }
    }
}

#[derive(Debug)]
struct Inner {
    buckets: Vec<(String, Vec<CachedResponse>)>,
    origin: HashMap<String, CachedResponse>,
    locked: HashSet<String>,
    online: bool,
    network_hits: usize,
}

/// Cache storage and origin server held in memory. Clones share state, the
/// way every handle to `caches` in a worker sees the same buckets.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    inner: Rc<RefCell<Inner>>,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                buckets: Vec::new(),
                origin: HashMap::new(),
                locked: HashSet::new(),
                online: true,
                network_hits: 0,
            })),
        }
    }

    /// Makes `url` available from the origin.
    pub fn serve(&self, url: &str, content_type: &str, body: &[u8]) {
        self.inner
            .borrow_mut()
            .origin
            .insert(url.to_string(), CachedResponse::new(url, content_type, body));
    }

    pub fn origin_response(&self, url: &str) -> Option<CachedResponse> {
        self.inner.borrow().origin.get(url).cloned()
    }

    /// Makes every later delete of `bucket` fail.
    pub fn lock_bucket(&self, bucket: &str) {
        self.inner.borrow_mut().locked.insert(bucket.to_string());
    }

    pub fn set_online(&self, online: bool) {
        self.inner.borrow_mut().online = online;
    }

    pub fn network_hits(&self) -> usize {
        self.inner.borrow().network_hits
    }

    /// URLs stored in `bucket`, in insertion order.
    pub fn bucket_urls(&self, bucket: &str) -> Vec<String> {
        self.inner
            .borrow()
            .buckets
            .iter()
            .find(|(name, _)| name == bucket)
            .map(|(_, entries)| entries.iter().map(|e| e.url.clone()).collect())
            .unwrap_or_default()
    }

    fn network(&self, url: &str) -> Result<CachedResponse> {
        let mut inner = self.inner.borrow_mut();
        if !inner.online {
            return Err(SiteError::Network(format!("{} unreachable", url)));
        }
        inner.network_hits += 1;
        Ok(inner
            .origin
            .get(url)
            .cloned()
            .unwrap_or_else(|| CachedResponse::not_found(url)))
    }

    fn lookup(&self, url: &str) -> Option<CachedResponse> {
        self.inner
            .borrow()
            .buckets
            .iter()
            .flat_map(|(_, entries)| entries.iter())
            .find(|e| e.url == url)
            .cloned()
    }
}

#[async_trait(?Send)]
impl CacheBackend for MemoryCache {
    type Request = MemoryRequest;
    type Response = CachedResponse;

    async fn add_all(&self, bucket: &str, urls: &[String]) -> Result<()> {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.buckets.iter().any(|(name, _)| name == bucket) {
                inner.buckets.push((bucket.to_string(), Vec::new()));
            }
        }

        let mut fetched = Vec::with_capacity(urls.len());
        for url in urls {
            let response = self.network(url)?;
            if !response.ok() {
                return Err(SiteError::Cache(format!(
                    "{} returned status {}",
                    url, response.status
                )));
            }
            fetched.push(response);
        }

        let mut inner = self.inner.borrow_mut();
        if let Some((_, entries)) = inner.buckets.iter_mut().find(|(name, _)| name == bucket) {
            for response in fetched {
                entries.retain(|e| e.url != response.url);
                entries.push(response);
            }
        }
        Ok(())
    }

    async fn bucket_names(&self) -> Result<Vec<String>> {
        Ok(self
            .inner
            .borrow()
            .buckets
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    async fn delete_bucket(&self, name: &str) -> Result<bool> {
        let mut inner = self.inner.borrow_mut();
        if inner.locked.contains(name) {
            return Err(SiteError::Cache(format!("{} is locked", name)));
        }
        let before = inner.buckets.len();
        inner.buckets.retain(|(bucket, _)| bucket != name);
        Ok(inner.buckets.len() != before)
    }

    async fn match_request(&self, request: &MemoryRequest) -> Result<Option<CachedResponse>> {
        Ok(self.lookup(&request.url))
    }

    async fn match_url(&self, url: &str) -> Result<Option<CachedResponse>> {
        Ok(self.lookup(url))
    }

    async fn fetch(&self, request: &MemoryRequest) -> Result<CachedResponse> {
        self.network(&request.url)
    }

    fn is_navigation(&self, request: &MemoryRequest) -> bool {
        request.navigation
    }
}
