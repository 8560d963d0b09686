use gloo_storage::{LocalStorage, Storage};
use shared::{PreferenceStore, SiteError};

/// `localStorage`, read and written as raw strings so values stay readable
/// by anything else on the page (`"dark"`, not `"\"dark\""`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> shared::Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))
    }
}
