pub mod events;

use crate::config::Config;

pub fn asset_url(path: &str) -> String {
    join_asset_url(Config::asset_base_url(), path)
}

/// Resolves `path` against `base_url`; an empty base keeps the URL relative.
pub fn join_asset_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
