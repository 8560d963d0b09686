use crate::api::asset_url;
use crate::config::Config;
use gloo_net::http::Request;
use log::debug;
use shared::{parse_events, Event, SiteError};

/// Fetches and validates the static event list.
pub async fn fetch_events() -> Result<Vec<Event>, SiteError> {
    let url = asset_url(Config::EVENTS_DATA_URL);
    debug!("Fetching events from {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| SiteError::Network(format!("Failed to fetch events: {}", e)))?;

    if !response.ok() {
        return Err(SiteError::Network(format!(
            "{} returned status {}",
            url,
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SiteError::Network(format!("Failed to read events response: {}", e)))?;

    let events = parse_events(&body)?;
    debug!("Successfully fetched {} events", events.len());
    Ok(events)
}
