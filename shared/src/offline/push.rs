use super::CacheManifest;
use serde::{Deserialize, Serialize};

/// Sync tag the worker reacts to. Nothing is synced yet; the handler only logs.
pub const BACKGROUND_SYNC_TAG: &str = "background-sync";
pub const VIBRATION_PATTERN: [u32; 3] = [100, 50, 100];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PushPayload {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    pub date_of_arrival: f64,
    pub primary_key: u32,
}

/// Everything needed for `registration.showNotification`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationSpec {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub vibrate: Vec<u32>,
    pub data: NotificationData,
}

/// Builds the notification for a push message. Absent or malformed payloads
/// produce `None`; they are never an error.
pub fn notification_for_push(
    payload: Option<&str>,
    manifest: &CacheManifest,
    received_at_ms: f64,
) -> Option<NotificationSpec> {
    let text = payload?;
    let parsed: PushPayload = match serde_json::from_str(text) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("Service Worker: Ignoring push payload: {}", e);
            return None;
        }
    };
    Some(NotificationSpec {
        title: parsed.title,
        body: parsed.body,
        icon: manifest.notification_icon.clone(),
        badge: manifest.notification_badge.clone(),
        vibrate: VIBRATION_PATTERN.to_vec(),
        data: NotificationData {
            date_of_arrival: received_at_ms,
            primary_key: 1,
        },
    })
}

/// Returns whether the sync event was one the worker handles.
pub fn handle_sync(tag: &str) -> bool {
    if tag == BACKGROUND_SYNC_TAG {
        log::info!("Service Worker: Background sync");
        true
    } else {
        false
    }
}
