pub mod models {
    pub mod event;
}

pub mod dto {
    pub mod event;
}

pub mod catalog;
pub mod error;
pub mod filter;
pub mod member_count;
pub mod offline;
pub mod theme;
pub mod toast;

// Re-export commonly used items
pub use error::{Result, SiteError};

pub use catalog::{Catalog, CatalogAction, CatalogPhase, LOAD_ERROR_MESSAGE};
pub use dto::event::{parse_events, EventDto};
pub use filter::{parse_prize, EventFilter};
pub use models::event::Event;
pub use offline::{CacheBackend, CacheManifest, OfflineCache};
pub use theme::{PreferenceStore, Theme, ThemeController, THEME_STORAGE_KEY};
pub use toast::{Toast, ToastKind, ToastPhase, ToastStack};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_event_creation() {
        let event = Event {
            title: "Squad Showdown".to_string(),
            date: "Fri 6 June, 20:00 BST".to_string(),
            prize: "£500 cash".to_string(),
            description: "Custom lobby, four rounds.".to_string(),
            link: "https://discord.gg/example".to_string(),
        };

        assert_eq!(event.title, "Squad Showdown");
        assert_eq!(event.prize_value(), 500);
    }

    #[test]
    fn test_catalog_round_trip_through_filter() {
        let body = r#"[
            {"title": "Squad Showdown", "date": "Fri", "prize": "£500 cash", "description": "Four rounds", "link": "https://discord.gg/a"},
            {"title": "Solo Night", "date": "Sun", "prize": "Nitro", "description": "Snipers", "link": "https://discord.gg/b"}
        ]"#;
        let events = parse_events(body).unwrap();
        let catalog = Catalog::new()
            .apply(CatalogAction::Loaded(events.clone()))
            .apply(CatalogAction::SetMinPrize("400".to_string()));

        assert_eq!(catalog.visible().len(), 1);
        assert_eq!(catalog.visible()[0], events[0]);

        let cleared = catalog.apply(CatalogAction::Clear);
        assert_eq!(cleared.visible(), events.as_slice());
    }
}
