#[cfg(test)]
mod tests {
    use crate::api::{asset_url, join_asset_url};
    use crate::components::event_card::animation_delay;
    use crate::components::event_catalog::{load_outcome, CatalogState};
    use crate::components::toast::ToastRequest;
    use crate::config::Config;
    use crate::Route;
    use pretty_assertions::assert_eq;
    use shared::toast::DEFAULT_DURATION_MS;
    use shared::{CatalogAction, CatalogPhase, Event, SiteError, ToastKind};
    use std::rc::Rc;
    use yew::Reducible;
    use yew_router::Routable;

    fn sample_events() -> Vec<Event> {
        vec![
            Event::new("Squad Showdown", "Fri 6 June", "£500 cash", "Four rounds", "https://discord.gg/a"),
            Event::new("Solo Night", "Sun 8 June", "Discord Nitro", "Snipers only", "https://discord.gg/b"),
        ]
    }

    #[test]
    fn test_animation_delay_cascades() {
        assert_eq!(animation_delay(0), "animation-delay: 0.0s");
        assert_eq!(animation_delay(1), "animation-delay: 0.1s");
        assert_eq!(animation_delay(3), "animation-delay: 0.3s");
        assert_eq!(animation_delay(12), "animation-delay: 1.2s");
    }

    #[test]
    fn test_asset_url_is_relative() {
        assert_eq!(asset_url(Config::EVENTS_DATA_URL), "assets/data/events.json");
    }

    #[test]
    fn test_join_asset_url_with_base() {
        assert_eq!(
            join_asset_url("https://cdn.example.com/site/", "/assets/data/events.json"),
            "https://cdn.example.com/site/assets/data/events.json"
        );
        assert_eq!(join_asset_url("/static", "assets/css/style.css"), "/static/assets/css/style.css");
        assert_eq!(join_asset_url("", "assets/data/events.json"), "assets/data/events.json");
    }

    #[test]
    fn test_unreachable_data_gives_error_message_and_toast() {
        let (action, toast) = load_outcome(Err(SiteError::Network(
            "Failed to fetch events: TypeError".to_string(),
        )));
        assert_eq!(toast, ToastRequest::new("Failed to load events", ToastKind::Error));

        let state = Rc::new(CatalogState::default()).reduce(action);
        assert_eq!(state.0.error_message(), Some(shared::LOAD_ERROR_MESSAGE));
        assert!(state.0.visible().is_empty());
        assert!(!state.0.no_events_visible());
    }

    #[test]
    fn test_successful_load_gives_list_and_toast() {
        let (action, toast) = load_outcome(Ok(sample_events()));
        assert_eq!(toast.message, "Events loaded successfully!");
        assert_eq!(toast.kind, ToastKind::Success);

        let state = Rc::new(CatalogState::default()).reduce(action);
        assert_eq!(state.0.phase(), &CatalogPhase::Ready);
        assert_eq!(state.0.visible(), sample_events().as_slice());
    }

    #[test]
    fn test_routes_match_cached_pages() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Events.to_path(), "/events.html");
        assert_eq!(Route::About.to_path(), "/about.html");
        assert_eq!(Route::recognize("/index.html"), Some(Route::Index));
        assert_eq!(Route::recognize("/nowhere"), Some(Route::NotFound));

        let manifest = shared::CacheManifest::default();
        for route in [Route::Home, Route::Index, Route::Events, Route::About] {
            assert!(manifest.urls.contains(&route.to_path()), "{:?} not cached", route);
        }
    }

    #[test]
    fn test_catalog_reducer_dispatch() {
        let state = Rc::new(CatalogState::default());
        assert_eq!(state.0.phase(), &CatalogPhase::Loading);

        let state = state.reduce(CatalogAction::Loaded(sample_events()));
        assert_eq!(state.0.visible().len(), 2);

        let state = state.reduce(CatalogAction::SetSearch("SOLO".to_string()));
        assert_eq!(state.0.visible().len(), 1);
        assert_eq!(state.0.visible()[0].title, "Solo Night");

        let state = state.reduce(CatalogAction::Clear);
        assert_eq!(state.0.visible().len(), 2);
        assert!(!state.0.no_events_visible());
    }

    #[test]
    fn test_catalog_reducer_failure() {
        let state = Rc::new(CatalogState::default()).reduce(CatalogAction::LoadFailed(
            "Network error: Failed to fetch events".to_string(),
        ));
        assert_eq!(state.0.error_message(), Some(shared::LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn test_toast_request_defaults() {
        let request = ToastRequest::new("Filters cleared", ToastKind::Success);
        assert_eq!(request.duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(request.kind, ToastKind::Success);
    }

    #[test]
    fn test_prize_options_parse() {
        for (value, _) in Config::PRIZE_OPTIONS {
            let threshold = shared::parse_prize(value);
            assert_eq!(threshold == 0, value.is_empty());
        }
    }
}
