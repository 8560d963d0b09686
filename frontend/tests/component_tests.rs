#[cfg(test)]
mod component_tests {
    use frontend::components::event_catalog::CatalogState;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use shared::{parse_events, CatalogAction, SiteError, LOAD_ERROR_MESSAGE};
    use std::rc::Rc;
    use yew::Reducible;

    fn events_document() -> String {
        json!([
            {
                "title": "Squad Showdown",
                "date": "Fri 6 June, 20:00 BST",
                "prize": "£500 cash",
                "description": "Custom lobby, four rounds, points table.",
                "link": "https://discord.gg/example"
            },
            {
                "title": "Duo Cup",
                "date": "Sat 14 June, 19:00 BST",
                "prize": "£1,000",
                "description": "Erangel and Miramar.",
                "link": "https://discord.gg/example"
            },
            {
                "title": "Solo Sniper Night",
                "date": "Sun 15 June, 19:00 BST",
                "prize": "Discord Nitro",
                "description": "Bolt-action rifles only.",
                "link": "https://discord.gg/example"
            }
        ])
        .to_string()
    }

    fn loaded() -> Rc<CatalogState> {
        let events = parse_events(&events_document()).unwrap();
        Rc::new(CatalogState::default()).reduce(CatalogAction::Loaded(events))
    }

    #[test]
    fn test_minimum_prize_filter() {
        let state = loaded().reduce(CatalogAction::SetMinPrize("400".to_string()));
        let titles: Vec<_> = state.0.visible().iter().map(|e| e.title.clone()).collect();
        assert_eq!(titles, vec!["Squad Showdown", "Duo Cup"]);

        let state = state.reduce(CatalogAction::SetMinPrize("600".to_string()));
        let titles: Vec<_> = state.0.visible().iter().map(|e| e.title.clone()).collect();
        assert_eq!(titles, vec!["Duo Cup"]);
    }

    #[test]
    fn test_unmatched_search_shows_indicator() {
        let state = loaded().reduce(CatalogAction::SetSearch("vikendi".to_string()));
        assert!(state.0.visible().is_empty());
        assert!(state.0.no_events_visible());
    }

    #[test]
    fn test_empty_search_matches_unfiltered_render() {
        let before = loaded();
        let after = before.clone().reduce(CatalogAction::SetSearch(String::new()));
        assert_eq!(after.0.visible(), before.0.visible());
    }

    #[test]
    fn test_html_error_page_fails_load() {
        let err = parse_events("<!doctype html><h1>Not Found</h1>").unwrap_err();
        assert!(err.is_load_failure());

        let state = Rc::new(CatalogState::default()).reduce(CatalogAction::LoadFailed(err.to_string()));
        assert_eq!(state.0.error_message(), Some(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let body = json!([{ "title": "", "date": "Fri", "prize": "£5", "description": "x", "link": "y" }]);
        let err = parse_events(&body.to_string()).unwrap_err();
        assert!(matches!(err, SiteError::DataShape(_)));
    }
}
