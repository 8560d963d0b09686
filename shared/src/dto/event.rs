use crate::error::{Result, SiteError};
use crate::models::event::Event;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One entry of `events.json` as it arrives over the wire.
///
/// Missing keys deserialize to empty strings so that they are reported by
/// validation with the field name instead of as an opaque JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct EventDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Prize is required"))]
    pub prize: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Link is required"))]
    pub link: String,
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Self {
            title: dto.title,
            date: dto.date,
            prize: dto.prize,
            description: dto.description,
            link: dto.link,
        }
    }
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date.clone(),
            prize: event.prize.clone(),
            description: event.description.clone(),
            link: event.link.clone(),
        }
    }
}

impl EventDto {
    /// Validates the DTO and converts to Event if valid
    pub fn try_into_event(self) -> std::result::Result<Event, validator::ValidationErrors> {
        self.validate()?;
        Ok(Event::from(self))
    }
}

/// Validates every entry of a decoded event document, in order.
pub fn validate_events(entries: Vec<EventDto>) -> Result<Vec<Event>> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, dto)| {
            dto.try_into_event()
                .map_err(|e| SiteError::DataShape(format!("entry {}: {}", index, e)))
        })
        .collect()
}

/// Decodes and validates the raw body of the event data resource.
pub fn parse_events(body: &str) -> Result<Vec<Event>> {
    let entries: Vec<EventDto> = serde_json::from_str(body)?;
    validate_events(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"[
        {
            "title": "Squad Showdown",
            "date": "Fri 6 June, 20:00 BST",
            "prize": "£500 cash",
            "description": "Custom lobby, four rounds, points table.",
            "link": "https://discord.gg/example"
        },
        {
            "title": "Solo Sniper Night",
            "date": "Sun 8 June, 19:00 BST",
            "prize": "Discord Nitro",
            "description": "Bolt-action rifles only.",
            "link": "https://discord.gg/example"
        }
    ]"#;

    #[test]
    fn test_parse_events_keeps_input_order() {
        let events = parse_events(SAMPLE).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Squad Showdown");
        assert_eq!(events[1].title, "Solo Sniper Night");
    }

    #[test]
    fn test_parse_events_empty_array() {
        assert_eq!(parse_events("[]").unwrap(), Vec::<Event>::new());
    }

    #[test]
    fn test_missing_field_is_a_data_shape_error() {
        let body = r#"[{"title": "A", "date": "B", "prize": "£1", "description": "C"}]"#;
        match parse_events(body) {
            Err(SiteError::DataShape(msg)) => {
                assert!(msg.contains("entry 0"), "{}", msg);
                assert!(msg.contains("link"), "{}", msg);
            }
            other => panic!("expected data shape error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_title_reports_entry_index() {
        let body = r#"[
            {"title": "A", "date": "B", "prize": "£1", "description": "C", "link": "D"},
            {"title": "", "date": "B", "prize": "£1", "description": "C", "link": "D"}
        ]"#;
        let err = parse_events(body).unwrap_err();
        assert!(matches!(&err, SiteError::DataShape(msg) if msg.contains("entry 1")));
    }

    #[test]
    fn test_non_json_body_is_a_parse_error() {
        let err = parse_events("<!doctype html><title>404</title>").unwrap_err();
        assert!(matches!(err, SiteError::Parse(_)));
    }

    #[test]
    fn test_object_instead_of_array_is_a_parse_error() {
        let err = parse_events(r#"{"events": []}"#).unwrap_err();
        assert!(matches!(err, SiteError::Parse(_)));
    }

    #[test]
    fn test_dto_from_event() {
        let event = Event::new("T", "D", "£5", "Desc", "L");
        let dto = EventDto::from(&event);
        assert_eq!(dto.try_into_event().unwrap(), event);
    }
}
