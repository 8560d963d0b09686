use crate::models::event::Event;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // First run of digits; thousands separators are allowed inside the run.
    static ref PRIZE_REGEX: Regex = Regex::new(r"\d+(?:,\d+)*").unwrap();
}

/// Extracts the numeric amount from free prize text.
///
/// `"£500 cash"` is 500, `"£1,000 + merch"` is 1000, text without any digit
/// is 0. Amounts too large for `u64` saturate.
pub fn parse_prize(text: &str) -> u64 {
    PRIZE_REGEX
        .find(text)
        .map(|m| {
            let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
            digits.parse::<u64>().unwrap_or(u64::MAX)
        })
        .unwrap_or(0)
}

/// The two live predicates behind the events search controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    search: String,
    min_prize: u64,
}

impl EventFilter {
    pub fn new(search: impl Into<String>, min_prize: u64) -> Self {
        Self {
            search: search.into().to_lowercase(),
            min_prize,
        }
    }

    /// Builds a filter from the raw values of the search box and prize select.
    /// An empty or non-numeric prize value means "any prize".
    pub fn from_inputs(search: &str, prize_input: &str) -> Self {
        Self::new(search, parse_prize(prize_input))
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn min_prize(&self) -> u64 {
        self.min_prize
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_lowercase();
    }

    pub fn set_min_prize(&mut self, min_prize: u64) {
        self.min_prize = min_prize;
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.min_prize == 0
    }

    pub fn matches(&self, event: &Event) -> bool {
        let matches_search = event.title.to_lowercase().contains(&self.search)
            || event.description.to_lowercase().contains(&self.search);
        let matches_prize = self.min_prize == 0 || event.prize_value() >= self.min_prize;
        matches_search && matches_prize
    }

    /// Returns the matching events, preserving input order.
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use test_case::test_case;

    fn event(title: &str, prize: &str, description: &str) -> Event {
        Event::new(title, "Sat 21 June", prize, description, "https://discord.gg/x")
    }

    #[test_case("£500 cash", 500)]
    #[test_case("£1,000 + merch", 1000)]
    #[test_case("$250", 250)]
    #[test_case("Discord Nitro", 0)]
    #[test_case("", 0)]
    #[test_case("1st: £300, 2nd: £100", 1)]
    #[test_case("99999999999999999999999", u64::MAX)]
    fn test_parse_prize(text: &str, expected: u64) {
        assert_eq!(parse_prize(text), expected);
    }

    #[rstest]
    #[case(400, true)]
    #[case(500, true)]
    #[case(600, false)]
    #[case(0, true)]
    fn test_min_prize_threshold(#[case] threshold: u64, #[case] included: bool) {
        let filter = EventFilter::new("", threshold);
        assert_eq!(filter.matches(&event("Cup", "£500 cash", "desc")), included);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_and_description() {
        let events = vec![
            event("Squad Showdown", "£500", "Four rounds"),
            event("Solo Night", "£100", "Snipers ONLY"),
            event("Duo Cup", "£200", "Erangel"),
        ];
        let by_title = EventFilter::new("SQUAD", 0).apply(&events);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Squad Showdown");

        let by_description = EventFilter::new("snipers", 0).apply(&events);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].title, "Solo Night");
    }

    #[test]
    fn test_predicates_combine() {
        let events = vec![
            event("Squad Showdown", "£500", "Four rounds"),
            event("Squad Scrims", "£50", "Practice"),
        ];
        let result = EventFilter::new("squad", 100).apply(&events);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Squad Showdown");
    }

    #[test]
    fn test_no_digit_prize_excluded_by_any_threshold() {
        let filter = EventFilter::new("", 1);
        assert!(!filter.matches(&event("Nitro Night", "Discord Nitro", "")));
    }

    #[test]
    fn test_no_match_yields_empty_subset() {
        let events = vec![event("Squad Showdown", "£500", "Four rounds")];
        assert!(EventFilter::new("zzz", 0).apply(&events).is_empty());
    }

    #[test_case("", "" ; "both empty")]
    #[test_case("  ", "any" ; "non numeric prize")]
    fn test_from_inputs_without_threshold(search: &str, prize: &str) {
        let filter = EventFilter::from_inputs(search, prize);
        assert_eq!(filter.min_prize(), 0);
    }

    #[test]
    fn test_from_inputs_lowercases_search() {
        let filter = EventFilter::from_inputs("Erangel", "250");
        assert_eq!(filter.search(), "erangel");
        assert_eq!(filter.min_prize(), 250);
        assert!(!filter.is_empty());
    }

    proptest! {
        #[test]
        fn empty_filter_keeps_everything(titles in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..8)) {
            let events: Vec<Event> = titles.iter().map(|t| event(t, "£10", t)).collect();
            prop_assert_eq!(EventFilter::default().apply(&events), events);
        }

        #[test]
        fn filtering_is_idempotent(
            titles in proptest::collection::vec("[a-z]{1,6}", 0..8),
            term in "[a-z]{0,2}",
            min in 0u64..1000,
        ) {
            let events: Vec<Event> = titles.iter().enumerate()
                .map(|(i, t)| event(t, &format!("£{}", i * 100), "desc"))
                .collect();
            let filter = EventFilter::new(term, min);
            let once = filter.apply(&events);
            prop_assert_eq!(filter.apply(&once), once);
        }
    }
}
