use serde::{Deserialize, Serialize};

/// A contest or community activity shown on the events page.
///
/// Every field is display text. `date` is never parsed and `prize` keeps
/// whatever free text the data file carries; see [`Event::prize_value`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    pub date: String,
    pub prize: String,
    pub description: String,
    pub link: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        prize: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            prize: prize.into(),
            description: description.into(),
            link: link.into(),
        }
    }

    /// Line shown under the card title.
    pub fn meta_line(&self) -> String {
        format!("{} • Prize: {}", self.date, self.prize)
    }

    /// Numeric prize amount used by the minimum-prize filter.
    pub fn prize_value(&self) -> u64 {
        crate::filter::parse_prize(&self.prize)
    }
}
