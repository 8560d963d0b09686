//! In-memory state of the events page.
//!
//! The catalog owns the full event list fetched once per page load and the
//! subset currently on screen. Every user input arrives as a
//! [`CatalogAction`]; [`Catalog::apply`] handles it to completion and returns
//! the next state, so the view never touches the lists directly.

use crate::filter::{parse_prize, EventFilter};
use crate::models::event::Event;

/// Text shown in place of the grid when the data resource cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load events. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogPhase {
    /// Skeleton cards are on screen while the data resource is fetched.
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    Loaded(Vec<Event>),
    LoadFailed(String),
    SetSearch(String),
    SetMinPrize(String),
    Clear,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    events: Vec<Event>,
    visible: Vec<Event>,
    filter: EventFilter,
    search_input: String,
    prize_input: String,
    phase: CatalogPhase,
    no_events_visible: bool,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            visible: Vec::new(),
            filter: EventFilter::default(),
            search_input: String::new(),
            prize_input: String::new(),
            phase: CatalogPhase::Loading,
            no_events_visible: false,
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &CatalogPhase {
        &self.phase
    }

    /// Full list as fetched.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Subset currently rendered into the grid.
    pub fn visible(&self) -> &[Event] {
        &self.visible
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    /// Raw value of the search box, as the user typed it.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Raw value of the prize select.
    pub fn prize_input(&self) -> &str {
        &self.prize_input
    }

    pub fn no_events_visible(&self) -> bool {
        self.no_events_visible
    }

    pub fn apply(&self, action: CatalogAction) -> Self {
        let mut next = self.clone();
        match action {
            CatalogAction::Loaded(events) => {
                log::info!("Catalog loaded {} events", events.len());
                next.events = events;
                next.visible = next.filter.apply(&next.events);
                next.no_events_visible = !next.filter.is_empty() && next.visible.is_empty();
                next.phase = CatalogPhase::Ready;
            }
            CatalogAction::LoadFailed(reason) => {
                log::error!("Couldn't load events: {}", reason);
                next.events.clear();
                next.visible.clear();
                next.no_events_visible = false;
                next.phase = CatalogPhase::Failed(reason);
            }
            CatalogAction::SetSearch(search) => {
                next.filter.set_search(&search);
                next.search_input = search;
                next.refilter();
            }
            CatalogAction::SetMinPrize(prize) => {
                next.filter.set_min_prize(parse_prize(&prize));
                next.prize_input = prize;
                next.refilter();
            }
            CatalogAction::Clear => {
                next.filter = EventFilter::default();
                next.search_input.clear();
                next.prize_input.clear();
                next.refilter();
            }
        }
        next
    }

    /// Recomputes the visible subset from the full list and updates the
    /// "no events" indicator. The indicator stays hidden while skeletons or
    /// the load error occupy the grid.
    pub fn refilter(&mut self) {
        self.visible = self.filter.apply(&self.events);
        self.no_events_visible = self.phase == CatalogPhase::Ready && self.visible.is_empty();
    }

    /// Message to render in place of the grid, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        match self.phase {
            CatalogPhase::Failed(_) => Some(LOAD_ERROR_MESSAGE),
            _ => None,
        }
    }
}
