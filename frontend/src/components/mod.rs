pub mod event_card;
pub mod event_catalog;
pub mod footer;
pub mod member_count;
pub mod nav;
pub mod scroll_reveal;
pub mod theme_toggle;
pub mod toast;
