pub struct Config;

impl Config {
    /// Relative to the page, so the same build works from any mount point.
    pub const EVENTS_DATA_URL: &'static str = "assets/data/events.json";
    pub const SERVICE_WORKER_PATH: &'static str = "/sw.js";

    /// Placeholder cards shown while the event data is fetched.
    pub const SKELETON_CARDS: usize = 3;
    /// Pause between receiving the event data and rendering it.
    pub const LOAD_DELAY_MS: u32 = 800;
    pub const CARD_DELAY_STEP_SECS: f64 = 0.1;

    pub const WELCOME_DELAY_MS: u32 = 2000;
    pub const WELCOME_MESSAGE: &'static str = "Welcome to UK-IR PUBG Community! 🎮";

    pub const REVEAL_SELECTOR: &'static str = ".reveal, .reveal-left, .reveal-right";
    pub const REVEAL_CLASS: &'static str = "active";
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    pub const REVEAL_ROOT_MARGIN: &'static str = "0px 0px -50px 0px";

    pub const THEME_ATTRIBUTE: &'static str = "data-theme";
    pub const DARK_SCHEME_QUERY: &'static str = "(prefers-color-scheme: dark)";
    pub const NAV_OPEN_CLASS: &'static str = "nav-open";

    /// Options of the minimum-prize select: (value, label).
    pub const PRIZE_OPTIONS: &'static [(&'static str, &'static str)] = &[
        ("", "Any prize"),
        ("100", "£100+"),
        ("250", "£250+"),
        ("500", "£500+"),
        ("1000", "£1,000+"),
    ];

    /// Origin or path prefix the static assets are served from, taken from
    /// `SITE_ASSET_BASE` at build time. Empty means next to the page.
    pub fn asset_base_url() -> &'static str {
        option_env!("SITE_ASSET_BASE").unwrap_or("")
    }
}
