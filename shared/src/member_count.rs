//! Placeholder community-size figure.
//!
//! There is no Discord integration behind this: the count is a random value
//! in a plausible range that drifts once after a while. Randomness is passed
//! in as a sample in `[0, 1)` so the browser can supply `Math.random()`.

pub const FALLBACK_TEXT: &str = "180+";
pub const DRIFT_DELAY_MS: u32 = 30_000;

const BASE: u32 = 150;
const SPREAD: u32 = 50;
const FLOOR: u32 = 120;

fn scaled(sample: f64, range: u32) -> u32 {
    let clamped = sample.clamp(0.0, 1.0 - f64::EPSILON);
    (clamped * range as f64).floor() as u32
}

/// Mock starting count in `150..200`.
pub fn initial_count(sample: f64) -> u32 {
    BASE + scaled(sample, SPREAD)
}

/// Count after one drift of -3..=+2, never below 120.
pub fn drifted_count(count: u32, sample: f64) -> u32 {
    let variation = scaled(sample, 6) as i64 - 3;
    (count as i64 + variation).max(FLOOR as i64) as u32
}
