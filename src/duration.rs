//! Normalization of recipe durations into fractional hours.
//!
//! Two textual encodings show up on recipe pages: the ISO-8601-like compact
//! form used in structured data (`PT1H30M`) and free text scraped from the
//! page (`1:15`, `Cooking time 1 to 1 hour 30 minutes`).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static COLON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+)").expect("COLON_RE should compile"));
static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("DIGITS_RE should compile"));

const COMPACT_PREFIX: &str = "PT";

/// Parse a compact (`PT1H30M`) or colon (`1:30`) duration into hours.
///
/// Anything that matches neither form yields `0.0`.
pub fn parse_duration(text: &str) -> f64 {
    let text = text.trim();

    if let Some(rest) = text.strip_prefix(COMPACT_PREFIX) {
        return match compact_components(rest) {
            (Some(hours), Some(minutes)) => f64::from(hours) + f64::from(minutes) / 60.0,
            (None, Some(minutes)) => f64::from(minutes) / 60.0,
            (Some(hours), None) => f64::from(hours),
            (None, None) => 0.0,
        };
    }

    if let Some(caps) = COLON_RE.captures(text) {
        let hours = caps[1].parse::<u32>().ok();
        let minutes = caps[2].parse::<u32>().ok();
        if let (Some(hours), Some(minutes)) = (hours, minutes) {
            return f64::from(hours) + f64::from(minutes) / 60.0;
        }
    }

    0.0
}

/// Split the part after `PT` into its hour and minute components.
fn compact_components(rest: &str) -> (Option<u32>, Option<u32>) {
    let (hours, after_hours) = match rest.find('H') {
        Some(pos) => (rest[..pos].parse::<u32>().ok(), &rest[pos + 1..]),
        None => (None, rest),
    };
    let minutes = after_hours
        .find('M')
        .and_then(|pos| after_hours[..pos].parse::<u32>().ok());

    (hours, minutes)
}

/// Parse the prose cook-time text shown on the page into hours.
///
/// A single number is read as minutes. With several numbers, the largest one
/// below ten is taken as whole hours and the rest are dropped (minutes,
/// serving counts and other page noise). Text without any number is zero.
/// Returns `None` only when none of several numbers is below ten.
pub fn parse_cook_duration(text: &str) -> Option<f64> {
    // digit runs too long for u64 still count as (large) tokens
    let tokens: Vec<u64> = DIGITS_RE
        .find_iter(text)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
        .collect();

    match tokens.as_slice() {
        [] => Some(0.0),
        [minutes] => Some(*minutes as f64 / 60.0),
        _ => max_less_than_ten(&tokens).map(|hours| hours as f64),
    }
}

/// Largest value strictly below ten, if any.
pub fn max_less_than_ten(numbers: &[u64]) -> Option<u64> {
    numbers.iter().copied().filter(|&n| n < 10).max()
}

/// A duration split into whole hours and minutes for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursAndMinutes {
    pub hours: u64,
    pub minutes: u64,
}

impl HoursAndMinutes {
    pub fn from_hours(total: f64) -> Self {
        let total = if total.is_finite() { total.max(0.0) } else { 0.0 };
        let mut hours = total.floor() as u64;
        let mut minutes = ((total - total.floor()) * 60.0).round() as u64;
        if minutes >= 60 {
            hours += 1;
            minutes -= 60;
        }
        Self { hours, minutes }
    }
}

impl fmt::Display for HoursAndMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours and {} minutes", self.hours, self.minutes)
    }
}

/// Combine prep and cook durations. An undefined cook duration makes the
/// total undefined rather than silently counting it as zero.
pub fn total_time(prep_hours: f64, cook_hours: Option<f64>) -> Option<HoursAndMinutes> {
    cook_hours.map(|cook| HoursAndMinutes::from_hours(prep_hours + cook))
}
