//! Presentational helpers.
//!
//! Pure functions turning raw field values into display-ready text. None of
//! them fail: bad input degrades to a fixed fallback.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ProjectStatus;

/// Text shown in place of a date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Black text, for light backgrounds.
pub const BLACK: &str = "#000000";

/// White text, for dark backgrounds.
pub const WHITE: &str = "#ffffff";

/// Luminance above which text switches to black.
const LUMINANCE_THRESHOLD: f64 = 186.0;

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Order of the day and month tokens in a formatted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStyle {
    /// `Nov 7, 2025`
    #[default]
    MonthFirst,
    /// `7 Nov 2025`
    DayFirst,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::MonthFirst => "%b %-d, %Y",
            Self::DayFirst => "%-d %b %Y",
        }
    }
}

/// Format a `YYYY-MM-DD` date for display.
///
/// The date is a plain calendar date, so no timezone shift can move it to a
/// neighbouring day. Malformed input yields [`INVALID_DATE`].
#[must_use]
pub fn format_date(iso: &str, style: DateStyle) -> String {
    parse_iso_date(iso).map_or_else(
        || INVALID_DATE.to_string(),
        |date| date.format(style.pattern()).to_string(),
    )
}

fn parse_iso_date(iso: &str) -> Option<NaiveDate> {
    let bytes = iso.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()
}

/// Presentational class for a status, empty for unrecognized codes.
#[must_use]
pub fn status_class(status: &ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Planning => "planning",
        ProjectStatus::InProgress => "in-progress",
        ProjectStatus::Completed => "completed",
        ProjectStatus::Other(_) => "",
    }
}

/// Display label for a status; unrecognized codes pass through unchanged.
#[must_use]
pub fn status_label(status: &ProjectStatus) -> &str {
    match status {
        ProjectStatus::Planning => "Planning",
        ProjectStatus::InProgress => "In Progress",
        ProjectStatus::Completed => "Completed",
        ProjectStatus::Other(raw) => raw,
    }
}

/// Pick black or white text for readability on `background`.
///
/// Accepts 3- or 6-digit hex with or without a leading `#`. A missing
/// color is treated as white. Unparseable colors yield white text.
#[must_use]
pub fn ideal_text_color(background: Option<&str>) -> &'static str {
    let hex = background.filter(|h| !h.is_empty()).unwrap_or(WHITE);
    let hex = hex.replacen('#', "", 1);
    let hex = if hex.chars().count() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex
    };

    match luminance(&hex) {
        Some(lum) if lum > LUMINANCE_THRESHOLD => BLACK,
        _ => WHITE,
    }
}

/// Perceptual luminance of a 6-digit hex color, `0.0..=255.0`.
#[must_use]
pub fn luminance(hex: &str) -> Option<f64> {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .map(f64::from)
    };
    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    Some(0.299 * r + 0.587 * g + 0.114 * b)
}
