//! Birth place to fixed UTC-offset nudge.
//!
//! # Responsibility
//! - Map free-text birth places onto a small fixed offset table.
//!
//! # Invariants
//! - Matching is a case-insensitive substring search in table order.
//! - Unmatched or blank places resolve to a zero offset, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// `(place fragment, whole-hour UTC offset)` in match priority order.
///
/// More specific fragments come before broader region names.
const PLACE_OFFSETS: &[(&str, i32)] = &[
    ("new york", -5),
    ("boston", -5),
    ("miami", -5),
    ("toronto", -5),
    ("chicago", -6),
    ("mexico city", -6),
    ("denver", -7),
    ("los angeles", -8),
    ("san francisco", -8),
    ("seattle", -8),
    ("vancouver", -8),
    ("sao paulo", -3),
    ("buenos aires", -3),
    ("london", 0),
    ("dublin", 0),
    ("lisbon", 0),
    ("paris", 1),
    ("berlin", 1),
    ("madrid", 1),
    ("rome", 1),
    ("amsterdam", 1),
    ("cairo", 2),
    ("athens", 2),
    ("moscow", 3),
    ("istanbul", 3),
    ("dubai", 4),
    ("mumbai", 5),
    ("delhi", 5),
    ("bangkok", 7),
    ("beijing", 8),
    ("shanghai", 8),
    ("singapore", 8),
    ("china", 8),
    ("tokyo", 9),
    ("seoul", 9),
    ("japan", 9),
    ("sydney", 10),
    ("melbourne", 10),
    ("auckland", 12),
];

static PLACE_PATTERNS: Lazy<Vec<(Regex, i32)>> = Lazy::new(|| {
    PLACE_OFFSETS
        .iter()
        .map(|(fragment, offset)| {
            let pattern = format!("(?i){}", regex::escape(fragment));
            (
                Regex::new(pattern.as_str()).expect("escaped place fragment is a valid regex"),
                *offset,
            )
        })
        .collect()
});

/// Returns the fixed hour nudge for a free-text birth place.
pub fn utc_offset_hours(place: &str) -> i32 {
    let trimmed = place.trim();
    if trimmed.is_empty() {
        return 0;
    }
    PLACE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(trimmed))
        .map(|(_, offset)| *offset)
        .unwrap_or(0)
}
