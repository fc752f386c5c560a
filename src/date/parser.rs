use crate::core::date_config::{DateFormatConfig, DateToken};
use crate::date::formatter::format_date;
use chrono::{DateTime, TimeZone, Utc};
use regex::Regex;

/// Parse a date string under a config back into an instant.
///
/// The six recognized tokens are walked in canonical order; each one
/// present in the pattern becomes a fixed-width capturing group at its
/// pattern position, everything else matches literally, anchored both
/// ends. Absent fields default to the epoch-safe values
/// `1970-01-01 00:00:00`. Out-of-range fields (month 13, day 32) fail the
/// calendar construction and yield `None`, as does any shape mismatch.
///
/// Extracted civil fields are interpreted as **UTC**, not the config's
/// timezone. Formatting renders in `cfg.time_zone`, so a format→parse
/// round-trip reconstructs the displayed civil fields rather than the
/// original instant; the two only coincide when the zone is UTC. Callers
/// depend on this wall-clock behavior — keep it.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use formata::core::date_config::DateFormatConfig;
/// use formata::date::parser::parse_date;
///
/// let cfg = DateFormatConfig::default(); // dd/MM/yyyy HH:mm:ss, UTC
/// let parsed = parse_date("02/01/2024 03:04:05", &cfg);
/// assert_eq!(parsed, chrono::Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).single());
/// assert_eq!(parse_date("garbage", &cfg), None);
/// ```
pub fn parse_date(text: &str, cfg: &DateFormatConfig) -> Option<DateTime<Utc>> {
    let (pattern, order) = pattern_regex(&cfg.pattern, true);
    let re = Regex::new(&pattern).ok()?;
    let captures = re.captures(text.trim())?;

    // Epoch-safe defaults for fields the pattern does not carry.
    let mut year: i32 = 1970;
    let mut month: u32 = 1;
    let mut day: u32 = 1;
    let mut hour: u32 = 0;
    let mut minute: u32 = 0;
    let mut second: u32 = 0;

    for (index, token) in order.iter().enumerate() {
        let raw = captures.get(index + 1)?.as_str();
        let value: u32 = raw.parse().ok()?;
        match token {
            DateToken::Day => day = value,
            DateToken::Month => month = value,
            DateToken::Year => year = value as i32,
            DateToken::Hour => hour = value,
            DateToken::Minute => minute = value,
            DateToken::Second => second = value,
        }
    }

    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
}

/// Check whether `text` matches the config's pattern shape: each token
/// becomes a fixed-width digit group, everything else matches literally,
/// anchored with `^...$`.
pub fn validate_date(text: &str, cfg: &DateFormatConfig) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    let (pattern, _) = pattern_regex(&cfg.pattern, false);
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(trimmed),
        Err(_) => false,
    }
}

/// Reformat a date string from one config's shape to another's.
///
/// Unlike money conversion, a failed parse echoes the original text back
/// unchanged — callers rely on getting their input back.
pub fn convert_date(text: &str, from_cfg: &DateFormatConfig, to_cfg: &DateFormatConfig) -> String {
    match parse_date(text, from_cfg) {
        Some(instant) => format_date(instant, to_cfg),
        None => text.to_string(),
    }
}

/// First occurrence of each token in the pattern, ordered by position,
/// overlapping later spans dropped.
fn token_spans(pattern: &str) -> Vec<(usize, DateToken)> {
    let mut spans: Vec<(usize, DateToken)> = DateToken::CANONICAL
        .iter()
        .filter_map(|token| pattern.find(token.literal()).map(|pos| (pos, *token)))
        .collect();
    spans.sort_by_key(|(pos, _)| *pos);

    let mut kept: Vec<(usize, DateToken)> = Vec::new();
    let mut cursor = 0;
    for (pos, token) in spans {
        if pos >= cursor {
            cursor = pos + token.literal().len();
            kept.push((pos, token));
        }
    }
    kept
}

/// Build the anchored regex for a pattern, optionally capturing; returns
/// the capture order alongside.
fn pattern_regex(pattern: &str, capture: bool) -> (String, Vec<DateToken>) {
    let spans = token_spans(pattern);
    let mut regex = String::from("^");
    let mut order = Vec::with_capacity(spans.len());
    let mut cursor = 0;
    for (pos, token) in spans {
        regex.push_str(&regex::escape(&pattern[cursor..pos]));
        let width = token.width();
        if capture {
            regex.push_str(&format!("(\\d{{{width}}})"));
            order.push(token);
        } else {
            regex.push_str(&format!("\\d{{{width}}}"));
        }
        cursor = pos + token.literal().len();
    }
    regex.push_str(&regex::escape(&pattern[cursor..]));
    regex.push('$');
    (regex, order)
}
