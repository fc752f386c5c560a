use crate::core::date_config::{DateFormatConfig, DateToken};
use crate::date::civil::{CivilFieldSource, CivilFields, ZoneDatabase};
use chrono::{DateTime, Utc};

/// Format an instant under a config, rendering civil fields in the
/// config's timezone via the tz database.
///
/// Token substitution is an explicit ordered list applied once each —
/// `dd`, `MM`, `yyyy`, `HH`, `mm`, `ss` — replacing only the first
/// occurrence of each token. The minute token additionally skips any `mm`
/// immediately preceded by another `m`, so it cannot collide with digits
/// already substituted for neighboring tokens. Patterns with repeated
/// tokens leave later occurrences unsubstituted.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use formata::core::date_config::DateFormatConfig;
/// use formata::date::formatter::format_date;
///
/// let cfg = DateFormatConfig::default(); // dd/MM/yyyy HH:mm:ss, UTC
/// let instant = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(format_date(instant, &cfg), "02/01/2024 03:04:05");
/// ```
pub fn format_date(instant: DateTime<Utc>, cfg: &DateFormatConfig) -> String {
    format_date_with(&ZoneDatabase, instant, cfg)
}

/// [`format_date`] with an explicit civil-field source.
pub fn format_date_with(
    source: &impl CivilFieldSource,
    instant: DateTime<Utc>,
    cfg: &DateFormatConfig,
) -> String {
    let fields = source.civil_fields(instant, cfg.time_zone);
    let mut rendered = cfg.pattern.clone();
    for token in DateToken::CANONICAL {
        let value = field_text(token, &fields);
        match token {
            DateToken::Minute => substitute_minute(&mut rendered, &value),
            _ => substitute_once(&mut rendered, token.literal(), &value),
        }
    }
    rendered
}

fn field_text(token: DateToken, fields: &CivilFields) -> String {
    match token {
        DateToken::Day => format!("{:02}", fields.day),
        DateToken::Month => format!("{:02}", fields.month),
        DateToken::Year => format!("{:04}", fields.year),
        DateToken::Hour => format!("{:02}", fields.hour),
        DateToken::Minute => format!("{:02}", fields.minute),
        DateToken::Second => format!("{:02}", fields.second),
    }
}

fn substitute_once(text: &mut String, token: &str, value: &str) {
    if let Some(idx) = text.find(token) {
        text.replace_range(idx..idx + token.len(), value);
    }
}

/// First `mm` not immediately preceded by another `m`.
fn substitute_minute(text: &mut String, value: &str) {
    let bytes = text.as_bytes();
    for i in 0..bytes.len().saturating_sub(1) {
        if bytes[i] == b'm' && bytes[i + 1] == b'm' && (i == 0 || bytes[i - 1] != b'm') {
            text.replace_range(i..i + 2, value);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Tz;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_full_pattern_utc() {
        let cfg = DateFormatConfig::default();
        assert_eq!(format_date(instant(), &cfg), "02/01/2024 03:04:05");
    }

    #[test]
    fn test_date_only_pattern() {
        let cfg = DateFormatConfig {
            pattern: "dd/MM/yyyy".to_string(),
            time_zone: Tz::UTC,
        };
        assert_eq!(format_date(instant(), &cfg), "02/01/2024");
    }

    #[test]
    fn test_year_first_pattern() {
        let cfg = DateFormatConfig {
            pattern: "yyyy-MM-dd HH:mm".to_string(),
            time_zone: Tz::UTC,
        };
        assert_eq!(format_date(instant(), &cfg), "2024-01-02 03:04");
    }

    #[test]
    fn test_zone_shifts_fields() {
        let cfg = DateFormatConfig {
            pattern: "dd/MM/yyyy HH:mm:ss".to_string(),
            time_zone: chrono_tz::America::Sao_Paulo,
        };
        // 03:04:05Z is 00:04:05 on the same day at UTC-3.
        assert_eq!(format_date(instant(), &cfg), "02/01/2024 00:04:05");
    }

    #[test]
    fn test_repeated_token_left_unsubstituted() {
        let cfg = DateFormatConfig {
            pattern: "dd dd".to_string(),
            time_zone: Tz::UTC,
        };
        assert_eq!(format_date(instant(), &cfg), "02 dd");
    }

    #[test]
    fn test_literal_text_preserved() {
        let cfg = DateFormatConfig {
            pattern: "dia dd".to_string(),
            time_zone: Tz::UTC,
        };
        assert_eq!(format_date(instant(), &cfg), "dia 02");
    }

    #[test]
    fn test_fake_source_drives_fields() {
        struct Fixed;
        impl CivilFieldSource for Fixed {
            fn civil_fields(&self, _: DateTime<Utc>, _: Tz) -> CivilFields {
                CivilFields {
                    year: 1999,
                    month: 12,
                    day: 31,
                    hour: 23,
                    minute: 59,
                    second: 58,
                }
            }
        }
        let cfg = DateFormatConfig::default();
        assert_eq!(
            format_date_with(&Fixed, instant(), &cfg),
            "31/12/1999 23:59:58"
        );
    }
}
