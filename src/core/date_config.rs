use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Default pattern applied when a patch supplies none.
pub const DEFAULT_PATTERN: &str = "dd/MM/yyyy HH:mm:ss";

/// The six recognized pattern tokens, in canonical substitution order.
///
/// Everything else in a pattern is a literal separator. Substitution is
/// first-occurrence-only and order-sensitive; repeated tokens are not
/// supported and later occurrences are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateToken {
    Day,
    Month,
    Year,
    Hour,
    Minute,
    Second,
}

impl DateToken {
    /// Canonical processing order: `dd`, `MM`, `yyyy`, `HH`, `mm`, `ss`.
    pub const CANONICAL: [DateToken; 6] = [
        DateToken::Day,
        DateToken::Month,
        DateToken::Year,
        DateToken::Hour,
        DateToken::Minute,
        DateToken::Second,
    ];

    /// The literal token substring as it appears in a pattern.
    pub fn literal(self) -> &'static str {
        match self {
            DateToken::Day => "dd",
            DateToken::Month => "MM",
            DateToken::Year => "yyyy",
            DateToken::Hour => "HH",
            DateToken::Minute => "mm",
            DateToken::Second => "ss",
        }
    }

    /// Fixed digit width of the rendered field.
    pub fn width(self) -> usize {
        match self {
            DateToken::Year => 4,
            _ => 2,
        }
    }
}

/// A named, immutable date formatting policy: a token pattern plus the
/// IANA timezone the civil fields are rendered in.
///
/// When registered through
/// [`FormatRegistry::define_date`](crate::core::registry::FormatRegistry::define_date)
/// with no timezone in the patch, the registry's default zone — captured
/// once at registry construction — is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormatConfig {
    /// Token pattern using `dd`, `MM`, `yyyy`, `HH`, `mm`, `ss`.
    pub pattern: String,
    pub time_zone: Tz,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            time_zone: Tz::UTC,
        }
    }
}

/// A partial date config, merged over a base when registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateConfigPatch {
    pub pattern: Option<String>,
    pub time_zone: Option<Tz>,
}

impl DateConfigPatch {
    /// Merge this patch over `base`; supplied fields win.
    pub fn merge_over(self, base: &DateFormatConfig) -> DateFormatConfig {
        DateFormatConfig {
            pattern: self.pattern.unwrap_or_else(|| base.pattern.clone()),
            time_zone: self.time_zone.unwrap_or(base.time_zone),
        }
    }
}

impl From<DateFormatConfig> for DateConfigPatch {
    fn from(cfg: DateFormatConfig) -> Self {
        Self {
            pattern: Some(cfg.pattern),
            time_zone: Some(cfg.time_zone),
        }
    }
}
