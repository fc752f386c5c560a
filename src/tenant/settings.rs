use chrono_tz::Tz;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Ambient defaults applied when storage is missing or malformed.
pub const DEFAULT_CURRENCY: &str = "BRL";
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::America::Sao_Paulo;

/// Key-value storage the tenant blob is persisted in. The façade only ever
/// reads; writes belong to whoever owns the storage.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory store, used by tests, demos and the CLI.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Errors from loading the tenant blob. The façade never surfaces these;
/// it logs and degrades to [`CompanySettings::default`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no settings blob stored for tenant '{0}'")]
    BlobNotFound(String),
    #[error("settings blob is not valid JSON: {0}")]
    MalformedBlob(#[from] serde_json::Error),
}

/// Recognized date masks stored in tenant configuration. The stored mask
/// uses lowercase `mm` for month; it is mapped onto the engine's token
/// pattern here. Unrecognized masks fall back to locale-default rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateMask {
    DayMonthYearTime,
    YearMonthDayTime,
    DayMonthYear,
}

impl DateMask {
    pub fn from_mask(mask: &str) -> Option<Self> {
        match mask.trim() {
            "dd/mm/yyyy HH:mm:ss" => Some(DateMask::DayMonthYearTime),
            "yyyy/mm/dd HH:mm:ss" => Some(DateMask::YearMonthDayTime),
            "dd/mm/yyyy" => Some(DateMask::DayMonthYear),
            _ => None,
        }
    }

    /// The engine token pattern this mask maps to.
    pub fn pattern(self) -> &'static str {
        match self {
            DateMask::DayMonthYearTime => "dd/MM/yyyy HH:mm:ss",
            DateMask::YearMonthDayTime => "yyyy/MM/dd HH:mm:ss",
            DateMask::DayMonthYear => "dd/MM/yyyy",
        }
    }
}

/// Which character plays the decimal separator, derived from the stored
/// grouping-style hint (e.g. `"1.234,56"` vs `"1,234.56"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecimalConvention {
    Comma,
    Dot,
}

/// Raw shape of the persisted blob. Every field is optional; anything
/// missing or malformed degrades field-by-field.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawCompanyBlob {
    currency: Option<String>,
    date_format: Option<String>,
    number_format: Option<String>,
    time_zone: Option<String>,
    image: Option<RawImage>,
    website: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawImage {
    url: Option<String>,
}

/// Normalized per-tenant configuration read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySettings {
    /// ISO 4217 code, e.g. `BRL`.
    pub currency_code: String,
    /// Display symbol embedded in the stored currency string, when present
    /// (e.g. the `R$` in `"BRL (R$)"`).
    pub currency_symbol: Option<String>,
    /// Recognized date mask; `None` means locale-default rendering.
    pub date_mask: Option<DateMask>,
    pub decimal_convention: DecimalConvention,
    pub time_zone: Tz,
    pub logo_url: Option<String>,
    pub website: Option<String>,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            currency_code: DEFAULT_CURRENCY.to_string(),
            currency_symbol: None,
            date_mask: Some(DateMask::DayMonthYearTime),
            decimal_convention: DecimalConvention::Comma,
            time_zone: DEFAULT_TIME_ZONE,
            logo_url: None,
            website: None,
        }
    }
}

/// Load and normalize the tenant blob.
///
/// Lookup tries the subdomain-scoped key `"{subdomain}:company"` first,
/// then the bare `"company"` fallback. Field-level problems inside a
/// well-formed blob never error: each field degrades to its default with
/// a warning.
pub fn load_settings(
    store: &dyn SettingsStore,
    subdomain: &str,
) -> Result<CompanySettings, SettingsError> {
    let blob = store
        .get(&format!("{subdomain}:company"))
        .or_else(|| store.get("company"))
        .ok_or_else(|| SettingsError::BlobNotFound(subdomain.to_string()))?;
    let raw: RawCompanyBlob = serde_json::from_str(&blob)?;
    Ok(normalize(raw))
}

fn normalize(raw: RawCompanyBlob) -> CompanySettings {
    let defaults = CompanySettings::default();

    let (currency_code, currency_symbol) = match raw.currency.as_deref().map(parse_currency_field)
    {
        Some(Some(parsed)) => parsed,
        Some(None) => {
            warn!(
                "unrecognized stored currency '{}', falling back to {}",
                raw.currency.as_deref().unwrap_or(""),
                DEFAULT_CURRENCY
            );
            (defaults.currency_code.clone(), None)
        }
        None => (defaults.currency_code.clone(), None),
    };

    let time_zone = match raw.time_zone.as_deref() {
        Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            warn!("unknown IANA timezone '{name}', falling back to {DEFAULT_TIME_ZONE}");
            DEFAULT_TIME_ZONE
        }),
        None => DEFAULT_TIME_ZONE,
    };

    let date_mask = match raw.date_format.as_deref() {
        Some(mask) => DateMask::from_mask(mask),
        None => defaults.date_mask,
    };

    let decimal_convention = raw
        .number_format
        .as_deref()
        .map(decimal_convention_of)
        .unwrap_or(defaults.decimal_convention);

    CompanySettings {
        currency_code,
        currency_symbol,
        date_mask,
        decimal_convention,
        time_zone,
        logo_url: raw.image.and_then(|image| image.url),
        website: raw.website,
    }
}

/// Extract the 3-letter code (first run of uppercase ASCII letters of
/// length ≥ 3) and an optional parenthesized symbol from a stored currency
/// display string such as `"BRL (R$)"`.
fn parse_currency_field(raw: &str) -> Option<(String, Option<String>)> {
    let chars: Vec<char> = raw.chars().collect();
    let mut code = None;
    let mut run_start: Option<usize> = None;
    for (i, c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let start = *run_start.get_or_insert(i);
            if i + 1 - start == 3 {
                code = Some(chars[start..=i].iter().collect::<String>());
                break;
            }
        } else {
            run_start = None;
        }
    }
    let code = code?;

    let symbol = raw.find('(').and_then(|open| {
        let close = raw[open..].find(')')? + open;
        let inner = raw[open + 1..close].trim();
        if inner.is_empty() {
            None
        } else {
            Some(inner.to_string())
        }
    });

    Some((code, symbol))
}

/// The hint's last-occurring separator character decides the convention:
/// `"1.234,56"` → comma decimals, `"1,234.56"` → dot decimals.
fn decimal_convention_of(hint: &str) -> DecimalConvention {
    match hint
        .char_indices()
        .filter(|(_, c)| *c == ',' || *c == '.')
        .next_back()
    {
        Some((_, '.')) => DecimalConvention::Dot,
        _ => DecimalConvention::Comma,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(key: &str, blob: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(key, blob);
        store
    }

    #[test]
    fn test_missing_blob_is_error() {
        let store = MemoryStore::new();
        assert!(matches!(
            load_settings(&store, "acme"),
            Err(SettingsError::BlobNotFound(_))
        ));
    }

    #[test]
    fn test_subdomain_key_preferred_over_fallback() {
        let mut store = store_with("company", r#"{"currency": "USD"}"#);
        store.set("acme:company", r#"{"currency": "EUR"}"#);
        let settings = load_settings(&store, "acme").unwrap();
        assert_eq!(settings.currency_code, "EUR");
    }

    #[test]
    fn test_fallback_key_used_when_scoped_missing() {
        let store = store_with("company", r#"{"currency": "USD"}"#);
        let settings = load_settings(&store, "acme").unwrap();
        assert_eq!(settings.currency_code, "USD");
    }

    #[test]
    fn test_malformed_json_is_error() {
        let store = store_with("acme:company", "{not json");
        assert!(matches!(
            load_settings(&store, "acme"),
            Err(SettingsError::MalformedBlob(_))
        ));
    }

    #[test]
    fn test_full_blob_normalizes() {
        let blob = r#"{
            "currency": "BRL (R$)",
            "date_format": "dd/mm/yyyy",
            "number_format": "1.234,56",
            "time_zone": "America/Sao_Paulo",
            "image": {"url": "https://cdn.example/logo.png"},
            "website": "https://example.com"
        }"#;
        let store = store_with("acme:company", blob);
        let settings = load_settings(&store, "acme").unwrap();
        assert_eq!(settings.currency_code, "BRL");
        assert_eq!(settings.currency_symbol.as_deref(), Some("R$"));
        assert_eq!(settings.date_mask, Some(DateMask::DayMonthYear));
        assert_eq!(settings.decimal_convention, DecimalConvention::Comma);
        assert_eq!(settings.time_zone, chrono_tz::America::Sao_Paulo);
        assert_eq!(settings.logo_url.as_deref(), Some("https://cdn.example/logo.png"));
        assert_eq!(settings.website.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_empty_blob_gets_defaults() {
        let store = store_with("acme:company", "{}");
        let settings = load_settings(&store, "acme").unwrap();
        assert_eq!(settings, CompanySettings::default());
    }

    #[test]
    fn test_unrecognized_currency_defaults_to_brl() {
        let store = store_with("acme:company", r#"{"currency": "???"}"#);
        let settings = load_settings(&store, "acme").unwrap();
        assert_eq!(settings.currency_code, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_unknown_zone_defaults() {
        let store = store_with("acme:company", r#"{"time_zone": "Mars/Olympus_Mons"}"#);
        let settings = load_settings(&store, "acme").unwrap();
        assert_eq!(settings.time_zone, DEFAULT_TIME_ZONE);
    }

    #[test]
    fn test_unrecognized_mask_means_locale_default() {
        let store = store_with("acme:company", r#"{"date_format": "MM-dd-yy"}"#);
        let settings = load_settings(&store, "acme").unwrap();
        assert_eq!(settings.date_mask, None);
    }

    #[test]
    fn test_number_format_hint_picks_convention() {
        assert_eq!(decimal_convention_of("1.234,56"), DecimalConvention::Comma);
        assert_eq!(decimal_convention_of("1,234.56"), DecimalConvention::Dot);
        assert_eq!(decimal_convention_of(""), DecimalConvention::Comma);
    }

    #[test]
    fn test_parse_currency_field_variants() {
        assert_eq!(
            parse_currency_field("BRL (R$)"),
            Some(("BRL".to_string(), Some("R$".to_string())))
        );
        assert_eq!(parse_currency_field("USD"), Some(("USD".to_string(), None)));
        assert_eq!(
            parse_currency_field("Real BRL (R$)"),
            Some(("BRL".to_string(), Some("R$".to_string())))
        );
        assert_eq!(parse_currency_field("reais"), None);
        assert_eq!(parse_currency_field(""), None);
    }
}
