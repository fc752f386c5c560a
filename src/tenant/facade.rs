use crate::core::date_config::{DateConfigPatch, DateFormatConfig, DEFAULT_PATTERN};
use crate::core::money_config::{MoneyFormatConfig, SymbolPosition};
use crate::core::numeric::NumericInput;
use crate::core::registry::{FormatRegistry, DEFAULT_KEY};
use crate::date::formatter::format_date;
use crate::money::formatter::{format_money, MONEY_SENTINEL};
use crate::tenant::settings::{
    load_settings, CompanySettings, DecimalConvention, SettingsStore, DEFAULT_CURRENCY,
};
use chrono::{DateTime, Utc};
use log::warn;

/// Rendering used when the ambient mask is unrecognized.
const LOCALE_DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Locale-convention preset for a known currency code, per the fixed
/// currency→locale table (BRL→pt-BR, USD→en-US, EUR→de-DE, GBP→en-GB,
/// JPY→ja-JP, MXN→es-MX, CAD→en-CA, AUD→en-AU). Unknown codes get `None`.
pub fn locale_preset(code: &str) -> Option<MoneyFormatConfig> {
    let preset = match code {
        "BRL" => MoneyFormatConfig {
            symbol: "R$".to_string(),
            thousand_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            ..Default::default()
        },
        "USD" => MoneyFormatConfig {
            symbol: "$".to_string(),
            space_between_symbol: false,
            ..Default::default()
        },
        "EUR" => MoneyFormatConfig {
            symbol: "€".to_string(),
            symbol_position: SymbolPosition::Suffix,
            thousand_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            ..Default::default()
        },
        "GBP" => MoneyFormatConfig {
            symbol: "£".to_string(),
            space_between_symbol: false,
            ..Default::default()
        },
        "JPY" => MoneyFormatConfig {
            symbol: "¥".to_string(),
            decimal_places: 0,
            space_between_symbol: false,
            ..Default::default()
        },
        "MXN" | "CAD" | "AUD" => MoneyFormatConfig {
            symbol: "$".to_string(),
            space_between_symbol: false,
            ..Default::default()
        },
        _ => return None,
    };
    Some(preset)
}

/// Convenience façade applying ambient per-tenant configuration as the
/// implicit default for formatting.
///
/// Construction reads the tenant blob from storage (degrading to defaults,
/// never failing) and seeds a [`FormatRegistry`] under the `"default"` key
/// so named-config and ambient call sites agree. All formatting methods
/// degrade through documented fallback chains instead of erroring.
///
/// # Examples
///
/// ```
/// use formata::tenant::facade::TenantFormatter;
/// use formata::tenant::settings::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// store.set("acme:company", r#"{"currency": "USD"}"#);
/// let formatter = TenantFormatter::new(&store, "acme");
/// assert_eq!(formatter.format_currency(1234.56), "$1,234.56");
/// assert_eq!(formatter.format_currency("abc"), "-");
/// ```
#[derive(Debug, Clone)]
pub struct TenantFormatter {
    settings: CompanySettings,
    registry: FormatRegistry,
}

impl TenantFormatter {
    /// Read the tenant blob for `subdomain` from `store`. Missing or
    /// malformed storage logs a warning and falls back to the defaults.
    pub fn new(store: &dyn SettingsStore, subdomain: &str) -> Self {
        let settings = load_settings(store, subdomain).unwrap_or_else(|err| {
            warn!("tenant settings unavailable ({err}), using defaults");
            CompanySettings::default()
        });
        Self::from_settings(settings)
    }

    /// Build the façade from already-normalized settings.
    pub fn from_settings(settings: CompanySettings) -> Self {
        let mut registry = FormatRegistry::with_default_zone(settings.time_zone);
        registry.define_money(DEFAULT_KEY, money_config_for(&settings).into());
        registry.define_date(
            DEFAULT_KEY,
            DateConfigPatch {
                pattern: Some(
                    settings
                        .date_mask
                        .map(|mask| mask.pattern().to_string())
                        .unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
                ),
                time_zone: None,
            },
        );
        Self { settings, registry }
    }

    pub fn settings(&self) -> &CompanySettings {
        &self.settings
    }

    /// The registry seeded from this tenant's settings (key `"default"`).
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FormatRegistry {
        &mut self.registry
    }

    /// Locale-sensitive currency formatting with the ambient currency.
    ///
    /// Fallback chain: ambient config → fixed pt-BR/BRL formatting →
    /// plain fixed-point text. Uncoercible input yields the `"-"`
    /// sentinel; a recognizable value always yields a non-empty string.
    pub fn format_currency(&self, input: impl Into<NumericInput>) -> String {
        let Some(value) = input.into().coerce() else {
            return MONEY_SENTINEL.to_string();
        };
        if let Some(cfg) = self.registry.get_money(DEFAULT_KEY) {
            let formatted = format_money(value, cfg);
            if formatted != MONEY_SENTINEL {
                return formatted;
            }
        }
        if let Some(brl) = locale_preset(DEFAULT_CURRENCY) {
            let formatted = format_money(value, &brl);
            if formatted != MONEY_SENTINEL {
                return formatted;
            }
        }
        format!("{value:.2}")
    }

    /// Format an instant with the ambient mask in the ambient timezone;
    /// unrecognized masks render the locale default shape instead.
    pub fn format_date(&self, instant: DateTime<Utc>) -> String {
        match self.settings.date_mask {
            Some(mask) => {
                let cfg = self
                    .registry
                    .get_date(DEFAULT_KEY)
                    .cloned()
                    .unwrap_or_else(|| DateFormatConfig {
                        pattern: mask.pattern().to_string(),
                        time_zone: self.settings.time_zone,
                    });
                format_date(instant, &cfg)
            }
            None => instant
                .with_timezone(&self.settings.time_zone)
                .format(LOCALE_DEFAULT_FORMAT)
                .to_string(),
        }
    }
}

/// Ambient money config: locale preset for the tenant currency, with the
/// stored symbol override applied; unknown codes render the code itself as
/// a prefix symbol under the tenant's decimal convention.
fn money_config_for(settings: &CompanySettings) -> MoneyFormatConfig {
    let mut cfg = match locale_preset(&settings.currency_code) {
        Some(preset) => preset,
        None => {
            let (thousand, decimal) = match settings.decimal_convention {
                DecimalConvention::Comma => (".", ","),
                DecimalConvention::Dot => (",", "."),
            };
            MoneyFormatConfig {
                symbol: settings.currency_code.clone(),
                thousand_separator: thousand.to_string(),
                decimal_separator: decimal.to_string(),
                ..Default::default()
            }
        }
    };
    if let Some(symbol) = &settings.currency_symbol {
        cfg.symbol = symbol.clone();
    }
    cfg
}
