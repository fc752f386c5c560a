use crate::core::date_config::{DateConfigPatch, DateFormatConfig};
use crate::core::money_config::{MoneyConfigPatch, MoneyFormatConfig};
use chrono_tz::Tz;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Conventional key for the ambient/default configuration.
pub const DEFAULT_KEY: &str = "default";

/// Named-configuration registry for money and date formatting policies.
///
/// An explicit, owned object rather than process-global state, so each
/// tenant (and each test) gets an isolated registry. Registration merges a
/// patch over the defaults and stores the result under its key; last write
/// wins, insertion order is irrelevant. Lookups return `None` for unknown
/// keys and never panic.
///
/// Date configs registered without a timezone pick up the registry's
/// default zone, captured once at construction.
///
/// # Examples
///
/// ```
/// use formata::core::money_config::MoneyConfigPatch;
/// use formata::core::registry::FormatRegistry;
///
/// let mut registry = FormatRegistry::new();
/// let brl = registry.define_money(
///     "brl",
///     MoneyConfigPatch {
///         symbol: Some("R$".to_string()),
///         thousand_separator: Some(".".to_string()),
///         decimal_separator: Some(",".to_string()),
///         ..Default::default()
///     },
/// );
/// assert_eq!(brl.symbol, "R$");
/// assert!(registry.get_money("missing").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    default_zone: Tz,
    money: HashMap<String, MoneyFormatConfig>,
    date: HashMap<String, DateFormatConfig>,
}

impl FormatRegistry {
    /// Registry with UTC as the default date zone.
    pub fn new() -> Self {
        Self::with_default_zone(Tz::UTC)
    }

    /// Registry whose zone-less date registrations default to `zone`.
    pub fn with_default_zone(zone: Tz) -> Self {
        Self {
            default_zone: zone,
            money: HashMap::new(),
            date: HashMap::new(),
        }
    }

    pub fn default_zone(&self) -> Tz {
        self.default_zone
    }

    /// Merge `patch` over the money defaults and store under `key`,
    /// replacing any existing entry. Returns the stored config.
    pub fn define_money(
        &mut self,
        key: impl Into<String>,
        patch: MoneyConfigPatch,
    ) -> &MoneyFormatConfig {
        let config = patch.merge_over(&MoneyFormatConfig::default());
        match self.money.entry(key.into()) {
            Entry::Occupied(mut entry) => {
                entry.insert(config);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(config),
        }
    }

    /// Stored money config for `key`, or `None`.
    pub fn get_money(&self, key: &str) -> Option<&MoneyFormatConfig> {
        self.money.get(key)
    }

    /// Merge `patch` over the date defaults and store under `key`. A patch
    /// without a timezone inherits the registry's default zone.
    pub fn define_date(
        &mut self,
        key: impl Into<String>,
        patch: DateConfigPatch,
    ) -> &DateFormatConfig {
        let base = DateFormatConfig {
            time_zone: self.default_zone,
            ..Default::default()
        };
        let config = patch.merge_over(&base);
        match self.date.entry(key.into()) {
            Entry::Occupied(mut entry) => {
                entry.insert(config);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(config),
        }
    }

    /// Stored date config for `key`, or `None`.
    pub fn get_date(&self, key: &str) -> Option<&DateFormatConfig> {
        self.date.get(key)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
