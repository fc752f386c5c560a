use crate::core::numeric::RoundingMode;
use serde::{Deserialize, Serialize};

/// Sentinel symbol value that suppresses symbol rendering entirely,
/// regardless of the configured position.
pub const SYMBOL_NONE: &str = "none";

/// Where the currency symbol is attached relative to the numeric core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
    None,
}

/// A named, immutable money formatting policy.
///
/// Defines how a monetary amount is rendered as text: symbol and its
/// placement, digit grouping and decimal separators, decimal-place count
/// and rounding mode. Configs are registered by key in a
/// [`FormatRegistry`](crate::core::registry::FormatRegistry) and shared by
/// name across call sites; redefinition replaces the stored entry.
///
/// The thousand and decimal separators must differ for format→parse
/// round-trips to hold. This is a caller responsibility, not enforced here.
///
/// # Examples
///
/// ```
/// use formata::core::money_config::{MoneyFormatConfig, SymbolPosition};
///
/// let brl = MoneyFormatConfig {
///     symbol: "R$".to_string(),
///     thousand_separator: ".".to_string(),
///     decimal_separator: ",".to_string(),
///     ..MoneyFormatConfig::default()
/// };
/// assert_eq!(brl.symbol_position, SymbolPosition::Prefix);
/// assert_eq!(brl.decimal_places, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormatConfig {
    /// Symbol token; the literal `"none"` suppresses rendering.
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    pub thousand_separator: String,
    pub decimal_separator: String,
    pub decimal_places: u32,
    pub rounding: RoundingMode,
    /// Whether a space separates the symbol from the numeric core.
    pub space_between_symbol: bool,
}

impl Default for MoneyFormatConfig {
    fn default() -> Self {
        Self {
            symbol: "¤".to_string(),
            symbol_position: SymbolPosition::Prefix,
            thousand_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimal_places: 2,
            rounding: RoundingMode::HalfUp,
            space_between_symbol: true,
        }
    }
}

/// A partial money config: every field optional, merged over a base
/// (usually [`MoneyFormatConfig::default`]) when registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyConfigPatch {
    pub symbol: Option<String>,
    pub symbol_position: Option<SymbolPosition>,
    pub thousand_separator: Option<String>,
    pub decimal_separator: Option<String>,
    pub decimal_places: Option<u32>,
    pub rounding: Option<RoundingMode>,
    pub space_between_symbol: Option<bool>,
}

impl MoneyConfigPatch {
    /// Merge this patch over `base`, producing a full config. Supplied
    /// fields win; absent fields keep the base value.
    pub fn merge_over(self, base: &MoneyFormatConfig) -> MoneyFormatConfig {
        MoneyFormatConfig {
            symbol: self.symbol.unwrap_or_else(|| base.symbol.clone()),
            symbol_position: self.symbol_position.unwrap_or(base.symbol_position),
            thousand_separator: self
                .thousand_separator
                .unwrap_or_else(|| base.thousand_separator.clone()),
            decimal_separator: self
                .decimal_separator
                .unwrap_or_else(|| base.decimal_separator.clone()),
            decimal_places: self.decimal_places.unwrap_or(base.decimal_places),
            rounding: self.rounding.unwrap_or(base.rounding),
            space_between_symbol: self
                .space_between_symbol
                .unwrap_or(base.space_between_symbol),
        }
    }
}

impl From<MoneyFormatConfig> for MoneyConfigPatch {
    fn from(cfg: MoneyFormatConfig) -> Self {
        Self {
            symbol: Some(cfg.symbol),
            symbol_position: Some(cfg.symbol_position),
            thousand_separator: Some(cfg.thousand_separator),
            decimal_separator: Some(cfg.decimal_separator),
            decimal_places: Some(cfg.decimal_places),
            rounding: Some(cfg.rounding),
            space_between_symbol: Some(cfg.space_between_symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = MoneyFormatConfig::default();
        assert_eq!(cfg.symbol, "¤");
        assert_eq!(cfg.symbol_position, SymbolPosition::Prefix);
        assert_eq!(cfg.thousand_separator, ",");
        assert_eq!(cfg.decimal_separator, ".");
        assert_eq!(cfg.decimal_places, 2);
        assert_eq!(cfg.rounding, RoundingMode::HalfUp);
        assert!(cfg.space_between_symbol);
    }

    #[test]
    fn test_patch_merge_keeps_unset_fields() {
        let patch = MoneyConfigPatch {
            symbol: Some("R$".to_string()),
            decimal_separator: Some(",".to_string()),
            ..Default::default()
        };
        let merged = patch.merge_over(&MoneyFormatConfig::default());
        assert_eq!(merged.symbol, "R$");
        assert_eq!(merged.decimal_separator, ",");
        assert_eq!(merged.thousand_separator, ",");
        assert_eq!(merged.decimal_places, 2);
    }

    #[test]
    fn test_patch_round_trips_full_config() {
        let cfg = MoneyFormatConfig {
            symbol: "€".to_string(),
            symbol_position: SymbolPosition::Suffix,
            decimal_places: 3,
            ..Default::default()
        };
        let patch: MoneyConfigPatch = cfg.clone().into();
        assert_eq!(patch.merge_over(&MoneyFormatConfig::default()), cfg);
    }

    #[test]
    fn test_serde_round_trip() {
        let cfg = MoneyFormatConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: MoneyFormatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
