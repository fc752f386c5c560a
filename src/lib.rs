//! # formata
//!
//! Locale-aware money and date formatting/parsing engine with per-tenant
//! configuration.
//!
//! Amounts live as integer minor units (cents) and instants as UTC
//! date-times; named, registered configurations (symbol, separators,
//! rounding, pattern tokens, timezone) shape them into human-readable
//! strings and back, including cross-configuration conversion (reformat a
//! string from one locale shape to another's).
//!
//! ## Architecture
//!
//! - **core** — Foundational types: numeric primitives, formatting
//!   policies, the named-configuration registry
//! - **money** — Minor-unit amounts ⇄ locale-shaped strings
//! - **date** — Instants ⇄ pattern-shaped strings in an IANA zone
//! - **tenant** — Ambient per-tenant configuration façade over both engines
//!
//! ## Failure conventions
//!
//! Malformed input never panics and never surfaces an `Err`: money
//! functions return the `"-"` sentinel, `None`, or `false`; date parsing
//! returns `None` and date conversion echoes its input back. The tenant
//! façade degrades through documented defaults on missing or malformed
//! storage.
//!
//! ## A note on date round-trips
//!
//! Formatting renders civil fields in the config's timezone; parsing
//! reconstructs them as UTC. Format→parse round-trips therefore preserve
//! the displayed wall-clock fields, not the original instant, unless the
//! zone is UTC. Downstream callers compensate for this; see
//! [`date::parser::parse_date`].

pub mod core;
pub mod date;
pub mod money;
pub mod tenant;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::date_config::{DateConfigPatch, DateFormatConfig};
    pub use crate::core::money_config::{MoneyConfigPatch, MoneyFormatConfig, SymbolPosition};
    pub use crate::core::numeric::{NumericInput, RoundingMode};
    pub use crate::core::registry::{FormatRegistry, DEFAULT_KEY};
    pub use crate::date::formatter::format_date;
    pub use crate::date::parser::{convert_date, parse_date, validate_date};
    pub use crate::money::formatter::{format_cents, format_money, MONEY_SENTINEL};
    pub use crate::money::parser::{convert_money, parse_money_to_cents, validate_money};
    pub use crate::tenant::facade::TenantFormatter;
    pub use crate::tenant::settings::{MemoryStore, SettingsStore};
}
