//! Foundational types: numeric primitives, formatting policies, registry.

pub mod date_config;
pub mod money_config;
pub mod numeric;
pub mod registry;
