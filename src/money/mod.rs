//! Money Engine: minor-unit amounts ⇄ locale-shaped strings.

pub mod formatter;
pub mod parser;
