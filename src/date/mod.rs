//! Date Engine: instants ⇄ pattern-shaped strings in an IANA zone.

pub mod civil;
pub mod formatter;
pub mod parser;
