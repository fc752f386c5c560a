//! Ambient tenant-config façade over the money and date engines.

pub mod facade;
pub mod settings;
