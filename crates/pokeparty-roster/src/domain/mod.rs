//! Domain layer: commands and pure ranking rules.

pub mod commands;
pub mod ranking;
