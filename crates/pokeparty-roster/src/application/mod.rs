//! Application layer: command and query handlers over a `CreatureRepository`.

pub mod command_handlers;
pub mod query_handlers;
