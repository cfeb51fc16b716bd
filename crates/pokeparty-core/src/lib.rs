//! Pokeparty Core: shared domain types and ports.
//!
//! This crate defines the creature record, the stat vocabulary, and the
//! traits that the roster and fetcher depend on. It contains no
//! infrastructure code.

pub mod command;
pub mod creature;
pub mod error;
pub mod pokedex;
pub mod repository;
pub mod rng;
