//! Pokeparty Fetcher: random creature retrieval.
//!
//! Looks up the members of a category on the external creature-data API,
//! picks one uniformly at random, and normalizes its detail into the
//! roster's `Creature` record.

pub mod client;
pub mod dto;
pub mod mapping;
pub mod random;
