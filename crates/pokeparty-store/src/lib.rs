//! Pokeparty Store: PostgreSQL persistence for creature records.
//!
//! The schema lives in the workspace `migrations/` directory.

pub mod pg_creature_repository;
