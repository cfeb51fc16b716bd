//! Pokeparty: party/box roster management.
//!
//! Responsible for placing creatures into the party (capacity six) or the
//! box, moving them between the two, ranking the party by stats, and
//! rebalancing the party to the strongest six.

pub mod application;
pub mod domain;
