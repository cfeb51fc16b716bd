//! Route modules organized by resource.

pub mod health;
pub mod party;
pub mod pokemon;
pub mod storage_box;

#[cfg(test)]
pub(crate) mod test_helpers;
