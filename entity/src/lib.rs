//! SeaORM entities for the message board schema.
//!
//! Each module mirrors one table created by the `migration` crate.

pub mod prelude;

pub mod message;
pub mod user;
pub mod vote;
