//! Domain building blocks shared by the db, media, and api crates.
//!
//! Nothing in here touches the network or the database; everything is
//! plain data and pure functions so it can be unit-tested directly.

pub mod error;
pub mod language;
pub mod price;
pub mod status;
pub mod status_sync;
pub mod types;
pub mod validation;
