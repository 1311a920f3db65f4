#![forbid(unsafe_code)]

//! Person model for the nimloth family tree (headless).
//!
//! The records here mirror the REST person payload one-to-one. Everything in this crate is
//! synchronous and free of I/O: callers hand in already-fetched person lists and get plain
//! values back.

pub mod error;
pub mod person;
pub mod relatives;
pub mod roster;
pub mod time;

pub use error::{Error, Result};
pub use person::{Gender, ParentSlot, Person, PersonId};
pub use relatives::RelativeRequest;
pub use roster::Roster;
pub use time::Elapsed;
