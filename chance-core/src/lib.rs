//! # chance-core
//!
//! Core vocabulary for the chance weighted dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that builds entries or supplies randomness without pulling in the
//! dispatcher itself.
//!
//! # Building Blocks
//!
//! - [`Entry`]: a callback paired with a [`Weight`] and a stable [`EntryId`]
//! - [`Weight`]: either an exact share of the probability mass or a relative
//!   part of whatever the exact shares leave over
//! - [`Callback`]: the action invoked when an entry is selected
//! - [`RandomSource`]: where uniform draws in `[0, 1)` come from
//!
//! # Error Types
//!
//! - [`InvalidProbability`] - the only failure, raised at registration time

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callback;
mod entry;
mod error;
mod random;

// Re-exports
pub use callback::Callback;
pub use entry::{Entry, EntryId, Mode, Weight};
pub use error::InvalidProbability;
pub use random::RandomSource;
