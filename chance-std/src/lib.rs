//! # chance-std
//!
//! Standard implementations for the chance weighted dispatcher.
//!
//! This crate provides:
//! - **Dispatching**: [`WeightedDispatcher`], [`DispatcherBuilder`], [`weighted!`] macro
//! - **Random sources**: [`ThreadRandom`], [`SeededRandom`]
//! - **Testing**: scripted draws and recording callbacks in [`testing`]
//!
//! [`WeightedDispatcher`]: dispatcher::WeightedDispatcher
//! [`DispatcherBuilder`]: dispatcher::DispatcherBuilder
//! [`ThreadRandom`]: random::ThreadRandom
//! [`SeededRandom`]: random::SeededRandom

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use chance_core;

// Modules
pub mod dispatcher;
mod macros;
pub mod random;
pub mod testing;
