//! # chance - Weighted Random Dispatch
//!
//! `chance` keeps a registry of callbacks, each with a probability, and fires
//! exactly one of them per trigger according to those probabilities.
//!
//! A probability is either an **exact** share of the whole range or a
//! **part** weight that splits whatever the exact shares leave over.
//!
//! ## Quick Start
//!
//! ```rust
//! use chance::prelude::*;
//!
//! let mut dispatcher = chance::create();
//! dispatcher.add_entry(chance::make_entry_exact(|| println!("30%"), 0.3))?;
//! dispatcher.add_entry(chance::make_entry_part(|| println!("35%"), 1.0))?;
//! dispatcher.add_entry(chance::make_entry_part(|| println!("35%"), 1.0))?;
//!
//! dispatcher.fire_one();
//! # Ok::<(), InvalidProbability>(())
//! ```
//!
//! ## Logging
//!
//! Enable the `tracing` feature to emit `tracing` events on registration,
//! rejection and firing. `cargo test --features tracing` also runs the
//! logging smoke tests.
//!
//! ## Deterministic Draws
//!
//! Inject a [`RandomSource`] to control which entry fires:
//!
//! ```rust
//! use chance::{Entry, WeightedDispatcher};
//!
//! let mut dispatcher = WeightedDispatcher::with_source(|| 0.9);
//! dispatcher.add_entry(Entry::exact(|| println!("skipped"), 0.5)).unwrap();
//! dispatcher.add_entry(Entry::part(|| println!("fired"), 1.0)).unwrap();
//! dispatcher.fire_one();
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use chance_core::{Callback, Entry, EntryId, InvalidProbability, Mode, RandomSource, Weight};

pub use chance_std::{
    dispatcher::{DispatcherBuilder, WeightedDispatcher},
    random::{SeededRandom, ThreadRandom},
    weighted,
};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use chance_std::testing::*;
}

/// Create an empty dispatcher drawing from the thread-local generator.
pub fn create() -> WeightedDispatcher {
    WeightedDispatcher::new()
}

/// Create an entry that fires with exactly `probability`.
pub fn make_entry_exact<C: Callback>(callback: C, probability: f64) -> Entry {
    Entry::exact(callback, probability)
}

/// Create an entry that takes `probability` parts of the leftover mass.
pub fn make_entry_part<C: Callback>(callback: C, probability: f64) -> Entry {
    Entry::part(callback, probability)
}

/// Prelude module - common imports for chance.
///
/// # Usage
///
/// ```rust,ignore
/// use chance::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Callback, DispatcherBuilder, Entry, EntryId, InvalidProbability, RandomSource, Weight,
        WeightedDispatcher,
    };
}
