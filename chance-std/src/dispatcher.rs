//! # Weighted Dispatcher
//!
//! Holds an ordered set of [`Entry`] values and a cumulative limit table
//! derived from their weights. Each fire draws one uniform value and invokes
//! the first entry whose limit exceeds it.
//!
//! # Layout
//!
//! After every successful registration the entries are stably partitioned
//! into exact, part and dead groups, and the limit table is rebuilt from
//! scratch:
//!
//! ```text
//!  exact A=0.5      part B=1   part C=3
//! [0.0 ........ 0.5)[..0.625)[........ 1.0)
//! ```
//!
//! # Usage Constraints
//!
//! There is no internal locking. Registration and firing both take
//! `&mut self`, so sharing a dispatcher across threads requires the caller to
//! serialize access, and a callback cannot re-enter the dispatcher that is
//! invoking it.
//!
//! # Example
//!
//! ```rust
//! use chance_std::chance_core::Entry;
//! use chance_std::dispatcher::WeightedDispatcher;
//!
//! let mut dispatcher = WeightedDispatcher::with_source(|| 0.7);
//! dispatcher.add_entry(Entry::exact(|| println!("heads"), 0.5)).unwrap();
//! dispatcher.add_entry(Entry::part(|| println!("tails"), 1.0)).unwrap();
//!
//! assert_eq!(dispatcher.limits(), &[0.5, 1.0]);
//! dispatcher.fire_one(); // prints "tails"
//! ```

use crate::random::ThreadRandom;
use chance_core::{Entry, EntryId, InvalidProbability, Mode, RandomSource};

/// A registry of weighted callbacks that fires one per trigger.
#[derive(Debug)]
pub struct WeightedDispatcher<R = ThreadRandom> {
    entries: Vec<Entry>,
    limits: Vec<f64>,
    source: R,
}

impl WeightedDispatcher {
    /// Create an empty dispatcher drawing from the thread-local generator.
    pub fn new() -> Self {
        Self::with_source(ThreadRandom)
    }
}

impl Default for WeightedDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> WeightedDispatcher<R> {
    /// Create an empty dispatcher drawing from `source`.
    pub fn with_source(source: R) -> Self {
        Self {
            entries: Vec::new(),
            limits: Vec::new(),
            source,
        }
    }

    /// Register an entry.
    ///
    /// Fails with [`InvalidProbability`] if the entry's own probability is out
    /// of range or if the exact probabilities would sum to more than 1. On
    /// failure nothing changes.
    ///
    /// Entries may move on every registration; use [`Entry::id`] to find them
    /// again.
    pub fn add_entry(&mut self, entry: Entry) -> Result<(), InvalidProbability> {
        if let Err(err) = entry.weight().check() {
            #[cfg(feature = "tracing")]
            tracing::warn!(id = %entry.id(), weight = ?entry.weight(), %err, "rejected entry");
            return Err(err);
        }

        let sum = self.exact_total() + entry.exact_probability();
        if sum > 1.0 {
            #[cfg(feature = "tracing")]
            tracing::warn!(id = %entry.id(), sum, "rejected entry: exact probabilities exceed 1");
            return Err(InvalidProbability::ExceedsOne { sum });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = %entry.id(),
            mode = ?entry.mode(),
            entries = self.entries.len() + 1,
            "registered entry"
        );

        self.entries.push(entry);
        // `sort_by_key` is stable, so each group keeps its insertion order.
        self.entries.sort_by_key(Entry::mode);
        self.recompute_limits();
        Ok(())
    }

    /// Rebuild the cumulative limit table from the current entries.
    ///
    /// Exact and dead entries add their exact share to the running total.
    /// Part entries split `1 - exact_total` in proportion to their weights.
    pub fn recompute_limits(&mut self) {
        let leftover = 1.0 - self.exact_total();
        let parts = || {
            self.entries
                .iter()
                .filter(|entry| entry.mode() == Mode::Part)
                .map(Entry::part_probability)
        };
        let mut scale = 1.0;
        let mut total_parts: f64 = parts().sum();
        if !total_parts.is_finite() {
            // Rescale by the largest weight so the sum stays finite.
            scale = parts().fold(0.0, f64::max);
            total_parts = parts().map(|part| part / scale).sum();
        }

        let mut running = 0.0;
        self.limits = self
            .entries
            .iter()
            .map(|entry| {
                match entry.mode() {
                    // Only reached when `total_parts` is positive.
                    Mode::Part => {
                        running += leftover / total_parts * (entry.part_probability() / scale)
                    }
                    Mode::Exact | Mode::Dead => running += entry.exact_probability(),
                }
                running
            })
            .collect();
    }

    /// Draw once and invoke the selected callback, if any.
    ///
    /// An empty or underfilled table is a silent no-op.
    pub fn fire_one(&mut self) {
        let _ = self.try_fire_one();
    }

    /// Like [`fire_one`](Self::fire_one), returning the id of the entry that fired.
    pub fn try_fire_one(&mut self) -> Option<EntryId> {
        let draw = self.source.next_unit();
        self.fire_with(draw)
    }

    /// Invoke the first non-empty interval whose limit strictly exceeds `draw`.
    ///
    /// At most one callback runs. Zero-width intervals are never selected.
    pub fn fire_with(&mut self, draw: f64) -> Option<EntryId> {
        let Some(index) = self.index_for(draw) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(draw, entries = self.entries.len(), "draw selected nothing");
            return None;
        };

        let entry = &mut self.entries[index];
        #[cfg(feature = "tracing")]
        tracing::debug!(id = %entry.id(), draw, "firing entry");
        entry.invoke();
        Some(entry.id())
    }

    /// The entry `draw` would select, without invoking it.
    pub fn select(&self, draw: f64) -> Option<EntryId> {
        self.index_for(draw).map(|index| self.entries[index].id())
    }

    fn index_for(&self, draw: f64) -> Option<usize> {
        let mut lower = 0.0;
        self.limits.iter().position(|&limit| {
            let hit = limit > draw && limit > lower;
            lower = limit;
            hit
        })
    }

    /// Number of registered entries, dead ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The cumulative limit table, one value per entry in storage order.
    pub fn limits(&self) -> &[f64] {
        &self.limits
    }

    /// Entry ids in storage order.
    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.entries.iter().map(Entry::id)
    }

    /// Current storage position of an entry.
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    /// Upper bound of an entry's interval.
    pub fn limit_of(&self, id: EntryId) -> Option<f64> {
        self.position(id).map(|index| self.limits[index])
    }

    /// Sum of all exact probabilities registered so far.
    pub fn exact_total(&self) -> f64 {
        self.entries.iter().map(Entry::exact_probability).sum()
    }

    /// Mutable access to the random source, e.g. to reseed it.
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }
}

/// Builder for constructing a [`WeightedDispatcher`].
///
/// # Example
///
/// ```rust
/// use chance_std::chance_core::Entry;
/// use chance_std::dispatcher::DispatcherBuilder;
/// use chance_std::random::SeededRandom;
///
/// let dispatcher = DispatcherBuilder::new()
///     .random_source(SeededRandom::new(7))
///     .entry(Entry::exact(|| {}, 0.5))?
///     .entry(Entry::part(|| {}, 1.0))?
///     .build();
/// assert_eq!(dispatcher.len(), 2);
/// # Ok::<(), chance_std::chance_core::InvalidProbability>(())
/// ```
#[derive(Debug)]
pub struct DispatcherBuilder<R = ThreadRandom> {
    dispatcher: WeightedDispatcher<R>,
}

impl DispatcherBuilder {
    /// Create a builder using the thread-local generator.
    pub fn new() -> Self {
        Self {
            dispatcher: WeightedDispatcher::new(),
        }
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> DispatcherBuilder<R> {
    /// Replace the random source, keeping entries added so far.
    pub fn random_source<S: RandomSource>(self, source: S) -> DispatcherBuilder<S> {
        let WeightedDispatcher {
            entries, limits, ..
        } = self.dispatcher;
        DispatcherBuilder {
            dispatcher: WeightedDispatcher {
                entries,
                limits,
                source,
            },
        }
    }

    /// Register an entry.
    pub fn entry(mut self, entry: Entry) -> Result<Self, InvalidProbability> {
        self.dispatcher.add_entry(entry)?;
        Ok(self)
    }

    /// Build the dispatcher.
    pub fn build(self) -> WeightedDispatcher<R> {
        self.dispatcher
    }
}
