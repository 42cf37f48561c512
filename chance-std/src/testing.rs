//! Testing utilities for chance.
//!
//! This module provides utilities to make testing dispatchers deterministic.
//!
//! # Features
//!
//! - [`FixedDraws`]: A random source that replays a scripted draw sequence
//! - [`CountingCallback`]: A callback that counts its invocations
//! - [`CallLog`]: A shared log that labelled callbacks write into

use chance_core::{Callback, RandomSource};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Fixed Draws
// ============================================================================

/// A random source that cycles through a fixed script of draws.
///
/// An empty script always yields `0.0`.
///
/// # Example
///
/// ```rust
/// use chance_std::chance_core::RandomSource;
/// use chance_std::testing::FixedDraws;
///
/// let mut draws = FixedDraws::new(vec![0.2, 0.8]);
/// assert_eq!(draws.next_unit(), 0.2);
/// assert_eq!(draws.next_unit(), 0.8);
/// assert_eq!(draws.next_unit(), 0.2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedDraws {
    script: Vec<f64>,
    cursor: usize,
}

impl FixedDraws {
    /// Create a source replaying `script` in a loop.
    pub fn new(script: Vec<f64>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Create a source that always returns `draw`.
    pub fn constant(draw: f64) -> Self {
        Self::new(vec![draw])
    }

    /// Append a draw to the end of the script.
    pub fn push(&mut self, draw: f64) {
        self.script.push(draw);
    }

    /// Length of the script.
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// Whether the script is empty.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

impl RandomSource for FixedDraws {
    fn next_unit(&mut self) -> f64 {
        let Some(&draw) = self.script.get(self.cursor) else {
            return 0.0;
        };
        self.cursor = (self.cursor + 1) % self.script.len();
        draw
    }
}

// ============================================================================
// Counting Callback
// ============================================================================

/// A callback that counts invocations.
///
/// Clones share the same counter, so keep one clone and register another.
#[derive(Debug, Clone, Default)]
pub struct CountingCallback {
    count: Arc<AtomicUsize>,
}

impl CountingCallback {
    /// Create a new counting callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Callback for CountingCallback {
    fn invoke(&mut self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Call Log
// ============================================================================

/// A shared, ordered record of which labelled callbacks ran.
///
/// # Example
///
/// ```rust
/// use chance_std::chance_core::Callback;
/// use chance_std::testing::CallLog;
///
/// let log = CallLog::new();
/// let mut heads = log.recorder("heads");
/// heads.invoke();
/// assert_eq!(log.calls(), vec!["heads"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends `label` to this log.
    pub fn recorder(&self, label: &'static str) -> RecordingCallback {
        RecordingCallback {
            label,
            calls: self.calls.clone(),
        }
    }

    /// Labels recorded so far, oldest first.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded calls for `label`.
    pub fn count_of(&self, label: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|&&call| call == label)
            .count()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// A callback created by [`CallLog::recorder`].
#[derive(Debug, Clone)]
pub struct RecordingCallback {
    label: &'static str,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl Callback for RecordingCallback {
    fn invoke(&mut self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(self.label);
    }
}
