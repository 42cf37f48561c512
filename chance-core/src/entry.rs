//! # Entries and Weights
//!
//! An [`Entry`] is one registered unit: a [`Callback`] plus the [`Weight`]
//! that decides how often it fires.
//!
//! # Weight Modes
//!
//! - **Exact**: a fixed fraction of the whole `[0, 1)` range.
//! - **Part**: a relative share of the mass the exact entries leave over.
//! - **Dead**: a zero weight of either kind. Occupies a zero-width interval
//!   and can never be selected.
//!
//! Because a weight is one or the other, an entry can never be in exact and
//! part mode at the same time.

use crate::{callback::Callback, error::InvalidProbability};
use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identifier handed out when an [`Entry`] is built.
///
/// Registration reorders entries, so positions are not stable. Ids are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry#{}", self.0)
    }
}

/// How an entry's probability is expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Weight {
    /// A fixed fraction of the total probability mass, in `[0, 1]`.
    Exact(f64),
    /// A relative weight for splitting the mass left after all exact shares.
    Part(f64),
}

/// The effective mode of a [`Weight`].
///
/// The variant order is the order entries are kept in after registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Non-zero exact share.
    Exact,
    /// Non-zero part weight.
    Part,
    /// Zero weight; never fires.
    Dead,
}

impl Weight {
    /// The effective mode of this weight.
    pub fn mode(&self) -> Mode {
        match *self {
            Weight::Exact(p) if p != 0.0 => Mode::Exact,
            Weight::Part(w) if w != 0.0 => Mode::Part,
            _ => Mode::Dead,
        }
    }

    /// The exact share, or `0.0` for part weights.
    pub fn exact(&self) -> f64 {
        match *self {
            Weight::Exact(p) => p,
            Weight::Part(_) => 0.0,
        }
    }

    /// The part weight, or `0.0` for exact weights.
    pub fn part(&self) -> f64 {
        match *self {
            Weight::Exact(_) => 0.0,
            Weight::Part(w) => w,
        }
    }

    /// Check the value against its domain.
    ///
    /// Exact shares must lie in `[0, 1]`, part weights must be finite and
    /// non-negative.
    pub fn check(&self) -> Result<(), InvalidProbability> {
        let (value, upper) = match *self {
            Weight::Exact(p) => (p, 1.0),
            Weight::Part(w) => (w, f64::INFINITY),
        };
        if !value.is_finite() || value < 0.0 || value > upper {
            return Err(InvalidProbability::OutOfRange { value });
        }
        Ok(())
    }
}

/// A callback together with its weight.
pub struct Entry {
    id: EntryId,
    weight: Weight,
    callback: Box<dyn Callback>,
}

impl Entry {
    /// Create an entry with a weight of the given kind.
    pub fn new<C: Callback>(callback: C, weight: Weight) -> Self {
        Self {
            id: EntryId::next(),
            weight,
            callback: Box::new(callback),
        }
    }

    /// Create an entry that fires with exactly `probability`.
    pub fn exact<C: Callback>(callback: C, probability: f64) -> Self {
        Self::new(callback, Weight::Exact(probability))
    }

    /// Create an entry that takes `probability` parts of the leftover mass.
    pub fn part<C: Callback>(callback: C, probability: f64) -> Self {
        Self::new(callback, Weight::Part(probability))
    }

    /// Create an entry that never fires.
    pub fn dead<C: Callback>(callback: C) -> Self {
        Self::new(callback, Weight::Exact(0.0))
    }

    /// The stable identifier of this entry.
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// The configured weight.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The effective mode.
    pub fn mode(&self) -> Mode {
        self.weight.mode()
    }

    /// The exact share, `0.0` when not in exact mode.
    pub fn exact_probability(&self) -> f64 {
        self.weight.exact()
    }

    /// The part weight, `0.0` when not in part mode.
    pub fn part_probability(&self) -> f64 {
        self.weight.part()
    }

    /// Whether the entry can never be selected.
    pub fn is_dead(&self) -> bool {
        self.mode() == Mode::Dead
    }

    /// Run the callback.
    pub fn invoke(&mut self) {
        self.callback.invoke();
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_modes() {
        assert_eq!(Weight::Exact(0.3).mode(), Mode::Exact);
        assert_eq!(Weight::Part(2.0).mode(), Mode::Part);
        assert_eq!(Weight::Exact(0.0).mode(), Mode::Dead);
        assert_eq!(Weight::Part(0.0).mode(), Mode::Dead);
    }

    #[test]
    fn test_mode_order_puts_dead_last() {
        let mut modes = vec![Mode::Dead, Mode::Part, Mode::Exact];
        modes.sort();
        assert_eq!(modes, vec![Mode::Exact, Mode::Part, Mode::Dead]);
    }

    #[test]
    fn test_accessors_zero_the_other_kind() {
        let exact = Entry::exact(|| {}, 0.25);
        assert_eq!(exact.exact_probability(), 0.25);
        assert_eq!(exact.part_probability(), 0.0);

        let part = Entry::part(|| {}, 3.0);
        assert_eq!(part.exact_probability(), 0.0);
        assert_eq!(part.part_probability(), 3.0);

        assert!(Entry::dead(|| {}).is_dead());
    }

    #[test]
    fn test_check_domain() {
        assert!(Weight::Exact(0.0).check().is_ok());
        assert!(Weight::Exact(1.0).check().is_ok());
        assert!(Weight::Part(42.0).check().is_ok());

        assert_eq!(
            Weight::Exact(1.5).check(),
            Err(InvalidProbability::OutOfRange { value: 1.5 })
        );
        assert_eq!(
            Weight::Part(-1.0).check(),
            Err(InvalidProbability::OutOfRange { value: -1.0 })
        );
        assert!(Weight::Exact(f64::NAN).check().is_err());
        assert!(Weight::Part(f64::INFINITY).check().is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Entry::exact(|| {}, 0.1);
        let b = Entry::exact(|| {}, 0.1);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_invoke_runs_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let mut entry = Entry::exact(
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            1.0,
        );

        entry.invoke();
        entry.invoke();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_skips_callback() {
        let entry = Entry::part(|| {}, 1.0);
        let rendered = format!("{entry:?}");
        assert!(rendered.contains("Part(1.0)"));
        assert!(rendered.ends_with(".. }"));
    }
}
