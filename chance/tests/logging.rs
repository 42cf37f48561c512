//! Logging smoke tests, compiled only with `--features tracing`.

#![cfg(feature = "tracing")]

use chance::{Entry, InvalidProbability, WeightedDispatcher, testing::CountingCallback};

#[test]
fn test_registration_and_rejection_with_tracing() {
    let mut dispatcher = WeightedDispatcher::new();
    dispatcher.add_entry(Entry::exact(|| {}, 0.6)).unwrap();
    dispatcher.add_entry(Entry::part(|| {}, 1.0)).unwrap();

    assert!(matches!(
        dispatcher.add_entry(Entry::exact(|| {}, 0.5)),
        Err(InvalidProbability::ExceedsOne { .. })
    ));
    assert!(matches!(
        dispatcher.add_entry(Entry::part(|| {}, -1.0)),
        Err(InvalidProbability::OutOfRange { .. })
    ));
    assert_eq!(dispatcher.len(), 2);
}

#[test]
fn test_firing_with_tracing() {
    let counter = CountingCallback::new();
    let mut dispatcher = WeightedDispatcher::with_source(|| 0.25);
    dispatcher
        .add_entry(Entry::exact(counter.clone(), 0.5))
        .unwrap();

    assert!(dispatcher.try_fire_one().is_some());
    assert_eq!(dispatcher.fire_with(0.75), None);
    assert_eq!(counter.count(), 1);
}
