#![allow(dead_code)]

use chance::{RandomSource, WeightedDispatcher};

// ============================================================================
// Assertions
// ============================================================================

pub const EPSILON: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_limits<R: RandomSource>(dispatcher: &WeightedDispatcher<R>, expected: &[f64]) {
    let limits = dispatcher.limits();
    assert_eq!(limits.len(), expected.len(), "limit table length");
    for (&actual, &expected) in limits.iter().zip(expected) {
        assert_close(actual, expected);
    }
}

pub fn assert_monotonic<R: RandomSource>(dispatcher: &WeightedDispatcher<R>) {
    let limits = dispatcher.limits();
    for pair in limits.windows(2) {
        assert!(pair[0] <= pair[1], "limits not non-decreasing: {limits:?}");
    }
    if let Some(&last) = limits.last() {
        assert!(last <= 1.0 + EPSILON, "last limit {last} above 1");
    }
}

// ============================================================================
// Draw Grids
// ============================================================================

/// Evenly spaced draws covering `[0, 1)`.
pub fn draw_grid(steps: usize) -> impl Iterator<Item = f64> {
    (0..steps).map(move |i| i as f64 / steps as f64)
}
