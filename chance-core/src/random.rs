//! Pluggable source of uniform draws.

/// A source of uniform random values in `[0, 1)`.
///
/// Any `FnMut() -> f64` closure is a `RandomSource`, which makes it easy to
/// script draws in tests:
///
/// ```rust
/// use chance_core::RandomSource;
///
/// let mut draws = [0.25, 0.75].into_iter().cycle();
/// let mut source = move || draws.next().unwrap_or(0.0);
/// assert_eq!(source.next_unit(), 0.25);
/// assert_eq!(source.next_unit(), 0.75);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `RandomSource`",
    label = "missing `RandomSource` implementation",
    note = "Implement `next_unit` or pass a `FnMut() -> f64` closure."
)]
pub trait RandomSource {
    /// Return the next draw. Values outside `[0, 1)` are not an error, they
    /// just select nothing or the first live entry.
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}
