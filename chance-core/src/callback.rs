//! The action attached to an entry.

/// An action invoked when its entry is selected.
///
/// Any `FnMut() + Send + 'static` closure is a `Callback`, so most callers
/// never implement this trait by hand.
///
/// # Example
///
/// ```rust
/// use chance_core::Entry;
///
/// let entry = Entry::exact(|| println!("heads"), 0.5);
/// assert_eq!(entry.exact_probability(), 0.5);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a `Callback`",
    label = "must be `FnMut() + Send + 'static`",
    note = "Pass a closure with no arguments and no return value, or implement `Callback`."
)]
pub trait Callback: Send + 'static {
    /// Run the action.
    fn invoke(&mut self);
}

impl<F> Callback for F
where
    F: FnMut() + Send + 'static,
{
    fn invoke(&mut self) {
        self()
    }
}
