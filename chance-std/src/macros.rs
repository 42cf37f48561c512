//! Declarative construction of dispatchers.

/// Build a [`WeightedDispatcher`] from a list of weighted callbacks.
///
/// Each item is `exact <probability> => <callback>`,
/// `part <weight> => <callback>` or `dead => <callback>`. Entries are
/// registered in order and the first rejection is returned as the error.
///
/// # Example
///
/// ```rust
/// use chance_std::weighted;
///
/// let dispatcher = weighted![
///     exact 0.5 => || println!("half the time"),
///     part 1.0 => || println!("an eighth"),
///     part 3.0 => || println!("three eighths"),
/// ]
/// .unwrap();
/// assert_eq!(dispatcher.limits(), &[0.5, 0.625, 1.0]);
/// ```
///
/// [`WeightedDispatcher`]: crate::dispatcher::WeightedDispatcher
#[macro_export]
macro_rules! weighted {
    (@entry exact $p:expr => $callback:expr) => {
        $crate::chance_core::Entry::exact($callback, $p)
    };
    (@entry part $p:expr => $callback:expr) => {
        $crate::chance_core::Entry::part($callback, $p)
    };
    (@entry dead => $callback:expr) => {
        $crate::chance_core::Entry::dead($callback)
    };
    ($($mode:ident $($p:expr)? => $callback:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut dispatcher = $crate::dispatcher::WeightedDispatcher::new();
        #[allow(unused_mut)]
        let mut result: ::core::result::Result<(), $crate::chance_core::InvalidProbability> =
            ::core::result::Result::Ok(());
        $(
            if result.is_ok() {
                result = dispatcher.add_entry($crate::weighted!(@entry $mode $($p)? => $callback));
            }
        )*
        result.map(|()| dispatcher)
    }};
}
