/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use panini::{Parser, ParserOptions};
///
/// let options = ParserOptions {
///     stop_at_first_error: true,
///     ..Default::default()
/// };
/// let events: Vec<_> = Parser::with_options("bread\n= crumbs\n", options).collect();
/// assert_eq!(events.len(), 1);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether to end the scan as soon as the first syntax error has been
    /// reported.
    ///
    /// By default an error only discards the line it was found on, and the
    /// parser carries on with the next line. When `true`, the error is the
    /// last event produced and the rest of the input is never looked at.
    ///
    /// # Default
    ///
    /// `false`
    pub stop_at_first_error: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Only available in test and fuzzing builds, to get backtraces on syntax
    /// errors.
    pub panic_on_error: bool,
}
