pub mod macros;

/// Returns the version of the enquiry workspace.
pub fn enquiry_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use enquiry_utils::Apply;
    /// fn with_timeout(secs: u64, extra: Option<u64>) -> u64 {
    ///     secs.apply_map(extra, |slf, arg| slf + arg)
    /// }
    /// assert_eq!(with_timeout(30, None), 30);
    /// assert_eq!(with_timeout(30, Some(5)), 35);
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        match value {
            Some(value) => f(self, value),
            None => self,
        }
    }
}

impl<T> Apply for T {}
