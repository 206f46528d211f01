/// Asserts that a value matches a pattern, optionally with a guard.
///
/// The value is matched by reference, so bindings in the pattern and the
/// guard see references.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
        match &$expr {
            $pat $(if $guard)? => {}
            value => ::core::panic!(
                "assertion `{}` failed\n  value: {value:?}",
                ::core::stringify!($pat $(if $guard)?),
            ),
        }
    };
}
