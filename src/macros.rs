/// Asserts that two texts are equal, printing a line-by-line quoted diff on failure.
///
/// Both arguments may be anything implementing `AsRef<str>`. On mismatch the panic message is
/// produced by [`text_mismatch`](crate::utils::testing::text_mismatch).
///
/// ```rust
/// use xykit::assert_text_eq;
///
/// let rendered = String::from("digraph g {\n}\n");
/// assert_text_eq!("digraph g {\n}\n", rendered);
/// ```
#[macro_export]
macro_rules! assert_text_eq {
    ($expected:expr, $got:expr $(,)?) => {
        if let Some(message) = $crate::utils::testing::text_mismatch(
            ::core::convert::AsRef::<str>::as_ref(&$expected),
            ::core::convert::AsRef::<str>::as_ref(&$got),
        ) {
            panic!("{}", message);
        }
    };
}
