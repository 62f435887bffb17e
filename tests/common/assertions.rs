//! Domain-specific assertion macros for mmquery harnesses.
//!
//! These add context to failures so it is clear whether the translator took
//! the model path or the rule-based fallback.

/// Assert that a `Translation` came from the rule-based fallback and that its
/// output equals what the core produces for `input`.
///
/// ```rust
/// assert_fallback!(translation, "emails from Steve");
/// ```
#[macro_export]
macro_rules! assert_fallback {
    ($translation:expr, $input:expr) => {{
        let translation: &mmquery_core::Translation = &$translation;
        let input: &str = $input;
        if !translation.is_fallback() {
            panic!(
                "assert_fallback! failed: expected fallback, got {}\n  output: {}",
                translation.source, translation.query
            );
        }
        let expected = mmquery_core::translate(input);
        if translation.query != expected {
            panic!(
                "assert_fallback! failed: output differs from rule-based core\n  input:    {:?}\n  expected: {}\n  actual:   {}",
                input, expected, translation.query
            );
        }
    }};
}

/// Assert that a `Translation` came from the named model backend with the
/// expected output.
///
/// ```rust
/// assert_from_model!(translation, "fake", "f alice d 1y");
/// ```
#[macro_export]
macro_rules! assert_from_model {
    ($translation:expr, $backend:expr, $output:expr) => {{
        let translation: &mmquery_core::Translation = &$translation;
        match &translation.source {
            mmquery_core::TranslationSource::Model { backend } if backend == $backend => {}
            other => panic!(
                "assert_from_model! failed: expected model ({}), got {}\n  output: {}",
                $backend, other, translation.query
            ),
        }
        pretty_assertions::assert_eq!(translation.query.as_str(), $output);
    }};
}
