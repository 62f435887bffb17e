//! mmquery-core — rule-based query translation for mmquery.
//!
//! This crate holds the deterministic half of the translator plus the shared
//! types and configuration used by the model backends and the binary.
//!
//! # Architecture
//!
//! ```text
//! input ──► Normalizer ──► Builder ──► TranslatedQuery
//! ```
//!
//! The rule-based path is total: it never fails and never returns an empty
//! string for non-empty input, so it is always safe to fall back to.

pub mod builder;
pub mod config;
pub mod normalizer;
pub mod types;

pub use normalizer::{normalize, NormalizedQuery};
pub use types::{PhraseRule, TranslatedQuery, Translation, TranslationSource};

/// Translate `input` with the built-in rule table.
///
/// ```
/// assert_eq!(mmquery_core::translate("emails from Steve").as_str(), r#"from:"Steve""#);
/// assert_eq!(mmquery_core::translate("hello world").as_str(), r#"subject:"hello world""#);
/// ```
pub fn translate(input: &str) -> TranslatedQuery {
    builder::build(&NormalizedQuery::new(input))
}
