//! Builder — the rule-based natural-language → MailMate translator.
//!
//! Every rule in [`RULES`] is tested independently against the lowered query.
//! Matches are collected in table order and joined with single spaces. When no
//! rule fires, the whole original input is wrapped as a subject search.
//!
//! This path never produces boolean operators, negation, or grouping; those
//! only come from the model-backed translator.

use crate::normalizer::NormalizedQuery;
use crate::types::{PhraseRule, TranslatedQuery};

/// The fixed rule table. Order here is the order fragments appear in output.
pub const RULES: &[PhraseRule] = &[
    PhraseRule::new("from steve", r#"from:"Steve""#),
    PhraseRule::new("last week", "date:last_week"),
    PhraseRule::new("pdf", "filename.extension:pdf"),
];

/// Fragments of every rule in `rules` whose trigger occurs in `query`.
pub fn matching_fragments(query: &NormalizedQuery<'_>, rules: &[PhraseRule]) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| query.contains(rule.trigger))
        .map(|rule| rule.fragment)
        .collect()
}

/// Wrap the original input as a default subject search.
pub fn subject_fallback(original: &str) -> TranslatedQuery {
    TranslatedQuery::new(format!("subject:\"{original}\""))
}

/// Build a query from `query` using `rules`.
pub fn build_with(query: &NormalizedQuery<'_>, rules: &[PhraseRule]) -> TranslatedQuery {
    let fragments = matching_fragments(query, rules);
    if fragments.is_empty() {
        tracing::debug!(input = query.original(), "builder: no rule matched, wrapping as subject");
        subject_fallback(query.original())
    } else {
        tracing::debug!(input = query.original(), ?fragments, "builder: rules matched");
        TranslatedQuery::new(fragments.join(" "))
    }
}

/// Build a query from `query` using the built-in [`RULES`].
pub fn build(query: &NormalizedQuery<'_>) -> TranslatedQuery {
    build_with(query, RULES)
}
