//! Core types for mmquery-core.
//!
//! This module defines the data shared by the rule-based translator and the
//! model-backed path: the [`PhraseRule`] pairs that make up the rule table and
//! the [`TranslatedQuery`] string handed back to callers.

/// One entry of the fixed rule table: a lowercase trigger phrase and the
/// MailMate search fragment it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhraseRule {
    /// Lowercase substring looked for anywhere in the normalised input.
    pub trigger: &'static str,
    /// Search-language snippet emitted when the trigger is present.
    pub fragment: &'static str,
}

impl PhraseRule {
    pub const fn new(trigger: &'static str, fragment: &'static str) -> Self {
        Self { trigger, fragment }
    }
}

/// A MailMate toolbar search string, ready to print.
///
/// Produced either by the rule-based builder or by a cleaned-up model answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslatedQuery(String);

impl TranslatedQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TranslatedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TranslatedQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<TranslatedQuery> for String {
    fn from(query: TranslatedQuery) -> Self {
        query.0
    }
}

/// Where a translation came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationSource {
    /// The named model backend answered.
    Model { backend: String },
    /// The rule-based translator produced the output. `reason` is a short
    /// human-readable note (e.g. "offline", "timed out after 15s").
    Fallback { reason: String },
}

impl std::fmt::Display for TranslationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationSource::Model { backend } => write!(f, "model ({backend})"),
            TranslationSource::Fallback { reason } => write!(f, "fallback ({reason})"),
        }
    }
}

/// A translated query together with the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub query: TranslatedQuery,
    pub source: TranslationSource,
}

impl Translation {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, TranslationSource::Fallback { .. })
    }
}
