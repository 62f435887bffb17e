//! Normalizer — produces the case-insensitive comparison form of a query.
//!
//! Total over every input string: empty strings, strings with no letters, and
//! arbitrary Unicode all normalise without error.

/// Lower-case `input` for phrase matching.
pub fn normalize(input: &str) -> String {
    input.to_lowercase()
}

/// A query borrowed alongside its lower-cased comparison form.
///
/// Rules match against [`lowered`](Self::lowered); fallback wrapping uses
/// [`original`](Self::original) so the user's casing survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery<'a> {
    original: &'a str,
    lowered: String,
}

impl<'a> NormalizedQuery<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            lowered: normalize(original),
        }
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Substring containment against the lowered form. `trigger` must
    /// already be lowercase.
    pub fn contains(&self, trigger: &str) -> bool {
        self.lowered.contains(trigger)
    }
}
