//! Cleanup of raw model answers into a single search-string line.

/// Strip Markdown code fences from a response.
pub fn strip_code_blocks(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an info string such as ```text on the opening fence.
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };
    rest.trim_end().trim_end_matches("```").trim()
}

/// Reduce a model answer to the search string it contains.
///
/// Trims whitespace, removes code fences and wrapping backticks, and keeps the
/// first non-empty line. Returns an empty string when nothing is left.
pub fn clean(response: &str) -> String {
    let body = strip_code_blocks(response);
    let line = body
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    let line = match line.strip_prefix('`').and_then(|l| l.strip_suffix('`')) {
        Some(inner) => inner.trim(),
        None => line,
    };
    line.to_string()
}
