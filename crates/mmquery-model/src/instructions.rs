//! The instruction document sent to the model with every query.

use crate::error::{ModelError, Result};
use std::path::Path;

/// Built-in MailMate search-language guide.
pub const DEFAULT_INSTRUCTIONS: &str = include_str!("resources/mailmate_search.md");

/// Load instructions from `path`, or the built-in document when `None`.
pub fn load(path: Option<&Path>) -> Result<String> {
    match path {
        None => Ok(DEFAULT_INSTRUCTIONS.to_string()),
        Some(path) => std::fs::read_to_string(path).map_err(|source| ModelError::Instructions {
            path: path.to_path_buf(),
            source,
        }),
    }
}
