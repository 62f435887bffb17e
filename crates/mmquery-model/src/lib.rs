//! mmquery-model — language-model backends for mmquery.
//!
//! Each backend sends the instruction document plus the user's query to a
//! hosted or local model and returns its raw answer. [`ask`] cleans that
//! answer into a [`TranslatedQuery`]. Nothing here falls back on its own; the
//! caller decides what to do with a [`ModelError`].

pub mod error;
pub mod gemini;
pub mod instructions;
pub mod openai;
pub mod response;

pub use error::{ModelError, Result};
pub use gemini::Gemini;
pub use openai::OpenAiCompatible;

use async_trait::async_trait;
use mmquery_core::config::{ModelConfig, Provider};
use mmquery_core::TranslatedQuery;

/// One translation request as seen by a model backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub instructions: String,
    pub query: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl ModelRequest {
    pub fn new(instructions: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            query: query.into(),
            temperature: 0.0,
            max_output_tokens: 256,
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }
}

/// Trait implemented by each model backend.
#[async_trait]
pub trait QueryModel: Send + Sync {
    /// Short backend name used in logs and [`TranslationSource`](mmquery_core::TranslationSource).
    fn name(&self) -> &str;

    /// Send `request` and return the model's raw text answer.
    async fn complete(&self, request: &ModelRequest) -> Result<String>;
}

/// Ask `model` for a translation and clean the answer.
///
/// An answer that is empty after cleanup is reported as
/// [`ModelError::EmptyResponse`].
pub async fn ask(model: &dyn QueryModel, request: &ModelRequest) -> Result<TranslatedQuery> {
    let raw = model.complete(request).await?;
    let cleaned = response::clean(&raw);
    if cleaned.is_empty() {
        return Err(ModelError::EmptyResponse);
    }
    Ok(TranslatedQuery::new(cleaned))
}

/// Build the backend selected by `config`. `Ok(None)` means no model is
/// configured.
pub fn from_config(config: &ModelConfig) -> Result<Option<Box<dyn QueryModel>>> {
    match config.provider {
        Provider::None => Ok(None),
        Provider::Gemini => {
            let key = config.api_key().ok_or_else(|| ModelError::MissingApiKey {
                var: config.api_key_env.clone(),
            })?;
            let mut model = Gemini::new(key, &config.name);
            if let Some(ref url) = config.base_url {
                model = model.with_base_url(url);
            }
            Ok(Some(Box::new(model)))
        }
        Provider::OpenAi => {
            let mut model = OpenAiCompatible::new(config.api_key(), &config.name);
            if let Some(ref url) = config.base_url {
                model = model.with_base_url(url);
            }
            Ok(Some(Box::new(model)))
        }
    }
}
