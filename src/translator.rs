//! Translator — tries the configured model and falls back to the rule-based
//! core on any failure.
//!
//! [`Translator::translate`] is infallible: model errors, timeouts, and empty
//! answers are logged at `warn` and replaced by [`mmquery_core::translate`].

use std::time::Duration;

use mmquery_core::config::ModelConfig;
use mmquery_core::{Translation, TranslationSource};
use mmquery_model::{instructions, ModelError, ModelRequest, QueryModel};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub struct Translator {
    model: Option<Box<dyn QueryModel>>,
    instructions: String,
    temperature: f32,
    max_output_tokens: u32,
    timeout: Duration,
    /// Why no model is available, when `model` is `None`.
    unavailable: String,
}

impl Translator {
    /// A translator that never calls a model.
    pub fn offline() -> Self {
        Self {
            model: None,
            instructions: instructions::DEFAULT_INSTRUCTIONS.to_string(),
            temperature: 0.0,
            max_output_tokens: 256,
            timeout: DEFAULT_TIMEOUT,
            unavailable: "offline".to_string(),
        }
    }

    /// A translator backed by `model` with the built-in instructions.
    pub fn with_model(model: Box<dyn QueryModel>) -> Self {
        Self {
            model: Some(model),
            ..Self::offline()
        }
    }

    /// Build from config. Never fails: a backend that cannot be constructed
    /// (missing API key, unreadable instructions) leaves the translator
    /// offline with the error recorded as the fallback reason.
    pub fn from_config(config: &ModelConfig) -> Self {
        match mmquery_model::from_config(config) {
            Ok(Some(model)) => Self::from_config_with_model(config, model),
            Ok(None) => {
                let mut translator = Self::configured(config);
                translator.unavailable = format!("provider {}", config.provider);
                translator
            }
            Err(e) => {
                tracing::warn!(error = %e, "translator: model unavailable");
                let mut translator = Self::configured(config);
                translator.unavailable = e.to_string();
                translator
            }
        }
    }

    /// Apply `config`'s settings and instruction document to an already
    /// built `model`.
    pub fn from_config_with_model(config: &ModelConfig, model: Box<dyn QueryModel>) -> Self {
        let mut translator = Self::configured(config);
        match instructions::load(config.instructions_path.as_deref()) {
            Ok(doc) => {
                tracing::debug!(
                    backend = model.name(),
                    model = %config.name,
                    "translator: model ready"
                );
                translator.instructions = doc;
                translator.model = Some(model);
            }
            Err(e) => {
                tracing::warn!(error = %e, "translator: model unavailable");
                translator.unavailable = e.to_string();
            }
        }
        translator
    }

    fn configured(config: &ModelConfig) -> Self {
        Self::offline()
            .timeout(config.timeout())
            .temperature(config.temperature)
            .max_output_tokens(config.max_output_tokens)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Translate `query`. Always succeeds.
    pub async fn translate(&self, query: &str) -> Translation {
        if query.trim().is_empty() {
            return fallback(query, "empty query");
        }

        let Some(model) = self.model.as_deref() else {
            return fallback(query, &self.unavailable);
        };

        let request = ModelRequest::new(self.instructions.as_str(), query)
            .temperature(self.temperature)
            .max_output_tokens(self.max_output_tokens);

        let call = mmquery_model::ask(model, &request);
        let outcome = match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ModelError::Timeout(self.timeout)),
        };

        match outcome {
            Ok(translated) => {
                tracing::debug!(
                    backend = model.name(),
                    query,
                    output = %translated,
                    "translator: model answered"
                );
                Translation {
                    query: translated,
                    source: TranslationSource::Model {
                        backend: model.name().to_string(),
                    },
                }
            }
            Err(e) => {
                tracing::warn!(
                    backend = model.name(),
                    error = %e,
                    "translator: falling back to rules"
                );
                fallback(query, &e.to_string())
            }
        }
    }
}

fn fallback(query: &str, reason: &str) -> Translation {
    Translation {
        query: mmquery_core::translate(query),
        source: TranslationSource::Fallback {
            reason: reason.to_string(),
        },
    }
}
