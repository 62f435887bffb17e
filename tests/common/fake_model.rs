//! FakeModel — a scripted [`QueryModel`] for translator tests.
//!
//! The model is moved into the `Translator`, so inspection goes through the
//! [`FakeHandle`] returned alongside it.

use async_trait::async_trait;
use mmquery_model::{ModelError, ModelRequest, QueryModel, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the fake does when asked.
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Return this raw text.
    Answer(&'static str),
    /// Return an API error with this status.
    ApiError(u16),
    /// Sleep for the duration, then answer.
    Slow(Duration, &'static str),
    /// Never answer.
    Hang,
}

#[derive(Default)]
struct Shared {
    calls: AtomicUsize,
    last_request: Mutex<Option<ModelRequest>>,
}

pub struct FakeModel {
    behavior: Behavior,
    shared: Arc<Shared>,
}

/// Inspection handle for a [`FakeModel`].
#[derive(Clone)]
pub struct FakeHandle {
    shared: Arc<Shared>,
}

impl FakeHandle {
    pub fn calls(&self) -> usize {
        self.shared.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ModelRequest> {
        self.shared.last_request.lock().unwrap().clone()
    }
}

/// Create a boxed fake model and its inspection handle.
///
/// ```rust
/// let (model, handle) = fake_model(Behavior::Answer("f alice"));
/// let translator = Translator::with_model(model);
/// ```
pub fn fake_model(behavior: Behavior) -> (Box<dyn QueryModel>, FakeHandle) {
    let shared = Arc::new(Shared::default());
    let handle = FakeHandle { shared: shared.clone() };
    (Box::new(FakeModel { behavior, shared }), handle)
}

#[async_trait]
impl QueryModel for FakeModel {
    fn name(&self) -> &str {
        "fake"
    }

    async fn complete(&self, request: &ModelRequest) -> Result<String> {
        self.shared.calls.fetch_add(1, Ordering::SeqCst);
        *self.shared.last_request.lock().unwrap() = Some(request.clone());

        match &self.behavior {
            Behavior::Answer(text) => Ok(text.to_string()),
            Behavior::ApiError(status) => Err(ModelError::Api {
                backend: "fake",
                status: *status,
                message: "scripted failure".to_string(),
            }),
            Behavior::Slow(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.to_string())
            }
            Behavior::Hang => std::future::pending::<Result<String>>().await,
        }
    }
}
