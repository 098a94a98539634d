//! Unique-fact acquisition.
//!
//! The generator loads the recent-fact history, asks the chat model for a
//! fact not in that history, and applies the dedup/append policy. A failed
//! request is logged and reported as [`GenerationOutcome::Failed`]; it is
//! never retried. Uniqueness is best-effort: it only checks exact matches
//! against the bounded history window.

use crate::store::{FactStore, StoreError};
use openai::{Message, OpenAi, Request, Response};
use std::future::Future;

/// Chat-completion backend used by the generator.
///
/// Implemented by [`openai::OpenAi`]; tests substitute
/// [`crate::testing::MockApi`] for deterministic runs without network access.
pub trait CompletionApi {
    fn complete(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, openai::Error>> + Send;
}

impl CompletionApi for OpenAi {
    fn complete(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, openai::Error>> + Send {
        OpenAi::complete(self, request)
    }
}

/// Configuration for the fact generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Model override; `None` uses the client's default.
    pub model: Option<String>,

    /// Sampling temperature, favoring variety over determinism.
    pub temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: None,
            temperature: 0.7,
        }
    }
}

/// Result of one unique-fact attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A novel fact, already appended to the history.
    Fresh(String),

    /// The model repeated a fact still in history; discarded, not retried.
    Duplicate,

    /// The completion request failed; logged, not retried.
    Failed,
}

impl GenerationOutcome {
    /// The fact text, when one was produced.
    pub fn fact(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Fresh(fact) => Some(fact),
            _ => None,
        }
    }
}

/// Generates facts that are new relative to the stored history.
pub struct FactGenerator<A = OpenAi> {
    api: A,
    store: FactStore,
    config: GeneratorConfig,
}

impl<A: CompletionApi> FactGenerator<A> {
    /// Create a generator over the given completion backend and store.
    pub fn new(api: A, store: FactStore) -> Self {
        Self {
            api,
            store,
            config: GeneratorConfig::default(),
        }
    }

    /// Configure the generator.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the backing store.
    pub fn store(&self) -> &FactStore {
        &self.store
    }

    /// Get the completion backend.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Ask the model for one fact not present in the stored history.
    ///
    /// On success with a novel fact, the fact is persisted before being
    /// returned. API failures and duplicate responses are soft outcomes;
    /// storage failures propagate.
    pub async fn generate_unique_fact(&mut self) -> Result<GenerationOutcome, StoreError> {
        let history = self.store.load().await?;

        let response = match self.api.complete(self.build_request(&history)).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("completion request failed: {err}");
                return Ok(GenerationOutcome::Failed);
            }
        };

        let fact = response.text().trim().to_string();
        if fact.is_empty() {
            tracing::error!("completion returned no text");
            return Ok(GenerationOutcome::Failed);
        }

        if history.iter().any(|known| known == &fact) {
            tracing::info!("model repeated a recent fact, discarding");
            return Ok(GenerationOutcome::Duplicate);
        }

        self.store.append(&fact).await?;
        Ok(GenerationOutcome::Fresh(fact))
    }

    fn build_request(&self, history: &[String]) -> Request {
        let mut request = Request::new(vec![Message::user(build_prompt(history))])
            .with_temperature(self.config.temperature);

        if let Some(ref model) = self.config.model {
            request = request.with_model(model);
        }

        request
    }
}

/// Build the single-turn prompt, excluding the supplied history.
fn build_prompt(history: &[String]) -> String {
    let mut prompt = String::from("Give me a unique, bite-sized fun fact");

    if history.is_empty() {
        prompt.push('.');
    } else {
        prompt.push_str(" that is not in the following list:\n");
        prompt.push_str(&history.join("\n"));
    }

    prompt.push_str("\nKeep the response under 200 characters.");
    prompt
}
