//! Testing utilities.
//!
//! `MockApi` is a scripted [`CompletionApi`] backend for deterministic
//! tests without network access. Replies are returned in queue order; once
//! exhausted, further calls fail.

use crate::generator::CompletionApi;
use openai::{Choice, Error, FinishReason, Request, Response, Usage};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

/// A scripted completion backend that returns queued replies in order.
#[derive(Default)]
pub struct MockApi {
    replies: Mutex<VecDeque<Result<String, Error>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockApi {
    /// Create a mock with an empty reply queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply (builder form).
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.queue_reply(text);
        self
    }

    /// Queue an error (builder form).
    pub fn with_error(self, error: Error) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queue a successful reply.
    pub fn queue_reply(&self, text: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Prompts seen so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionApi for MockApi {
    fn complete(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Response, Error>> + Send {
        let prompt = request
            .messages
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        self.prompts.lock().unwrap().push(prompt);

        let result = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Config("no scripted replies left".to_string())))
            .map(|text| Response {
                id: "mock".to_string(),
                model: "mock".to_string(),
                choices: vec![Choice {
                    content: text,
                    finish_reason: FinishReason::Stop,
                }],
                usage: Usage::default(),
            });

        async move { result }
    }
}
