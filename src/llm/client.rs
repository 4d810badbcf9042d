//! Core LLM client trait and a scripted mock for tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AgentError, Result};
use crate::llm::types::{CompletionRequest, CompletionResponse};

/// Completion endpoint - each call is one blocking round-trip
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single completion request (awaits the full response)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Model identifier used when a request does not name one
    fn model(&self) -> &str;

    /// Whether the client has what it needs to make calls
    fn is_ready(&self) -> bool;
}

/// Scripted client that replays canned responses in order.
///
/// Every request is recorded so tests can assert on what the loop sent.
#[derive(Debug)]
pub struct MockLlmClient {
    responses: Mutex<VecDeque<CompletionResponse>>,
    repeat: Option<CompletionResponse>,
    requests: Mutex<Vec<CompletionRequest>>,
    ready: bool,
}

impl MockLlmClient {
    /// Replay `responses` once each, then fail
    pub fn new(responses: Vec<CompletionResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            repeat: None,
            requests: Mutex::new(Vec::new()),
            ready: true,
        }
    }

    /// Answer every request with the same response
    pub fn repeating(response: CompletionResponse) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            repeat: Some(response),
            requests: Mutex::new(Vec::new()),
            ready: true,
        }
    }

    /// Report the client as unusable, like one built without an API key
    pub fn not_ready(mut self) -> Self {
        self.ready = false;
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.requests
            .lock()
            .map_err(|_| AgentError::Llm("mock request log poisoned".to_string()))?
            .push(request);

        let next = self
            .responses
            .lock()
            .map_err(|_| AgentError::Llm("mock response queue poisoned".to_string()))?
            .pop_front();

        next.or_else(|| self.repeat.clone())
            .ok_or_else(|| AgentError::Llm("mock client has no scripted responses left".to_string()))
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
