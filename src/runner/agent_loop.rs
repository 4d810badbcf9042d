//! Agent loop - drives one bounded tool-calling conversation.
//!
//! Every round-trip sends the full history plus every tool schema. Tool calls
//! in a response are all dispatched, in order, before the next request. The
//! run ends on the first response with no tool calls or when the round-trip
//! cap is reached.

use std::sync::Arc;

use crate::error::{AgentError, Result};
use crate::llm::{
    CompletionRequest, CompletionResponse, Conversation, FinishReason, LlmClient, Message, ToolCall, Usage,
};
use crate::tools::ToolRegistry;

/// Round-trip cap when none is configured
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// Terminal outcome of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The model answered without requesting tools
    Done(String),
    /// The cap was reached while the model still wanted tools
    Exhausted { iterations: u32 },
}

impl LoopOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, LoopOutcome::Done(_))
    }

    /// Final answer text, if the run completed
    pub fn answer(&self) -> Option<&str> {
        match self {
            LoopOutcome::Done(text) => Some(text),
            LoopOutcome::Exhausted { .. } => None,
        }
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: LoopOutcome,
    /// Round-trips made to the completion endpoint
    pub iterations: u32,
    pub usage: Usage,
    pub conversation: Conversation,
}

/// Configuration for the AgentLoop.
#[derive(Debug, Clone)]
pub struct AgentLoopConfig {
    /// Model id sent with every request; empty means the client's default
    pub model: String,
    pub max_iterations: u32,
}

impl Default for AgentLoopConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl AgentLoopConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

enum LoopState {
    AwaitingModel,
    InspectingResponse(CompletionResponse),
    DispatchingTools(Vec<ToolCall>),
    Done(String),
    MaxIterationsExceeded,
}

/// Runs prompts against a completion client and a tool registry
pub struct AgentLoop<L: LlmClient> {
    llm: Arc<L>,
    tools: Arc<ToolRegistry>,
    config: AgentLoopConfig,
}

impl<L: LlmClient> AgentLoop<L> {
    /// Create a loop using the client's model and the default cap
    pub fn new(llm: Arc<L>, tools: Arc<ToolRegistry>) -> Self {
        let config = AgentLoopConfig::default().with_model(llm.model());
        Self { llm, tools, config }
    }

    pub fn with_config(llm: Arc<L>, tools: Arc<ToolRegistry>, config: AgentLoopConfig) -> Self {
        Self { llm, tools, config }
    }

    pub fn config(&self) -> &AgentLoopConfig {
        &self.config
    }

    /// Run `prompt` to completion or until the cap is hit.
    ///
    /// Transport failures and an unready client are returned as `Err`;
    /// exhaustion is an outcome.
    pub async fn run(&self, prompt: &str) -> Result<RunReport> {
        if !self.llm.is_ready() {
            return Err(AgentError::Config(format!(
                "LLM client for model '{}' is not ready",
                self.config.model
            )));
        }

        log::info!(
            "Starting agent run (model: {}, max iterations: {})",
            self.config.model,
            self.config.max_iterations
        );

        let definitions = self.tools.definitions();
        let mut conversation = Conversation::seeded(prompt);
        let mut usage = Usage::default();
        let mut iterations = 0u32;
        let mut state = LoopState::AwaitingModel;

        loop {
            state = match state {
                LoopState::AwaitingModel => {
                    if iterations >= self.config.max_iterations {
                        LoopState::MaxIterationsExceeded
                    } else {
                        iterations += 1;
                        log::debug!(
                            "Round-trip {}/{} with {} messages",
                            iterations,
                            self.config.max_iterations,
                            conversation.len()
                        );

                        let request = CompletionRequest::new(self.config.model.clone())
                            .with_messages(conversation.messages().to_vec())
                            .with_tools(definitions.clone());
                        let response = self.llm.complete(request).await?;
                        usage.add(&response.usage);
                        LoopState::InspectingResponse(response)
                    }
                }

                LoopState::InspectingResponse(response) => {
                    match response.finish_reason {
                        FinishReason::Length => log::warn!("Response was cut off at the token limit"),
                        FinishReason::ContentFilter => log::warn!("Response was stopped by the content filter"),
                        FinishReason::Stop | FinishReason::ToolCalls => {}
                    }

                    if response.wants_tools() {
                        let calls = response.tool_calls.clone();
                        log::debug!("Model requested {} tool call(s)", calls.len());
                        conversation.push(Message::assistant_with_tool_calls(response.content, response.tool_calls));
                        LoopState::DispatchingTools(calls)
                    } else {
                        let answer = response.content.unwrap_or_default();
                        conversation.push(Message::assistant(answer.clone()));
                        LoopState::Done(answer)
                    }
                }

                LoopState::DispatchingTools(calls) => {
                    for (id, result) in self.tools.dispatch_all(&calls) {
                        conversation.push(Message::tool(id, result.to_message_content()));
                    }
                    LoopState::AwaitingModel
                }

                LoopState::Done(answer) => {
                    log::info!("Agent run finished after {} round-trip(s)", iterations);
                    return Ok(RunReport {
                        outcome: LoopOutcome::Done(answer),
                        iterations,
                        usage,
                        conversation,
                    });
                }

                LoopState::MaxIterationsExceeded => {
                    log::warn!("Agent run hit the {} round-trip cap", iterations);
                    return Ok(RunReport {
                        outcome: LoopOutcome::Exhausted { iterations },
                        iterations,
                        usage,
                        conversation,
                    });
                }
            };
        }
    }
}
