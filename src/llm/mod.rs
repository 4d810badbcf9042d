//! LLM Client Layer - OpenAI-compatible chat completions with function tools
//!
//! This module provides:
//! - Message and conversation types
//! - LlmClient trait for API abstraction
//! - OpenAiClient implementation
//! - MockLlmClient for scripted tests

pub mod client;
pub mod openai;
pub mod types;

pub use client::{LlmClient, MockLlmClient};
pub use openai::{DEFAULT_BASE_URL, OpenAiClient, OpenAiConfig};
pub use types::{
    CompletionRequest, CompletionResponse, Conversation, FinishReason, FunctionCall, Message, Role, ToolCall,
    Usage,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_exports() {
        let _role = Role::Tool;
        let _reason = FinishReason::Stop;
    }
}
