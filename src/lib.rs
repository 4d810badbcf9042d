//! Tripagent - a bounded tool-calling agent for travel logistics
//!
//! A conversation with a chat-completion model is driven for at most a fixed
//! number of round-trips. Between round-trips the model may call local lookup
//! tools for flights, hotels and currency conversion.

pub mod config;
pub mod error;
pub mod llm;
pub mod runner;
pub mod tools;

pub use error::{AgentError, Result};
