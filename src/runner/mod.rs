//! Runner module - the bounded tool-calling conversation.

mod agent_loop;

pub use agent_loop::{AgentLoop, AgentLoopConfig, DEFAULT_MAX_ITERATIONS, LoopOutcome, RunReport};
