use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::llm::{DEFAULT_BASE_URL, OpenAiConfig};
use crate::runner::{AgentLoopConfig, DEFAULT_MAX_ITERATIONS};

pub const DEFAULT_PROMPT: &str = "I'm taking a flight from Lagos to Nairobi for a conference. I would like to know the total flight time back and forth, and the total cost of logistics in NGN for this conference if I'm staying for three days.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub llm: LlmConfig,
    pub agent: AgentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Environment variable holding the model id
    pub model_env: String,
    /// Model id that takes precedence over `model_env`
    pub model: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: 300000,
            api_key_env: "OPENAI_API_KEY".to_string(),
            model_env: "LLM_MODEL_NAME".to_string(),
            model: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub max_iterations: u32,
    pub prompt: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            llm: LlmConfig::default(),
            agent: AgentConfig::default(),
        }
    }
}

/// API key and model resolved from the environment at startup
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub model: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

/// Load `KEY=value` lines from `./.env` (or the nearest parent) into the
/// process environment. Variables that are already set keep their value.
pub fn load_env_file() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}

/// Load a specific env file into the process environment
pub fn load_env_file_from<P: AsRef<Path>>(path: P) -> Result<()> {
    dotenv::from_path(path.as_ref()).context(format!("Failed to load env file {}", path.as_ref().display()))
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_name = env!("CARGO_PKG_NAME");

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Read the API key and model from the process environment
    pub fn credentials(&self) -> Result<Credentials> {
        self.credentials_from(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through `lookup`; empty values count as missing
    pub fn credentials_from<F>(&self, lookup: F) -> Result<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = read(&self.llm.api_key_env)
            .ok_or_else(|| eyre!("API key not set: export {}", self.llm.api_key_env))?;

        let model = match &self.llm.model {
            Some(model) if !model.trim().is_empty() => model.clone(),
            _ => read(&self.llm.model_env).ok_or_else(|| eyre!("Model not set: export {}", self.llm.model_env))?,
        };

        Ok(Credentials { api_key, model })
    }

    /// Client settings for the completion endpoint
    pub fn openai_config(&self, credentials: &Credentials) -> OpenAiConfig {
        OpenAiConfig::with_model(credentials.model.clone())
            .with_base_url(self.llm.base_url.clone())
            .with_timeout(Duration::from_millis(self.llm.timeout_ms))
    }

    /// Loop settings, with an optional cap override from the command line
    pub fn agent_config(&self, credentials: &Credentials, max_iterations: Option<u32>) -> AgentLoopConfig {
        AgentLoopConfig::default()
            .with_model(credentials.model.clone())
            .with_max_iterations(max_iterations.unwrap_or(self.agent.max_iterations))
    }
}
