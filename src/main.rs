use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use tripagent::config::{Config, load_env_file};
use tripagent::llm::OpenAiClient;
use tripagent::runner::{AgentLoop, LoopOutcome};
use tripagent::tools::ToolRegistry;

fn setup_logging(level: &str) -> Result<()> {
    let project_name = env!("CARGO_PKG_NAME");

    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(project_name)
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join(format!("{}.log", project_name));

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<ExitCode> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => handle_ask_command(None, None, cli.is_verbose(), config).await,
        Some(Commands::Ask { prompt, max_iterations }) => {
            handle_ask_command(prompt.as_deref(), *max_iterations, cli.is_verbose(), config).await
        }
        Some(Commands::Tools) => handle_tools_command(),
        Some(Commands::Call { tool, args }) => handle_call_command(tool, args),
    }
}

async fn handle_ask_command(
    prompt: Option<&str>,
    max_iterations: Option<u32>,
    verbose: bool,
    config: &Config,
) -> Result<ExitCode> {
    let credentials = config.credentials().context("Failed to resolve credentials")?;
    let client = OpenAiClient::with_api_key(credentials.api_key.clone(), config.openai_config(&credentials))
        .context("Failed to create LLM client")?;

    let agent = AgentLoop::with_config(
        Arc::new(client),
        Arc::new(ToolRegistry::travel()),
        config.agent_config(&credentials, max_iterations),
    );

    let prompt = prompt.unwrap_or(config.agent.prompt.as_str());
    info!("Asking: {}", prompt);

    let report = match agent.run(prompt).await {
        Ok(report) => report,
        Err(e) => {
            log::error!("Agent run failed: {}", e);
            eprintln!("{} {}", "Error:".red(), e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if verbose {
        println!(
            "{} {} round-trip(s), {} tokens",
            "Finished:".cyan(),
            report.iterations,
            report.usage.total()
        );
    }

    match report.outcome {
        LoopOutcome::Done(answer) => {
            println!("{}", answer);
            Ok(ExitCode::SUCCESS)
        }
        LoopOutcome::Exhausted { .. } => {
            eprintln!("{}", "Error: Maximum iterations reached without completion".red());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_tools_command() -> Result<ExitCode> {
    let schemas: Vec<Value> = ToolRegistry::travel()
        .definitions()
        .iter()
        .map(|spec| spec.to_openai_schema())
        .collect();
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(ExitCode::SUCCESS)
}

fn handle_call_command(tool: &str, args: &str) -> Result<ExitCode> {
    info!("Calling tool {} locally with {}", tool, args);

    let parsed: Value = serde_json::from_str(args).context("Tool arguments must be valid JSON")?;
    let Value::Object(map) = parsed else {
        return Err(eyre!("Tool arguments must be a JSON object"));
    };

    let result = ToolRegistry::travel().dispatch(tool, &map);
    let rendered = serde_json::to_string_pretty(&result.content)?;

    if result.is_error {
        println!("{}", rendered.red());
        Ok(ExitCode::FAILURE)
    } else {
        println!("{}", rendered);
        Ok(ExitCode::SUCCESS)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Pick up OPENAI_API_KEY and friends from .env before anything reads them
    let env_file = load_env_file();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let level = if cli.is_verbose() {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };
    setup_logging(level).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);
    if let Some(path) = env_file {
        info!("Loaded environment from: {}", path.display());
    }

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")
}
