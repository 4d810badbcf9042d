//! CLI command definitions using clap.
//!
//! - ask: run the agent on a prompt (the default)
//! - tools: print the advertised tool schemas
//! - call: run one tool locally

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tripagent - a travel-planning assistant that calls local lookup tools
#[derive(Parser, Debug)]
#[command(name = "tripagent")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Ask the agent a question (uses the configured prompt when omitted)
    Ask {
        /// Question for the agent
        prompt: Option<String>,

        /// Maximum model round-trips before giving up
        #[arg(short, long)]
        max_iterations: Option<u32>,
    },

    /// Print the tool schemas advertised to the model
    Tools,

    /// Run a single tool locally and print its result record
    Call {
        /// Tool name (e.g. get_flight_schedule)
        tool: String,

        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args runs the configured prompt
        let cli = Cli::try_parse_from(["tripagent"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["tripagent", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["tripagent", "-c", "/path/to/tripagent.yml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/tripagent.yml")));
    }

    #[test]
    fn test_ask_with_prompt_and_cap() {
        let cli = Cli::try_parse_from(["tripagent", "ask", "Flights to Lagos?", "--max-iterations", "3"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Ask {
                prompt: Some("Flights to Lagos?".to_string()),
                max_iterations: Some(3),
            })
        );
    }

    #[test]
    fn test_ask_without_prompt() {
        let cli = Cli::try_parse_from(["tripagent", "ask"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Ask {
                prompt: None,
                max_iterations: None,
            })
        );
    }

    #[test]
    fn test_ask_rejects_non_numeric_cap() {
        assert!(Cli::try_parse_from(["tripagent", "ask", "-m", "many"]).is_err());
    }

    #[test]
    fn test_tools_command() {
        let cli = Cli::try_parse_from(["tripagent", "tools"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Tools));
    }

    #[test]
    fn test_call_command() {
        let cli = Cli::try_parse_from([
            "tripagent",
            "call",
            "convert_currency",
            r#"{"amount": 100, "from_currency": "USD", "to_currency": "NGN"}"#,
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Call { tool, args }) => {
                assert_eq!(tool, "convert_currency");
                assert!(args.contains("NGN"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_call_args_default_to_empty_object() {
        let cli = Cli::try_parse_from(["tripagent", "call", "get_flight_schedule"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Call {
                tool: "get_flight_schedule".to_string(),
                args: "{}".to_string(),
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tripagent", "tools", "-v", "-c", "x.yml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.yml")));
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
