//! CLI module for tripagent - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
