//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::WriteStyle;

use crate::commands;
use seda::output::OutputConfig;

/// Seda - Clone a repository and open it in your editor
#[derive(Parser, Debug)]
#[command(name = "seda")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(
        long,
        global = true,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["always", "never", "auto"]
    )]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    ///
    /// `RUST_LOG` takes precedence when it is set.
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone a repository and open it in your editor
    Code(commands::code::CodeArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Output settings derived from `--color` and the environment.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::from_env_and_flag(&self.color)
    }

    /// Execute the CLI command
    pub fn execute(self, output: &OutputConfig) -> Result<()> {
        self.init_logging();

        match self.command {
            Commands::Code(args) => commands::code::execute(args, output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }

    /// Route `log` records to stderr, filtered by `RUST_LOG` or `--log-level`.
    fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_level.as_str());

        env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_target(false)
            .write_style(self.log_write_style())
            .init();
    }

    /// Log styling follows `--color`. In `auto` mode env_logger checks stderr
    /// itself, since that is where records are written.
    fn log_write_style(&self) -> WriteStyle {
        match self.color.as_str() {
            "always" => WriteStyle::Always,
            "never" => WriteStyle::Never,
            _ => WriteStyle::Auto,
        }
    }
}
