use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::config::OutputFormat;
use super::constants::{ENV_CONFIG, ENV_DIRECTION, ENV_FORMAT, ENV_MAX_LENGTH};
use crate::domain::prettify::Direction;

#[derive(Parser)]
#[command(name = "traceview")]
#[command(version, about = "Readable previews of AI trace span payloads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Which side of the span the payload is (input or output)
    #[arg(long, short = 'd', global = true, env = ENV_DIRECTION, value_parser = parse_direction)]
    pub direction: Option<Direction>,

    /// Output format (text or json)
    #[arg(long, short = 'f', global = true, env = ENV_FORMAT, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Truncate text output to this many characters
    #[arg(long, short = 'm', global = true, env = ENV_MAX_LENGTH)]
    pub max_length: Option<usize>,
}

/// Parse payload direction from CLI/env string
fn parse_direction(s: &str) -> Result<Direction, String> {
    Direction::try_from_str(s)
        .ok_or_else(|| format!("Invalid direction '{}'. Valid options: input, output", s))
}

/// Parse output format from CLI/env string
fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format '{}'. Valid options: text, json",
            s
        )),
    }
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Print the display message for a JSON payload (default command)
    Prettify {
        /// JSON file to read; stdin when omitted or "-"
        file: Option<PathBuf>,
    },
    /// Print the tag color assigned to a label
    Tag {
        /// Label to hash
        label: String,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config: Option<PathBuf>,
    pub direction: Option<Direction>,
    pub format: Option<OutputFormat>,
    pub max_length: Option<usize>,
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    let cli = Cli::parse();
    let config = CliConfig {
        config: cli.config,
        direction: cli.direction,
        format: cli.format,
        max_length: cli.max_length,
    };
    (config, cli.command)
}
