//! Core application

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::cli::{self, CliConfig, Commands};
use crate::core::config::{AppConfig, OutputFormat};
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::core::{input, output};
use crate::domain::prettify::prettify_message;
use crate::domain::traces::tag_variant;

pub struct CoreApp {
    pub config: AppConfig,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let (cli_config, command) = cli::parse();
        tracing::trace!(command = ?command, "Parsed command");

        let app = Self::init(&cli_config)?;

        match command {
            Some(Commands::Tag { label }) => app.print_tag(&label),
            Some(Commands::Prettify { file }) => app.print_prettified(file),
            None => app.print_prettified(None),
        }
    }

    fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        Ok(Self { config })
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        // Logs go to stderr; stdout carries only the rendered message
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    fn print_prettified(&self, file: Option<PathBuf>) -> Result<()> {
        let payload = input::read_payload(file.as_deref()).context("Failed to load payload")?;
        let direction = self.config.prettify.direction;

        let result = prettify_message(&payload, direction);
        tracing::debug!(
            direction = %direction,
            prettified = result.prettified,
            "Payload processed"
        );

        println!("{}", output::render(&result, &self.config.output)?);
        Ok(())
    }

    fn print_tag(&self, label: &str) -> Result<()> {
        let variant = tag_variant(label);
        match self.config.output.format {
            OutputFormat::Text => println!("{}", variant),
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "label": label, "variant": variant })
            ),
        }
        Ok(())
    }
}
