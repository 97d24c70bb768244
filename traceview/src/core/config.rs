use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::prettify::Direction;
use crate::utils::file::expand_path;

use super::cli::CliConfig;
use super::constants::{APP_DOT_FOLDER, CONFIG_FILE_NAME};

// =============================================================================
// Output Format Enum
// =============================================================================

/// How prettify results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The display text only
    #[default]
    Text,
    /// `{"message": ..., "prettified": ...}`
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

// =============================================================================
// File Config (JSON)
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PrettifyFileConfig {
    pub direction: Option<Direction>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputFileConfig {
    pub format: Option<OutputFormat>,
    pub max_length: Option<usize>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub prettify: Option<PrettifyFileConfig>,
    pub output: Option<OutputFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if !self.extra.is_empty() {
            let keys_str: String = self
                .extra
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    fn merge(&mut self, other: FileConfig) {
        if let Some(prettify) = other.prettify {
            let current = self.prettify.get_or_insert_with(PrettifyFileConfig::default);
            if prettify.direction.is_some() {
                tracing::trace!(direction = ?prettify.direction, "Merging prettify.direction");
                current.direction = prettify.direction;
            }
        }

        if let Some(output) = other.output {
            let current = self.output.get_or_insert_with(OutputFileConfig::default);
            if output.format.is_some() {
                tracing::trace!(format = ?output.format, "Merging output.format");
                current.format = output.format;
            }
            if output.max_length.is_some() {
                tracing::trace!(max_length = ?output.max_length, "Merging output.max_length");
                current.max_length = output.max_length;
            }
        }
    }
}

// =============================================================================
// Resolved Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrettifyConfig {
    /// Direction used when none is given on the command line
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Text output is cut to this many characters when set
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub prettify: PrettifyConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.traceview/traceview.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        if let Some(profile_path) = get_profile_config_path()
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(&profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        let overlay_path = if let Some(ref path) = cli.config {
            let expanded = expand_path(&path.to_string_lossy());
            if !expanded.exists() {
                anyhow::bail!("Config file not found: {}", expanded.display());
            }
            Some(expanded)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        let config = Self::resolve(file_config, cli);
        tracing::debug!(
            direction = %config.prettify.direction,
            format = %config.output.format,
            max_length = ?config.output.max_length,
            "Configuration resolved"
        );
        Ok(config)
    }

    /// Apply CLI values over merged file values over defaults
    fn resolve(file_config: FileConfig, cli: &CliConfig) -> Self {
        let file_prettify = file_config.prettify.unwrap_or_default();
        let file_output = file_config.output.unwrap_or_default();

        Self {
            prettify: PrettifyConfig {
                direction: cli
                    .direction
                    .or(file_prettify.direction)
                    .unwrap_or_default(),
            },
            output: OutputConfig {
                format: cli.format.or(file_output.format).unwrap_or_default(),
                max_length: cli.max_length.or(file_output.max_length),
            },
        }
    }
}

/// Get the profile config path (~/.traceview/traceview.json)
fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_output_format_serde() {
        let format: OutputFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }

    #[test]
    fn test_file_config_parse_full() {
        let json = r#"{
            "prettify": { "direction": "output" },
            "output": { "format": "json", "max_length": 120 }
        }"#;
        let config: FileConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            config.prettify.as_ref().unwrap().direction,
            Some(Direction::Output)
        );
        let output = config.output.as_ref().unwrap();
        assert_eq!(output.format, Some(OutputFormat::Json));
        assert_eq!(output.max_length, Some(120));
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_file_config_collects_unknown_fields() {
        let json = r#"{ "output": {}, "ouput": { "format": "json" } }"#;
        let config: FileConfig = serde_json::from_str(json).unwrap();
        assert!(config.extra.contains_key("ouput"));
    }

    #[test]
    fn test_merge_overlay_takes_precedence() {
        let mut base: FileConfig =
            serde_json::from_str(r#"{ "output": { "format": "json", "max_length": 50 } }"#)
                .unwrap();
        let overlay: FileConfig =
            serde_json::from_str(r#"{ "output": { "max_length": 80 } }"#).unwrap();
        base.merge(overlay);

        let output = base.output.unwrap();
        assert_eq!(output.format, Some(OutputFormat::Json));
        assert_eq!(output.max_length, Some(80));
    }

    #[test]
    fn test_resolve_cli_overrides_file() {
        let file_config: FileConfig = serde_json::from_str(
            r#"{ "prettify": { "direction": "output" }, "output": { "format": "json" } }"#,
        )
        .unwrap();
        let cli = CliConfig {
            direction: Some(Direction::Input),
            ..Default::default()
        };
        let config = AppConfig::resolve(file_config, &cli);

        assert_eq!(config.prettify.direction, Direction::Input);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.max_length, None);
    }

    #[test]
    fn test_resolve_defaults() {
        let config = AppConfig::resolve(FileConfig::default(), &CliConfig::default());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "output": {{ "max_length": 42 }} }}"#).unwrap();

        let cli = CliConfig {
            config: Some(file.path().to_path_buf()),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let config = AppConfig::load(&cli).unwrap();
        assert_eq!(config.output.max_length, Some(42));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = CliConfig {
            config: Some(dir.path().join("missing.json")),
            ..Default::default()
        };
        let err = AppConfig::load(&cli).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let cli = CliConfig {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = AppConfig::load(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
