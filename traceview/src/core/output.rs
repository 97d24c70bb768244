//! Rendering prettify results for stdout

use anyhow::Result;

use crate::domain::prettify::PrettifyResult;
use crate::utils::string::truncate_preview_opt;

use super::config::{OutputConfig, OutputFormat};

/// Render a result according to the output config.
///
/// The length limit applies to text output only; JSON output is always
/// complete.
pub fn render(result: &PrettifyResult, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(truncate_preview_opt(
            &result.display_text(),
            config.max_length,
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}
