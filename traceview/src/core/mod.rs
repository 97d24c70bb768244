//! Core application infrastructure

pub mod cli;
pub mod config;
pub mod constants;
pub mod input;
pub mod output;

pub use crate::app::CoreApp;
pub use cli::{CliConfig, Commands};
pub use config::{AppConfig, OutputConfig, OutputFormat, PrettifyConfig};
pub use input::InputError;
