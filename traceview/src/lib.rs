//! traceview - readable previews of AI trace span payloads
//!
//! The [`domain::prettify`] module turns span inputs and outputs from many
//! framework conventions into one display message. The [`crate::core`] module holds
//! the command-line shell around it.

mod app;

pub mod core;
pub mod domain;
pub mod utils;
