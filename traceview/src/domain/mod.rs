//! Domain logic

pub mod prettify;
pub mod traces;
