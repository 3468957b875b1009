//! Tooling & Integration Layer
//!
//! Command-line front end over the decoder: list a content tree, summarize
//! it, or show the registered decoders.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
