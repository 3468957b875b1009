//! Configuration sources, from lowest to highest precedence.

pub mod directory_file;
pub mod environment;
pub mod global_file;
