//! Integration tests for the category tree decoder

mod cli_contracts;
mod custom_decoder;
mod file_source_decode;
mod tree_properties;
