//! CLI Tooling
//!
//! Command-line interface over the tree decoder. Every command decodes with
//! the built-in decoders and renders the result as text or JSON.

use crate::config::{ConfigLoader, TentConfig};
use crate::decode::decode_with_summary;
use crate::decoder::DecoderRegistry;
use crate::error::{ApiError, DecodeError};
use crate::source::{filter_prefix, filter_suffix};
use crate::tooling::format::{format_decoders_text, format_stats_text, format_tree_text};
use crate::tree::Category;
use crate::views::{category_rows, CategoryView};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// Tent CLI - build ordered category trees from content directories
#[derive(Parser, Debug)]
#[command(name = "tent")]
#[command(about = "Build ordered category trees from content directories")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Decode a directory and print its category tree
    Tree {
        /// Content directory
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Only read items ending with this suffix (repeatable)
        #[arg(long = "include-suffix")]
        include_suffix: Vec<String>,
        /// Skip items starting with this prefix (repeatable)
        #[arg(long = "exclude-prefix")]
        exclude_prefix: Vec<String>,
    },
    /// Decode a directory and print per-category counts
    Stats {
        /// Content directory
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the built-in decoders
    Decoders {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Commands {
    /// Content directory the command reads, if any
    pub fn content_dir(&self) -> Option<&Path> {
        match self {
            Commands::Tree { dir, .. } | Commands::Stats { dir, .. } => Some(dir),
            Commands::Decoders { .. } => None,
        }
    }
}

/// Resolved configuration plus the decoder registry used by every command.
pub struct CliContext {
    config: TentConfig,
    registry: DecoderRegistry,
    log_file: Option<PathBuf>,
}

impl CliContext {
    pub fn new(config: TentConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let registry = DecoderRegistry::new(Vec::new()).map_err(DecodeError::from)?;
        Ok(Self {
            config,
            registry,
            log_file: None,
        })
    }

    /// Load configuration for `cli` and fold its logging flags in.
    ///
    /// `--log-file` is kept apart from the configured file so it outranks
    /// `TENT_LOG_FILE`.
    pub fn from_cli(cli: &Cli) -> Result<Self, ApiError> {
        let mut config = match &cli.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(cli.command.content_dir().unwrap_or(Path::new(".")))?,
        };
        if let Some(level) = &cli.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &cli.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &cli.log_output {
            config.logging.output = output.clone();
        }
        let mut context = Self::new(config)?;
        context.log_file = cli.log_file.clone();
        Ok(context)
    }

    pub fn config(&self) -> &TentConfig {
        &self.config
    }

    pub fn registry(&self) -> &DecoderRegistry {
        &self.registry
    }

    /// Log file given on the command line, if any.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Run a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Tree {
                dir,
                format,
                include_suffix,
                exclude_prefix,
            } => {
                check_format(format)?;
                let mut source = self.config.source.open(dir)?;
                for suffix in include_suffix {
                    source = source.include(filter_suffix(suffix.as_str()));
                }
                for prefix in exclude_prefix {
                    source = source.exclude(filter_prefix(prefix.as_str()));
                }
                let (root, summary) = decode_with_summary(source, &self.registry)?;
                let view = CategoryView::from(&root);
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&json!({
                        "tree": view,
                        "summary": summary,
                    }))?)
                } else {
                    Ok(format_tree_text(&view, &summary))
                }
            }
            Commands::Stats { dir, format } => {
                check_format(format)?;
                let (root, summary) = self.decode_dir(dir)?;
                let rows = category_rows(&root);
                info!(
                    categories = root.count_categories(),
                    components = root.count_components(),
                    "Computed tree statistics"
                );
                if format == "json" {
                    Ok(serde_json::to_string_pretty(&json!({
                        "categories": rows,
                        "summary": summary,
                    }))?)
                } else {
                    Ok(format_stats_text(&rows, &summary))
                }
            }
            Commands::Decoders { format } => {
                check_format(format)?;
                if format == "json" {
                    let decoders: Vec<_> = self
                        .registry
                        .iter()
                        .map(|(decoder, format)| {
                            json!({
                                "kind": decoder.kind(),
                                "prefix": format.prefix,
                                "extensions": format.extensions,
                            })
                        })
                        .collect();
                    Ok(serde_json::to_string_pretty(&decoders)?)
                } else {
                    Ok(format_decoders_text(&self.registry))
                }
            }
        }
    }

    fn decode_dir(&self, dir: &Path) -> Result<(Category, crate::decode::DecodeSummary), ApiError> {
        let source = self.config.source.open(dir)?;
        Ok(decode_with_summary(source, &self.registry)?)
    }
}

fn check_format(format: &str) -> Result<(), ApiError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(ApiError::ConfigError(format!(
            "Invalid output format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}
