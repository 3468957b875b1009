use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tent::config::TentConfig;
use tent::error::ApiError;
use tent::logging::log_file_path;
use tent::tooling::cli::{Cli, CliContext, Commands};
use tempfile::TempDir;

fn content_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("guides/setup")).unwrap();
    fs::write(root.join("guides/.category.yml"), "index: 1\ntitle: Guides\n").unwrap();
    fs::write(
        root.join("guides/setup/steps.checks"),
        "index: 3\nlist:\n- label: prepare\n  children:\n  - check: unpack\n  - check: plug in\n",
    )
    .unwrap();
    fs::write(root.join("guides/cover.gif"), "GIF89a").unwrap();
    temp_dir
}

fn context() -> CliContext {
    CliContext::new(TentConfig::default()).unwrap()
}

#[test]
fn tree_json_contract_has_tree_and_summary() {
    let temp_dir = content_dir();
    let output = context()
        .execute(&Commands::Tree {
            dir: temp_dir.path().to_path_buf(),
            format: "json".to_string(),
            include_suffix: Vec::new(),
            exclude_prefix: Vec::new(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let tree = &parsed["tree"];
    assert_eq!(tree["id"], "root");
    let guides = &tree["sub"][0];
    assert_eq!(guides["id"], "guides");
    assert_eq!(guides["meta"]["title"], "Guides");
    assert_eq!(guides["components"][0]["kind"], "picture");
    assert_eq!(guides["sub"][0]["components"][0]["id"], "steps");
    assert_eq!(guides["sub"][0]["components"][0]["order"], 3.0);

    let summary = &parsed["summary"];
    assert_eq!(summary["items"], 3);
    assert_eq!(summary["components"], 2);
    assert_eq!(summary["skipped"], 0);
}

#[test]
fn tree_text_lists_components() {
    let temp_dir = content_dir();
    let output = context()
        .execute(&Commands::Tree {
            dir: temp_dir.path().to_path_buf(),
            format: "text".to_string(),
            include_suffix: vec![".checks".to_string()],
            exclude_prefix: Vec::new(),
        })
        .unwrap();

    assert!(output.contains("steps [checklist]"));
    assert!(!output.contains("cover.gif"));
}

#[test]
fn stats_json_contract_has_rows() {
    let temp_dir = content_dir();
    let output = context()
        .execute(&Commands::Stats {
            dir: temp_dir.path().to_path_buf(),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let rows = parsed["categories"].as_array().unwrap();
    let paths: Vec<&str> = rows.iter().map(|r| r["path"].as_str().unwrap()).collect();
    assert_eq!(paths, vec!["", "guides", "guides/setup"]);
    assert_eq!(rows[1]["components"], 1);
    assert_eq!(rows[1]["subcategories"], 1);
    assert!(parsed["summary"]["categories"].as_u64().is_some());
}

#[test]
fn decoders_json_lists_builtins_in_order() {
    let output = context()
        .execute(&Commands::Decoders {
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let decoders = parsed.as_array().unwrap();
    assert_eq!(decoders.len(), 2);
    assert_eq!(decoders[0]["kind"], "checklist");
    assert_eq!(decoders[0]["extensions"][0], ".checks");
    assert_eq!(decoders[1]["kind"], "picture");
}

#[test]
fn missing_directory_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = context()
        .execute(&Commands::Stats {
            dir: temp_dir.path().join("absent"),
            format: "text".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, ApiError::Source(_)));
}

#[test]
fn log_file_flag_outranks_environment() {
    std::env::set_var("TENT_LOG_FILE", "/tmp/tent-from-env.log");

    let cli = Cli::try_parse_from(["tent", "--log-file", "/tmp/tent-from-cli.log", "decoders"])
        .unwrap();
    let context = CliContext::from_cli(&cli).unwrap();
    let path = log_file_path(
        Some(&context.config().logging),
        context.log_file(),
        cli.command.content_dir(),
    )
    .unwrap();
    assert_eq!(path, PathBuf::from("/tmp/tent-from-cli.log"));

    let cli = Cli::try_parse_from(["tent", "decoders"]).unwrap();
    let context = CliContext::from_cli(&cli).unwrap();
    assert_eq!(context.log_file(), None);
    let path = log_file_path(Some(&context.config().logging), context.log_file(), None).unwrap();
    assert_eq!(path, PathBuf::from("/tmp/tent-from-env.log"));

    std::env::remove_var("TENT_LOG_FILE");
}
