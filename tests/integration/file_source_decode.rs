use std::fs;
use std::path::Path;

use tent::component::{Checklist, Picture};
use tent::config::SourceConfig;
use tent::source::filter_prefix;
use tent::{decode, decode_with_summary, DecodeError, DecoderRegistry, FileSource};
use tempfile::TempDir;

fn write(root: &Path, name: &str, contents: &[u8]) {
    let path = root.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn content_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, ".category.yml", b"title: Home\n");
    write(root, "fruits/.category.yml", b"index: 2\ntitle: Fruits\n");
    write(root, "fruits/basket.checks", b"index: 1\nlist:\n- check: apple\n");
    write(root, "fruits/photo.png", &[0x89, b'P', b'N', b'G']);
    write(root, "veg/.category.yml", b"index: 1\n");
    write(root, "notes.txt", b"not decoded");
    temp_dir
}

#[test]
fn directory_decodes_into_sorted_tree() {
    let temp_dir = content_tree();
    let source = FileSource::new(temp_dir.path()).unwrap();
    let root = decode(source, Vec::new()).unwrap();

    assert_eq!(root.id, "root");
    assert_eq!(root.meta["title"], "Home");
    let ids: Vec<&str> = root.sub.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["veg", "fruits"]);

    let fruits = root.find("fruits").unwrap();
    assert_eq!(fruits.index, 2.0);
    assert_eq!(fruits.meta["title"], "Fruits");
    assert_eq!(fruits.components.len(), 2);

    let basket = fruits.components[0].downcast_ref::<Checklist>().unwrap();
    assert_eq!(basket.id, "basket");
    assert_eq!(basket.count_items(), 1);

    let photo = fruits.components[1].downcast_ref::<Picture>().unwrap();
    assert_eq!(photo.id, "photo.png");
    assert_eq!(photo.data.len(), 4);
}

#[test]
fn summary_counts_every_item() {
    let temp_dir = content_tree();
    let registry = DecoderRegistry::new(Vec::new()).unwrap();
    let source = FileSource::new(temp_dir.path()).unwrap();
    let (_, summary) = decode_with_summary(source, &registry).unwrap();

    assert_eq!(summary.items, 6);
    assert_eq!(summary.categories, 3);
    assert_eq!(summary.components, 2);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn excluded_items_never_reach_the_tree() {
    let temp_dir = content_tree();
    let registry = DecoderRegistry::new(Vec::new()).unwrap();
    let source = FileSource::new(temp_dir.path())
        .unwrap()
        .exclude(filter_prefix("fruits/"));
    let (root, summary) = decode_with_summary(source, &registry).unwrap();

    assert!(root.find("fruits").is_none());
    assert!(root.find("veg").is_some());
    assert_eq!(summary.items, 3);
}

#[test]
fn uppercase_picture_extension_is_claimed() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "gallery/SUNSET.JPG", b"jpeg");
    let root = decode(FileSource::new(temp_dir.path()).unwrap(), Vec::new()).unwrap();

    let gallery = root.find("gallery").unwrap();
    assert_eq!(gallery.components[0].kind(), "picture");
    assert_eq!(gallery.components[0].id(), "SUNSET.JPG");
}

#[test]
fn malformed_component_reports_item_name() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/bad.checks", b"list: [unclosed\n");
    let err = decode(FileSource::new(temp_dir.path()).unwrap(), Vec::new()).unwrap_err();

    assert!(matches!(err, DecodeError::Component { .. }));
    assert_eq!(err.item(), Some("a/bad.checks"));
}

#[test]
fn malformed_marker_reports_item_name() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/.category.yml", b"index: [1, 2]\n");
    let err = decode(FileSource::new(temp_dir.path()).unwrap(), Vec::new()).unwrap_err();

    assert!(matches!(err, DecodeError::Category { .. }));
    assert_eq!(err.item(), Some("a/.category.yml"));
}

#[test]
fn source_config_limits_depth() {
    let temp_dir = content_tree();
    write(temp_dir.path(), "fruits/citrus/lemon.checks", b"list: []\n");
    let config = SourceConfig {
        max_depth: Some(2),
        ..SourceConfig::default()
    };
    let source = config.open(temp_dir.path()).unwrap();
    let root = decode(source, Vec::new()).unwrap();

    assert!(root.find("fruits").is_some());
    assert!(root.find("fruits/citrus").is_none());
}
