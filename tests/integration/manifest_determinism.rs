//! Integration tests for manifest build determinism and document layout

use crate::integration::test_utils::{workspace_with_source, write_file};
use manifest_gen::manifest::{
    CollectingReporter, ExtensionFilter, ManifestBuilder, ManifestDocument, ManifestWriter,
    SourceSpec,
};
use std::fs;
use std::thread;
use std::time::Duration;

/// The single-file scenario produces exactly the expected document
#[test]
fn test_single_card_manifest() {
    let (temp_dir, cards) = workspace_with_source("cards");
    write_file(&cards, "foo.json", r#"{"a":1}"#);
    let output = temp_dir.path().join("kdm_manifest.json");

    let mut reporter = CollectingReporter::new();
    let manifest = ManifestBuilder::default()
        .build(&[SourceSpec::from_root(&cards)], &mut reporter)
        .unwrap();
    ManifestWriter::write(&manifest, &output).unwrap();

    let document = ManifestDocument::load(&output).unwrap();
    assert_eq!(document.files.len(), 1);
    let entry = &document.files["cards/foo.json"];
    assert_eq!(entry.sha, "daa5053ecf5f9a37b2de733d0751cc1ab53ac010");
    assert_eq!(entry.size, 7);
    assert!(document.generated.ends_with('Z'));
    assert!(document.generated.contains('.'));
}

/// Only matching extensions are included and keys are emitted sorted
#[test]
fn test_extension_filter_and_key_order() {
    let (temp_dir, cards) = workspace_with_source("cards");
    write_file(&cards, "b.json", "[2]");
    write_file(&cards, "a.json", "[1]");
    write_file(&cards, "c.txt", "three");
    let output = temp_dir.path().join("manifest.json");

    let mut reporter = CollectingReporter::new();
    let manifest = ManifestBuilder::new(ExtensionFilter::new([".json"]))
        .build(&[SourceSpec::from_root(&cards)], &mut reporter)
        .unwrap();
    ManifestWriter::write(&manifest, &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let a = text.find("cards/a.json").unwrap();
    let b = text.find("cards/b.json").unwrap();
    assert!(a < b);
    assert!(!text.contains("c.txt"));
    assert!(text.ends_with("}\n"));
}

/// Re-running on unchanged input yields identical entries and a new timestamp
#[test]
fn test_rebuild_is_stable_except_timestamp() {
    let (temp_dir, cards) = workspace_with_source("cards");
    write_file(&cards, "monsters/lion.json", r#"{"level":1}"#);
    write_file(&cards, "gear/sword.json", r#"{"speed":2}"#);
    write_file(&cards, "gear/shield.json", r#"{"armor":3}"#);
    let output = temp_dir.path().join("manifest.json");
    let specs = [SourceSpec::from_root(&cards)];

    let mut reporter = CollectingReporter::new();
    let first_manifest = ManifestBuilder::default().build(&specs, &mut reporter).unwrap();
    ManifestWriter::write(&first_manifest, &output).unwrap();
    let first = ManifestDocument::load(&output).unwrap();

    thread::sleep(Duration::from_millis(5));

    let second_manifest = ManifestBuilder::default().build(&specs, &mut reporter).unwrap();
    ManifestWriter::write(&second_manifest, &output).unwrap();
    let second = ManifestDocument::load(&output).unwrap();

    assert_eq!(first_manifest, second_manifest);
    assert_eq!(first.files, second.files);
    assert_ne!(first.generated, second.generated);
    assert!(reporter.warnings.is_empty());
}

/// Keys always use forward slashes, including nested directories
#[test]
fn test_nested_keys_use_forward_slashes() {
    let (_temp_dir, cards) = workspace_with_source("cards");
    write_file(&cards, "a/b/c/deep.json", "{}");

    let mut reporter = CollectingReporter::new();
    let manifest = ManifestBuilder::default()
        .build(&[SourceSpec::from_root(&cards)], &mut reporter)
        .unwrap();

    assert_eq!(
        manifest.keys().collect::<Vec<_>>(),
        vec!["cards/a/b/c/deep.json"]
    );
}

/// Size and digest describe the same bytes
#[test]
fn test_size_matches_content_length() {
    let (_temp_dir, cards) = workspace_with_source("cards");
    let content = "é".repeat(10);
    write_file(&cards, "unicode.json", &content);

    let mut reporter = CollectingReporter::new();
    let manifest = ManifestBuilder::default()
        .build(&[SourceSpec::from_root(&cards)], &mut reporter)
        .unwrap();

    let entry = manifest.get("cards/unicode.json").unwrap();
    assert_eq!(entry.size, content.len() as u64);
    assert_eq!(
        entry.digest,
        manifest_gen::manifest::hasher::hash_blob(content.as_bytes())
    );
}
