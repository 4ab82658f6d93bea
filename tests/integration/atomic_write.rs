//! Integration tests for atomic manifest persistence

use crate::integration::test_utils::{workspace_with_source, write_file};
use manifest_gen::error::ManifestError;
use manifest_gen::manifest::{
    CollectingReporter, Manifest, ManifestBuilder, ManifestDocument, ManifestWriter, SourceSpec,
};
use std::fs;
use std::path::Path;

fn build_cards(cards: &Path) -> Manifest {
    let mut reporter = CollectingReporter::new();
    ManifestBuilder::default()
        .build(&[SourceSpec::from_root(cards)], &mut reporter)
        .unwrap()
}

fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Missing parent directories are created
#[test]
fn test_missing_output_parent_is_created() {
    let (temp_dir, cards) = workspace_with_source("cards");
    write_file(&cards, "foo.json", "{}");
    let output = temp_dir.path().join("dist").join("sync").join("kdm_manifest.json");

    let summary = ManifestWriter::write(&build_cards(&cards), &output).unwrap();

    assert_eq!(summary.path, output);
    assert_eq!(ManifestDocument::load(&output).unwrap().files.len(), 1);
    assert_eq!(dir_names(output.parent().unwrap()), vec!["kdm_manifest.json"]);
}

/// An unwritable destination fails fatally and leaves what was there
#[test]
fn test_unwritable_destination_leaves_existing_untouched() {
    let (temp_dir, cards) = workspace_with_source("cards");
    write_file(&cards, "foo.json", "{}");
    let out_dir = temp_dir.path().join("out");
    // The destination is an existing directory, so the rename cannot replace it.
    let output = out_dir.join("kdm_manifest.json");
    write_file(&output, "previous.json", "previous");

    let err = ManifestWriter::write(&build_cards(&cards), &output).unwrap_err();

    assert!(matches!(err, ManifestError::Io { .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        fs::read_to_string(output.join("previous.json")).unwrap(),
        "previous"
    );
    assert_eq!(dir_names(&out_dir), vec!["kdm_manifest.json"]);
}

/// A successful write fully replaces the previous manifest
#[test]
fn test_successful_write_replaces_previous_manifest() {
    let (temp_dir, cards) = workspace_with_source("cards");
    write_file(&cards, "one.json", "1");
    let output = temp_dir.path().join("kdm_manifest.json");
    ManifestWriter::write(&build_cards(&cards), &output).unwrap();

    write_file(&cards, "two.json", "2");
    ManifestWriter::write(&build_cards(&cards), &output).unwrap();

    let document = ManifestDocument::load(&output).unwrap();
    assert_eq!(
        document.files.keys().cloned().collect::<Vec<_>>(),
        vec!["cards/one.json", "cards/two.json"]
    );
    assert_eq!(dir_names(temp_dir.path()), vec!["cards", "kdm_manifest.json"]);
}

/// A failed temp write leaves an existing manifest byte-for-byte intact
#[test]
fn test_failed_temp_write_keeps_previous_manifest() {
    let (temp_dir, cards) = workspace_with_source("cards");
    write_file(&cards, "one.json", "1");
    let output = temp_dir.path().join("kdm_manifest.json");
    ManifestWriter::write(&build_cards(&cards), &output).unwrap();
    let before = fs::read(&output).unwrap();

    // A directory squatting on the temp path makes the temp file uncreatable.
    write_file(&cards, "two.json", "2");
    fs::create_dir(temp_dir.path().join("kdm_manifest.json.tmp")).unwrap();

    let err = ManifestWriter::write(&build_cards(&cards), &output).unwrap_err();

    assert!(matches!(err, ManifestError::Io { .. }));
    assert!(!err.is_usage());
    assert!(err.to_string().contains("kdm_manifest.json.tmp"));
    assert_eq!(fs::read(&output).unwrap(), before);
}
