//! Property-based tests for determinism guarantees

use manifest_gen::manifest::hasher::{compute_blob_digest, hash_blob};
use manifest_gen::manifest::path::{manifest_key, normalize_extension};
use manifest_gen::manifest::ExtensionFilter;
use proptest::prelude::*;

/// Test that blob hashing is deterministic and always lowercase hex
#[test]
fn test_blob_hash_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner.run(
        &(any::<Vec<u8>>(), any::<Vec<u8>>()),
        |(content1, content2)| {
            let hash1 = hash_blob(&content1);
            let hash2 = hash_blob(&content2);

            assert_eq!(hash1, hash_blob(&content1));
            assert_eq!(hash1.len(), 40);
            assert!(hash1.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
            assert_eq!(hash1, compute_blob_digest(&content1).to_hex());

            if content1 != content2 {
                prop_assert_ne!(hash1, hash2);
            }

            Ok(())
        },
    ).unwrap();
}

/// Test that the length header separates a prefix from its extension
#[test]
fn test_prefix_has_distinct_digest() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner.run(
        &(any::<Vec<u8>>(), 1usize..64),
        |(content, extra)| {
            let mut longer = content.clone();
            longer.extend(std::iter::repeat(0u8).take(extra));

            assert_ne!(hash_blob(&content), hash_blob(&longer));

            Ok(())
        },
    ).unwrap();
}

/// Test that extension normalization is idempotent and matching ignores case
#[test]
fn test_extension_filter_case_insensitive() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner.run(
        &("[a-zA-Z0-9]{1,8}", "[a-zA-Z0-9_]{1,12}"),
        |(ext, stem)| {
            let normalized = normalize_extension(&ext);
            assert_eq!(normalize_extension(&normalized), normalized);

            let filter = ExtensionFilter::new([ext.clone()]);
            assert!(filter.matches(&format!("{}.{}", stem, ext.to_uppercase())));
            assert!(filter.matches(&format!("{}.{}", stem, ext.to_lowercase())));

            Ok(())
        },
    ).unwrap();
}

/// Test that labeled keys are always `<label>/<relative>`
#[test]
fn test_manifest_key_composition() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner.run(
        &("[a-z]{1,10}", "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.json"),
        |(label, relative)| {
            let key = manifest_key(&label, &relative);
            assert_eq!(key, format!("{}/{}", label, relative));
            assert_eq!(manifest_key("", &relative), relative);

            Ok(())
        },
    ).unwrap();
}
