//! Integration tests for manifest generation

mod atomic_write;
mod manifest_determinism;
