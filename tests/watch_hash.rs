// tests/watch_hash.rs

use std::error::Error;
use std::fs;

use guidedev::config::SourcesSection;
use guidedev::sources::SourceProfile;
use guidedev::watch::{compute_sources_hash, ChangeGate};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn hash_is_independent_of_path_order() -> TestResult {
    let dir = tempfile::tempdir()?;
    let a = dir.path().join("a.yaml");
    let b = dir.path().join("b.yaml");
    fs::write(&a, "a: 1\n")?;
    fs::write(&b, "b: 2\n")?;

    let forward = compute_sources_hash([&a, &b])?;
    let backward = compute_sources_hash([&b, &a])?;
    assert_eq!(forward, backward);

    Ok(())
}

#[test]
fn hash_changes_with_file_contents() -> TestResult {
    let dir = tempfile::tempdir()?;
    let a = dir.path().join("a.yaml");
    fs::write(&a, "a: 1\n")?;

    let before = compute_sources_hash([&a])?;
    fs::write(&a, "a: 2\n")?;
    let after = compute_sources_hash([&a])?;
    assert_ne!(before, after);

    Ok(())
}

#[test]
fn missing_paths_are_skipped() -> TestResult {
    let dir = tempfile::tempdir()?;
    let a = dir.path().join("a.yaml");
    fs::write(&a, "a: 1\n")?;
    let ghost = dir.path().join("ghost.yaml");

    let without = compute_sources_hash([&a])?;
    let with_ghost = compute_sources_hash([&a, &ghost])?;
    assert_eq!(without, with_ghost);

    Ok(())
}

#[test]
fn change_gate_passes_real_changes_and_blocks_noise() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("a.yaml"), "a: 1\n")?;

    let profile = SourceProfile::from_config(&SourcesSection::default())?;
    let mut gate = ChangeGate::new(dir.path(), profile);

    // First event: no previous hash, so it rebuilds and primes the gate.
    assert!(gate.should_rebuild());
    // Nothing changed since: the event is noise.
    assert!(!gate.should_rebuild());

    fs::write(dir.path().join("a.yaml"), "a: 2\n")?;
    assert!(gate.should_rebuild());

    // A new source file counts as a change too.
    fs::write(dir.path().join("b.yaml"), "b: 1\n")?;
    assert!(gate.should_rebuild());
    assert!(!gate.should_rebuild());

    Ok(())
}
