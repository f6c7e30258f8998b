// src/watch/hash.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blake3::Hasher;
use tracing::{debug, warn};

use crate::sources::{scan_sources, SourceProfile};

/// Compute a deterministic hash over the contents of the given files.
///
/// Order of `paths` does not matter; they are sorted before hashing to keep
/// the hash stable. Paths that are not regular files are skipped. Source
/// files are small, so each is read whole.
pub fn compute_sources_hash<I, P>(paths: I) -> Result<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut paths_vec: Vec<PathBuf> =
        paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
    paths_vec.sort();

    let mut hasher = Hasher::new();
    for path in paths_vec {
        if !path.is_file() {
            continue;
        }
        // The file name participates so that renames count as changes.
        if let Some(name) = path.file_name() {
            hasher.update(name.to_string_lossy().as_bytes());
            hasher.update(b"\0");
        }
        let bytes = fs::read(&path)
            .with_context(|| format!("reading file for hashing: {:?}", path))?;
        hasher.update(&bytes);
        hasher.update(b"\0");
    }

    let hash = hasher.finalize().to_hex().to_string();
    debug!(hash = %hash, "computed aggregate source hash");
    Ok(hash)
}

/// Content gate for file-watch triggers.
///
/// Editors and sync tools produce change events without changing any bytes;
/// with the gate enabled, such events are dropped. The hash covers the whole
/// source set and lives only for the current dev session.
#[derive(Debug)]
pub struct ChangeGate {
    root: PathBuf,
    profile: SourceProfile,
    last_hash: Option<String>,
}

impl ChangeGate {
    pub fn new(root: impl Into<PathBuf>, profile: SourceProfile) -> Self {
        Self {
            root: root.into(),
            profile,
            last_hash: None,
        }
    }

    /// Rehash the source set and compare with the previous value.
    ///
    /// Returns false only when the aggregate hash is known and unchanged.
    /// Hashing errors (e.g. a file deleted mid-scan) err on the side of
    /// rebuilding.
    pub fn should_rebuild(&mut self) -> bool {
        let current = scan_sources(&self.root, &self.profile)
            .and_then(|paths| compute_sources_hash(&paths));

        match current {
            Ok(hash) => {
                let unchanged = self.last_hash.as_deref() == Some(hash.as_str());
                self.last_hash = Some(hash);
                !unchanged
            }
            Err(err) => {
                warn!(error = %err, "source hashing failed, rebuilding anyway");
                self.last_hash = None;
                true
            }
        }
    }
}
