// src/sources.rs

//! The project's source file set.
//!
//! A source file is a build-profile YAML in the working directory; the two
//! shared data files are excluded because every profile consumes them. The
//! same compiled profile backs `list` (enumerate profile names) and `dev`
//! (decide whether a filesystem event is interesting).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::model::SourcesSection;

/// Compiled include/exclude glob patterns for the source set.
///
/// Patterns are relative to the working directory; `matches` expects relative
/// paths with forward slashes (e.g. `"monk-sunwuko-tr.yaml"`).
#[derive(Clone)]
pub struct SourceProfile {
    include_set: GlobSet,
    exclude_set: Option<GlobSet>,
}

impl std::fmt::Debug for SourceProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceProfile").finish_non_exhaustive()
    }
}

impl SourceProfile {
    /// Compile the patterns from a `[sources]` config section.
    pub fn from_config(cfg: &SourcesSection) -> Result<Self> {
        Self::compile(&cfg.watch, &cfg.exclude)
    }

    /// Compile explicit include/exclude pattern lists.
    pub fn compile(watch: &[String], exclude: &[String]) -> Result<Self> {
        let include_set =
            build_globset(watch).context("building source watch globset")?;

        let exclude_set = if exclude.is_empty() {
            None
        } else {
            Some(build_globset(exclude).context("building source exclude globset")?)
        };

        Ok(Self {
            include_set,
            exclude_set,
        })
    }

    /// Returns true if the given path (relative to the working directory)
    /// belongs to the source set.
    pub fn matches(&self, rel_path: &str) -> bool {
        if !self.include_set.is_match(rel_path) {
            return false;
        }
        if let Some(exclude) = &self.exclude_set {
            if exclude.is_match(rel_path) {
                return false;
            }
        }
        true
    }
}

/// Enumerate the source files directly under `dir`, sorted by path.
///
/// An empty result is not an error; the caller decides what that means
/// (empty `list` output, an idle watch).
pub fn scan_sources(dir: &Path, profile: &SourceProfile) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading source directory {:?}", dir))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading entry in {:?}", dir))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if profile.matches(name) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Enumerate the build profile names under `dir`: source file names with the
/// extension stripped, sorted.
pub fn build_names(dir: &Path, profile: &SourceProfile) -> Result<Vec<String>> {
    let mut names: Vec<String> = scan_sources(dir, profile)?
        .iter()
        .filter_map(|p| profile_stem(p))
        .collect();
    names.sort();
    Ok(names)
}

/// The profile name of a source path: the file name with its extension
/// stripped exactly once (`tal-rasha.v2.yaml` -> `tal-rasha.v2`).
pub fn profile_stem(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob =
            Glob::new(pat).with_context(|| format!("invalid glob pattern: {pat}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}
