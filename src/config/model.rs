// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [delegate]
/// build = "python3 build.py"
/// sync = "uv sync"
///
/// [sources]
/// watch = ["*.yaml"]
/// exclude = ["d3-static-data.yaml", "season-journey-template.yaml"]
///
/// [output]
/// files = ["index.html", "index-tailwind.html"]
///
/// [dev]
/// use_hash = false
/// ```
///
/// All sections are optional; the defaults above apply when the file (or a
/// section) is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// External commands from `[delegate]`.
    #[serde(default)]
    pub delegate: DelegateSection,

    /// Source file patterns from `[sources]`.
    #[serde(default)]
    pub sources: SourcesSection,

    /// Generated files from `[output]`.
    #[serde(default)]
    pub output: OutputSection,

    /// Watch-loop behaviour from `[dev]`.
    #[serde(default)]
    pub dev: DevSection,
}

/// `[delegate]` section: the external collaborators.
///
/// Both are full shell command lines, run through the platform shell. Their
/// internals are out of scope here; only their exit codes matter.
#[derive(Debug, Clone, Deserialize)]
pub struct DelegateSection {
    /// Command that renders the guide.
    #[serde(default = "default_build_delegate")]
    pub build: String,

    /// Command that syncs the build script's dependencies.
    #[serde(default = "default_sync_delegate")]
    pub sync: String,
}

fn default_build_delegate() -> String {
    "python3 build.py".to_string()
}

fn default_sync_delegate() -> String {
    "uv sync".to_string()
}

impl Default for DelegateSection {
    fn default() -> Self {
        Self {
            build: default_build_delegate(),
            sync: default_sync_delegate(),
        }
    }
}

/// `[sources]` section: which files in the working directory count as
/// build-profile sources.
///
/// The same filtered set drives `list` and the `dev` watch loop. The two
/// default exclusions are data files consumed by every profile, not profiles
/// themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesSection {
    /// Glob patterns for source files, relative to the working directory.
    #[serde(default = "default_watch_patterns")]
    pub watch: Vec<String>,

    /// Glob patterns removed from the source set.
    #[serde(default = "default_exclude_patterns")]
    pub exclude: Vec<String>,
}

fn default_watch_patterns() -> Vec<String> {
    vec!["*.yaml".to_string()]
}

fn default_exclude_patterns() -> Vec<String> {
    vec![
        "d3-static-data.yaml".to_string(),
        "season-journey-template.yaml".to_string(),
    ]
}

impl Default for SourcesSection {
    fn default() -> Self {
        Self {
            watch: default_watch_patterns(),
            exclude: default_exclude_patterns(),
        }
    }
}

/// `[output]` section: files produced by the build delegate.
///
/// `clean` removes these if present and succeeds when they are absent.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_output_files")]
    pub files: Vec<String>,
}

fn default_output_files() -> Vec<String> {
    vec!["index.html".to_string(), "index-tailwind.html".to_string()]
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            files: default_output_files(),
        }
    }
}

/// `[dev]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevSection {
    /// If true, a change event only triggers a rebuild when the aggregate
    /// content hash of the source set actually changed. Off by default:
    /// the stock behaviour is to rebuild on every event.
    #[serde(default)]
    pub use_hash: bool,
}
