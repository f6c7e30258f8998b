// tests/config_behaviour.rs

use std::error::Error;
use std::fs;

use guidedev::config::{load_and_validate, load_or_default, ConfigFile};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn defaults_match_the_stock_project_layout() -> TestResult {
    let cfg = ConfigFile::default();

    assert_eq!(cfg.delegate.build, "python3 build.py");
    assert_eq!(cfg.delegate.sync, "uv sync");
    assert_eq!(cfg.sources.watch, vec!["*.yaml".to_string()]);
    assert_eq!(
        cfg.sources.exclude,
        vec![
            "d3-static-data.yaml".to_string(),
            "season-journey-template.yaml".to_string()
        ]
    );
    assert_eq!(
        cfg.output.files,
        vec!["index.html".to_string(), "index-tailwind.html".to_string()]
    );
    assert!(!cfg.dev.use_hash);

    Ok(())
}

#[test]
fn toml_overrides_merge_with_defaults() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Guidedev.toml");
    fs::write(
        &path,
        r#"
[delegate]
build = "uv run build.py"

[sources]
watch = ["data/*.yaml"]
exclude = []

[dev]
use_hash = true
"#,
    )?;

    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.delegate.build, "uv run build.py");
    // Unspecified fields keep their defaults.
    assert_eq!(cfg.delegate.sync, "uv sync");
    assert_eq!(cfg.sources.watch, vec!["data/*.yaml".to_string()]);
    assert!(cfg.sources.exclude.is_empty());
    assert_eq!(
        cfg.output.files,
        vec!["index.html".to_string(), "index-tailwind.html".to_string()]
    );
    assert!(cfg.dev.use_hash);

    Ok(())
}

#[test]
fn missing_default_config_falls_back_to_defaults() -> TestResult {
    let dir = tempfile::tempdir()?;

    let cfg = load_or_default(dir.path(), None)?;
    assert_eq!(cfg.delegate.build, "python3 build.py");

    Ok(())
}

#[test]
fn default_config_file_is_picked_up_when_present() -> TestResult {
    let dir = tempfile::tempdir()?;
    fs::write(
        dir.path().join("Guidedev.toml"),
        "[delegate]\nbuild = \"make render\"\n",
    )?;

    let cfg = load_or_default(dir.path(), None)?;
    assert_eq!(cfg.delegate.build, "make render");

    Ok(())
}

#[test]
fn explicit_config_path_must_exist() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.toml");

    let res = load_or_default(dir.path(), Some(missing.to_str().unwrap()));
    assert!(res.is_err());
}

#[test]
fn empty_delegate_command_is_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Guidedev.toml");
    fs::write(&path, "[delegate]\nbuild = \"\"\n")?;

    assert!(load_and_validate(&path).is_err());
    Ok(())
}

#[test]
fn invalid_glob_pattern_is_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Guidedev.toml");
    fs::write(&path, "[sources]\nwatch = [\"[\"]\n")?;

    assert!(load_and_validate(&path).is_err());
    Ok(())
}

#[test]
fn empty_watch_list_is_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Guidedev.toml");
    fs::write(&path, "[sources]\nwatch = []\n")?;

    assert!(load_and_validate(&path).is_err());
    Ok(())
}
