// tests/delegate_commands.rs

use std::error::Error;

use guidedev::config::ConfigFile;
use guidedev::errors::TaskError;
use guidedev::exec::run_delegate;
use guidedev::targets::{build_command, monk_command, run_build, MONK_PROFILE};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn bare_build_runs_the_delegate_unmodified() {
    let cfg = ConfigFile::default();
    assert_eq!(build_command(&cfg, None), "python3 build.py");
}

#[test]
fn a_profile_appends_the_build_flag() {
    let cfg = ConfigFile::default();
    assert_eq!(
        build_command(&cfg, Some("crusader-akkhan")),
        "python3 build.py --build crusader-akkhan"
    );
}

#[test]
fn monk_passes_its_profile_exactly() {
    let cfg = ConfigFile::default();
    assert_eq!(MONK_PROFILE, "monk-sunwuko-tr");
    assert_eq!(monk_command(&cfg), "python3 build.py --build monk-sunwuko-tr");
}

#[test]
fn configured_delegate_is_used_for_composition() {
    let mut cfg = ConfigFile::default();
    cfg.delegate.build = "uv run build.py".to_string();
    assert_eq!(monk_command(&cfg), "uv run build.py --build monk-sunwuko-tr");
}

#[cfg(unix)]
#[tokio::test]
async fn delegate_exit_codes_pass_through_verbatim() -> TestResult {
    assert_eq!(run_delegate("exit 7").await?, 7);
    assert_eq!(run_delegate("true").await?, 0);
    assert_eq!(run_delegate("false").await?, 1);
    Ok(())
}

#[tokio::test]
async fn unknown_profile_fails_before_spawning() -> TestResult {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("a.yaml"), "x: 1\n")?;

    let mut cfg = ConfigFile::default();
    // A delegate that would leave a trace if it ever ran.
    cfg.delegate.build = format!("touch {}", dir.path().join("ran").display());

    let err = run_build(dir.path(), &cfg, Some("nope"))
        .await
        .expect_err("unknown profile must fail");

    let task_err = err
        .downcast_ref::<TaskError>()
        .expect("should be a TaskError");
    match task_err {
        TaskError::UnknownBuildProfile { name, available } => {
            assert_eq!(name, "nope");
            assert_eq!(available, &vec!["a".to_string()]);
        }
    }

    assert!(!dir.path().join("ran").exists());
    Ok(())
}
