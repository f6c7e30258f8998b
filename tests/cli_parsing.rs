// tests/cli_parsing.rs

use clap::Parser;
use guidedev::cli::{CliArgs, Command};

#[test]
fn unknown_targets_are_rejected() {
    assert!(CliArgs::try_parse_from(["guidedev", "frobnicate"]).is_err());
    assert!(CliArgs::try_parse_from(["guidedev", "deploy"]).is_err());
}

#[test]
fn a_target_is_required() {
    assert!(CliArgs::try_parse_from(["guidedev"]).is_err());
}

#[test]
fn every_target_parses() {
    for target in ["build", "install", "monk", "clean", "dev", "list"] {
        assert!(
            CliArgs::try_parse_from(["guidedev", target]).is_ok(),
            "target {target} should parse"
        );
    }
}

#[test]
fn build_accepts_an_optional_profile() {
    let args = CliArgs::try_parse_from(["guidedev", "build"]).unwrap();
    assert!(matches!(args.command, Command::Build { profile: None }));

    let args = CliArgs::try_parse_from(["guidedev", "build", "crusader-akkhan"]).unwrap();
    match args.command {
        Command::Build { profile } => assert_eq!(profile.as_deref(), Some("crusader-akkhan")),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn monk_takes_no_arguments() {
    assert!(CliArgs::try_parse_from(["guidedev", "monk", "extra"]).is_err());

    let args = CliArgs::try_parse_from(["guidedev", "monk"]).unwrap();
    assert!(matches!(args.command, Command::Monk));
}

#[test]
fn dev_accepts_an_optional_profile() {
    let args = CliArgs::try_parse_from(["guidedev", "dev", "monk-sunwuko-tr"]).unwrap();
    match args.command {
        Command::Dev { profile } => assert_eq!(profile.as_deref(), Some("monk-sunwuko-tr")),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn global_flags_parse() {
    let args =
        CliArgs::try_parse_from(["guidedev", "--config", "other.toml", "--log-level", "debug", "list"])
            .unwrap();
    assert_eq!(args.config.as_deref(), Some("other.toml"));
    assert!(args.log_level.is_some());
    assert!(matches!(args.command, Command::List));
}
