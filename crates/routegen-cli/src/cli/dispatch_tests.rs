//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Input rules: required args and mutually exclusive inputs
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Global flags: verbosity is accepted before and after the subcommand

use std::path::PathBuf;

use tracing::Level;

use super::*;
use crate::cli::commands::{check_command, dump_command, emit_command, render_command};

#[test]
fn check_accepts_manifest() {
    let m = check_command()
        .try_get_matches_from(["check", "routes.json"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.manifest, Some(PathBuf::from("routes.json")));
    assert_eq!(params.pattern, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_accepts_pattern() {
    let m = check_command()
        .try_get_matches_from(["check", "-p", "/product/{id}", "--color", "never"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.manifest, None);
    assert_eq!(params.pattern.as_deref(), Some("/product/{id}"));
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn check_requires_one_input() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());

    let result = check_command().try_get_matches_from(["check", "routes.json", "-p", "/a"]);
    assert!(result.is_err(), "manifest and pattern are exclusive");
}

#[test]
fn dump_requires_pattern() {
    assert!(dump_command().try_get_matches_from(["dump"]).is_err());

    let m = dump_command()
        .try_get_matches_from(["dump", "--pattern", "~/a/{b?}", "--color", "always"])
        .unwrap();
    let params = DumpParams::from_matches(&m);
    assert_eq!(params.pattern, "~/a/{b?}");
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn emit_defaults() {
    let m = emit_command()
        .try_get_matches_from(["emit", "routes.json"])
        .unwrap();
    let params = EmitParams::from_matches(&m);

    assert_eq!(params.manifest, PathBuf::from("routes.json"));
    assert_eq!(params.output, None);
    assert_eq!(params.visibility, "pub");
    assert_eq!(params.helpers_module, "url_helpers");
    assert!(!params.no_docs);
}

#[test]
fn emit_options() {
    let m = emit_command()
        .try_get_matches_from([
            "emit",
            "routes.json",
            "-o",
            "src/routes.rs",
            "--visibility",
            "private",
            "--helpers-module",
            "enc",
            "--no-docs",
        ])
        .unwrap();
    let params = EmitParams::from_matches(&m);

    assert_eq!(params.output, Some(PathBuf::from("src/routes.rs")));
    assert_eq!(params.visibility, "");
    assert_eq!(params.helpers_module, "enc");
    assert!(params.no_docs);
}

#[test]
fn emit_rejects_unknown_visibility() {
    let result =
        emit_command().try_get_matches_from(["emit", "routes.json", "--visibility", "crate"]);
    assert!(result.is_err());
}

#[test]
fn render_requires_route() {
    assert!(
        render_command()
            .try_get_matches_from(["render", "routes.json"])
            .is_err()
    );

    let m = render_command()
        .try_get_matches_from(["render", "routes.json", "-r", "product"])
        .unwrap();
    let params = RenderParams::from_matches(&m);
    assert_eq!(params.route, "product");
    assert_eq!(params.arguments, "{}");

    let m = render_command()
        .try_get_matches_from(["render", "routes.json", "-r", "product", "-a", r#"{"id": 5}"#])
        .unwrap();
    assert_eq!(RenderParams::from_matches(&m).arguments, r#"{"id": 5}"#);
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["routegen", "-vv", "check", "routes.json"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 2);

    let m = build_cli()
        .try_get_matches_from(["routegen", "check", "routes.json", "-v"])
        .unwrap();
    assert_eq!(m.get_count("verbose"), 1);
}

#[test]
fn log_levels() {
    assert_eq!(log_level(0), Level::WARN);
    assert_eq!(log_level(1), Level::DEBUG);
    assert_eq!(log_level(5), Level::TRACE);
}

#[test]
fn color_choice() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}
