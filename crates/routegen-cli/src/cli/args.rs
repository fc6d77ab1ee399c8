//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Route manifest (positional).
pub fn manifest_arg() -> Arg {
    Arg::new("manifest")
        .value_name("MANIFEST")
        .value_parser(value_parser!(PathBuf))
        .help("Route manifest (JSON)")
}

/// Inline route pattern (-p/--pattern).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .short('p')
        .long("pattern")
        .value_name("PATTERN")
        .allow_hyphen_values(true)
        .help("Inline route pattern")
}

/// Route name (-r/--route).
pub fn route_arg() -> Arg {
    Arg::new("route")
        .short('r')
        .long("route")
        .value_name("NAME")
        .required(true)
        .help("Route to render")
}

/// Argument values as a JSON object (-a/--args).
pub fn arguments_arg() -> Arg {
    Arg::new("arguments")
        .short('a')
        .long("args")
        .value_name("JSON")
        .default_value("{}")
        .help("Parameter values as a JSON object")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file instead of stdout")
}

/// Visibility of generated functions (--visibility).
pub fn visibility_arg() -> Arg {
    Arg::new("visibility")
        .long("visibility")
        .value_name("VIS")
        .default_value("pub")
        .value_parser(["pub", "pub(crate)", "private"])
        .help("Visibility of generated functions")
}

/// Name of the generated helper module (--helpers-module).
pub fn helpers_module_arg() -> Arg {
    Arg::new("helpers_module")
        .long("helpers-module")
        .value_name("NAME")
        .default_value("url_helpers")
        .help("Name of the generated helper module")
}

/// Don't emit doc comments (--no-docs).
pub fn no_docs_arg() -> Arg {
    Arg::new("no_docs")
        .long("no-docs")
        .action(ArgAction::SetTrue)
        .help("Don't emit doc comments")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
