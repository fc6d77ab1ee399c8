//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::{ArgGroup, Command};

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("routegen")
        .about("Compile URL route templates into URL builders")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(emit_command())
        .subcommand(render_command())
}

/// Validate a manifest or a single pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a route manifest or a single pattern")
        .override_usage(
            "\
  routegen check <MANIFEST>
  routegen check -p <PATTERN>",
        )
        .after_help(
            r#"EXAMPLES:
  routegen check routes.json              # bind every route
  routegen check -p '/product/{id:int}'   # parse one pattern"#,
        )
        .arg(manifest_arg())
        .arg(pattern_arg())
        .group(
            ArgGroup::new("input")
                .args(["manifest", "pattern"])
                .required(true),
        )
        .arg(color_arg())
}

/// Print the segment tree of a pattern.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the parsed segment tree of a pattern")
        .after_help(
            r#"EXAMPLES:
  routegen dump -p '/product/{id:int}.{format?}'"#,
        )
        .arg(pattern_arg().required(true))
        .arg(color_arg())
}

/// Generate Rust URL builders.
pub fn emit_command() -> Command {
    Command::new("emit")
        .about("Generate Rust URL-builder functions")
        .after_help(
            r#"EXAMPLES:
  routegen emit routes.json                          # print to stdout
  routegen emit routes.json -o src/routes.rs         # write to file
  routegen emit routes.json --visibility 'pub(crate)' --no-docs"#,
        )
        .arg(manifest_arg().required(true))
        .arg(output_arg())
        .arg(visibility_arg())
        .arg(helpers_module_arg())
        .arg(no_docs_arg())
        .arg(color_arg())
}

/// Render one route's URL.
pub fn render_command() -> Command {
    Command::new("render")
        .about("Render the URL of a manifest route")
        .after_help(
            r#"EXAMPLES:
  routegen render routes.json -r product -a '{"productId": 5, "format": "txt"}'"#,
        )
        .arg(manifest_arg().required(true))
        .arg(route_arg())
        .arg(arguments_arg())
        .arg(color_arg())
}
