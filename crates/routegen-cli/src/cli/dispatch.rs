//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::emit::EmitArgs;
use crate::commands::render::RenderArgs;

pub struct CheckParams {
    pub manifest: Option<PathBuf>,
    pub pattern: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: m.get_one::<PathBuf>("manifest").cloned(),
            pattern: m.get_one::<String>("pattern").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            manifest: p.manifest,
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

pub struct EmitParams {
    pub manifest: PathBuf,
    pub output: Option<PathBuf>,
    pub visibility: String,
    pub helpers_module: String,
    pub no_docs: bool,
    pub color: ColorChoice,
}

impl EmitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let visibility = match m.get_one::<String>("visibility").map(|s| s.as_str()) {
            Some("private") => String::new(),
            Some(vis) => vis.to_string(),
            None => "pub".to_string(),
        };

        Self {
            manifest: m
                .get_one::<PathBuf>("manifest")
                .cloned()
                .unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
            visibility,
            helpers_module: m
                .get_one::<String>("helpers_module")
                .cloned()
                .unwrap_or_else(|| "url_helpers".to_string()),
            no_docs: m.get_flag("no_docs"),
            color: parse_color(m),
        }
    }
}

impl From<EmitParams> for EmitArgs {
    fn from(p: EmitParams) -> Self {
        Self {
            manifest: p.manifest,
            output: p.output,
            visibility: p.visibility,
            helpers_module: p.helpers_module,
            docs: !p.no_docs,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RenderParams {
    pub manifest: PathBuf,
    pub route: String,
    pub arguments: String,
    pub color: ColorChoice,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest: m
                .get_one::<PathBuf>("manifest")
                .cloned()
                .unwrap_or_default(),
            route: m.get_one::<String>("route").cloned().unwrap_or_default(),
            arguments: m
                .get_one::<String>("arguments")
                .cloned()
                .unwrap_or_else(|| "{}".to_string()),
            color: parse_color(m),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            manifest: p.manifest,
            route: p.route,
            arguments: p.arguments,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
