use std::path::{Path, PathBuf};

use routegen_compiler::pattern::parse;

use super::manifest_loader::{bind_routes, load_manifest, render_diagnostic};

pub struct CheckArgs {
    pub manifest: Option<PathBuf>,
    pub pattern: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let result = match (&args.manifest, &args.pattern) {
        (_, Some(pattern)) => check_pattern(pattern, args.color),
        (Some(path), None) => check_manifest(path, args.color),
        (None, None) => Err("either <MANIFEST> or -p/--pattern is required\n".to_string()),
    };

    if let Err(rendered) = result {
        eprint!("{}", rendered);
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

pub fn check_pattern(pattern: &str, color: bool) -> Result<(), String> {
    parse(pattern)
        .map(|_| ())
        .map_err(|diagnostic| render_diagnostic(diagnostic, pattern, "<pattern>", color))
}

pub fn check_manifest(path: &Path, color: bool) -> Result<(), String> {
    let manifest = load_manifest(path).map_err(|msg| format!("error: {msg}\n"))?;
    bind_routes(&manifest, path, color).map(|_| ())
}
