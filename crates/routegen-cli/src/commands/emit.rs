use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use routegen_compiler::emit::rust::{Config, emit_with_config};
use tracing::info;

use super::fail;
use super::manifest_loader::{bind_routes, load_manifest};

pub struct EmitArgs {
    pub manifest: PathBuf,
    pub output: Option<PathBuf>,
    pub visibility: String,
    pub helpers_module: String,
    pub docs: bool,
    pub color: bool,
}

pub fn run(args: EmitArgs) {
    let output = match emit_manifest(&args) {
        Ok(output) => output,
        Err(rendered) => {
            eprint!("{}", rendered);
            std::process::exit(1);
        }
    };

    if let Some(ref path) = args.output {
        fs::write(path, &output).unwrap_or_else(|e| {
            fail(format!("failed to write {}: {}", path.display(), e));
        });
        info!(path = %path.display(), bytes = output.len(), "wrote generated code");
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        fail(format!("failed to write to stdout: {e}"));
    }
}

pub fn emit_manifest(args: &EmitArgs) -> Result<String, String> {
    let manifest = load_manifest(&args.manifest).map_err(|msg| format!("error: {msg}\n"))?;
    let routes = bind_routes(&manifest, &args.manifest, args.color)?;

    let config = Config::new()
        .visibility(args.visibility.as_str())
        .helpers_module(args.helpers_module.as_str())
        .docs(args.docs);
    Ok(emit_with_config(&routes, config))
}
