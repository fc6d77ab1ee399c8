use std::path::PathBuf;

use routegen_compiler::render::Arguments;

use super::manifest_loader::{load_manifest, render_diagnostic};

pub struct RenderArgs {
    pub manifest: PathBuf,
    pub route: String,
    pub arguments: String,
    pub color: bool,
}

pub fn run(args: RenderArgs) {
    match render_route(&args) {
        Ok(url) => println!("{}", url),
        Err(rendered) => {
            eprint!("{}", rendered);
            std::process::exit(1);
        }
    }
}

pub fn render_route(args: &RenderArgs) -> Result<String, String> {
    let manifest = load_manifest(&args.manifest).map_err(|msg| format!("error: {msg}\n"))?;
    let arguments = Arguments::from_json(&args.arguments).map_err(|e| format!("error: {e}\n"))?;

    let bound = manifest
        .bind_route(&args.route)
        .map_err(|e| format!("error: {e}\n"))?;
    let route = match bound {
        Ok(route) => route,
        Err(diagnostic) => {
            let pattern = manifest
                .route(&args.route)
                .map(|r| r.pattern.as_str())
                .unwrap_or_default();
            let origin = format!("{}: route `{}`", args.manifest.display(), args.route);
            return Err(render_diagnostic(diagnostic, pattern, &origin, args.color));
        }
    };

    route.render(&arguments).map_err(|e| format!("error: {e}\n"))
}
