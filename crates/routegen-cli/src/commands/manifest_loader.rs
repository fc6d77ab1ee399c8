use std::path::Path;

use routegen_compiler::Manifest;
use routegen_compiler::bind::BoundRoute;
use routegen_compiler::diagnostics::{Diagnostic, Diagnostics};
use tracing::info;

/// Load a manifest, mapping failures to a printable message.
pub fn load_manifest(path: &Path) -> Result<Manifest, String> {
    Manifest::load(path).map_err(|e| e.to_string())
}

/// Render one route's diagnostic against its pattern.
pub fn render_diagnostic(
    diagnostic: Diagnostic,
    pattern: &str,
    origin: &str,
    color: bool,
) -> String {
    let diagnostics = Diagnostics::from(diagnostic);
    let mut out = diagnostics
        .printer()
        .source(pattern)
        .path(origin)
        .colored(color)
        .render();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Bind every route; on failure the error holds the rendered diagnostics of
/// all rejected routes.
pub fn bind_routes(
    manifest: &Manifest,
    path: &Path,
    color: bool,
) -> Result<Vec<BoundRoute>, String> {
    let outcomes = manifest.bind().map_err(|e| e.to_string())?;

    let mut bound = Vec::with_capacity(outcomes.len());
    let mut rendered = String::new();
    let mut rejected = 0;
    for outcome in outcomes {
        match outcome.result {
            Ok(route) => bound.push(route),
            Err(diagnostic) => {
                rejected += 1;
                let origin = format!("{}: route `{}`", path.display(), outcome.route.name);
                rendered.push_str(&render_diagnostic(
                    diagnostic,
                    &outcome.route.pattern,
                    &origin,
                    color,
                ));
            }
        }
    }

    if rejected > 0 {
        rendered.push_str(&format!("error: {rejected} route(s) failed validation\n"));
        return Err(rendered);
    }

    info!(routes = bound.len(), path = %path.display(), "manifest is valid");
    Ok(bound)
}
