use routegen_compiler::pattern::parse;
use routegen_core::Colors;

use super::manifest_loader::render_diagnostic;

pub struct DumpArgs {
    pub pattern: String,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    match dump_pattern(&args.pattern, args.color) {
        Ok(tree) => print!("{}", tree),
        Err(rendered) => {
            eprint!("{}", rendered);
            std::process::exit(1);
        }
    }
}

pub fn dump_pattern(pattern: &str, color: bool) -> Result<String, String> {
    let parsed = parse(pattern)
        .map_err(|diagnostic| render_diagnostic(diagnostic, pattern, "<pattern>", color))?;
    Ok(parsed.dump(Colors::new(color)))
}
