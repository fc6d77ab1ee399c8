pub mod check;
pub mod dump;
pub mod emit;
pub mod manifest_loader;
pub mod render;


/// Print `error: {msg}` to stderr and exit with status 1.
pub fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    std::process::exit(1);
}
