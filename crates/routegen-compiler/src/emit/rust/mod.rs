//! Rust URL-builder emitter.
//!
//! Every bound route becomes a function taking its parameters and returning
//! the URL. Percent-encoding lives in a private helper module emitted once
//! per file, so the output has no dependencies.

mod config;
mod emitter;
mod naming;
mod render;


pub use config::Config;
pub use emitter::Emitter;

use crate::bind::BoundRoute;

/// Emit Rust for `routes` with the default config.
pub fn emit(routes: &[BoundRoute]) -> String {
    Emitter::new(routes, Config::default()).emit()
}

/// Emit Rust for `routes` with a custom config.
pub fn emit_with_config(routes: &[BoundRoute], config: Config) -> String {
    Emitter::new(routes, config).emit()
}
