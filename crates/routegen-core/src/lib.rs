#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared building blocks for routegen.
//!
//! - [`Scanner`]: byte cursor the pattern parser drives
//! - [`utils`]: identifier conversion used by the code emitter
//! - [`Colors`]: ANSI palette for the pattern tree dump

mod colors;
mod invariants;
pub mod scanner;
pub mod utils;

#[cfg(test)]
mod colors_tests;
#[cfg(test)]
mod utils_tests;

pub use colors::Colors;
pub use scanner::Scanner;
