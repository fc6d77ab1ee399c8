//! routegen: compiler for URL route templates.
//!
//! A route template such as `/product/{id:int}.{format?}` is parsed into
//! segments, bound to a list of declared parameters, and then either rendered
//! directly or turned into Rust URL-builder functions.
//!
//! # Example
//!
//! ```
//! use routegen_compiler::bind::{DeclaredParameter, RouteOptions, TypeRef, bind};
//! use routegen_compiler::render::Arguments;
//!
//! let declared = [
//!     DeclaredParameter::new("id", TypeRef::parse("i32").unwrap()),
//!     DeclaredParameter::new("format", TypeRef::parse("Option<String>").unwrap()),
//! ];
//! let route = bind("product", "/product/{id:int}.{format?}", &declared, RouteOptions::new())
//!     .expect("valid route");
//!
//! let url = route.render(&Arguments::new().with("id", 5).with("format", "txt")).unwrap();
//! assert_eq!(url, "/product/5.txt");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

pub mod bind;
pub mod diagnostics;
pub mod emit;
pub mod manifest;
pub mod pattern;
pub mod render;

#[cfg(test)]
mod manifest_tests;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use manifest::Manifest;

/// Errors outside the diagnostic system: I/O, malformed manifests, rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid route manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("route `{route}`: invalid type `{ty}` for parameter `{parameter}`: {source}")]
    InvalidType {
        route: String,
        parameter: String,
        ty: String,
        #[source]
        source: bind::TypeError,
    },

    #[error("route name `{0}` is used more than once")]
    DuplicateRoute(String),

    #[error("unknown route `{0}`")]
    UnknownRoute(String),

    #[error("{} route(s) failed validation", .0.error_count())]
    Rejected(Diagnostics),

    #[error(transparent)]
    Render(#[from] render::RenderError),
}

pub type Result<T> = std::result::Result<T, Error>;
