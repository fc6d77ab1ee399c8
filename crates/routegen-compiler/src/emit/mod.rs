//! Code generation from bound routes.
//!
//! Each target language lives in its own submodule. Currently only Rust is
//! supported.
//!
//! # Example
//!
//! ```
//! use routegen_compiler::Manifest;
//! use routegen_compiler::emit::rust;
//!
//! let manifest = Manifest::from_json(r#"{ "routes": [{ "name": "home", "pattern": "/" }] }"#).unwrap();
//! let output = rust::emit(&manifest.bind_all().unwrap());
//! assert!(output.contains("pub fn home() -> String"));
//! ```

pub mod rust;
