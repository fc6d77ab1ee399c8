//! Configuration types for Rust emission.

/// Configuration for Rust emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Visibility of the generated functions (`pub`, `pub(crate)`, or empty)
    pub(crate) visibility: String,
    /// Name of the private helper module
    pub(crate) helpers_module: String,
    /// Whether to emit doc comments on generated functions
    pub(crate) docs: bool,
    /// Whether to emit the `@generated` header
    pub(crate) header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visibility: "pub".to_string(),
            helpers_module: "url_helpers".to_string(),
            docs: true,
            header: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the visibility of the generated functions.
    pub fn visibility(mut self, value: impl Into<String>) -> Self {
        self.visibility = value.into();
        self
    }

    /// Set the name of the helper module.
    pub fn helpers_module(mut self, value: impl Into<String>) -> Self {
        self.helpers_module = value.into();
        self
    }

    /// Set whether to emit doc comments.
    pub fn docs(mut self, value: bool) -> Self {
        self.docs = value;
        self
    }

    /// Set whether to emit the `@generated` header.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }
}
