//! Core emitter struct and main emit logic.

use std::collections::HashSet;

use crate::bind::BoundRoute;

use super::Config;
use super::naming::{function_name, parameter_names, parameter_type};
use super::render::Body;

/// Rust emitter from bound routes.
pub struct Emitter<'a> {
    pub(super) routes: &'a [BoundRoute],
    pub(super) config: Config,

    /// Function names already used (for collision avoidance)
    pub(super) used_names: HashSet<String>,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(routes: &'a [BoundRoute], config: Config) -> Self {
        Self {
            routes,
            config,
            used_names: HashSet::new(),
            output: String::new(),
        }
    }

    /// Emit one function per route followed by the helper module.
    pub fn emit(mut self) -> String {
        if self.config.header {
            self.output
                .push_str("// @generated by routegen. Do not edit.\n\n");
        }

        for route in self.routes {
            self.emit_route(route);
            self.output.push('\n');
        }

        if !self.routes.is_empty() {
            self.emit_helpers();
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output
    }

    fn emit_route(&mut self, route: &BoundRoute) {
        let name = function_name(route.name(), &mut self.used_names);
        let names = parameter_names(route);

        if self.config.docs {
            self.output
                .push_str(&format!("/// URL for `{}`.\n", route.pattern().raw()));
        }

        let args = route
            .parameters()
            .iter()
            .zip(&names)
            .map(|(param, name)| format!("{name}: {}", parameter_type(&param.ty)))
            .collect::<Vec<_>>()
            .join(", ");

        if !self.config.visibility.is_empty() {
            self.output.push_str(&self.config.visibility);
            self.output.push(' ');
        }
        self.output
            .push_str(&format!("fn {name}({args}) -> String {{\n"));

        let body = Body::new(route, &names, &self.config.helpers_module).build();
        for (depth, line) in body {
            self.output.push_str(&"    ".repeat(depth + 1));
            self.output.push_str(&line);
            self.output.push('\n');
        }
        self.output.push_str("}\n");
    }

    fn emit_helpers(&mut self) {
        self.output
            .push_str(&format!("mod {} {{\n", self.config.helpers_module));
        self.output.push_str(HELPERS);
        self.output.push_str("}\n");
    }
}

/// Body of the helper module. Encoding keeps RFC 3986 unreserved bytes and
/// percent-encodes the rest as uppercase hex.
const HELPERS: &str = r#"    pub(super) fn encode(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for byte in text.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                    out.push(char::from(byte));
                }
                _ => out.push_str(&format!("%{byte:02X}")),
            }
        }
        out
    }

    /// `/`-prefixed catch-all value. With `keep_slashes`, every non-empty
    /// chunk is encoded separately and a trailing `/` survives.
    pub(super) fn encode_path(text: &str, keep_slashes: bool) -> String {
        let mut out = String::new();
        if !keep_slashes {
            if !text.is_empty() {
                out.push('/');
                out.push_str(&encode(text));
            }
            return out;
        }
        for chunk in text.split('/').filter(|chunk| !chunk.is_empty()) {
            out.push('/');
            out.push_str(&encode(chunk));
        }
        if !out.is_empty() && text.ends_with('/') {
            out.push('/');
        }
        out
    }

    pub(super) fn push_query(url: &mut String, key: &str, value: &str) {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(key);
        url.push('=');
        url.push_str(&encode(value));
    }
"#;
