//! Function body generation.
//!
//! Mirrors [`BoundRoute::render`]: literal text is folded at emit time, and
//! only parameter values are handled at run time.

use crate::bind::{BoundParameter, BoundRoute, ParameterRole, Shape, TypeRef};
use crate::pattern::{ParameterPart, SegmentPart, same_name};

/// Lines of one function body, each with its nesting depth.
pub(super) struct Body<'a> {
    route: &'a BoundRoute,
    names: &'a [String],
    helpers: &'a str,
    lines: Vec<(usize, String)>,
    depth: usize,
    /// Literal text not yet pushed to `url`.
    pending: String,
}

impl<'a> Body<'a> {
    pub(super) fn new(route: &'a BoundRoute, names: &'a [String], helpers: &'a str) -> Self {
        Self {
            route,
            names,
            helpers,
            lines: Vec::new(),
            depth: 0,
            pending: String::new(),
        }
    }

    pub(super) fn build(mut self) -> Vec<(usize, String)> {
        let (route, names) = (self.route, self.names);
        self.emit_path();

        for (param, name) in route.parameters().iter().zip(names) {
            if param.is_query() {
                self.emit_query(param, name);
            }
        }
        if let Some((param, name)) = route
            .parameters()
            .iter()
            .zip(names)
            .find(|(p, _)| p.is_fragment())
        {
            self.emit_fragment(param, name);
        }
        self.flush();

        // Nothing but the declaration: return the literal directly.
        if let [(_, only)] = self.lines.as_slice()
            && let Some(init) = only.strip_prefix("let mut url = ")
        {
            let expr = init.trim_end_matches(';').to_string();
            return vec![(0, expr)];
        }

        self.lines.push((0, "url".to_string()));
        self.lines
    }

    fn emit_path(&mut self) {
        let route = self.route;
        let options = route.options();
        let segments = route.pattern().segments();
        if segments.is_empty() {
            self.pending.push('/');
            return;
        }

        let mut never_empty = false;
        let mut ends_with_literal = false;
        for segment in segments {
            let mut started = false;
            for part in segment.parts() {
                match part {
                    SegmentPart::Literal(content) | SegmentPart::Separator(content) => {
                        if !started {
                            self.pending.push('/');
                            started = true;
                        }
                        if options.is_lowercase_urls() {
                            self.pending.push_str(&content.to_lowercase());
                        } else {
                            self.pending.push_str(content);
                        }
                        never_empty = true;
                        ends_with_literal = true;
                    }
                    SegmentPart::Parameter(part) => {
                        never_empty |= self.emit_path_parameter(part, started);
                        started = true;
                        ends_with_literal = false;
                    }
                }
            }
        }

        if options.is_append_trailing_slash() {
            if ends_with_literal {
                self.pending.push('/');
            } else {
                self.flush();
                self.line("if !url.ends_with('/') {");
                self.line_nested("url.push('/');");
                self.line("}");
            }
        } else if !never_empty {
            self.flush();
            self.line("if url.is_empty() {");
            self.line_nested("url.push('/');");
            self.line("}");
        }
    }

    /// Returns whether the parameter always produces output.
    fn emit_path_parameter(&mut self, part: &ParameterPart, started: bool) -> bool {
        let (route, names) = (self.route, self.names);
        let Some(index) = route
            .parameters()
            .iter()
            .position(|p| p.is_route() && same_name(&p.name, &part.name))
        else {
            return false;
        };
        let param = &route.parameters()[index];
        let var = names[index].as_str();
        let lowercase = route.options().is_lowercase_urls();
        let helpers = self.helpers;

        if part.is_catch_all() {
            self.flush();
            let nullable = self.open_if_some(&param.ty, var);
            let text = text_expr(var, &param.ty, lowercase);
            self.line(&format!(
                "url.push_str(&{helpers}::encode_path({text}, {}));",
                !part.encode_slashes
            ));
            self.close(nullable);
            return false;
        }

        let mut prefix = String::new();
        if !started {
            prefix.push('/');
        }
        if part.has_optional_separator {
            prefix.push('.');
        }

        let nullable = param.ty.is_nullable();
        if nullable {
            self.flush();
            self.open_if_some(&param.ty, var);
        }
        self.pending.push_str(&prefix);
        self.flush();
        let text = text_expr(var, &param.ty, lowercase);
        self.line(&format!("url.push_str(&{helpers}::encode({text}));"));
        self.close(nullable);
        !nullable
    }

    fn emit_query(&mut self, param: &BoundParameter, var: &str) {
        let ParameterRole::Query {
            key,
            lowercase_value,
        } = &param.role
        else {
            return;
        };
        self.flush();

        let lower_keys = self.route.options().is_lowercase_query_strings();
        let lower_values = lower_keys || *lowercase_value;
        let key = if lower_keys {
            key.to_lowercase()
        } else {
            key.clone()
        };
        let key = urlencoding::encode(&key).into_owned();
        let helpers = self.helpers;

        let nullable = self.open_if_some(&param.ty, var);
        let non_null = TypeRef {
            nullable: false,
            ..param.ty.clone()
        };

        match &non_null.shape {
            Shape::Array(element) => {
                let items = if element.is_nullable() {
                    format!("{var}.iter().flatten()")
                } else {
                    var.to_string()
                };
                if let Shape::KeyValue(k, v) = &element.shape {
                    self.line(&format!("for (key, value) in {items} {{"));
                    self.depth += 1;
                    self.emit_pair(&key, k, v, lower_values);
                } else {
                    self.line(&format!("for item in {items} {{"));
                    self.depth += 1;
                    let text = text_expr("item", element, lower_values);
                    self.line(&format!(
                        "{helpers}::push_query(&mut url, {key:?}, {text});"
                    ));
                }
                self.depth -= 1;
                self.line("}");
            }
            Shape::KeyValue(k, v) => {
                self.line(&format!("let (key, value) = {var};"));
                self.emit_pair(&key, k, v, lower_values);
            }
            Shape::Scalar(_) => {
                let text = text_expr(var, &non_null, lower_values);
                self.line(&format!(
                    "{helpers}::push_query(&mut url, {key:?}, {text});"
                ));
            }
        }

        self.close(nullable);
    }

    /// `key[k]=v` for the `key` and `value` locals. Keys are never lowercased.
    fn emit_pair(&mut self, name: &str, key: &TypeRef, value: &TypeRef, lowercase: bool) {
        let helpers = self.helpers;
        let nullable = self.open_if_some(value, "value");
        let key_text = text_expr("key", key, false);
        let value_text = text_expr(
            "value",
            &TypeRef {
                nullable: false,
                ..value.clone()
            },
            lowercase,
        );
        self.line(&format!(
            "{helpers}::push_query(&mut url, &format!(\"{name}[{{}}]\", {helpers}::encode({key_text})), {value_text});"
        ));
        self.close(nullable);
    }

    fn emit_fragment(&mut self, param: &BoundParameter, var: &str) {
        self.flush();
        let helpers = self.helpers;
        let nullable = self.open_if_some(&param.ty, var);
        let text = text_expr(var, &param.ty, false);
        self.line("url.push('#');");
        self.line(&format!("url.push_str(&{helpers}::encode({text}));"));
        self.close(nullable);
    }

    /// Open `if let Some(var) = var {` for nullable types.
    fn open_if_some(&mut self, ty: &TypeRef, var: &str) -> bool {
        if !ty.is_nullable() {
            return false;
        }
        self.line(&format!("if let Some({var}) = {var} {{"));
        self.depth += 1;
        true
    }

    fn close(&mut self, opened: bool) {
        if opened {
            self.depth -= 1;
            self.line("}");
        }
    }

    /// Push pending literal text, declaring `url` on first use.
    fn flush(&mut self) {
        let declared = !self.lines.is_empty();
        if self.pending.is_empty() {
            if !declared {
                self.line("let mut url = String::new();");
            }
            return;
        }

        let text = std::mem::take(&mut self.pending);
        let line = if !declared {
            format!("let mut url = String::from({text:?});")
        } else if let [c] = text.as_bytes() {
            format!("url.push({:?});", char::from(*c))
        } else {
            format!("url.push_str({text:?});")
        };
        self.line(&line);
    }

    fn line(&mut self, text: &str) {
        self.lines.push((self.depth, text.to_string()));
    }

    fn line_nested(&mut self, text: &str) {
        self.lines.push((self.depth + 1, text.to_string()));
    }
}

/// Expression yielding the `&str` text of `var`.
fn text_expr(var: &str, ty: &TypeRef, lowercase: bool) -> String {
    match (ty.is_string(), lowercase) {
        (true, false) => var.to_string(),
        (true, true) => format!("&{var}.to_lowercase()"),
        (false, false) => format!("&{var}.to_string()"),
        (false, true) => format!("&{var}.to_string().to_lowercase()"),
    }
}
