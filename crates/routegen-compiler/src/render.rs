//! Evaluates a bound route against argument values.
//!
//! This is the reference behaviour for generated URL builders: the Rust
//! emitter produces code that follows the same rules.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

use crate::bind::{BoundParameter, BoundRoute, ParameterRole, TypeRef};
use crate::pattern::{ParameterPart, SegmentPart};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("missing value for required parameter `{0}`")]
    MissingArgument(String),

    #[error("parameter `{name}` expects {expected}, got {found}")]
    InvalidArgument {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("arguments must be a JSON object")]
    NotAnObject,

    #[error("invalid arguments: {0}")]
    Json(#[from] serde_json::Error),
}

/// Argument values by parameter name. Lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: IndexMap<String, Value>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.values.insert(name.to_lowercase(), value.into());
    }

    /// Parse a JSON object such as `{"id": 5, "tags": ["a", "b"]}`.
    pub fn from_json(text: &str) -> Result<Self, RenderError> {
        match serde_json::from_str(text)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            _ => Err(RenderError::NotAnObject),
        }
    }

    /// The value for `name`; JSON `null` counts as absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .get(&name.to_lowercase())
            .filter(|v| !v.is_null())
    }
}

impl<K: AsRef<str>> FromIterator<(K, Value)> for Arguments {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name.as_ref(), value);
        }
        args
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Text form of a scalar argument.
fn scalar_text(name: &str, value: &Value) -> Result<String, RenderError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(RenderError::InvalidArgument {
            name: name.to_string(),
            expected: "a scalar",
            found: kind_of(other),
        }),
    }
}

fn lowercase_if(text: String, lowercase: bool) -> String {
    if lowercase { text.to_lowercase() } else { text }
}

fn encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

impl BoundRoute {
    /// Build the URL for `args`.
    pub fn render(&self, args: &Arguments) -> Result<String, RenderError> {
        let mut url = String::new();

        for segment in self.pattern.segments() {
            let mut started = false;
            for part in segment.parts() {
                match part {
                    SegmentPart::Literal(content) | SegmentPart::Separator(content) => {
                        if !started {
                            url.push('/');
                            started = true;
                        }
                        url.push_str(&lowercase_if(content.clone(), self.options.lowercase_urls));
                    }
                    SegmentPart::Parameter(part) => {
                        self.render_path_parameter(&mut url, part, &mut started, args)?;
                    }
                }
            }
        }

        if url.is_empty() || (self.options.append_trailing_slash && !url.ends_with('/')) {
            url.push('/');
        }

        let mut first = true;
        for param in self.query_parameters() {
            self.render_query(&mut url, param, &mut first, args)?;
        }

        if let Some(fragment) = self.fragment()
            && let Some(value) = args.get(&fragment.name)
        {
            url.push('#');
            url.push_str(&encode(&scalar_text(&fragment.name, value)?));
        }

        trace!(route = self.name(), url = %url, "rendered route");
        Ok(url)
    }

    fn render_path_parameter(
        &self,
        url: &mut String,
        part: &ParameterPart,
        started: &mut bool,
        args: &Arguments,
    ) -> Result<(), RenderError> {
        let name = self
            .route_parameter(&part.name)
            .map_or(part.name.as_str(), |p| p.name.as_str());
        let lowercase = self.options.lowercase_urls;

        let Some(value) = args.get(name) else {
            if part.is_optional() || part.is_catch_all() {
                return Ok(());
            }
            return Err(RenderError::MissingArgument(name.to_string()));
        };
        let text = lowercase_if(scalar_text(name, value)?, lowercase);

        if part.is_catch_all() {
            if part.encode_slashes {
                if !text.is_empty() {
                    url.push('/');
                    url.push_str(&encode(&text));
                }
            } else {
                let mut emitted = false;
                for chunk in text.split('/').filter(|c| !c.is_empty()) {
                    url.push('/');
                    url.push_str(&encode(chunk));
                    emitted = true;
                }
                if emitted && text.ends_with('/') {
                    url.push('/');
                }
            }
            *started = true;
            return Ok(());
        }

        if !*started {
            url.push('/');
            *started = true;
        }
        if part.has_optional_separator {
            url.push('.');
        }
        url.push_str(&encode(&text));
        Ok(())
    }

    fn render_query(
        &self,
        url: &mut String,
        param: &BoundParameter,
        first: &mut bool,
        args: &Arguments,
    ) -> Result<(), RenderError> {
        let ParameterRole::Query {
            key,
            lowercase_value,
        } = &param.role
        else {
            return Ok(());
        };
        let Some(value) = args.get(&param.name) else {
            return Ok(());
        };

        let lower_keys = self.options.lowercase_query_strings;
        let lower_values = lower_keys || *lowercase_value;
        let key = encode(&lowercase_if(key.clone(), lower_keys));

        let mut push = |name: String, text: String| {
            url.push(if *first { '?' } else { '&' });
            *first = false;
            url.push_str(&name);
            url.push('=');
            url.push_str(&encode(&lowercase_if(text, lower_values)));
        };

        match value {
            Value::Object(map) => {
                for (k, v) in map.iter().filter(|(_, v)| !v.is_null()) {
                    let text = scalar_text(&param.name, v)?;
                    push(format!("{key}[{}]", encode(k)), text);
                }
            }
            Value::Array(_) if param.ty.is_key_value() => {
                let Some((k, v)) = as_pair(value) else {
                    return Err(RenderError::InvalidArgument {
                        name: param.name.clone(),
                        expected: "a [key, value] pair",
                        found: "an array of another length",
                    });
                };
                if !v.is_null() {
                    let k = scalar_text(&param.name, k)?;
                    let text = scalar_text(&param.name, v)?;
                    push(format!("{key}[{}]", encode(&k)), text);
                }
            }
            Value::Array(items) if is_pairs(&param.ty) => {
                for item in items {
                    let Some((k, v)) = as_pair(item) else {
                        return Err(RenderError::InvalidArgument {
                            name: param.name.clone(),
                            expected: "[key, value] pairs",
                            found: kind_of(item),
                        });
                    };
                    if v.is_null() {
                        continue;
                    }
                    let k = scalar_text(&param.name, k)?;
                    let text = scalar_text(&param.name, v)?;
                    push(format!("{key}[{}]", encode(&k)), text);
                }
            }
            Value::Array(items) => {
                for item in items.iter().filter(|v| !v.is_null()) {
                    let text = scalar_text(&param.name, item)?;
                    push(key.clone(), text);
                }
            }
            scalar => {
                let text = scalar_text(&param.name, scalar)?;
                push(key.clone(), text);
            }
        }

        Ok(())
    }
}

/// Sequence of key-value pairs, rendered as `key[k]=v`.
fn is_pairs(ty: &TypeRef) -> bool {
    ty.element().is_some_and(TypeRef::is_key_value)
}

fn as_pair(item: &Value) -> Option<(&Value, &Value)> {
    match item.as_array()?.as_slice() {
        [k, v] => Some((k, v)),
        _ => None,
    }
}
