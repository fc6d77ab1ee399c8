//! Parameter type descriptors parsed from Rust type expressions.
//!
//! Only the distinctions URL building cares about are kept: nullability,
//! sequences, key-value pairs, and whether a scalar is a string or an integer.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    String,
    Integer(String),
    /// Anything else with a `Display` impl (`bool`, `f64`, `Uuid`, ...).
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Scalar(Scalar),
    Array(Box<TypeRef>),
    KeyValue(Box<TypeRef>, Box<TypeRef>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub nullable: bool,
    pub shape: Shape,
}

impl TypeRef {
    pub fn scalar(scalar: Scalar) -> Self {
        Self {
            nullable: false,
            shape: Shape::Scalar(scalar),
        }
    }

    pub fn string() -> Self {
        Self::scalar(Scalar::String)
    }

    pub fn array(element: TypeRef) -> Self {
        Self {
            nullable: false,
            shape: Shape::Array(Box::new(element)),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.shape, Shape::Scalar(_))
    }

    pub fn is_enumerable(&self) -> bool {
        matches!(self.shape, Shape::Array(_))
    }

    pub fn is_key_value(&self) -> bool {
        matches!(self.shape, Shape::KeyValue(..))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.shape, Shape::Scalar(Scalar::Integer(_)))
    }

    pub fn is_string(&self) -> bool {
        matches!(self.shape, Shape::Scalar(Scalar::String))
    }

    /// Element type of a sequence.
    pub fn element(&self) -> Option<&TypeRef> {
        match &self.shape {
            Shape::Array(element) => Some(&**element),
            _ => None,
        }
    }

    /// Parse a Rust type expression such as `Option<Vec<(String, i64)>>`.
    pub fn parse(text: &str) -> Result<Self, TypeError> {
        let mut parser = TypeParser { text, pos: 0 };
        let ty = parser.parse_type()?;
        parser.skip_ws();
        if parser.pos != text.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(ty)
    }
}

/// Renders back to the owned Rust type.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            f.write_str("Option<")?;
        }
        match &self.shape {
            Shape::Scalar(Scalar::String) => f.write_str("String")?,
            Shape::Scalar(Scalar::Integer(name) | Scalar::Other(name)) => f.write_str(name)?,
            Shape::Array(element) => write!(f, "Vec<{element}>")?,
            Shape::KeyValue(key, value) => write!(f, "({key}, {value})")?,
        }
        if self.nullable {
            f.write_str(">")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} at offset {offset}")]
pub struct TypeError {
    pub reason: String,
    pub offset: usize,
}

const INTEGERS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

const STRINGS: &[&str] = &["String", "str"];

struct TypeParser<'a> {
    text: &'a str,
    pos: usize,
}

impl TypeParser<'_> {
    fn error(&self, reason: &str) -> TypeError {
        TypeError {
            reason: reason.to_string(),
            offset: self.pos,
        }
    }

    fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.text.len() - trimmed.len();
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str) -> Result<(), TypeError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.error(&format!("expected `{token}`")))
        }
    }

    /// `&`, `&mut` and a lifetime in front of a type carry no meaning here.
    fn skip_reference(&mut self) {
        if self.eat("&") {
            self.skip_ws();
            if self.rest().starts_with('\'') {
                self.pos += 1;
                self.path();
            }
            self.eat("mut ");
        }
    }

    /// `ident` or `a::b::Ident`.
    fn path(&mut self) -> &str {
        self.skip_ws();
        let start = self.pos;
        let len = self
            .rest()
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':'))
            .unwrap_or(self.rest().len());
        self.pos += len;
        &self.text[start..self.pos]
    }

    fn parse_type(&mut self) -> Result<TypeRef, TypeError> {
        self.skip_reference();

        if self.eat("[") {
            let element = self.parse_type()?;
            self.expect("]")?;
            return Ok(TypeRef::array(element));
        }

        if self.eat("(") {
            let key = self.parse_type()?;
            self.expect(",")?;
            let value = self.parse_type()?;
            self.eat(",");
            self.expect(")")?;
            return Ok(TypeRef {
                nullable: false,
                shape: Shape::KeyValue(Box::new(key), Box::new(value)),
            });
        }

        self.skip_ws();
        let start = self.pos;
        let name = self.path().to_string();
        if name.is_empty() {
            return Err(self.error("expected a type"));
        }
        let base = name.rsplit("::").next().unwrap_or(&name);
        let generic = self.rest().trim_start().starts_with('<');

        match (base, generic) {
            ("Option", true) => {
                let inner = self.parse_generic_arg()?;
                if inner.nullable {
                    return Err(TypeError {
                        reason: "nested `Option` is not supported".to_string(),
                        offset: start,
                    });
                }
                Ok(inner.nullable())
            }
            ("Vec" | "VecDeque", true) => Ok(TypeRef::array(self.parse_generic_arg()?)),
            // Pointers are transparent: `Box<str>` is a string, `Rc<[T]>` a sequence.
            ("Box" | "Rc" | "Arc" | "Cow", true) => self.parse_generic_arg(),
            (_, true) => {
                self.skip_generics()?;
                Ok(TypeRef::scalar(Scalar::Other(
                    self.text[start..self.pos].trim().to_string(),
                )))
            }
            (_, false) => Ok(TypeRef::scalar(classify(base, &name))),
        }
    }

    /// `<T>`, or `<'a, T>` with the lifetime ignored.
    fn parse_generic_arg(&mut self) -> Result<TypeRef, TypeError> {
        self.expect("<")?;
        self.skip_ws();
        if self.rest().starts_with('\'') {
            self.pos += 1;
            self.path();
            self.expect(",")?;
        }
        let inner = self.parse_type()?;
        self.expect(">")?;
        Ok(inner)
    }

    /// Skip a balanced `<...>` group.
    fn skip_generics(&mut self) -> Result<(), TypeError> {
        self.expect("<")?;
        let mut depth = 1usize;
        let close = self.rest().char_indices().find_map(|(i, c)| {
            match c {
                '<' => depth += 1,
                '>' => depth -= 1,
                _ => {}
            }
            (depth == 0).then_some(i)
        });
        match close {
            Some(i) => {
                self.pos += i + 1;
                Ok(())
            }
            None => {
                self.pos = self.text.len();
                Err(self.error("unclosed `<`"))
            }
        }
    }
}

fn classify(base: &str, full: &str) -> Scalar {
    if STRINGS.contains(&base) {
        Scalar::String
    } else if INTEGERS.contains(&base) {
        Scalar::Integer(base.to_string())
    } else {
        Scalar::Other(full.to_string())
    }
}
