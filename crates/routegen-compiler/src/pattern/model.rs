//! Parsed route pattern.

use std::fmt;

/// How a route parameter participates in matching and URL building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// `{name}`: must be supplied.
    Standard,
    /// `{name?}`: omitted from the URL when absent.
    Optional,
    /// `{*name}` or `{**name}`: captures the rest of the path.
    CatchAll,
}

/// A `{...}` token inside a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterPart {
    pub name: String,
    pub kind: ParameterKind,
    /// False only for catch-alls written with `**`.
    pub encode_slashes: bool,
    /// A `.` literal before this optional parameter was folded into it.
    pub has_optional_separator: bool,
    /// Inline constraints, uninterpreted (`int`, `regex(^\d+$)`).
    pub constraints: Vec<String>,
    /// Inline default value, uninterpreted.
    pub default_value: Option<String>,
}

impl ParameterPart {
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            encode_slashes: true,
            has_optional_separator: false,
            constraints: Vec::new(),
            default_value: None,
        }
    }

    pub fn is_optional(&self) -> bool {
        self.kind == ParameterKind::Optional
    }

    pub fn is_catch_all(&self) -> bool {
        self.kind == ParameterKind::CatchAll
    }
}

/// One part of a path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentPart {
    /// Static text with escaped braces already decoded.
    Literal(String),
    /// A literal reclassified as the lead-in of an optional parameter.
    Separator(String),
    Parameter(ParameterPart),
}

impl SegmentPart {
    pub fn literal(content: impl Into<String>) -> Self {
        Self::Literal(content.into())
    }

    pub fn as_parameter(&self) -> Option<&ParameterPart> {
        match self {
            Self::Parameter(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, Self::Parameter(_))
    }

    pub fn is_catch_all(&self) -> bool {
        self.as_parameter().is_some_and(ParameterPart::is_catch_all)
    }
}

/// A `/`-delimited unit of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathSegment {
    parts: Vec<SegmentPart>,
}

impl PathSegment {
    pub fn new(parts: Vec<SegmentPart>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[SegmentPart] {
        &self.parts
    }

    /// Exactly one part.
    pub fn is_simple(&self) -> bool {
        self.parts.len() == 1
    }
}

/// A successfully parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<PathSegment>,
    /// `(segment, part)` of every parameter, in pattern order.
    parameters: Vec<(usize, usize)>,
}

impl RoutePattern {
    pub fn new(raw: impl Into<String>, segments: Vec<PathSegment>) -> Self {
        let parameters = segments
            .iter()
            .enumerate()
            .flat_map(|(s, segment)| {
                segment
                    .parts
                    .iter()
                    .enumerate()
                    .filter(|(_, part)| part.is_parameter())
                    .map(move |(p, _)| (s, p))
            })
            .collect();

        Self {
            raw: raw.into(),
            segments,
            parameters,
        }
    }

    /// The pattern as written, prefix included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn parameters(&self) -> impl Iterator<Item = &ParameterPart> {
        self.parameters
            .iter()
            .filter_map(|&(s, p)| self.segments[s].parts[p].as_parameter())
    }

    /// Case-insensitive parameter lookup.
    pub fn parameter(&self, name: &str) -> Option<&ParameterPart> {
        self.parameters().find(|p| same_name(&p.name, name))
    }

    pub fn catch_all(&self) -> Option<&ParameterPart> {
        self.parameters().find(|p| p.is_catch_all())
    }
}

/// Parameter names compare case-insensitively.
pub fn same_name(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Double every brace so the text reads back as a literal.
pub fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

/// Inverse of [`escape_braces`].
pub fn unescape_braces(text: &str) -> String {
    text.replace("}}", "}").replace("{{", "{")
}

impl fmt::Display for ParameterPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_optional_separator {
            f.write_str(".")?;
        }
        f.write_str("{")?;
        if self.is_catch_all() {
            f.write_str(if self.encode_slashes { "*" } else { "**" })?;
        }
        f.write_str(&escape_braces(&self.name))?;
        for constraint in &self.constraints {
            write!(f, ":{}", escape_braces(constraint))?;
        }
        if let Some(default) = &self.default_value {
            write!(f, "={}", escape_braces(default))?;
        }
        if self.is_optional() {
            f.write_str("?")?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for SegmentPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(content) | Self::Separator(content) => {
                f.write_str(&escape_braces(content))
            }
            Self::Parameter(p) => write!(f, "{p}"),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parts.iter().try_for_each(|part| write!(f, "{part}"))
    }
}

/// Normalized template text: `/` followed by the segments joined with `/`.
impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/")?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
