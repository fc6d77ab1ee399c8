//! Reconciles a route pattern with the declared parameter list.
//!
//! Binding runs in three steps:
//!
//! 1. declarations are checked and indexed by lowercased name (immutable);
//! 2. the pattern is parsed against that index;
//! 3. every declaration is classified: parameters named in the pattern become
//!    route parameters, the rest become query or fragment parameters.

use std::collections::HashSet;
use std::ops::Range;

use indexmap::IndexMap;
use tracing::debug;

use super::types::{Shape, TypeRef};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::pattern::{
    ParameterKind, ParameterResolver, Resolution, RoutePattern, parse_with, same_name,
};

/// Explicit query-string binding requested by the declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryHint {
    /// Key to use instead of the parameter name. Blank falls back to the name.
    pub name: Option<String>,
    /// Lowercase the value when rendering.
    pub lowercase_value: bool,
}

/// A parameter as declared by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredParameter {
    pub name: String,
    pub ty: TypeRef,
    pub query: Option<QueryHint>,
    pub fragment: bool,
}

impl DeclaredParameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            query: None,
            fragment: false,
        }
    }

    pub fn query(mut self, hint: QueryHint) -> Self {
        self.query = Some(hint);
        self
    }

    pub fn fragment(mut self) -> Self {
        self.fragment = true;
        self
    }

    fn is_route_candidate(&self) -> bool {
        self.query.is_none() && !self.fragment
    }
}

/// URL shaping flags for one route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteOptions {
    pub(crate) lowercase_urls: bool,
    pub(crate) lowercase_query_strings: bool,
    pub(crate) append_trailing_slash: bool,
}

impl RouteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase literal path text and route parameter values.
    pub fn lowercase_urls(mut self, value: bool) -> Self {
        self.lowercase_urls = value;
        self
    }

    /// Lowercase query keys and values.
    pub fn lowercase_query_strings(mut self, value: bool) -> Self {
        self.lowercase_query_strings = value;
        self
    }

    /// Make sure the path ends with `/`.
    pub fn append_trailing_slash(mut self, value: bool) -> Self {
        self.append_trailing_slash = value;
        self
    }

    pub fn is_lowercase_urls(&self) -> bool {
        self.lowercase_urls
    }

    pub fn is_lowercase_query_strings(&self) -> bool {
        self.lowercase_query_strings
    }

    pub fn is_append_trailing_slash(&self) -> bool {
        self.append_trailing_slash
    }
}

/// The role a declared parameter ended up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterRole {
    Route {
        kind: ParameterKind,
        encode_slashes: bool,
        has_optional_separator: bool,
    },
    Query {
        key: String,
        lowercase_value: bool,
    },
    Fragment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundParameter {
    pub name: String,
    pub ty: TypeRef,
    pub role: ParameterRole,
}

impl BoundParameter {
    pub fn is_route(&self) -> bool {
        matches!(self.role, ParameterRole::Route { .. })
    }

    pub fn is_query(&self) -> bool {
        matches!(self.role, ParameterRole::Query { .. })
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self.role, ParameterRole::Fragment)
    }
}

/// A parsed pattern together with its classified parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundRoute {
    pub(crate) name: String,
    pub(crate) pattern: RoutePattern,
    pub(crate) options: RouteOptions,
    /// Declaration order.
    pub(crate) parameters: Vec<BoundParameter>,
}

impl BoundRoute {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn options(&self) -> RouteOptions {
        self.options
    }

    pub fn parameters(&self) -> &[BoundParameter] {
        &self.parameters
    }

    /// Declared parameter bound to a pattern parameter name.
    pub fn route_parameter(&self, pattern_name: &str) -> Option<&BoundParameter> {
        self.parameters
            .iter()
            .find(|p| p.is_route() && same_name(&p.name, pattern_name))
    }

    pub fn query_parameters(&self) -> impl Iterator<Item = &BoundParameter> {
        self.parameters.iter().filter(|p| p.is_query())
    }

    pub fn fragment(&self) -> Option<&BoundParameter> {
        self.parameters.iter().find(|p| p.is_fragment())
    }
}

/// Declared parameters indexed by lowercased name.
struct DeclaredIndex<'a> {
    candidates: IndexMap<String, &'a DeclaredParameter>,
    claimed: HashSet<String>,
}

impl<'a> DeclaredIndex<'a> {
    fn new(declared: &'a [DeclaredParameter]) -> Self {
        let mut candidates = IndexMap::new();
        let mut claimed = HashSet::new();
        for param in declared {
            let key = param.name.to_lowercase();
            if param.is_route_candidate() {
                candidates.insert(key, param);
            } else {
                claimed.insert(key);
            }
        }
        Self {
            candidates,
            claimed,
        }
    }
}

impl ParameterResolver for DeclaredIndex<'_> {
    fn resolve(&self, name: &str) -> Resolution {
        let key = name.to_lowercase();
        if self.candidates.contains_key(&key) {
            Resolution::Route
        } else if self.claimed.contains(&key) {
            Resolution::QueryOrFragment
        } else {
            Resolution::Missing
        }
    }
}

/// Bind `pattern` to `declared`.
///
/// Fails with the first diagnostic found. Diagnostics raised by the
/// declaration checks point at the whole pattern.
pub fn bind(
    name: &str,
    pattern: &str,
    declared: &[DeclaredParameter],
    options: RouteOptions,
) -> Result<BoundRoute, Diagnostic> {
    let whole = 0..pattern.len();

    check_declarations(declared, &whole)?;

    let index = DeclaredIndex::new(declared);
    let parsed = parse_with(pattern, &index)?;

    let parameters: Vec<BoundParameter> = declared
        .iter()
        .map(|param| classify(param, &parsed))
        .collect();

    for param in &parameters {
        check_bound(param, &whole)?;
    }

    if let Some(second) = parameters.iter().filter(|p| p.is_fragment()).nth(1) {
        return Err(
            Diagnostic::new(DiagnosticKind::MultipleFragmentParameters, whole)
                .arg(second.name.as_str()),
        );
    }

    let bound = BoundRoute {
        name: name.to_string(),
        pattern: parsed,
        options,
        parameters,
    };
    debug!(
        route = name,
        route_parameters = bound.parameters.iter().filter(|p| p.is_route()).count(),
        query_parameters = bound.query_parameters().count(),
        fragment = bound.fragment().is_some(),
        "bound route"
    );
    Ok(bound)
}

fn check_declarations(
    declared: &[DeclaredParameter],
    whole: &Range<usize>,
) -> Result<(), Diagnostic> {
    let mut seen = HashSet::new();

    for param in declared {
        if param.name.starts_with('_') {
            return Err(Diagnostic::new(
                DiagnosticKind::ParameterNameStartsWithUnderscore,
                whole.clone(),
            )
            .arg(param.name.as_str()));
        }
        if !seen.insert(param.name.to_lowercase()) {
            return Err(
                Diagnostic::new(DiagnosticKind::DuplicateDeclaredParameter, whole.clone())
                    .arg(param.name.as_str()),
            );
        }
        if param.query.is_some() && param.fragment {
            return Err(
                Diagnostic::new(DiagnosticKind::ParameterIsQueryAndFragment, whole.clone())
                    .arg(param.name.as_str()),
            );
        }
    }

    Ok(())
}

/// Nullability and shape rules that depend on the parameter's role.
fn check_bound(param: &BoundParameter, whole: &Range<usize>) -> Result<(), Diagnostic> {
    let fail = |kind: DiagnosticKind| Diagnostic::new(kind, whole.clone()).arg(param.name.as_str());

    match &param.role {
        ParameterRole::Route { kind, .. } => {
            if *kind == ParameterKind::Standard && param.ty.is_nullable() {
                return Err(fail(DiagnosticKind::RequiredRouteParameterNullable));
            }
            if *kind == ParameterKind::Optional && !param.ty.is_nullable() {
                return Err(fail(DiagnosticKind::OptionalParameterNotNullable));
            }
            if !param.ty.is_scalar() {
                return Err(fail(DiagnosticKind::ParameterMustBeSingleValue)
                    .arg(param.ty.to_string())
                    .arg("path"));
            }
        }
        ParameterRole::Fragment => {
            if !param.ty.is_scalar() {
                return Err(fail(DiagnosticKind::ParameterMustBeSingleValue)
                    .arg(param.ty.to_string())
                    .arg("fragment"));
            }
        }
        ParameterRole::Query { .. } => {
            if !is_query_shape(&param.ty) {
                return Err(fail(DiagnosticKind::UnsupportedQueryParameterType)
                    .arg(param.ty.to_string()));
            }
        }
    }

    Ok(())
}

/// A value, a `(key, value)` pair, or a sequence of either.
fn is_query_shape(ty: &TypeRef) -> bool {
    match &ty.shape {
        Shape::Scalar(_) => true,
        Shape::KeyValue(..) => is_pair(ty),
        Shape::Array(element) => element.is_scalar() || is_pair(element),
    }
}

fn is_pair(ty: &TypeRef) -> bool {
    match &ty.shape {
        Shape::KeyValue(key, value) => key.is_scalar() && !key.is_nullable() && value.is_scalar(),
        _ => false,
    }
}

fn classify(param: &DeclaredParameter, pattern: &RoutePattern) -> BoundParameter {
    let role = if let Some(hint) = &param.query {
        let key = hint
            .name
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(&param.name);
        ParameterRole::Query {
            key: key.to_string(),
            lowercase_value: hint.lowercase_value,
        }
    } else if param.fragment {
        ParameterRole::Fragment
    } else if let Some(part) = pattern.parameter(&param.name) {
        ParameterRole::Route {
            kind: part.kind,
            encode_slashes: part.encode_slashes,
            has_optional_separator: part.has_optional_separator,
        }
    } else {
        // Not in the pattern: falls back to the query string under its own name.
        ParameterRole::Query {
            key: param.name.clone(),
            lowercase_value: false,
        }
    };

    BoundParameter {
        name: param.name.clone(),
        ty: param.ty.clone(),
        role,
    }
}
