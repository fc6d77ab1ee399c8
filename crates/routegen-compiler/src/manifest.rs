//! JSON route manifest.
//!
//! ```json
//! {
//!   "defaults": { "lowercase_urls": true },
//!   "routes": [
//!     {
//!       "name": "product",
//!       "pattern": "/product/{productId:int}.{format?}",
//!       "parameters": [
//!         { "name": "productId", "type": "i32" },
//!         { "name": "format", "type": "Option<String>" },
//!         { "name": "q", "type": "Option<String>", "query": { "name": "search" } }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use routegen_core::utils::to_snake_case;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bind::{BoundRoute, DeclaredParameter, QueryHint, RouteOptions, TypeRef, bind};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub routes: Vec<RouteDecl>,
}

/// Option flags applied to every route unless the route overrides them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub lowercase_urls: bool,
    pub lowercase_query_strings: bool,
    pub append_trailing_slash: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDecl {
    pub name: String,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowercase_urls: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowercase_query_strings: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append_trailing_slash: Option<bool>,
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryDecl>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fragment: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryDecl {
    pub name: Option<String>,
    pub lowercase_value: bool,
}

/// Result of binding one manifest route.
#[derive(Debug)]
pub struct RouteOutcome<'m> {
    pub route: &'m RouteDecl,
    pub result: std::result::Result<BoundRoute, Diagnostic>,
}

impl Manifest {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn route(&self, name: &str) -> Option<&RouteDecl> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Bind every route. Diagnostics stay per route; type errors and
    /// clashing route names fail the whole manifest.
    pub fn bind(&self) -> Result<Vec<RouteOutcome<'_>>> {
        let mut names = HashSet::new();
        for route in &self.routes {
            if !names.insert(to_snake_case(&route.name)) {
                return Err(Error::DuplicateRoute(route.name.clone()));
            }
        }

        let mut outcomes = Vec::with_capacity(self.routes.len());
        for route in &self.routes {
            let declared = route.declared()?;
            let result = bind(
                &route.name,
                &route.pattern,
                &declared,
                route.options(&self.defaults),
            );
            outcomes.push(RouteOutcome { route, result });
        }

        debug!(
            routes = outcomes.len(),
            rejected = outcomes.iter().filter(|o| o.result.is_err()).count(),
            "bound manifest"
        );
        Ok(outcomes)
    }

    /// Bind every route, failing with all diagnostics if any route is rejected.
    pub fn bind_all(&self) -> Result<Vec<BoundRoute>> {
        let mut bound = Vec::with_capacity(self.routes.len());
        let mut diagnostics = Diagnostics::new();

        for outcome in self.bind()? {
            match outcome.result {
                Ok(route) => bound.push(route),
                Err(diagnostic) => diagnostics.push(diagnostic),
            }
        }

        if diagnostics.has_errors() {
            return Err(Error::Rejected(diagnostics));
        }
        Ok(bound)
    }

    /// Bind a single route by name.
    pub fn bind_route(&self, name: &str) -> Result<std::result::Result<BoundRoute, Diagnostic>> {
        let route = self
            .route(name)
            .ok_or_else(|| Error::UnknownRoute(name.to_string()))?;
        let declared = route.declared()?;
        Ok(bind(
            &route.name,
            &route.pattern,
            &declared,
            route.options(&self.defaults),
        ))
    }
}

impl RouteDecl {
    pub fn options(&self, defaults: &Defaults) -> RouteOptions {
        RouteOptions::new()
            .lowercase_urls(self.lowercase_urls.unwrap_or(defaults.lowercase_urls))
            .lowercase_query_strings(
                self.lowercase_query_strings
                    .unwrap_or(defaults.lowercase_query_strings),
            )
            .append_trailing_slash(
                self.append_trailing_slash
                    .unwrap_or(defaults.append_trailing_slash),
            )
    }

    pub fn declared(&self) -> Result<Vec<DeclaredParameter>> {
        self.parameters
            .iter()
            .map(|p| {
                let ty = TypeRef::parse(&p.ty).map_err(|source| Error::InvalidType {
                    route: self.name.clone(),
                    parameter: p.name.clone(),
                    ty: p.ty.clone(),
                    source,
                })?;
                Ok(DeclaredParameter {
                    name: p.name.clone(),
                    ty,
                    query: p.query.as_ref().map(|q| QueryHint {
                        name: q.name.clone(),
                        lowercase_value: q.lowercase_value,
                    }),
                    fragment: p.fragment,
                })
            })
            .collect()
    }
}
