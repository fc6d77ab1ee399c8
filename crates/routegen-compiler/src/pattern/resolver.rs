/// Outcome of looking up a pattern parameter among the declared parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A declared route-candidate parameter has this name.
    Route,
    /// The name belongs to a parameter explicitly marked as query or fragment.
    QueryOrFragment,
    /// Nothing with this name was declared.
    Missing,
}

/// Decides which pattern parameter names are acceptable.
///
/// Lookups must be case-insensitive. The parser itself rejects a name seen
/// twice in one pattern, so implementations never need to track consumption.
pub trait ParameterResolver {
    fn resolve(&self, name: &str) -> Resolution;
}

/// Accepts every name as a route parameter. Used to parse patterns standalone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ParameterResolver for AcceptAll {
    fn resolve(&self, _name: &str) -> Resolution {
        Resolution::Route
    }
}

impl<F> ParameterResolver for F
where
    F: Fn(&str) -> Resolution,
{
    fn resolve(&self, name: &str) -> Resolution {
        self(name)
    }
}
