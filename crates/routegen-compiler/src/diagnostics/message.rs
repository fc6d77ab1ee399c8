use std::ops::Range;

use rowan::{TextRange, TextSize};

/// Every way a route pattern or its parameter declarations can be rejected.
///
/// Each kind has a stable identifier (see [`DiagnosticKind::id`]) that does not
/// change between releases, so tooling can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Declaration checks, run before the pattern is scanned
    ParameterNameStartsWithUnderscore,
    DuplicateDeclaredParameter,

    // Whole-pattern shape
    PatternIsNotValid,
    ConsecutiveSeparators,
    CatchAllMustBeLast,

    // Braces
    MismatchedParameter,
    UnescapedBrace,

    // Parameter tokens
    InvalidParameterName,
    RepeatedParameter,
    CatchAllCannotBeOptional,
    ParameterMissingFromArguments,
    ParameterAlreadyQueryOrFragment,

    // Literal text
    InvalidLiteral,

    // Multi-part segments
    CatchAllInMultiPartSegment,
    ConsecutiveParameters,
    OptionalParameterHasToBeLast,
    OptionalParameterPrecededByNonPeriod,

    // Binding
    ParameterIsQueryAndFragment,
    RequiredRouteParameterNullable,
    OptionalParameterNotNullable,
    ParameterMustBeSingleValue,
    UnsupportedQueryParameterType,
    MultipleFragmentParameters,
}

impl DiagnosticKind {
    /// Stable identifier, e.g. `RG1013`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ParameterNameStartsWithUnderscore => "RG1007",
            Self::OptionalParameterNotNullable => "RG1008",
            Self::PatternIsNotValid => "RG1010",
            Self::ParameterMissingFromArguments => "RG1011",
            Self::InvalidParameterName => "RG1012",
            Self::RepeatedParameter => "RG1013",
            Self::InvalidLiteral => "RG1014",
            Self::OptionalParameterPrecededByNonPeriod => "RG1015",
            Self::OptionalParameterHasToBeLast => "RG1016",
            Self::ConsecutiveParameters => "RG1017",
            Self::CatchAllMustBeLast => "RG1018",
            Self::CatchAllCannotBeOptional => "RG1019",
            Self::CatchAllInMultiPartSegment => "RG1020",
            Self::MismatchedParameter => "RG1021",
            Self::UnescapedBrace => "RG1022",
            Self::ConsecutiveSeparators => "RG1023",
            Self::ParameterAlreadyQueryOrFragment => "RG1024",
            Self::ParameterIsQueryAndFragment => "RG1025",
            Self::RequiredRouteParameterNullable => "RG1026",
            Self::MultipleFragmentParameters => "RG1027",
            Self::DuplicateDeclaredParameter => "RG1028",
            Self::ParameterMustBeSingleValue => "RG1029",
            Self::UnsupportedQueryParameterType => "RG1030",
        }
    }

    /// All diagnostics are errors at the moment.
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Short title, used as the label under the highlighted span.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ParameterNameStartsWithUnderscore => "parameter name starts with `_`",
            Self::DuplicateDeclaredParameter => "parameter declared twice",
            Self::PatternIsNotValid => "route pattern is not valid",
            Self::ConsecutiveSeparators => "consecutive `/` separators",
            Self::CatchAllMustBeLast => "catch-all parameter is not last",
            Self::MismatchedParameter => "unbalanced brace",
            Self::UnescapedBrace => "unescaped brace in parameter",
            Self::InvalidParameterName => "invalid parameter name",
            Self::RepeatedParameter => "repeated parameter",
            Self::CatchAllCannotBeOptional => "optional catch-all parameter",
            Self::ParameterMissingFromArguments => "unknown parameter",
            Self::ParameterAlreadyQueryOrFragment => "parameter bound to query or fragment",
            Self::InvalidLiteral => "`?` in literal",
            Self::CatchAllInMultiPartSegment => "catch-all shares its segment",
            Self::ConsecutiveParameters => "consecutive parameters",
            Self::OptionalParameterHasToBeLast => "optional parameter is not last",
            Self::OptionalParameterPrecededByNonPeriod => "optional parameter after non-period",
            Self::ParameterIsQueryAndFragment => "parameter is both query and fragment",
            Self::RequiredRouteParameterNullable => "required parameter is nullable",
            Self::OptionalParameterNotNullable => "optional parameter is not nullable",
            Self::ParameterMustBeSingleValue => "sequence in path or fragment",
            Self::UnsupportedQueryParameterType => "unsupported query parameter type",
            Self::MultipleFragmentParameters => "more than one fragment parameter",
        }
    }

    /// Message template with positional `{0}`, `{1}`, `{2}` placeholders.
    pub fn template(&self) -> &'static str {
        match self {
            Self::ParameterNameStartsWithUnderscore => {
                "Parameter '{0}' cannot start with an underscore."
            }
            Self::DuplicateDeclaredParameter => {
                "Parameter '{0}' is declared more than once. Parameter names are case-insensitive."
            }
            Self::PatternIsNotValid => "The route pattern '{0}' is not valid.",
            Self::ConsecutiveSeparators => {
                "The route template separator character '/' cannot appear consecutively. \
                 It must be separated by either a parameter or a literal value."
            }
            Self::CatchAllMustBeLast => {
                "A catch-all parameter can only appear as the last segment of the route template."
            }
            Self::MismatchedParameter => {
                "There is an incomplete parameter in the route template. \
                 Check that each '{' character has a matching '}' character."
            }
            Self::UnescapedBrace => {
                "In a route parameter, '{' and '}' must be escaped with '{{' and '}}'."
            }
            Self::InvalidParameterName => {
                "The route parameter name '{0}' is invalid. Route parameter names must be \
                 non-empty and cannot contain these characters: '{', '}', '/'. The '?' \
                 character marks a parameter as optional, and can occur only at the end of \
                 the parameter. The '*' character marks a parameter as catch-all, and can \
                 occur only at the start of the parameter."
            }
            Self::RepeatedParameter => {
                "The route parameter name '{0}' appears more than one time in the route template."
            }
            Self::CatchAllCannotBeOptional => "A catch-all parameter cannot be marked optional.",
            Self::ParameterMissingFromArguments => {
                "The route parameter '{0}' does not match any declared parameter."
            }
            Self::ParameterAlreadyQueryOrFragment => {
                "The route parameter '{0}' is bound to a parameter already marked as query or fragment."
            }
            Self::InvalidLiteral => {
                "The literal section '{0}' is invalid. Literal sections cannot contain the '?' character."
            }
            Self::CatchAllInMultiPartSegment => {
                "A path segment that contains more than one section, such as a literal section \
                 or a parameter, cannot contain a catch-all parameter."
            }
            Self::ConsecutiveParameters => {
                "A path segment cannot contain two consecutive parameters. \
                 They must be separated by a '/' or by a literal string."
            }
            Self::OptionalParameterHasToBeLast => {
                "An optional parameter must be at the end of the segment. \
                 In the segment '{0}', optional parameter '{1}' is followed by '{2}'."
            }
            Self::OptionalParameterPrecededByNonPeriod => {
                "In the segment '{0}', the optional parameter '{1}' is preceded by an invalid \
                 segment '{2}'. Only a period (.) can precede an optional parameter."
            }
            Self::ParameterIsQueryAndFragment => {
                "Parameter '{0}' cannot be marked as both query and fragment."
            }
            Self::RequiredRouteParameterNullable => {
                "Route parameter '{0}' is required and cannot be nullable."
            }
            Self::OptionalParameterNotNullable => {
                "Optional route parameter '{0}' must be nullable."
            }
            Self::ParameterMustBeSingleValue => {
                "Parameter '{0}' of type '{1}' is bound to the {2}, which takes a single value. \
                 Only query parameters can be sequences or key-value pairs."
            }
            Self::UnsupportedQueryParameterType => {
                "Query parameter '{0}' has unsupported type '{1}'. Query parameters are single \
                 values, sequences of values, key-value pairs, or sequences of key-value pairs."
            }
            Self::MultipleFragmentParameters => {
                "Only one fragment parameter is allowed, but '{0}' is another one."
            }
        }
    }

    /// Extra guidance attached to every diagnostic of this kind.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::CatchAllCannotBeOptional => Some("a catch-all already matches an empty remainder"),
            Self::InvalidLiteral => Some("use an optional parameter `{name?}` instead"),
            Self::RequiredRouteParameterNullable => {
                Some("make the parameter optional with `{name?}` or drop the `Option`")
            }
            Self::ParameterMissingFromArguments => {
                Some("declare the parameter or remove it from the pattern")
            }
            Self::OptionalParameterNotNullable => Some("wrap the type in `Option`"),
            Self::UnsupportedQueryParameterType => {
                Some("keys and values of a pair must be plain values, and keys cannot be `Option`")
            }
            _ => None,
        }
    }

    /// Render the template with positional arguments.
    ///
    /// Placeholders without a matching argument are kept verbatim, and
    /// substituted text is never re-scanned for placeholders.
    pub fn message(&self, args: &[String]) -> String {
        substitute(self.template(), args)
    }
}

fn substitute(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let arg = (digits > 0 && after[digits..].starts_with('}'))
            .then(|| after[..digits].parse::<usize>().ok())
            .flatten()
            .and_then(|n| args.get(n));

        match arg {
            Some(value) => {
                out.push_str(value);
                rest = &after[digits + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single rejected pattern or declaration.
///
/// The range is a byte range into the raw pattern text the diagnostic was
/// produced for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    pub(crate) range: TextRange,
    pub(crate) args: Vec<String>,
    pub(crate) hints: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: impl Into<SourceRange>) -> Self {
        Self {
            kind,
            range: range.into().0,
            args: Vec::new(),
            hints: kind.default_hint().map(str::to_string).into_iter().collect(),
        }
    }

    /// Append the next positional message argument.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn message(&self) -> String {
        self.kind.message(&self.args)
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}] at {}..{}: {}",
            self.severity(),
            self.id(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message()
        )?;
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

/// Byte range accepted by [`Diagnostic::new`].
///
/// Converts from both `rowan::TextRange` and `std::ops::Range<usize>`, the
/// latter being what the scanner hands out.
#[derive(Debug, Clone, Copy)]
pub struct SourceRange(TextRange);

impl From<TextRange> for SourceRange {
    fn from(range: TextRange) -> Self {
        Self(range)
    }
}

impl From<Range<usize>> for SourceRange {
    fn from(range: Range<usize>) -> Self {
        let start = text_size(range.start);
        let end = text_size(range.end.max(range.start));
        Self(TextRange::new(start, end))
    }
}

fn text_size(offset: usize) -> TextSize {
    TextSize::from(u32::try_from(offset).unwrap_or(u32::MAX))
}
