//! Hand-written scanner-driven parser for route templates.
//!
//! Grammar (informal):
//!
//! ```text
//! pattern   = prefix? segment ("/" segment)* "/"?
//! prefix    = "~/" | "/"
//! segment   = part+
//! part      = literal | parameter
//! literal   = (char | "{{" | "}}")+
//! parameter = "{" ("**" | "*")? name (":" constraint)* ("=" default)? "?"? "}"
//! ```
//!
//! Parsing stops at the first error. The returned diagnostic points into the
//! raw pattern, prefix included.

use std::collections::HashSet;
use std::ops::Range;

use routegen_core::Scanner;
use tracing::{debug, trace};

use super::constraints::split_inline;
use super::invariants::{ensure_progress, ensure_segment_boundary};
use super::model::{
    ParameterKind, ParameterPart, PathSegment, RoutePattern, SegmentPart, unescape_braces,
};
use super::resolver::{AcceptAll, ParameterResolver, Resolution};
use super::segment::{SegmentViolation, validate_segment};
use crate::diagnostics::{Diagnostic, DiagnosticKind};

const INVALID_NAME_CHARS: [char; 5] = ['/', '{', '}', '?', '*'];

/// Parse a pattern, accepting every parameter name.
pub fn parse(pattern: &str) -> Result<RoutePattern, Diagnostic> {
    parse_with(pattern, &AcceptAll)
}

/// Parse a pattern, checking parameter names against `resolver`.
pub fn parse_with<R>(pattern: &str, resolver: &R) -> Result<RoutePattern, Diagnostic>
where
    R: ParameterResolver + ?Sized,
{
    let (body, offset) = trim_prefix(pattern)?;
    let mut parser = Parser::new(body, offset, resolver);
    let segments = parser.parse_segments()?;
    check_catch_all_last(&segments, &parser.segment_ranges)?;

    let parsed = RoutePattern::new(pattern, segments);
    debug!(
        pattern,
        segments = parsed.segments().len(),
        parameters = parsed.parameters().count(),
        "parsed route pattern"
    );
    Ok(parsed)
}

/// Strip a leading `~/` or `/`. Any other leading `~` is rejected.
fn trim_prefix(pattern: &str) -> Result<(&str, usize), Diagnostic> {
    if let Some(rest) = pattern.strip_prefix("~/") {
        Ok((rest, 2))
    } else if let Some(rest) = pattern.strip_prefix('/') {
        Ok((rest, 1))
    } else if pattern.starts_with('~') {
        Err(Diagnostic::new(DiagnosticKind::PatternIsNotValid, 0..pattern.len()).arg(pattern))
    } else {
        Ok((pattern, 0))
    }
}

struct Parser<'a, R: ?Sized> {
    scanner: Scanner<'a>,
    resolver: &'a R,
    /// Lowercased names of the parameters seen so far.
    seen: HashSet<String>,
    /// Raw-pattern range of every parsed segment.
    segment_ranges: Vec<Range<usize>>,
}

impl<'a, R> Parser<'a, R>
where
    R: ParameterResolver + ?Sized,
{
    fn new(body: &'a str, offset: usize, resolver: &'a R) -> Self {
        Self {
            scanner: Scanner::with_offset(body, offset),
            resolver,
            seen: HashSet::new(),
            segment_ranges: Vec::new(),
        }
    }

    fn range(&self, start: usize, end: usize) -> Range<usize> {
        let offset = self.scanner.offset();
        (offset + start)..(offset + end)
    }

    fn position(&self) -> usize {
        self.scanner.position()
    }

    fn parse_segments(&mut self) -> Result<Vec<PathSegment>, Diagnostic> {
        let mut segments = Vec::new();

        while self.scanner.move_next() {
            let before = self.scanner.index();

            // A segment never starts with `/`; the previous byte was one too.
            if self.scanner.current() == b'/' {
                let at = self.scanner.offset() + self.position();
                return Err(Diagnostic::new(
                    DiagnosticKind::ConsecutiveSeparators,
                    at.saturating_sub(1)..at + 1,
                ));
            }

            let segment = self.parse_segment()?;
            ensure_segment_boundary(self.scanner.current(), self.scanner.at_end());
            ensure_progress(before, self.scanner.index(), "segment");

            trace!(index = segments.len(), segment = %segment, "parsed segment");
            segments.push(segment);
        }

        Ok(segments)
    }

    fn parse_segment(&mut self) -> Result<PathSegment, Diagnostic> {
        let start = self.position();
        let mut parts = Vec::new();

        loop {
            let before = self.scanner.index();

            let part = if self.scanner.current() == b'{' {
                let brace = self.position();
                if !self.scanner.move_next() {
                    return Err(Diagnostic::new(
                        DiagnosticKind::MismatchedParameter,
                        self.range(brace, brace + 1),
                    ));
                }
                let escaped = self.scanner.current() == b'{';
                self.scanner.back();

                if escaped {
                    self.parse_literal()?
                } else {
                    self.parse_parameter()?
                }
            } else {
                self.parse_literal()?
            };
            parts.push(part);

            if self.scanner.current() == b'/' || self.scanner.at_end() {
                break;
            }
            ensure_progress(before, self.scanner.index(), "segment part");
        }

        let end = self.position();
        let range = self.range(start, end);
        self.segment_ranges.push(range);

        validate_segment(parts)
            .map(PathSegment::new)
            .map_err(|violation| self.segment_error(violation, start, end))
    }

    fn segment_error(&self, violation: SegmentViolation, start: usize, end: usize) -> Diagnostic {
        let range = self.range(start, end);
        let text = self.scanner.text().get(start..end).unwrap_or_default();

        match violation {
            SegmentViolation::CatchAllInMultiPart { .. } => {
                Diagnostic::new(DiagnosticKind::CatchAllInMultiPartSegment, range)
            }
            SegmentViolation::ConsecutiveParameters { .. } => {
                Diagnostic::new(DiagnosticKind::ConsecutiveParameters, range)
            }
            SegmentViolation::OptionalNotLast { name, next } => {
                Diagnostic::new(DiagnosticKind::OptionalParameterHasToBeLast, range)
                    .arg(text)
                    .arg(name)
                    .arg(next)
            }
            SegmentViolation::OptionalAfterNonPeriod { name, previous } => {
                Diagnostic::new(DiagnosticKind::OptionalParameterPrecededByNonPeriod, range)
                    .arg(text)
                    .arg(name)
                    .arg(previous)
            }
        }
    }

    /// Static text up to the next separator, parameter or end.
    fn parse_literal(&mut self) -> Result<SegmentPart, Diagnostic> {
        let start = self.position();
        self.scanner.mark();

        loop {
            match self.scanner.current() {
                b'/' => break,
                b'{' => {
                    let brace = self.position();
                    if !self.scanner.move_next() {
                        return Err(Diagnostic::new(
                            DiagnosticKind::MismatchedParameter,
                            self.range(brace, brace + 1),
                        ));
                    }
                    if self.scanner.current() != b'{' {
                        // Start of a parameter.
                        self.scanner.back();
                        break;
                    }
                }
                b'}' => {
                    let brace = self.position();
                    if !self.scanner.move_next() || self.scanner.current() != b'}' {
                        return Err(Diagnostic::new(
                            DiagnosticKind::MismatchedParameter,
                            self.range(brace, brace + 1),
                        ));
                    }
                }
                _ => {}
            }

            if !self.scanner.move_next() {
                break;
            }
        }

        let end = self.position();
        let decoded = unescape_braces(self.scanner.capture().unwrap_or_default());
        if decoded.contains('?') {
            return Err(
                Diagnostic::new(DiagnosticKind::InvalidLiteral, self.range(start, end))
                    .arg(decoded),
            );
        }

        trace!(literal = %decoded, "parsed literal");
        Ok(SegmentPart::Literal(decoded))
    }

    /// A `{...}` token. The cursor is on the opening brace.
    fn parse_parameter(&mut self) -> Result<SegmentPart, Diagnostic> {
        let start = self.position();
        self.scanner.mark();
        self.scanner.move_next();

        loop {
            match self.scanner.current() {
                b'{' => {
                    let brace = self.position();
                    if !self.scanner.move_next() {
                        return Err(Diagnostic::new(
                            DiagnosticKind::MismatchedParameter,
                            self.range(start, brace + 1),
                        ));
                    }
                    if self.scanner.current() != b'{' {
                        return Err(Diagnostic::new(
                            DiagnosticKind::UnescapedBrace,
                            self.range(brace, brace + 1),
                        ));
                    }
                }
                // `}}` is escaped; a lone `}` closes the parameter.
                b'}' => {
                    if !self.scanner.move_next() || self.scanner.current() != b'}' {
                        break;
                    }
                }
                _ => {}
            }

            if !self.scanner.move_next() {
                return Err(Diagnostic::new(
                    DiagnosticKind::MismatchedParameter,
                    self.range(start, self.scanner.len()),
                ));
            }
        }

        let range = self.range(start, self.position());
        let text = self.scanner.capture().unwrap_or_default();
        let inner = text
            .strip_prefix('{')
            .and_then(|t| t.strip_suffix('}'))
            .unwrap_or_default();

        let parameter = self.build_parameter(&unescape_braces(inner), range)?;
        trace!(parameter = %parameter, "parsed parameter");
        Ok(SegmentPart::Parameter(parameter))
    }

    /// Interpret the decoded text between the braces.
    fn build_parameter(
        &mut self,
        body: &str,
        range: Range<usize>,
    ) -> Result<ParameterPart, Diagnostic> {
        let (kind, encode_slashes, rest) = if let Some(rest) = body.strip_prefix("**") {
            (ParameterKind::CatchAll, false, rest)
        } else if let Some(rest) = body.strip_prefix('*') {
            (ParameterKind::CatchAll, true, rest)
        } else {
            (ParameterKind::Standard, true, body)
        };

        let (kind, rest) = match rest.strip_suffix('?') {
            Some(_) if kind == ParameterKind::CatchAll => {
                return Err(Diagnostic::new(
                    DiagnosticKind::CatchAllCannotBeOptional,
                    range,
                ));
            }
            Some(stripped) => (ParameterKind::Optional, stripped),
            None => (kind, rest),
        };

        // A leading `:` or `=` belongs to the name.
        let name_end = rest
            .bytes()
            .enumerate()
            .skip(1)
            .find(|&(_, b)| matches!(b, b':' | b'='))
            .map_or(rest.len(), |(i, _)| i);
        let name = &rest[..name_end];

        if name.is_empty() || name.contains(INVALID_NAME_CHARS) {
            return Err(
                Diagnostic::new(DiagnosticKind::InvalidParameterName, range).arg(name),
            );
        }

        if !self.seen.insert(name.to_lowercase()) {
            return Err(Diagnostic::new(DiagnosticKind::RepeatedParameter, range).arg(name));
        }

        match self.resolver.resolve(name) {
            Resolution::Route => {}
            Resolution::Missing => {
                return Err(
                    Diagnostic::new(DiagnosticKind::ParameterMissingFromArguments, range)
                        .arg(name),
                );
            }
            Resolution::QueryOrFragment => {
                return Err(Diagnostic::new(
                    DiagnosticKind::ParameterAlreadyQueryOrFragment,
                    range,
                )
                .arg(name));
            }
        }

        let inline = split_inline(&rest[name_end..]);
        Ok(ParameterPart {
            name: name.to_string(),
            kind,
            encode_slashes,
            has_optional_separator: false,
            constraints: inline.constraints,
            default_value: inline.default_value,
        })
    }
}

/// A catch-all must be the last part of the last segment.
///
/// Multi-part segments already reject catch-alls, so this only has to look at
/// segment position, but it checks both to stay independent of that rule.
fn check_catch_all_last(
    segments: &[PathSegment],
    ranges: &[Range<usize>],
) -> Result<(), Diagnostic> {
    let last = segments.len().saturating_sub(1);

    for (i, segment) in segments.iter().enumerate() {
        let parts = segment.parts();
        for (j, part) in parts.iter().enumerate() {
            let Some(param) = part.as_parameter().filter(|p| p.is_catch_all()) else {
                continue;
            };
            if i != last || j + 1 != parts.len() {
                let range = ranges.get(i).cloned().unwrap_or_default();
                return Err(
                    Diagnostic::new(DiagnosticKind::CatchAllMustBeLast, range)
                        .arg(param.name.as_str()),
                );
            }
        }
    }

    Ok(())
}
