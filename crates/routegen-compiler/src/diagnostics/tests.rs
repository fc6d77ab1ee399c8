use rowan::TextRange;

use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn ids_are_unique() {
    use std::collections::HashSet;

    let kinds = [
        DiagnosticKind::ParameterNameStartsWithUnderscore,
        DiagnosticKind::DuplicateDeclaredParameter,
        DiagnosticKind::PatternIsNotValid,
        DiagnosticKind::ConsecutiveSeparators,
        DiagnosticKind::CatchAllMustBeLast,
        DiagnosticKind::MismatchedParameter,
        DiagnosticKind::UnescapedBrace,
        DiagnosticKind::InvalidParameterName,
        DiagnosticKind::RepeatedParameter,
        DiagnosticKind::CatchAllCannotBeOptional,
        DiagnosticKind::ParameterMissingFromArguments,
        DiagnosticKind::ParameterAlreadyQueryOrFragment,
        DiagnosticKind::InvalidLiteral,
        DiagnosticKind::CatchAllInMultiPartSegment,
        DiagnosticKind::ConsecutiveParameters,
        DiagnosticKind::OptionalParameterHasToBeLast,
        DiagnosticKind::OptionalParameterPrecededByNonPeriod,
        DiagnosticKind::ParameterIsQueryAndFragment,
        DiagnosticKind::RequiredRouteParameterNullable,
        DiagnosticKind::OptionalParameterNotNullable,
        DiagnosticKind::ParameterMustBeSingleValue,
        DiagnosticKind::UnsupportedQueryParameterType,
        DiagnosticKind::MultipleFragmentParameters,
    ];
    let ids: HashSet<_> = kinds.iter().map(|k| k.id()).collect();
    assert_eq!(ids.len(), kinds.len());
    assert!(kinds.iter().all(|k| k.id().starts_with("RG")));
    assert!(kinds.iter().all(|k| k.default_severity() == Severity::Error));
}

#[test]
fn message_substitutes_positional_args() {
    let msg = DiagnosticKind::OptionalParameterPrecededByNonPeriod
        .message(&["{a}-{b?}".into(), "b".into(), "-".into()]);
    insta::assert_snapshot!(msg, @"In the segment '{a}-{b?}', the optional parameter 'b' is preceded by an invalid segment '-'. Only a period (.) can precede an optional parameter.");
}

#[test]
fn message_keeps_literal_braces_and_missing_args() {
    let msg = DiagnosticKind::MismatchedParameter.message(&[]);
    assert!(msg.contains("each '{' character has a matching '}' character"));

    let msg = DiagnosticKind::RepeatedParameter.message(&[]);
    assert!(msg.contains("'{0}'"));
}

#[test]
fn substituted_args_are_not_rescanned() {
    let msg = DiagnosticKind::OptionalParameterHasToBeLast
        .message(&["{1}".into(), "x".into(), "y".into()]);
    assert!(msg.starts_with("An optional parameter must be at the end of the segment. In the segment '{1}',"));
}

#[test]
fn report_builder_collects() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::RepeatedParameter, 5..8)
        .arg("a")
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert!(!diagnostics.has_warnings());
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 0);

    let d = diagnostics.iter().next().unwrap();
    assert_eq!(d.range(), TextRange::new(5.into(), 8.into()));
    assert_eq!(d.args(), ["a".to_string()]);
}

#[test]
fn display_includes_id_range_and_hints() {
    let d = Diagnostic::new(DiagnosticKind::CatchAllCannotBeOptional, 4..12);
    insta::assert_snapshot!(d.to_string(), @"error[RG1019] at 4..12: A catch-all parameter cannot be marked optional. (hint: a catch-all already matches an empty remainder)");
}

#[test]
fn extra_hint_is_appended() {
    let d = Diagnostic::new(DiagnosticKind::RepeatedParameter, 0..1)
        .arg("a")
        .hint("names are case-insensitive");
    assert_eq!(d.hints(), ["names are case-insensitive".to_string()]);
}

#[test]
fn printer_without_source_is_plain() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ConsecutiveSeparators, 4..5)
        .emit();
    diagnostics
        .report(DiagnosticKind::RepeatedParameter, 9..12)
        .arg("a")
        .emit();

    let out = diagnostics.printer().render();
    insta::assert_snapshot!(out, @r"
    error[RG1023] at 4..5: The route template separator character '/' cannot appear consecutively. It must be separated by either a parameter or a literal value.
    error[RG1013] at 9..12: The route parameter name 'a' appears more than one time in the route template.
    ");
}

#[test]
fn printer_with_source_annotates_span() {
    let source = "/abc/{a}/{a}";
    let diagnostics: Diagnostics =
        Diagnostic::new(DiagnosticKind::RepeatedParameter, 9..12).arg("a").into();

    let out = diagnostics.printer().source(source).path("routes.json").render();
    assert!(out.contains("error"));
    assert!(out.contains("[RG1013]"));
    assert!(out.contains("routes.json"));
    assert!(out.contains(source));
    assert!(out.contains("repeated parameter"));
}

#[test]
fn printer_handles_empty_range_at_end() {
    let source = "/abc/{";
    let diagnostics: Diagnostics =
        Diagnostic::new(DiagnosticKind::MismatchedParameter, 6..6).into();

    let out = diagnostics.printer().source(source).render();
    assert!(out.contains("[RG1021]"));
    assert!(out.contains("unbalanced brace"));
}

#[test]
fn printer_renders_hint_group() {
    let source = "/abc/{*rest?}";
    let diagnostics: Diagnostics =
        Diagnostic::new(DiagnosticKind::CatchAllCannotBeOptional, 5..13).into();

    let out = diagnostics.printer().source(source).render();
    assert!(out.contains("a catch-all already matches an empty remainder"));
}

#[test]
fn empty_collection_renders_nothing() {
    let diagnostics = Diagnostics::new();
    assert_eq!(diagnostics.printer().source("/x").render(), "");
    assert_eq!(diagnostics.printer().render(), "");
}
