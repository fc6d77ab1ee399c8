use indoc::indoc;
use routegen_core::Colors;

use super::*;
use crate::diagnostics::{Diagnostic, DiagnosticKind};

fn dump(pattern: &str) -> String {
    parse(pattern).unwrap().dump(Colors::OFF)
}

fn error(pattern: &str) -> Diagnostic {
    parse(pattern).unwrap_err()
}

fn kind(pattern: &str) -> DiagnosticKind {
    error(pattern).kind()
}

fn range(d: &Diagnostic) -> (u32, u32) {
    (d.range().start().into(), d.range().end().into())
}

#[test]
fn root_has_no_segments() {
    for pattern in ["/", "", "~/"] {
        let parsed = parse(pattern).unwrap();
        assert!(parsed.segments().is_empty(), "{pattern:?}");
        assert_eq!(parsed.to_string(), "/");
    }
}

#[test]
fn prefixes_are_trimmed_and_raw_is_kept() {
    for pattern in ["/abc", "~/abc", "abc"] {
        let parsed = parse(pattern).unwrap();
        assert_eq!(parsed.raw(), pattern);
        assert_eq!(parsed.segments().len(), 1);
        assert_eq!(parsed.to_string(), "/abc");
    }
}

#[test]
fn tilde_without_slash_is_rejected() {
    let d = error("~abc");
    assert_eq!(d.kind(), DiagnosticKind::PatternIsNotValid);
    assert_eq!(d.args(), ["~abc".to_string()]);
    assert_eq!(range(&d), (0, 4));
    assert_eq!(kind("~"), DiagnosticKind::PatternIsNotValid);
}

#[test]
fn literal_parameter_literal() {
    insta::assert_snapshot!(dump("/abc/{a}/def"), @r#"
    Segment 0
      Literal "abc"
    Segment 1
      Param a Standard
    Segment 2
      Literal "def"
    "#);
}

#[test]
fn trailing_slash_adds_no_segment() {
    let parsed = parse("/abc/def/").unwrap();
    assert_eq!(parsed.segments().len(), 2);
    assert_eq!(parsed.to_string(), "/abc/def");
}

#[test]
fn optional_parameter_alone() {
    let parsed = parse("/abc/def/{a?}").unwrap();
    let a = parsed.parameter("a").unwrap();
    assert_eq!(a.kind, ParameterKind::Optional);
    assert!(!a.has_optional_separator);
}

#[test]
fn catch_all_variants() {
    let parsed = parse("/abc/{**catchAll}").unwrap();
    let p = parsed.catch_all().unwrap();
    assert_eq!(p.name, "catchAll");
    assert!(!p.encode_slashes);

    let parsed = parse("/abc/{*rest}").unwrap();
    let p = parsed.catch_all().unwrap();
    assert!(p.encode_slashes);
}

#[test]
fn optional_after_period_absorbs_separator() {
    insta::assert_snapshot!(dump("/product/{productId:int}.{format?}"), @r#"
    Segment 0
      Literal "product"
    Segment 1
      Param productId Standard :int
      Param format Optional +separator
    "#);
}

#[test]
fn lone_period_before_optional() {
    let parsed = parse("/file/.{ext?}").unwrap();
    let segment = &parsed.segments()[1];
    assert!(segment.is_simple());
    assert!(parsed.parameter("ext").unwrap().has_optional_separator);
    assert_eq!(parsed.to_string(), "/file/.{ext?}");
}

#[test]
fn adjacency_is_judged_before_absorption() {
    // After absorbing `.` the two parameters sit side by side; that is fine.
    let parsed = parse("/{a}.{b?}").unwrap();
    let parts = parsed.segments()[0].parts();
    assert_eq!(parts.len(), 2);
    assert!(parts.iter().all(SegmentPart::is_parameter));
}

#[test]
fn escaped_braces_in_literal() {
    insta::assert_snapshot!(dump("/{{abc}}/a}}b"), @r#"
    Segment 0
      Literal "{abc}"
    Segment 1
      Literal "a}b"
    "#);
}

#[test]
fn literal_and_parameters_in_one_segment() {
    insta::assert_snapshot!(dump("/v{major}.{minor}-rc"), @r#"
    Segment 0
      Literal "v"
      Param major Standard
      Literal "."
      Param minor Standard
      Literal "-rc"
    "#);
}

#[test]
fn constraints_and_default() {
    let parsed = parse(r"/{id:regex(^\d{{3}}$):min(1)=5}").unwrap();
    let id = parsed.parameter("id").unwrap();
    assert_eq!(id.constraints, [r"regex(^\d{3}$)", "min(1)"]);
    assert_eq!(id.default_value.as_deref(), Some("5"));
    assert_eq!(parsed.to_string(), r"/{id:regex(^\d{{3}}$):min(1)=5}");
}

#[test]
fn optional_with_default() {
    let parsed = parse("/{page=1?}").unwrap();
    let page = parsed.parameter("page").unwrap();
    assert_eq!(page.kind, ParameterKind::Optional);
    assert_eq!(page.default_value.as_deref(), Some("1"));
}

#[test]
fn leading_delimiter_is_part_of_name() {
    let parsed = parse("/{:foo}/{=bar}").unwrap();
    let names: Vec<_> = parsed.parameters().map(|p| p.name.as_str()).collect();
    assert_eq!(names, [":foo", "=bar"]);
}

#[test]
fn multibyte_text() {
    insta::assert_snapshot!(dump("/žluťoučký/{kůň}"), @r#"
    Segment 0
      Literal "žluťoučký"
    Segment 1
      Param kůň Standard
    "#);
}

#[test]
fn parameters_in_pattern_order() {
    let parsed = parse("/{a}/x/{b}-{c}/{*d}").unwrap();
    let names: Vec<_> = parsed.parameters().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c", "d"]);
}

#[test]
fn case_insensitive_lookup() {
    let parsed = parse("/{ProductId}").unwrap();
    assert!(parsed.parameter("productid").is_some());
}

#[test]
fn repeated_parameter() {
    let d = error("/abc/{a}/{a}");
    assert_eq!(d.kind(), DiagnosticKind::RepeatedParameter);
    assert_eq!(d.args(), ["a".to_string()]);
    assert_eq!(range(&d), (9, 12));
}

#[test]
fn repeated_parameter_ignores_case() {
    let d = error("/abc/{id}/{ID}");
    assert_eq!(d.kind(), DiagnosticKind::RepeatedParameter);
    assert_eq!(d.args(), ["ID".to_string()]);
}

#[test]
fn consecutive_separators() {
    let d = error("/abc//def");
    assert_eq!(d.kind(), DiagnosticKind::ConsecutiveSeparators);
    assert_eq!(range(&d), (4, 6));

    let d = error("//abc");
    assert_eq!(d.kind(), DiagnosticKind::ConsecutiveSeparators);
    assert_eq!(range(&d), (0, 2));

    assert_eq!(kind("~//abc"), DiagnosticKind::ConsecutiveSeparators);
}

#[test]
fn dangling_braces() {
    assert_eq!(kind("/abc/{"), DiagnosticKind::MismatchedParameter);
    assert_eq!(kind("/abc{"), DiagnosticKind::MismatchedParameter);
    assert_eq!(kind("/abc}"), DiagnosticKind::MismatchedParameter);
    assert_eq!(kind("/abc}x"), DiagnosticKind::MismatchedParameter);
    assert_eq!(kind("/{a"), DiagnosticKind::MismatchedParameter);
    assert_eq!(kind("/{a{"), DiagnosticKind::MismatchedParameter);
    assert_eq!(kind("/{a}}"), DiagnosticKind::MismatchedParameter);
}

#[test]
fn dangling_brace_ranges() {
    assert_eq!(range(&error("/abc/{")), (5, 6));
    assert_eq!(range(&error("/abc}x")), (4, 5));
    assert_eq!(range(&error("/{a")), (1, 3));
}

#[test]
fn unescaped_brace_inside_parameter() {
    let d = error("/{a{b}");
    assert_eq!(d.kind(), DiagnosticKind::UnescapedBrace);
    assert_eq!(range(&d), (3, 4));
}

#[test]
fn invalid_parameter_names() {
    for pattern in ["/{}", "/{*}", "/{**}", "/{?}", "/{a/b}", "/{a*}", "/{a?b}", "/{a{{b}}c}"] {
        assert_eq!(kind(pattern), DiagnosticKind::InvalidParameterName, "{pattern}");
    }
    assert_eq!(error("/{a*}").args(), ["a*".to_string()]);
}

#[test]
fn catch_all_cannot_be_optional() {
    assert_eq!(kind("/{*a?}"), DiagnosticKind::CatchAllCannotBeOptional);
    assert_eq!(kind("/{**a?}"), DiagnosticKind::CatchAllCannotBeOptional);
    assert_eq!(kind("/{*?}"), DiagnosticKind::CatchAllCannotBeOptional);
}

#[test]
fn question_mark_in_literal() {
    let d = error("/a?b");
    assert_eq!(d.kind(), DiagnosticKind::InvalidLiteral);
    assert_eq!(d.args(), ["a?b".to_string()]);
    assert_eq!(range(&d), (1, 4));
}

#[test]
fn catch_all_must_be_last() {
    let d = error("/{*rest}/abc");
    assert_eq!(d.kind(), DiagnosticKind::CatchAllMustBeLast);
    assert_eq!(d.args(), ["rest".to_string()]);
    assert_eq!(range(&d), (1, 8));
}

#[test]
fn catch_all_in_multi_part_segment() {
    assert_eq!(kind("/abc{*rest}"), DiagnosticKind::CatchAllInMultiPartSegment);
    assert_eq!(kind("/{*rest}.x"), DiagnosticKind::CatchAllInMultiPartSegment);
}

#[test]
fn consecutive_parameters() {
    let d = error("/{a}{b}");
    assert_eq!(d.kind(), DiagnosticKind::ConsecutiveParameters);
    assert_eq!(range(&d), (1, 7));
}

#[test]
fn optional_not_last() {
    let d = error("/x/{a?}.{b}");
    assert_eq!(d.kind(), DiagnosticKind::OptionalParameterHasToBeLast);
    assert_eq!(d.args(), ["{a?}.{b}", "a", "."]);
}

#[test]
fn optional_after_other_literal() {
    let d = error("/{a}-{b?}");
    assert_eq!(d.kind(), DiagnosticKind::OptionalParameterPrecededByNonPeriod);
    assert_eq!(d.args(), ["{a}-{b?}", "b", "-"]);
    insta::assert_snapshot!(d.to_string(), @"error[RG1015] at 1..9: In the segment '{a}-{b?}', the optional parameter 'b' is preceded by an invalid segment '-'. Only a period (.) can precede an optional parameter.");
}

#[test]
fn resolver_rejects_unknown_names() {
    let resolver = |name: &str| match name {
        "a" => Resolution::Route,
        "q" => Resolution::QueryOrFragment,
        _ => Resolution::Missing,
    };

    assert!(parse_with("/x/{a}", &resolver).is_ok());

    let d = parse_with("/x/{b}", &resolver).unwrap_err();
    assert_eq!(d.kind(), DiagnosticKind::ParameterMissingFromArguments);
    assert_eq!(d.args(), ["b".to_string()]);

    let d = parse_with("/x/{q}", &resolver).unwrap_err();
    assert_eq!(d.kind(), DiagnosticKind::ParameterAlreadyQueryOrFragment);
}

#[test]
fn repeated_check_runs_before_resolution() {
    let resolver = |name: &str| {
        if name == "a" {
            Resolution::Route
        } else {
            Resolution::Missing
        }
    };
    let d = parse_with("/{a}/{A}", &resolver).unwrap_err();
    assert_eq!(d.kind(), DiagnosticKind::RepeatedParameter);
}

#[test]
fn first_error_wins() {
    // Both the repeated name and the `//` are wrong; the scan reaches the name first.
    assert_eq!(kind("/{a}/{a}//x"), DiagnosticKind::RepeatedParameter);
    assert_eq!(kind("/x//{a}/{a}"), DiagnosticKind::ConsecutiveSeparators);
}

const VALID: &[&str] = &[
    "/",
    "/abc",
    "/abc/{a}/def",
    "/abc/def/{a?}",
    "/abc/{**catchAll}",
    "/abc/{*rest}",
    "/product/{productId:int}.{format?}",
    "/{{literal}}/{a}",
    "/v{major}.{minor}-rc/{id:guid}",
    r"/{id:regex(^\d{{3}}$):min(1)=5}",
    "/{page=1?}",
    "/a/.{ext?}",
    "/{lang:length(2)}/docs/{**path}",
];

#[test]
fn display_round_trips() {
    for pattern in VALID {
        let parsed = parse(pattern).unwrap();
        let rendered = parsed.to_string();
        let reparsed = parse(&rendered).unwrap();
        assert_eq!(parsed.segments(), reparsed.segments(), "{pattern}");
        assert_eq!(rendered, reparsed.to_string());
    }
}

#[test]
fn catch_all_is_sole_part_of_last_segment() {
    for pattern in VALID {
        let parsed = parse(pattern).unwrap();
        for (i, segment) in parsed.segments().iter().enumerate() {
            if segment.parts().iter().any(SegmentPart::is_catch_all) {
                assert!(segment.is_simple(), "{pattern}");
                assert_eq!(i + 1, parsed.segments().len(), "{pattern}");
            }
        }
    }
}

#[test]
fn parameter_names_are_unique() {
    use std::collections::HashSet;

    for pattern in VALID {
        let parsed = parse(pattern).unwrap();
        let names: Vec<_> = parsed.parameters().map(|p| p.name.to_lowercase()).collect();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len(), "{pattern}");
    }
}

#[test]
fn dump_with_colors() {
    let out = parse("/{a}").unwrap().dump(Colors::ON);
    assert!(out.contains("\x1b[34ma\x1b[0m"));
}

#[test]
fn dump_of_root() {
    insta::assert_snapshot!(dump("/"), @"(root)");
}

#[test]
fn dump_shows_catch_all_flavor() {
    let expected = indoc! {r#"
        Segment 0
          Param path CatchAll raw-slashes
    "#};
    assert_eq!(dump("/{**path}"), expected);
}
