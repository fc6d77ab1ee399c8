use super::*;

fn lit(s: &str) -> SegmentPart {
    SegmentPart::literal(s)
}

fn param(name: &str) -> SegmentPart {
    SegmentPart::Parameter(ParameterPart::new(name, ParameterKind::Standard))
}

fn optional(name: &str) -> SegmentPart {
    SegmentPart::Parameter(ParameterPart::new(name, ParameterKind::Optional))
}

fn catch_all(name: &str) -> SegmentPart {
    SegmentPart::Parameter(ParameterPart::new(name, ParameterKind::CatchAll))
}

#[test]
fn single_part_is_untouched() {
    for part in [lit("."), optional("a"), catch_all("rest")] {
        let out = validate_segment(vec![part.clone()]).unwrap();
        assert_eq!(out, [part]);
    }
    assert!(validate_segment(Vec::new()).unwrap().is_empty());
}

#[test]
fn catch_all_is_reported_before_adjacency() {
    let err = validate_segment(vec![param("a"), param("b"), catch_all("c")]).unwrap_err();
    assert_eq!(
        err,
        SegmentViolation::CatchAllInMultiPart {
            name: "c".to_string()
        }
    );
}

#[test]
fn adjacency_is_reported_before_optional_placement() {
    let err = validate_segment(vec![optional("a"), param("b")]).unwrap_err();
    assert_eq!(
        err,
        SegmentViolation::ConsecutiveParameters {
            first: "a".to_string(),
            second: "b".to_string()
        }
    );
}

#[test]
fn optional_must_be_last() {
    let err = validate_segment(vec![optional("a"), lit("-"), param("b")]).unwrap_err();
    assert_eq!(
        err,
        SegmentViolation::OptionalNotLast {
            name: "a".to_string(),
            next: "-".to_string()
        }
    );
}

#[test]
fn optional_needs_period_before_it() {
    let err = validate_segment(vec![param("a"), lit("-"), optional("b")]).unwrap_err();
    assert_eq!(
        err,
        SegmentViolation::OptionalAfterNonPeriod {
            name: "b".to_string(),
            previous: "-".to_string()
        }
    );

    // `..` is not a period either.
    assert!(validate_segment(vec![lit(".."), optional("b")]).is_err());
}

#[test]
fn period_is_folded_into_optional() {
    let out = validate_segment(vec![param("a"), lit("."), optional("b")]).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], param("a"));
    let SegmentPart::Parameter(b) = &out[1] else {
        panic!("expected parameter, got {:?}", out[1]);
    };
    assert!(b.has_optional_separator);
    assert_eq!(b.to_string(), ".{b?}");
}

#[test]
fn existing_separator_is_accepted() {
    let input = vec![
        lit("file"),
        SegmentPart::Separator(".".to_string()),
        optional("ext"),
    ];
    let out = validate_segment(input).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out[1].as_parameter().unwrap().has_optional_separator);
}

#[test]
fn literals_between_parameters_pass() {
    let input = vec![param("a"), lit("-"), param("b"), lit(".txt")];
    assert_eq!(validate_segment(input.clone()).unwrap(), input);
}
