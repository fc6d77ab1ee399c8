//! Validation of segments with more than one part.
//!
//! Checks run in a fixed order over the parts as parsed:
//!
//! 1. no catch-all anywhere in the segment
//! 2. no two adjacent parameters
//! 3. each optional parameter is last and preceded by `.` (or a separator)
//!
//! A `.` literal accepted by step 3 is retagged as [`SegmentPart::Separator`]
//! in a first pass and folded into the optional parameter in a second one, so
//! adjacency is always judged on the list as written.

use super::model::{ParameterPart, SegmentPart};

/// Why a multi-part segment was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentViolation {
    CatchAllInMultiPart { name: String },
    ConsecutiveParameters { first: String, second: String },
    OptionalNotLast { name: String, next: String },
    OptionalAfterNonPeriod { name: String, previous: String },
}

pub fn validate_segment(parts: Vec<SegmentPart>) -> Result<Vec<SegmentPart>, SegmentViolation> {
    if parts.len() <= 1 {
        return Ok(parts);
    }

    if let Some(p) = parts
        .iter()
        .filter_map(SegmentPart::as_parameter)
        .find(|p| p.is_catch_all())
    {
        return Err(SegmentViolation::CatchAllInMultiPart {
            name: p.name.clone(),
        });
    }

    for pair in parts.windows(2) {
        if let [SegmentPart::Parameter(first), SegmentPart::Parameter(second)] = pair {
            return Err(SegmentViolation::ConsecutiveParameters {
                first: first.name.clone(),
                second: second.name.clone(),
            });
        }
    }

    let separators = find_separators(&parts)?;
    Ok(absorb_separators(retag(parts, &separators)))
}

/// Indices of the `.` literals that lead into an optional parameter.
fn find_separators(parts: &[SegmentPart]) -> Result<Vec<usize>, SegmentViolation> {
    let mut separators = Vec::new();

    for (i, part) in parts.iter().enumerate() {
        let Some(param) = part.as_parameter().filter(|p| p.is_optional()) else {
            continue;
        };

        if let Some(next) = parts.get(i + 1) {
            return Err(SegmentViolation::OptionalNotLast {
                name: param.name.clone(),
                next: next.to_string(),
            });
        }

        let Some(previous) = i.checked_sub(1).map(|p| &parts[p]) else {
            continue;
        };
        match previous {
            SegmentPart::Separator(_) => {}
            SegmentPart::Literal(content) if content == "." => separators.push(i - 1),
            other => {
                return Err(SegmentViolation::OptionalAfterNonPeriod {
                    name: param.name.clone(),
                    previous: other.to_string(),
                });
            }
        }
    }

    Ok(separators)
}

fn retag(parts: Vec<SegmentPart>, separators: &[usize]) -> Vec<SegmentPart> {
    parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| match part {
            SegmentPart::Literal(content) if separators.contains(&i) => {
                SegmentPart::Separator(content)
            }
            other => other,
        })
        .collect()
}

/// Drop separators and flag the parameter that follows each one.
fn absorb_separators(parts: Vec<SegmentPart>) -> Vec<SegmentPart> {
    let mut out = Vec::with_capacity(parts.len());
    let mut pending = false;

    for part in parts {
        match part {
            SegmentPart::Separator(_) => pending = true,
            SegmentPart::Parameter(param) if pending => {
                pending = false;
                out.push(SegmentPart::Parameter(ParameterPart {
                    has_optional_separator: true,
                    ..param
                }));
            }
            other => out.push(other),
        }
    }

    out
}
