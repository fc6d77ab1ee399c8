//! Parser invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

/// Every iteration of a parse loop must consume input.
#[inline]
pub(super) fn ensure_progress(before: isize, after: isize, what: &str) {
    assert!(
        after > before,
        "route pattern parser: {what} loop made no progress at index {before}"
    );
}

/// A successfully parsed segment stops at a separator or at the end.
#[inline]
pub(super) fn ensure_segment_boundary(current: u8, at_end: bool) {
    assert!(
        at_end || current == b'/',
        "route pattern parser: segment ended on {:?} instead of a separator",
        current as char
    );
}
