//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::Scanner;

impl Scanner<'_> {
    #[inline]
    pub(crate) fn ensure_started(&self) {
        assert!(
            self.index() >= 0,
            "Scanner: mark() called before the first move_next() (caller's responsibility)"
        );
    }
}
