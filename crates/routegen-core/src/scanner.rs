//! Byte cursor over a route pattern.
//!
//! The cursor starts *before* the first byte (index `-1`) and reports
//! [`Scanner::NUL`] for any out-of-range position, so the parser can compare
//! `current()` against delimiters without bounds checks. All delimiters the
//! parser cares about are ASCII, which keeps byte positions and `char`
//! boundaries in agreement wherever a capture starts or ends.

use std::ops::Range;

/// Stateful cursor with a single pending capture mark.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    offset: usize,
    index: isize,
    mark: Option<usize>,
}

impl<'a> Scanner<'a> {
    /// Sentinel returned by [`Scanner::current`] outside the text.
    pub const NUL: u8 = 0;

    pub fn new(text: &'a str) -> Self {
        Self::with_offset(text, 0)
    }

    /// Scanner over a slice that starts `offset` bytes into some larger source.
    ///
    /// The offset only affects [`Scanner::span`].
    pub fn with_offset(text: &'a str, offset: usize) -> Self {
        Self {
            text,
            offset,
            index: -1,
            mark: None,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Raw index: `-1` before start, `len()` (or more) past the end.
    pub fn index(&self) -> isize {
        self.index
    }

    /// Index clamped into `0..=len()`, usable as a slice bound.
    pub fn position(&self) -> usize {
        self.index.clamp(0, self.text.len() as isize) as usize
    }

    /// Byte under the cursor, or [`Scanner::NUL`] when out of bounds.
    pub fn current(&self) -> u8 {
        if self.in_bounds() {
            self.text.as_bytes()[self.index as usize]
        } else {
            Self::NUL
        }
    }

    /// Advances by one byte. Returns whether the cursor is still inside the text.
    pub fn move_next(&mut self) -> bool {
        self.index += 1;
        self.in_bounds()
    }

    /// Retreats by one byte. Returns whether the cursor is still at or after the start.
    pub fn back(&mut self) -> bool {
        self.index -= 1;
        self.index >= 0
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.text.len() as isize
    }

    /// Records the current byte as the start of a pending capture.
    pub fn mark(&mut self) {
        self.ensure_started();
        self.mark = Some(self.index as usize);
    }

    pub fn mark_position(&self) -> Option<usize> {
        self.mark
    }

    /// Returns `text[mark..index]` and clears the mark.
    ///
    /// `None` when no mark is set.
    pub fn capture(&mut self) -> Option<&'a str> {
        let start = self.mark.take()?;
        let end = self.position();
        self.text.get(start..end)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Source range from local byte `start` up to the cursor (at least one byte
    /// wide while inside the text), shifted into the enclosing source.
    pub fn span(&self, start: usize) -> Range<usize> {
        let end = if self.in_bounds() {
            self.position() + 1
        } else {
            self.position()
        };
        let start = start.min(end);
        (self.offset + start)..(self.offset + end)
    }

    fn in_bounds(&self) -> bool {
        self.index >= 0 && (self.index as usize) < self.text.len()
    }
}
