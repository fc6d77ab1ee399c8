//! ANSI palette for the pattern tree dump.

/// Escape codes written around parameter names, literal text and structure.
///
/// Standard 16-color codes only.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// Parameter names.
    pub name: &'static str,
    /// Literal and separator text.
    pub literal: &'static str,
    /// Node kinds and flags.
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        literal: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        literal: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
