//! Human-readable tree of a parsed pattern.

use std::fmt::{self, Write};

use routegen_core::Colors;

use super::model::{ParameterKind, ParameterPart, RoutePattern, SegmentPart};

impl RoutePattern {
    /// One line per segment, followed by its parts indented.
    ///
    /// ```text
    /// Segment 0
    ///   Literal "product"
    /// Segment 1
    ///   Param productId Standard :int
    ///   Param format Optional +separator
    /// ```
    pub fn dump(&self, colors: Colors) -> String {
        let mut out = String::new();
        self.format_dump(&mut out, colors)
            .expect("String write never fails");
        out
    }

    fn format_dump(&self, w: &mut impl Write, c: Colors) -> fmt::Result {
        if self.segments().is_empty() {
            return writeln!(w, "{}(root){}", c.dim, c.reset);
        }

        for (i, segment) in self.segments().iter().enumerate() {
            writeln!(w, "{}Segment {i}{}", c.dim, c.reset)?;
            for part in segment.parts() {
                w.write_str("  ")?;
                dump_part(w, part, c)?;
                w.write_char('\n')?;
            }
        }
        Ok(())
    }
}

fn dump_part(w: &mut impl Write, part: &SegmentPart, c: Colors) -> fmt::Result {
    match part {
        SegmentPart::Literal(content) => {
            write!(w, "{}Literal{} {}{content:?}{}", c.dim, c.reset, c.literal, c.reset)
        }
        SegmentPart::Separator(content) => {
            write!(w, "{}Separator{} {}{content:?}{}", c.dim, c.reset, c.literal, c.reset)
        }
        SegmentPart::Parameter(p) => dump_parameter(w, p, c),
    }
}

fn dump_parameter(w: &mut impl Write, p: &ParameterPart, c: Colors) -> fmt::Result {
    let kind = match p.kind {
        ParameterKind::Standard => "Standard",
        ParameterKind::Optional => "Optional",
        ParameterKind::CatchAll => "CatchAll",
    };
    write!(
        w,
        "{}Param{} {}{}{} {}{kind}{}",
        c.dim, c.reset, c.name, p.name, c.reset, c.dim, c.reset
    )?;
    if p.is_catch_all() && !p.encode_slashes {
        w.write_str(" raw-slashes")?;
    }
    if p.has_optional_separator {
        w.write_str(" +separator")?;
    }
    for constraint in &p.constraints {
        write!(w, " :{constraint}")?;
    }
    if let Some(default) = &p.default_value {
        write!(w, " ={default:?}")?;
    }
    Ok(())
}
