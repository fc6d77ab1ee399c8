//! Route template parsing.
//!
//! ```
//! use routegen_compiler::pattern::{self, ParameterKind};
//!
//! let parsed = pattern::parse("/product/{id:int}.{format?}").unwrap();
//! let format = parsed.parameter("format").unwrap();
//! assert_eq!(format.kind, ParameterKind::Optional);
//! assert!(format.has_optional_separator);
//! assert_eq!(parsed.to_string(), "/product/{id:int}.{format?}");
//! ```

mod constraints;
mod dump;
mod invariants;
mod model;
mod parser;
mod resolver;
mod segment;

#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod segment_tests;

pub use constraints::{InlineSpec, split_inline};
pub use model::{
    ParameterKind, ParameterPart, PathSegment, RoutePattern, SegmentPart, escape_braces,
    same_name, unescape_braces,
};
pub use parser::{parse, parse_with};
pub use resolver::{AcceptAll, ParameterResolver, Resolution};
pub use segment::{SegmentViolation, validate_segment};
