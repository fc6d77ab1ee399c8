//! Identifier and type naming for generated functions.

use std::collections::HashSet;

use routegen_core::utils::{escape_ident, to_snake_case};

use crate::bind::{BoundRoute, Scalar, Shape, TypeRef};

/// Locals used by generated bodies; parameters never take these names.
const RESERVED_LOCALS: &[&str] = &["url", "item", "key", "value"];

pub(super) fn function_name(route: &str, used: &mut HashSet<String>) -> String {
    escape_ident(&unique(to_snake_case(route), used))
}

/// Argument names in declaration order.
pub(super) fn parameter_names(route: &BoundRoute) -> Vec<String> {
    let mut used: HashSet<String> = RESERVED_LOCALS.iter().map(|s| s.to_string()).collect();
    route
        .parameters()
        .iter()
        .map(|p| escape_ident(&unique(to_snake_case(&p.name), &mut used)))
        .collect()
}

fn unique(base: String, used: &mut HashSet<String>) -> String {
    let mut name = base;
    while !used.insert(name.clone()) {
        name.push('_');
    }
    name
}

/// Argument type: strings are borrowed, sequences become slices.
pub(super) fn parameter_type(ty: &TypeRef) -> String {
    let inner = match &ty.shape {
        Shape::Scalar(Scalar::String) => "&str".to_string(),
        Shape::Scalar(Scalar::Integer(name) | Scalar::Other(name)) => name.clone(),
        Shape::Array(element) => format!("&[{element}]"),
        Shape::KeyValue(key, value) => {
            format!("({}, {})", parameter_type(key), parameter_type(value))
        }
    };
    if ty.is_nullable() {
        format!("Option<{inner}>")
    } else {
        inner
    }
}
