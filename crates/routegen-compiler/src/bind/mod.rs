//! Parameter binding: which declared parameter goes into the path, the query
//! string, or the fragment.

mod binder;
mod types;


pub use binder::{
    BoundParameter, BoundRoute, DeclaredParameter, ParameterRole, QueryHint, RouteOptions, bind,
};
pub use types::{Scalar, Shape, TypeError, TypeRef};
