#![deny(clippy::all)]

//! Markup-to-string lowering.
//!
//! A library-level transform invoked by a host compiler/bundler pipeline: it
//! takes one root of the host expression tree and replaces every embedded
//! markup node with a plain expression subtree. Intrinsic (lowercase) tags
//! lower to string building, component (uppercase) tags to function calls
//! taking a props object. The pass performs no I/O and keeps no state across
//! invocations.

pub mod error;
pub mod markup;
pub mod output;
pub mod parse_util;
pub mod transform;

pub use error::{EmitError, Result, TransformError};
pub use output::JsEmitter;
pub use transform::transformer::{transform_expression, JsxTransformer};
pub use transform::type_oracle::{AnnotationTypeOracle, TypeDescriptor, TypeOracle};
