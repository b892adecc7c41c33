//! Optional static-type collaborator.
//!
//! The lowering consults an oracle to decide whether an embedded child
//! expression needs the array-join serialization. The oracle is passed in
//! explicitly; without one, embedded expressions pass through unchanged.

use crate::output::output_ast::{Expression, Type};

/// What the oracle reports for one expression; `unknown` when the backing
/// checker has no information.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    pub type_: Option<Type>,
}

impl TypeDescriptor {
    pub fn unknown() -> Self {
        TypeDescriptor { type_: None }
    }

    pub fn of(type_: Type) -> Self {
        TypeDescriptor { type_: Some(type_) }
    }
}

/// Read-only, side-effect-free type query interface. Repeated queries for
/// the same node must return the same result within one lowering pass.
pub trait TypeOracle {
    fn resolve_type(&self, expr: &Expression) -> TypeDescriptor;

    fn is_array_like(&self, ty: &TypeDescriptor) -> bool;
}

/// Oracle backed by the `type_` annotations an upstream checker left on the
/// expression nodes themselves.
#[derive(Debug, Default)]
pub struct AnnotationTypeOracle;

impl AnnotationTypeOracle {
    pub fn new() -> Self {
        AnnotationTypeOracle
    }
}

impl TypeOracle for AnnotationTypeOracle {
    fn resolve_type(&self, expr: &Expression) -> TypeDescriptor {
        match expr.type_() {
            Some(type_) => TypeDescriptor::of(type_.clone()),
            None => TypeDescriptor::unknown(),
        }
    }

    fn is_array_like(&self, ty: &TypeDescriptor) -> bool {
        matches!(ty.type_, Some(Type::Array(_)))
    }
}
