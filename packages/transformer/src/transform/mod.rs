//! The lowering pass.

pub mod template_builder;
pub mod transformer;
pub mod type_oracle;

pub use template_builder::{TemplateBuilder, TemplatePart};
pub use transformer::{is_component_tag, transform_expression, JsxTransformer};
pub use type_oracle::{AnnotationTypeOracle, TypeDescriptor, TypeOracle};
