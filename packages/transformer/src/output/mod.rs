//! Output expression tree and code generation.

pub mod js_emitter;
pub mod output_ast;

pub use js_emitter::JsEmitter;
