#![allow(dead_code)]

//! Shared helpers for the transformer test suites.

use jsx_transform::markup::ast::{
    JsxAttribute, JsxChild, JsxElement, JsxFragment, JsxNode, JsxSelfClosingElement, JsxText,
};
use jsx_transform::output::output_ast as o;
use jsx_transform::output::JsEmitter;
use jsx_transform::transform::transformer::transform_expression;
use jsx_transform::transform::type_oracle::TypeOracle;

pub fn element(name: &str, attrs: Vec<JsxAttribute>, children: Vec<JsxChild>) -> JsxNode {
    JsxNode::Element(JsxElement::new(name, attrs, children))
}

pub fn self_closing(name: &str, attrs: Vec<JsxAttribute>) -> JsxNode {
    JsxNode::SelfClosing(JsxSelfClosingElement::new(name, attrs))
}

pub fn fragment(children: Vec<JsxChild>) -> JsxNode {
    JsxNode::Fragment(JsxFragment::new(children))
}

pub fn text(value: &str) -> JsxChild {
    JsxChild::Text(JsxText::new(value))
}

pub fn expr_child(expr: o::Expression) -> JsxChild {
    JsxChild::Expression(Box::new(expr))
}

pub fn child(node: JsxNode) -> JsxChild {
    match node {
        JsxNode::Element(el) => JsxChild::Element(el),
        JsxNode::SelfClosing(el) => JsxChild::SelfClosing(el),
        JsxNode::Fragment(frag) => JsxChild::Fragment(frag),
    }
}

pub fn typed_variable(name: &str, type_: o::Type) -> o::Expression {
    o::Expression::ReadVar(o::ReadVarExpr {
        name: name.to_string(),
        type_: Some(type_),
        source_span: None,
    })
}

pub fn lower(node: JsxNode) -> o::Expression {
    transform_expression(&o::jsx(node), None).expect("lowering should succeed")
}

pub fn lower_with(node: JsxNode, oracle: &dyn TypeOracle) -> o::Expression {
    transform_expression(&o::jsx(node), Some(oracle)).expect("lowering should succeed")
}

pub fn emit(expr: &o::Expression) -> String {
    JsEmitter::new()
        .emit_expression(expr)
        .expect("emit should succeed")
}

pub fn lower_to_js(node: JsxNode) -> String {
    emit(&lower(node))
}

pub fn lower_to_js_with(node: JsxNode, oracle: &dyn TypeOracle) -> String {
    emit(&lower_with(node, oracle))
}
