//! Markup AST node definitions.
//!
//! Trees arrive here already parsed and well-formed. Tag kind (intrinsic
//! vs. component) is derived from the tag name by the transformer, never
//! stored on the node.

use serde::{Deserialize, Serialize};

use crate::output::output_ast::Expression;
use crate::parse_util::ParseSourceSpan;

/// Markup node union
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsxNode {
    Element(JsxElement),
    SelfClosing(JsxSelfClosingElement),
    Fragment(JsxFragment),
}

impl JsxNode {
    pub fn span(&self) -> Option<&ParseSourceSpan> {
        match self {
            JsxNode::Element(el) => el.span.as_ref(),
            JsxNode::SelfClosing(el) => el.span.as_ref(),
            JsxNode::Fragment(frag) => frag.span.as_ref(),
        }
    }
}

/// Element with an open/close tag pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxElement {
    pub name: String,
    pub attrs: Vec<JsxAttribute>,
    pub children: Vec<JsxChild>,
    pub span: Option<ParseSourceSpan>,
}

impl JsxElement {
    pub fn new(
        name: impl Into<String>,
        attrs: Vec<JsxAttribute>,
        children: Vec<JsxChild>,
    ) -> Self {
        JsxElement {
            name: name.into(),
            attrs,
            children,
            span: None,
        }
    }
}

/// Element without children, `<tag ... />`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxSelfClosingElement {
    pub name: String,
    pub attrs: Vec<JsxAttribute>,
    pub span: Option<ParseSourceSpan>,
}

impl JsxSelfClosingElement {
    pub fn new(name: impl Into<String>, attrs: Vec<JsxAttribute>) -> Self {
        JsxSelfClosingElement {
            name: name.into(),
            attrs,
            span: None,
        }
    }
}

/// Fragment, `<>...</>`; emits no wrapping syntax of its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxFragment {
    pub children: Vec<JsxChild>,
    pub span: Option<ParseSourceSpan>,
}

impl JsxFragment {
    pub fn new(children: Vec<JsxChild>) -> Self {
        JsxFragment {
            children,
            span: None,
        }
    }
}

/// Attribute union. Name uniqueness is not enforced; duplicate names keep
/// run-time last-write-wins object semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsxAttribute {
    /// `name` or `name="text"` — the literal text is used verbatim.
    Plain {
        name: String,
        value: Option<String>,
        span: Option<ParseSourceSpan>,
    },
    /// `name={expr}`
    Expression {
        name: String,
        expr: Box<Expression>,
        span: Option<ParseSourceSpan>,
    },
    /// `{...expr}`
    Spread {
        expr: Box<Expression>,
        span: Option<ParseSourceSpan>,
    },
}

impl JsxAttribute {
    pub fn plain(name: impl Into<String>) -> Self {
        JsxAttribute::Plain {
            name: name.into(),
            value: None,
            span: None,
        }
    }

    pub fn plain_with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        JsxAttribute::Plain {
            name: name.into(),
            value: Some(value.into()),
            span: None,
        }
    }

    pub fn expression(name: impl Into<String>, expr: Expression) -> Self {
        JsxAttribute::Expression {
            name: name.into(),
            expr: Box::new(expr),
            span: None,
        }
    }

    pub fn spread(expr: Expression) -> Self {
        JsxAttribute::Spread {
            expr: Box::new(expr),
            span: None,
        }
    }
}

/// Child union
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JsxChild {
    Element(JsxElement),
    SelfClosing(JsxSelfClosingElement),
    Fragment(JsxFragment),
    Text(JsxText),
    Expression(Box<Expression>),
    /// Residual escape hatch for shapes an untrusted parser frontend could
    /// not classify. The transformer rejects it; it is never passed through.
    Unsupported(UnsupportedNode),
}

/// Text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxText {
    pub value: String,
    pub span: Option<ParseSourceSpan>,
}

impl JsxText {
    pub fn new(value: impl Into<String>) -> Self {
        JsxText {
            value: value.into(),
            span: None,
        }
    }
}

/// Node of an unrecognized syntactic kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsupportedNode {
    pub kind: String,
    pub span: Option<ParseSourceSpan>,
}

impl UnsupportedNode {
    pub fn new(kind: impl Into<String>) -> Self {
        UnsupportedNode {
            kind: kind.into(),
            span: None,
        }
    }
}
