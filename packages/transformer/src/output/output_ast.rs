//! Output expression AST.
//!
//! The host expression representation the lowering rewrites into: literals,
//! template literals, call and object-construction nodes. Markup appears in
//! this tree as the [`Expression::Jsx`] variant and is gone after lowering.

use serde::{Deserialize, Serialize};

use crate::markup::ast::JsxNode;
use crate::parse_util::ParseSourceSpan;

//// Types

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuiltinTypeName {
    Dynamic,
    Bool,
    String,
    Int,
    Number,
    Function,
    Inferred,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltinType {
    pub name: BuiltinTypeName,
}

impl BuiltinType {
    pub fn new(name: BuiltinTypeName) -> Self {
        BuiltinType { name }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayType {
    pub of: Box<Type>,
}

/// Static type attached to an expression by an upstream checker. The pass
/// itself only reads these through the type oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    Builtin(BuiltinType),
    Array(ArrayType),
}

// Predefined types
pub fn dynamic_type() -> Type {
    Type::Builtin(BuiltinType::new(BuiltinTypeName::Dynamic))
}

pub fn bool_type() -> Type {
    Type::Builtin(BuiltinType::new(BuiltinTypeName::Bool))
}

pub fn string_type() -> Type {
    Type::Builtin(BuiltinType::new(BuiltinTypeName::String))
}

pub fn number_type() -> Type {
    Type::Builtin(BuiltinType::new(BuiltinTypeName::Number))
}

pub fn array_type(of: Type) -> Type {
    Type::Array(ArrayType { of: Box::new(of) })
}

///// Expressions

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Equals,
    NotEquals,
    Identical,
    NotIdentical,
    Minus,
    Plus,
    Divide,
    Multiply,
    Modulo,
    And,
    Or,
    Lower,
    LowerEquals,
    Bigger,
    BiggerEquals,
    NullishCoalesce,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    ReadVar(ReadVarExpr),
    ReadProp(ReadPropExpr),
    Literal(LiteralExpr),
    TemplateLiteral(TemplateLiteralExpr),
    InvokeFn(InvokeFunctionExpr),
    LiteralArray(LiteralArrayExpr),
    LiteralMap(LiteralMapExpr),
    ArrowFn(ArrowFunctionExpr),
    BinaryOp(BinaryOperatorExpr),
    Conditional(ConditionalExpr),
    Parens(ParenthesizedExpr),
    Jsx(JsxExpr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadVarExpr {
    pub name: String,
    pub type_: Option<Type>,
    pub source_span: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadPropExpr {
    pub receiver: Box<Expression>,
    pub name: String,
    pub type_: Option<Type>,
    pub source_span: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub type_: Option<Type>,
    pub source_span: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Null,
    String(String),
    Number(f64),
    Bool(bool),
}

/// One static part of a template literal. A template with `n` holes always
/// has `n + 1` elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateLiteralElement {
    pub text: String,
    pub source_span: Option<ParseSourceSpan>,
}

impl TemplateLiteralElement {
    pub fn new(text: impl Into<String>) -> Self {
        TemplateLiteralElement {
            text: text.into(),
            source_span: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateLiteralExpr {
    pub elements: Vec<TemplateLiteralElement>,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeFunctionExpr {
    pub fn_: Box<Expression>,
    pub args: Vec<Expression>,
    pub type_: Option<Type>,
    pub source_span: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralArrayExpr {
    pub entries: Vec<Expression>,
    pub type_: Option<Type>,
    pub source_span: Option<ParseSourceSpan>,
}

/// Object-literal entry: a keyed property or an object spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralMapEntry {
    Prop {
        key: String,
        value: Box<Expression>,
        quoted: bool,
    },
    Spread {
        expr: Box<Expression>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralMapExpr {
    pub entries: Vec<LiteralMapEntry>,
    pub type_: Option<Type>,
    pub source_span: Option<ParseSourceSpan>,
}

/// Arrow-function parameter: a plain name or an array binding pattern,
/// `([a, b]) => ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FnParam {
    Named(String),
    ArrayBinding(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowFunctionExpr {
    pub params: Vec<FnParam>,
    pub body: Box<Expression>,
    pub type_: Option<Type>,
    pub source_span: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperatorExpr {
    pub operator: BinaryOperator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
    pub type_: Option<Type>,
    pub source_span: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpr {
    pub condition: Box<Expression>,
    pub true_case: Box<Expression>,
    pub false_case: Option<Box<Expression>>,
    pub type_: Option<Type>,
    pub source_span: Option<ParseSourceSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesizedExpr {
    pub expr: Box<Expression>,
    pub type_: Option<Type>,
    pub source_span: Option<ParseSourceSpan>,
}

/// Embedded markup. The lowering pass replaces every occurrence; a fully
/// lowered tree contains none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsxExpr {
    pub node: Box<JsxNode>,
}

// Helper functions for creating common expressions
pub fn variable(name: impl Into<String>) -> Box<Expression> {
    Box::new(Expression::ReadVar(ReadVarExpr {
        name: name.into(),
        type_: None,
        source_span: None,
    }))
}

pub fn literal(value: impl Into<LiteralValue>) -> Box<Expression> {
    Box::new(Expression::Literal(LiteralExpr {
        value: value.into(),
        type_: None,
        source_span: None,
    }))
}

pub fn literal_arr(values: Vec<Expression>) -> Box<Expression> {
    Box::new(Expression::LiteralArray(LiteralArrayExpr {
        entries: values,
        type_: None,
        source_span: None,
    }))
}

pub fn literal_map(entries: Vec<LiteralMapEntry>) -> Box<Expression> {
    Box::new(Expression::LiteralMap(LiteralMapExpr {
        entries,
        type_: None,
        source_span: None,
    }))
}

pub fn jsx(node: JsxNode) -> Box<Expression> {
    Box::new(Expression::Jsx(JsxExpr {
        node: Box::new(node),
    }))
}

// Implement conversions
impl From<String> for LiteralValue {
    fn from(s: String) -> Self {
        LiteralValue::String(s)
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::String(s.to_string())
    }
}

impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        LiteralValue::Number(n)
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Bool(b)
    }
}

impl Expression {
    /// Static type annotation, if an upstream checker attached one.
    pub fn type_(&self) -> Option<&Type> {
        match self {
            Expression::ReadVar(e) => e.type_.as_ref(),
            Expression::ReadProp(e) => e.type_.as_ref(),
            Expression::Literal(e) => e.type_.as_ref(),
            Expression::TemplateLiteral(_) => None,
            Expression::InvokeFn(e) => e.type_.as_ref(),
            Expression::LiteralArray(e) => e.type_.as_ref(),
            Expression::LiteralMap(e) => e.type_.as_ref(),
            Expression::ArrowFn(e) => e.type_.as_ref(),
            Expression::BinaryOp(e) => e.type_.as_ref(),
            Expression::Conditional(e) => e.type_.as_ref(),
            Expression::Parens(e) => e.type_.as_ref(),
            Expression::Jsx(_) => None,
        }
    }

    pub fn source_span(&self) -> Option<&ParseSourceSpan> {
        match self {
            Expression::ReadVar(e) => e.source_span.as_ref(),
            Expression::ReadProp(e) => e.source_span.as_ref(),
            Expression::Literal(e) => e.source_span.as_ref(),
            Expression::TemplateLiteral(_) => None,
            Expression::InvokeFn(e) => e.source_span.as_ref(),
            Expression::LiteralArray(e) => e.source_span.as_ref(),
            Expression::LiteralMap(e) => e.source_span.as_ref(),
            Expression::ArrowFn(e) => e.source_span.as_ref(),
            Expression::BinaryOp(e) => e.source_span.as_ref(),
            Expression::Conditional(e) => e.source_span.as_ref(),
            Expression::Parens(e) => e.source_span.as_ref(),
            Expression::Jsx(e) => e.node.span(),
        }
    }

    pub fn prop(
        &self,
        name: impl Into<String>,
        source_span: Option<ParseSourceSpan>,
    ) -> Box<Expression> {
        Box::new(Expression::ReadProp(ReadPropExpr {
            receiver: Box::new(self.clone()),
            name: name.into(),
            type_: None,
            source_span,
        }))
    }

    pub fn call_fn(
        &self,
        params: Vec<Expression>,
        source_span: Option<ParseSourceSpan>,
    ) -> Box<Expression> {
        Box::new(Expression::InvokeFn(InvokeFunctionExpr {
            fn_: Box::new(self.clone()),
            args: params,
            type_: None,
            source_span,
        }))
    }
}
