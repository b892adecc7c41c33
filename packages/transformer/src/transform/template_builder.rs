//! Incremental template builder.
//!
//! Accumulates alternating literal/expression segments for one element being
//! lowered and collapses them into the minimal equivalent expression form.
//! One builder per element; collapsing consumes it.

use crate::output::output_ast::{
    literal, Expression, TemplateLiteralElement, TemplateLiteralExpr,
};

#[derive(Debug, Clone)]
struct Segment {
    expr: Option<Expression>,
    literal: String,
}

/// One `add` input: literal text or an expression hole.
#[derive(Debug, Clone)]
pub enum TemplatePart {
    Text(String),
    Expr(Expression),
}

impl From<&str> for TemplatePart {
    fn from(text: &str) -> Self {
        TemplatePart::Text(text.to_string())
    }
}

impl From<String> for TemplatePart {
    fn from(text: String) -> Self {
        TemplatePart::Text(text)
    }
}

impl From<Expression> for TemplatePart {
    fn from(expr: Expression) -> Self {
        TemplatePart::Expr(expr)
    }
}

impl From<Box<Expression>> for TemplatePart {
    fn from(expr: Box<Expression>) -> Self {
        TemplatePart::Expr(*expr)
    }
}

/// Ordered sequence of `(expression, literal suffix)` segments. The head
/// segment never holds an expression, so a builder always has at least one
/// literal-only segment.
#[derive(Debug, Clone)]
pub struct TemplateBuilder {
    segments: Vec<Segment>,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        TemplateBuilder {
            segments: vec![Segment {
                expr: None,
                literal: String::new(),
            }],
        }
    }

    /// Append literal text onto the current tail, or open a new segment for
    /// an expression.
    pub fn add(&mut self, part: impl Into<TemplatePart>) {
        match part.into() {
            TemplatePart::Text(text) => {
                let tail = self
                    .segments
                    .last_mut()
                    .expect("template builder lost its head segment");
                tail.literal.push_str(&text);
            }
            TemplatePart::Expr(expr) => {
                self.segments.push(Segment {
                    expr: Some(expr),
                    literal: String::new(),
                });
            }
        }
    }

    /// Collapse into the minimal equivalent expression:
    /// - no expression segments: a plain string literal;
    /// - exactly one expression with empty literals on both sides: that
    ///   expression, unwrapped;
    /// - otherwise: a template literal with the holes in original order.
    pub fn collapse(mut self) -> Expression {
        assert!(
            !self.segments.is_empty(),
            "template builder lost its head segment"
        );
        if self.segments.len() == 1 {
            let head = self.segments.remove(0);
            return *literal(head.literal);
        }
        if self.segments.len() == 2
            && self.segments[0].literal.is_empty()
            && self.segments[1].literal.is_empty()
        {
            if let Some(expr) = self.segments[1].expr.take() {
                return expr;
            }
        }
        let mut elements = Vec::with_capacity(self.segments.len());
        let mut expressions = Vec::with_capacity(self.segments.len() - 1);
        for segment in self.segments {
            if let Some(expr) = segment.expr {
                expressions.push(expr);
            }
            elements.push(TemplateLiteralElement::new(segment.literal));
        }
        Expression::TemplateLiteral(TemplateLiteralExpr {
            elements,
            expressions,
        })
    }
}

impl Default for TemplateBuilder {
    fn default() -> Self {
        TemplateBuilder::new()
    }
}
