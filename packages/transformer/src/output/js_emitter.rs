//! JavaScript printer for the output AST.
//!
//! Prints fully-lowered expression trees as JavaScript source. Meeting a
//! markup node here is a contract violation: lowering must run first.

use crate::error::EmitError;
use crate::output::output_ast::*;

pub struct JsEmitter;

impl JsEmitter {
    pub fn new() -> Self {
        JsEmitter
    }

    pub fn emit_expression(&self, expr: &Expression) -> Result<String, EmitError> {
        let mut out = String::new();
        self.visit_expression(expr, &mut out)?;
        Ok(out)
    }

    fn visit_expression(&self, expr: &Expression, out: &mut String) -> Result<(), EmitError> {
        match expr {
            Expression::ReadVar(e) => out.push_str(&e.name),
            Expression::ReadProp(e) => {
                self.visit_grouped(&e.receiver, out)?;
                out.push('.');
                out.push_str(&e.name);
            }
            Expression::Literal(e) => match &e.value {
                LiteralValue::Null => out.push_str("null"),
                LiteralValue::String(s) => out.push_str(&escape_string(s)),
                LiteralValue::Number(n) => out.push_str(&format_number(*n)),
                LiteralValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            },
            Expression::TemplateLiteral(e) => {
                out.push('`');
                for (index, element) in e.elements.iter().enumerate() {
                    out.push_str(&escape_template_text(&element.text));
                    if index < e.expressions.len() {
                        out.push_str("${");
                        self.visit_expression(&e.expressions[index], out)?;
                        out.push('}');
                    }
                }
                out.push('`');
            }
            Expression::InvokeFn(e) => {
                self.visit_grouped(&e.fn_, out)?;
                out.push('(');
                self.visit_comma_separated(&e.args, out)?;
                out.push(')');
            }
            Expression::LiteralArray(e) => {
                out.push('[');
                self.visit_comma_separated(&e.entries, out)?;
                out.push(']');
            }
            Expression::LiteralMap(e) => {
                out.push('{');
                for (index, entry) in e.entries.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    match entry {
                        LiteralMapEntry::Prop { key, value, quoted } => {
                            if *quoted || !is_valid_property_name(key) {
                                out.push_str(&escape_string(key));
                            } else {
                                out.push_str(key);
                            }
                            out.push_str(": ");
                            self.visit_expression(value, out)?;
                        }
                        LiteralMapEntry::Spread { expr } => {
                            out.push_str("...");
                            self.visit_expression(expr, out)?;
                        }
                    }
                }
                out.push('}');
            }
            Expression::ArrowFn(e) => {
                out.push('(');
                for (index, param) in e.params.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    match param {
                        FnParam::Named(name) => out.push_str(name),
                        FnParam::ArrayBinding(names) => {
                            out.push('[');
                            out.push_str(&names.join(", "));
                            out.push(']');
                        }
                    }
                }
                out.push_str(") => ");
                // an object-literal body must be parenthesized to parse
                if matches!(*e.body, Expression::LiteralMap(_)) {
                    out.push('(');
                    self.visit_expression(&e.body, out)?;
                    out.push(')');
                } else {
                    self.visit_expression(&e.body, out)?;
                }
            }
            Expression::BinaryOp(e) => {
                self.visit_grouped(&e.lhs, out)?;
                out.push(' ');
                out.push_str(binary_operator_str(e.operator));
                out.push(' ');
                self.visit_grouped(&e.rhs, out)?;
            }
            Expression::Conditional(e) => {
                self.visit_grouped(&e.condition, out)?;
                out.push_str(" ? ");
                self.visit_expression(&e.true_case, out)?;
                out.push_str(" : ");
                match &e.false_case {
                    Some(false_case) => self.visit_expression(false_case, out)?,
                    None => out.push_str("null"),
                }
            }
            Expression::Parens(e) => {
                out.push('(');
                self.visit_expression(&e.expr, out)?;
                out.push(')');
            }
            Expression::Jsx(_) => return Err(EmitError::UnloweredMarkup),
        }
        Ok(())
    }

    /// Emit a subexpression, parenthesizing the forms that would otherwise
    /// bind wrongly in receiver/callee/operand position.
    fn visit_grouped(&self, expr: &Expression, out: &mut String) -> Result<(), EmitError> {
        let needs_parens = matches!(
            expr,
            Expression::ArrowFn(_) | Expression::BinaryOp(_) | Expression::Conditional(_)
        );
        if needs_parens {
            out.push('(');
        }
        self.visit_expression(expr, out)?;
        if needs_parens {
            out.push(')');
        }
        Ok(())
    }

    fn visit_comma_separated(
        &self,
        exprs: &[Expression],
        out: &mut String,
    ) -> Result<(), EmitError> {
        for (index, expr) in exprs.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            self.visit_expression(expr, out)?;
        }
        Ok(())
    }
}

impl Default for JsEmitter {
    fn default() -> Self {
        JsEmitter::new()
    }
}

fn binary_operator_str(operator: BinaryOperator) -> &'static str {
    match operator {
        BinaryOperator::Equals => "==",
        BinaryOperator::NotEquals => "!=",
        BinaryOperator::Identical => "===",
        BinaryOperator::NotIdentical => "!==",
        BinaryOperator::Minus => "-",
        BinaryOperator::Plus => "+",
        BinaryOperator::Divide => "/",
        BinaryOperator::Multiply => "*",
        BinaryOperator::Modulo => "%",
        BinaryOperator::And => "&&",
        BinaryOperator::Or => "||",
        BinaryOperator::Lower => "<",
        BinaryOperator::LowerEquals => "<=",
        BinaryOperator::Bigger => ">",
        BinaryOperator::BiggerEquals => ">=",
        BinaryOperator::NullishCoalesce => "??",
    }
}

/// Quote a string as a single-quoted JavaScript literal.
pub fn escape_string(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + 2);
    escaped.push('\'');
    for ch in input.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped.push('\'');
    escaped
}

fn escape_template_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '`' => escaped.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => escaped.push_str("\\$"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn is_valid_property_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() || ch == '_' || ch == '$' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$')
}
