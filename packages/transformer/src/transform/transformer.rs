//! Markup lowering.
//!
//! Rewrites embedded markup nodes found anywhere in a host expression tree
//! into plain expressions the host language already evaluates: string
//! building for intrinsic tags, function calls for component tags. All other
//! nodes are rebuilt structurally untouched.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, TransformError};
use crate::markup::ast::{
    JsxAttribute, JsxChild, JsxElement, JsxFragment, JsxNode, JsxSelfClosingElement,
};
use crate::markup::whitespace::normalize_jsx_text;
use crate::output::output_ast as o;
use crate::transform::template_builder::TemplateBuilder;
use crate::transform::type_oracle::TypeOracle;

lazy_static! {
    /// Tags whose name starts with an uppercase letter dispatch as components.
    static ref COMPONENT_TAG_REGEXP: Regex = Regex::new(r"^[A-Z]").unwrap();
}

pub fn is_component_tag(name: &str) -> bool {
    COMPONENT_TAG_REGEXP.is_match(name)
}

/// The lowering pass. One instance per host tree; holds no state across
/// `transform` calls beyond the optional type oracle.
pub struct JsxTransformer<'a> {
    type_oracle: Option<&'a dyn TypeOracle>,
}

impl<'a> JsxTransformer<'a> {
    pub fn new(type_oracle: Option<&'a dyn TypeOracle>) -> Self {
        JsxTransformer { type_oracle }
    }

    /// Entry point: returns an equivalent tree in which every markup node
    /// has been replaced with its lowered expression.
    pub fn transform(&self, root: &o::Expression) -> Result<o::Expression> {
        self.visit_expression(root)
    }

    /// Generic recursive descent. Markup nodes are lowered; every other
    /// node kind is rebuilt with visited children.
    fn visit_expression(&self, expr: &o::Expression) -> Result<o::Expression> {
        match expr {
            o::Expression::Jsx(jsx) => {
                let mut result = TemplateBuilder::new();
                self.lower_node(&jsx.node, &mut result)?;
                Ok(result.collapse())
            }
            o::Expression::ReadVar(_) | o::Expression::Literal(_) => Ok(expr.clone()),
            o::Expression::ReadProp(e) => Ok(o::Expression::ReadProp(o::ReadPropExpr {
                receiver: Box::new(self.visit_expression(&e.receiver)?),
                name: e.name.clone(),
                type_: e.type_.clone(),
                source_span: e.source_span.clone(),
            })),
            o::Expression::TemplateLiteral(e) => {
                Ok(o::Expression::TemplateLiteral(o::TemplateLiteralExpr {
                    elements: e.elements.clone(),
                    expressions: self.visit_all(&e.expressions)?,
                }))
            }
            o::Expression::InvokeFn(e) => Ok(o::Expression::InvokeFn(o::InvokeFunctionExpr {
                fn_: Box::new(self.visit_expression(&e.fn_)?),
                args: self.visit_all(&e.args)?,
                type_: e.type_.clone(),
                source_span: e.source_span.clone(),
            })),
            o::Expression::LiteralArray(e) => {
                Ok(o::Expression::LiteralArray(o::LiteralArrayExpr {
                    entries: self.visit_all(&e.entries)?,
                    type_: e.type_.clone(),
                    source_span: e.source_span.clone(),
                }))
            }
            o::Expression::LiteralMap(e) => {
                let entries = e
                    .entries
                    .iter()
                    .map(|entry| self.visit_map_entry(entry))
                    .collect::<Result<Vec<_>>>()?;
                Ok(o::Expression::LiteralMap(o::LiteralMapExpr {
                    entries,
                    type_: e.type_.clone(),
                    source_span: e.source_span.clone(),
                }))
            }
            o::Expression::ArrowFn(e) => Ok(o::Expression::ArrowFn(o::ArrowFunctionExpr {
                params: e.params.clone(),
                body: Box::new(self.visit_expression(&e.body)?),
                type_: e.type_.clone(),
                source_span: e.source_span.clone(),
            })),
            o::Expression::BinaryOp(e) => Ok(o::Expression::BinaryOp(o::BinaryOperatorExpr {
                operator: e.operator,
                lhs: Box::new(self.visit_expression(&e.lhs)?),
                rhs: Box::new(self.visit_expression(&e.rhs)?),
                type_: e.type_.clone(),
                source_span: e.source_span.clone(),
            })),
            o::Expression::Conditional(e) => Ok(o::Expression::Conditional(o::ConditionalExpr {
                condition: Box::new(self.visit_expression(&e.condition)?),
                true_case: Box::new(self.visit_expression(&e.true_case)?),
                false_case: match &e.false_case {
                    Some(false_case) => Some(Box::new(self.visit_expression(false_case)?)),
                    None => None,
                },
                type_: e.type_.clone(),
                source_span: e.source_span.clone(),
            })),
            o::Expression::Parens(e) => Ok(o::Expression::Parens(o::ParenthesizedExpr {
                expr: Box::new(self.visit_expression(&e.expr)?),
                type_: e.type_.clone(),
                source_span: e.source_span.clone(),
            })),
        }
    }

    fn visit_all(&self, exprs: &[o::Expression]) -> Result<Vec<o::Expression>> {
        exprs
            .iter()
            .map(|expr| self.visit_expression(expr))
            .collect()
    }

    fn visit_map_entry(&self, entry: &o::LiteralMapEntry) -> Result<o::LiteralMapEntry> {
        match entry {
            o::LiteralMapEntry::Prop { key, value, quoted } => Ok(o::LiteralMapEntry::Prop {
                key: key.clone(),
                value: Box::new(self.visit_expression(value)?),
                quoted: *quoted,
            }),
            o::LiteralMapEntry::Spread { expr } => Ok(o::LiteralMapEntry::Spread {
                expr: Box::new(self.visit_expression(expr)?),
            }),
        }
    }

    fn lower_node(&self, node: &JsxNode, result: &mut TemplateBuilder) -> Result<()> {
        match node {
            JsxNode::Element(element) => self.lower_element(element, result),
            JsxNode::SelfClosing(element) => self.lower_self_closing_element(element, result),
            JsxNode::Fragment(fragment) => self.lower_fragment(fragment, result),
        }
    }

    fn lower_element(&self, element: &JsxElement, result: &mut TemplateBuilder) -> Result<()> {
        if is_component_tag(&element.name) {
            return self.lower_component_element(element, result);
        }
        result.add(format!("<{}", element.name));
        self.lower_attributes(&element.attrs, result)?;
        result.add(">");
        for child in &element.children {
            self.lower_child(child, result)?;
        }
        result.add(format!("</{}>", element.name));
        Ok(())
    }

    fn lower_self_closing_element(
        &self,
        element: &JsxSelfClosingElement,
        result: &mut TemplateBuilder,
    ) -> Result<()> {
        if is_component_tag(&element.name) {
            return self.lower_self_closing_component(element, result);
        }
        result.add(format!("<{}", element.name));
        self.lower_attributes(&element.attrs, result)?;
        result.add("/>");
        Ok(())
    }

    /// Fragments are transparent: children lower straight into the parent's
    /// builder.
    fn lower_fragment(&self, fragment: &JsxFragment, result: &mut TemplateBuilder) -> Result<()> {
        for child in &fragment.children {
            self.lower_child(child, result)?;
        }
        Ok(())
    }

    /// `<Tag a={x}>...</Tag>` lowers to `Tag({a: x, children: ...})`.
    /// Entries keep attribute declaration order; `children` is always last.
    fn lower_component_element(
        &self,
        element: &JsxElement,
        result: &mut TemplateBuilder,
    ) -> Result<()> {
        let mut entries = element
            .attrs
            .iter()
            .map(|attr| self.attribute_to_map_entry(attr))
            .collect::<Result<Vec<_>>>()?;
        let mut children_result = TemplateBuilder::new();
        for child in &element.children {
            self.lower_child(child, &mut children_result)?;
        }
        entries.push(o::LiteralMapEntry::Prop {
            key: "children".to_string(),
            value: Box::new(children_result.collapse()),
            quoted: false,
        });
        result.add(
            o::variable(element.name.clone()).call_fn(vec![*o::literal_map(entries)], None),
        );
        Ok(())
    }

    fn lower_self_closing_component(
        &self,
        element: &JsxSelfClosingElement,
        result: &mut TemplateBuilder,
    ) -> Result<()> {
        let mut entries = element
            .attrs
            .iter()
            .map(|attr| self.attribute_to_map_entry(attr))
            .collect::<Result<Vec<_>>>()?;
        entries.push(o::LiteralMapEntry::Prop {
            key: "children".to_string(),
            value: o::literal(""),
            quoted: false,
        });
        result.add(
            o::variable(element.name.clone()).call_fn(vec![*o::literal_map(entries)], None),
        );
        Ok(())
    }

    fn lower_attributes(
        &self,
        attrs: &[JsxAttribute],
        result: &mut TemplateBuilder,
    ) -> Result<()> {
        for attr in attrs {
            match attr {
                JsxAttribute::Plain {
                    name,
                    value: Some(text),
                    ..
                } => result.add(format!(" {}=\"{}\"", name, text)),
                JsxAttribute::Plain {
                    name, value: None, ..
                } => result.add(format!(" {}", name)),
                JsxAttribute::Expression { name, expr, .. } => {
                    result.add(format!(" {}=\"", name));
                    result.add(self.visit_expression(expr)?);
                    result.add("\"");
                }
                JsxAttribute::Spread { expr, .. } => {
                    self.lower_spread_attribute(expr, result)?;
                }
            }
        }
        Ok(())
    }

    /// Intrinsic spread form: a run-time expansion of the object's own
    /// entries, `key="value"` pairs joined with single spaces, after a
    /// leading space.
    fn lower_spread_attribute(
        &self,
        expr: &o::Expression,
        result: &mut TemplateBuilder,
    ) -> Result<()> {
        let spread = self.visit_expression(expr)?;
        let mut entry_template = TemplateBuilder::new();
        entry_template.add(o::variable("key"));
        entry_template.add("=\"");
        entry_template.add(o::variable("value"));
        entry_template.add("\"");
        let entry_fn = o::Expression::ArrowFn(o::ArrowFunctionExpr {
            params: vec![o::FnParam::ArrayBinding(vec![
                "key".to_string(),
                "value".to_string(),
            ])],
            body: Box::new(entry_template.collapse()),
            type_: None,
            source_span: None,
        });
        result.add(" ");
        result.add(
            o::variable("Object")
                .prop("entries", None)
                .call_fn(vec![spread], None)
                .prop("map", None)
                .call_fn(vec![entry_fn], None)
                .prop("join", None)
                .call_fn(vec![*o::literal(" ")], None),
        );
        Ok(())
    }

    /// Component (object-entry) form of one attribute. A bare attribute
    /// lowers to the boolean `true`.
    fn attribute_to_map_entry(&self, attr: &JsxAttribute) -> Result<o::LiteralMapEntry> {
        match attr {
            JsxAttribute::Plain { name, value, .. } => Ok(o::LiteralMapEntry::Prop {
                key: name.clone(),
                value: match value {
                    Some(text) => o::literal(text.clone()),
                    None => o::literal(true),
                },
                quoted: false,
            }),
            JsxAttribute::Expression { name, expr, .. } => Ok(o::LiteralMapEntry::Prop {
                key: name.clone(),
                value: Box::new(self.visit_expression(expr)?),
                quoted: false,
            }),
            JsxAttribute::Spread { expr, .. } => Ok(o::LiteralMapEntry::Spread {
                expr: Box::new(self.visit_expression(expr)?),
            }),
        }
    }

    fn lower_child(&self, child: &JsxChild, result: &mut TemplateBuilder) -> Result<()> {
        match child {
            JsxChild::Element(element) => self.lower_element(element, result),
            JsxChild::SelfClosing(element) => self.lower_self_closing_element(element, result),
            JsxChild::Fragment(fragment) => self.lower_fragment(fragment, result),
            JsxChild::Text(text) => {
                result.add(normalize_jsx_text(&text.value));
                Ok(())
            }
            JsxChild::Expression(expr) => self.lower_embedded_expression(expr, result),
            JsxChild::Unsupported(node) => Err(TransformError::UnsupportedChildKind {
                kind: node.kind.clone(),
                span: node.span.clone(),
            }),
        }
    }

    /// Embedded child expression: visit it first so nested markup is
    /// lowered, then apply the array-join policy if an oracle is present.
    fn lower_embedded_expression(
        &self,
        expr: &o::Expression,
        result: &mut TemplateBuilder,
    ) -> Result<()> {
        let lowered = self.visit_expression(expr)?;
        if let Some(oracle) = self.type_oracle {
            let ty = oracle.resolve_type(&lowered);
            if oracle.is_array_like(&ty) {
                result.add(
                    lowered
                        .prop("join", None)
                        .call_fn(vec![*o::literal("")], None),
                );
                return Ok(());
            }
        }
        result.add(lowered);
        Ok(())
    }
}

/// One-shot convenience over [`JsxTransformer`].
pub fn transform_expression(
    root: &o::Expression,
    type_oracle: Option<&dyn TypeOracle>,
) -> Result<o::Expression> {
    JsxTransformer::new(type_oracle).transform(root)
}
