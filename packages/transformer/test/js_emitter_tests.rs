//! JavaScript printing of output trees.

#[path = "util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::*;
    use jsx_transform::markup::ast::JsxAttribute;
    use jsx_transform::output::output_ast::{
        jsx, literal, literal_arr, literal_map, variable, ArrowFunctionExpr, BinaryOperator,
        BinaryOperatorExpr, ConditionalExpr, Expression, FnParam, LiteralMapEntry, LiteralValue,
        TemplateLiteralElement, TemplateLiteralExpr,
    };
    use jsx_transform::{EmitError, JsEmitter};

    #[test]
    fn string_literals_are_single_quoted_and_escaped() {
        assert_eq!(emit(&literal("plain")), "'plain'");
        assert_eq!(emit(&literal("it's")), r"'it\'s'");
        assert_eq!(emit(&literal("a\\b")), r"'a\\b'");
        assert_eq!(emit(&literal("line\nbreak")), r"'line\nbreak'");
    }

    #[test]
    fn number_and_keyword_literals() {
        assert_eq!(emit(&literal(42.0)), "42");
        assert_eq!(emit(&literal(1.5)), "1.5");
        assert_eq!(emit(&literal(true)), "true");
        assert_eq!(
            emit(&Expression::Literal(
                jsx_transform::output::output_ast::LiteralExpr {
                    value: LiteralValue::Null,
                    type_: None,
                    source_span: None,
                }
            )),
            "null"
        );
    }

    #[test]
    fn template_text_escapes_backticks_and_interpolation_starts() {
        let template = Expression::TemplateLiteral(TemplateLiteralExpr {
            elements: vec![
                TemplateLiteralElement::new("a `b` ${c} "),
                TemplateLiteralElement::new(""),
            ],
            expressions: vec![*variable("x")],
        });
        assert_eq!(emit(&template), "`a \\`b\\` \\${c} ${x}`");
    }

    #[test]
    fn object_keys_are_quoted_when_not_identifiers() {
        let map = literal_map(vec![
            LiteralMapEntry::Prop {
                key: "data-x".to_string(),
                value: literal(1.0),
                quoted: false,
            },
            LiteralMapEntry::Prop {
                key: "ok".to_string(),
                value: literal(true),
                quoted: false,
            },
        ]);
        assert_eq!(emit(&map), "{'data-x': 1, ok: true}");
    }

    #[test]
    fn array_binding_parameters() {
        let arrow = Expression::ArrowFn(ArrowFunctionExpr {
            params: vec![FnParam::ArrayBinding(vec![
                "key".to_string(),
                "value".to_string(),
            ])],
            body: variable("key"),
            type_: None,
            source_span: None,
        });
        assert_eq!(emit(&arrow), "([key, value]) => key");
    }

    #[test]
    fn object_literal_arrow_bodies_are_parenthesized() {
        let arrow = Expression::ArrowFn(ArrowFunctionExpr {
            params: vec![FnParam::Named("v".to_string())],
            body: literal_map(vec![LiteralMapEntry::Prop {
                key: "v".to_string(),
                value: variable("v"),
                quoted: false,
            }]),
            type_: None,
            source_span: None,
        });
        assert_eq!(emit(&arrow), "(v) => ({v: v})");
    }

    #[test]
    fn binary_receivers_are_parenthesized() {
        let sum = Expression::BinaryOp(BinaryOperatorExpr {
            operator: BinaryOperator::Plus,
            lhs: variable("a"),
            rhs: variable("b"),
            type_: None,
            source_span: None,
        });
        assert_eq!(emit(&sum.prop("length", None)), "(a + b).length");
    }

    #[test]
    fn conditionals_and_arrays() {
        let cond = Expression::Conditional(ConditionalExpr {
            condition: variable("ok"),
            true_case: literal("y"),
            false_case: None,
            type_: None,
            source_span: None,
        });
        assert_eq!(emit(&cond), "ok ? 'y' : null");
        assert_eq!(
            emit(&literal_arr(vec![*literal(1.0), *literal(2.0)])),
            "[1, 2]"
        );
    }

    #[test]
    fn unlowered_markup_is_refused() {
        let markup = jsx(element("div", vec![], vec![]));
        let result = JsEmitter::new().emit_expression(&markup);
        assert!(matches!(result, Err(EmitError::UnloweredMarkup)));
    }

    #[test]
    fn lowered_markup_emits_end_to_end() {
        let node = element(
            "div",
            vec![JsxAttribute::expression("class", *variable("c"))],
            vec![expr_child(*variable("x"))],
        );
        assert_eq!(lower_to_js(node), r#"`<div class="${c}">${x}</div>`"#);
    }
}
