//! Element, attribute and child lowering.

#[path = "util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::*;
    use jsx_transform::markup::ast::JsxAttribute;
    use jsx_transform::markup::normalize_jsx_text;
    use jsx_transform::output::output_ast::{variable, Expression};
    use jsx_transform::transform::is_component_tag;

    #[test]
    fn intrinsic_element_with_text_child() {
        let node = element("div", vec![], vec![text("x")]);
        assert_eq!(lower_to_js(node), "'<div>x</div>'");
    }

    #[test]
    fn empty_intrinsic_element() {
        let node = element("div", vec![], vec![]);
        assert_eq!(lower_to_js(node), "'<div></div>'");
    }

    #[test]
    fn self_closing_intrinsic_element() {
        let node = self_closing("br", vec![]);
        assert_eq!(lower_to_js(node), "'<br/>'");
    }

    #[test]
    fn tag_kind_dispatch_boundary() {
        assert!(is_component_tag("A"));
        assert!(is_component_tag("Button"));
        assert!(!is_component_tag("a"));
        assert!(!is_component_tag("div"));
        assert!(!is_component_tag("my-tag"));

        let component = element("A", vec![], vec![]);
        assert_eq!(lower_to_js(component), "A({children: ''})");

        let intrinsic = element("div", vec![], vec![]);
        assert_eq!(lower_to_js(intrinsic), "'<div></div>'");
    }

    #[test]
    fn plain_attributes_are_used_verbatim() {
        let node = self_closing(
            "input",
            vec![
                JsxAttribute::plain_with_value("type", "text"),
                JsxAttribute::plain("disabled"),
            ],
        );
        assert_eq!(lower_to_js(node), r#"'<input type="text" disabled/>'"#);
    }

    #[test]
    fn expression_attribute_becomes_a_template_hole() {
        let node = element(
            "div",
            vec![JsxAttribute::expression("class", *variable("c"))],
            vec![],
        );
        assert_eq!(lower_to_js(node), r#"`<div class="${c}"></div>`"#);
    }

    #[test]
    fn component_keeps_attribute_order_and_children_last() {
        let node = element(
            "Button",
            vec![
                JsxAttribute::plain_with_value("kind", "primary"),
                JsxAttribute::expression("onClick", *variable("handler")),
            ],
            vec![text("Go")],
        );
        assert_eq!(
            lower_to_js(node),
            "Button({kind: 'primary', onClick: handler, children: 'Go'})"
        );
    }

    #[test]
    fn bare_component_attribute_lowers_to_true() {
        let node = self_closing("Button", vec![JsxAttribute::plain("disabled")]);
        assert_eq!(lower_to_js(node), "Button({disabled: true, children: ''})");
    }

    #[test]
    fn self_closing_component_gets_empty_children() {
        let node = self_closing("Widget", vec![]);
        assert_eq!(lower_to_js(node), "Widget({children: ''})");
    }

    #[test]
    fn component_with_single_expression_child_passes_it_through() {
        let node = element("Card", vec![], vec![expr_child(*variable("x"))]);
        assert_eq!(lower_to_js(node), "Card({children: x})");
    }

    #[test]
    fn component_spread_attribute_stays_an_object_spread() {
        let node = self_closing(
            "Btn",
            vec![
                JsxAttribute::expression("a", *variable("x")),
                JsxAttribute::spread(*variable("rest")),
            ],
        );
        assert_eq!(lower_to_js(node), "Btn({a: x, ...rest, children: ''})");
    }

    #[test]
    fn fragment_is_transparent() {
        let node = fragment(vec![text("a"), child(element("b", vec![], vec![]))]);
        assert_eq!(lower_to_js(node), "'a<b></b>'");
    }

    #[test]
    fn fragment_with_single_expression_child_is_unwrapped() {
        let lowered = lower(fragment(vec![expr_child(*variable("x"))]));
        match lowered {
            Expression::ReadVar(v) => assert_eq!(v.name, "x"),
            other => panic!("expected the expression unchanged, got {:?}", other),
        }
    }

    #[test]
    fn nested_intrinsic_elements() {
        let node = element(
            "ul",
            vec![],
            vec![child(element("li", vec![], vec![expr_child(*variable("item"))]))],
        );
        assert_eq!(lower_to_js(node), "`<ul><li>${item}</li></ul>`");
    }

    #[test]
    fn component_child_inside_intrinsic_element() {
        let node = element("div", vec![], vec![child(self_closing("Badge", vec![]))]);
        assert_eq!(lower_to_js(node), "`<div>${Badge({children: ''})}</div>`");
    }

    #[test]
    fn text_children_are_whitespace_normalized() {
        let node = element("p", vec![], vec![text("\n  Hello\n  World\n  ")]);
        assert_eq!(lower_to_js(node), "'<p>Hello World</p>'");
    }

    #[test]
    fn whitespace_normalization_rules() {
        assert_eq!(normalize_jsx_text("\n  Hello\n  World\n  "), "Hello World");
        assert_eq!(normalize_jsx_text("plain"), "plain");
        assert_eq!(normalize_jsx_text("  edge  "), "edge");
        // interior spaces without newlines are preserved
        assert_eq!(normalize_jsx_text("hi  there"), "hi  there");
        assert_eq!(normalize_jsx_text("\n\n  a\n\n  b\n\n"), "a b");
    }

    #[test]
    fn spread_attribute_expansion_preserves_order() {
        let node = self_closing(
            "div",
            vec![
                JsxAttribute::plain_with_value("a", "1"),
                JsxAttribute::spread(*variable("props")),
                JsxAttribute::plain_with_value("d", "4"),
            ],
        );
        assert_eq!(
            lower_to_js(node),
            r#"`<div a="1" ${Object.entries(props).map(([key, value]) => `${key}="${value}"`).join(' ')} d="4"/>`"#
        );
    }
}
