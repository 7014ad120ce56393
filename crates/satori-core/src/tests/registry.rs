use crate::*;
use std::any::Any;
use std::sync::Arc;

#[derive(Debug)]
struct Button {
    id: String,
    label: String,
}

impl ExtensionElement for Button {
    fn tag(&self) -> &str {
        "test:button"
    }

    fn render(&self) -> String {
        format!(
            r#"<test:button id="{}">{}</test:button>"#,
            escape(&self.id),
            escape(&self.label)
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn plain_text(&self) -> String {
        self.label.clone()
    }
}

fn button(node: &RawNode, children: &[Element]) -> Result<Element> {
    let Some(id) = node.attr("id").and_then(AttrValue::as_str) else {
        return Err(Error::MissingAttribute {
            tag: node.kind().to_string(),
            attribute: "id".to_string(),
        });
    };
    if id.trim().is_empty() {
        return Err(Error::InvalidAttribute {
            tag: node.kind().to_string(),
            attribute: "id".to_string(),
            value: id.to_string(),
        });
    }
    Ok(Element::Extension(Arc::new(Button {
        id: id.to_string(),
        label: plain_text(children),
    })))
}

fn shout(node: &RawNode, _children: &[Element]) -> Result<Element> {
    Ok(Element::text(node.text_content().to_uppercase()))
}

#[test]
fn local_registry_dispatches_before_custom_fallback() {
    let mut registry = ElementRegistry::new();
    registry.insert("test:button", button);
    assert_eq!(registry.len(), 1);

    let nodes = parse(r#"<test:button id="b1">Go</test:button><test:other/>"#);
    let out = transform_with_registry(&nodes, ParseOptions::strict(), &registry).unwrap();

    let Element::Extension(ext) = &out[0] else {
        panic!("expected extension, got {:?}", out[0]);
    };
    let btn = ext.as_any().downcast_ref::<Button>().unwrap();
    assert_eq!(btn.id, "b1");
    assert_eq!(btn.label, "Go");
    assert_eq!(out[0].tag(), "test:button");
    assert_eq!(out[0].plain_text(), "Go");
    assert_eq!(out[0].to_string(), r#"<test:button id="b1">Go</test:button>"#);

    assert!(matches!(&out[1], Element::Custom(c) if c.tag == "test:other"));
}

#[test]
fn constructor_errors_propagate() {
    let mut registry = ElementRegistry::new();
    registry.insert("test:button", button);
    let nodes = parse("<test:button/>");
    assert!(transform_with_registry(&nodes, ParseOptions::lenient(), &registry).is_err());
}

#[test]
fn constructor_can_reject_attribute_values() {
    let mut registry = ElementRegistry::new();
    registry.insert("test:button", button);
    let nodes = parse(r#"<test:button id=" ">Go</test:button>"#);
    let err = transform_with_registry(&nodes, ParseOptions::strict(), &registry).unwrap_err();
    assert!(matches!(
        &err,
        Error::InvalidAttribute { tag, attribute, value }
            if tag == "test:button" && attribute == "id" && value == " "
    ));
    assert_eq!(
        err.to_string(),
        "<test:button> has invalid value for attribute `id`:  "
    );
}

#[test]
fn builtin_tags_are_not_overridden_by_registry() {
    let mut registry = ElementRegistry::new();
    registry.insert("b", shout);
    let out =
        transform_with_registry(&parse("<b>x</b>"), ParseOptions::strict(), &registry).unwrap();
    assert_eq!(out, vec![Element::styled(Style::Bold, "x")]);
}

#[test]
fn process_wide_registry() {
    register_element("test:shout", shout);
    assert!(registered_constructor("test:shout").is_some());

    let out = parse_elements("<test:shout>hey</test:shout>", ParseOptions::strict()).unwrap();
    assert_eq!(out, vec![Element::text("HEY")]);

    assert!(unregister_element("test:shout").is_some());
    let out = parse_elements("<test:shout>hey</test:shout>", ParseOptions::strict()).unwrap();
    assert!(matches!(&out[0], Element::Custom(c) if c.tag == "test:shout"));
}
