use crate::*;
use serde_json::json;

fn elements(src: &str) -> Vec<Element> {
    parse_elements(src, ParseOptions::strict()).unwrap()
}

#[test]
fn transform_maps_builtin_tags() {
    let out = elements(r#"hi <at id="1" name="alice"/><sharp id="c"/><img src="a.png"/>"#);
    assert_eq!(out.len(), 4);
    assert_eq!(out[0], Element::text("hi "));
    assert_eq!(out[1], Element::At(At::user("1").name("alice")));
    assert_eq!(out[2], Element::sharp("c"));
    assert_eq!(out[3], Element::image("a.png"));
}

#[test]
fn transform_mention_everyone() {
    let out = elements(r#"<at type="all"/><at type="here"/>"#);
    assert_eq!(out, vec![Element::At(At::all()), Element::At(At::here())]);
}

#[test]
fn transform_unknown_tag_is_custom_passthrough() {
    let out = elements(r#"<qq:passive id="123"/>"#);
    let Element::Custom(custom) = &out[0] else {
        panic!("expected custom element, got {:?}", out[0]);
    };
    assert_eq!(custom.tag, "qq:passive");
    assert_eq!(custom.attrs.get("id"), Some(&AttrValue::from("123")));
    assert_eq!(out[0].tag(), "qq:passive");
}

#[test]
fn transform_boolean_cache_forms() {
    let out = elements(r#"<img src="a" no-cache/><img src="b" cache/><img src="c"/>"#);
    let caches: Vec<Option<bool>> = out
        .iter()
        .map(|e| match e {
            Element::Image(img) => img.resource.cache,
            other => panic!("expected image, got {other:?}"),
        })
        .collect();
    assert_eq!(caches, [Some(false), Some(true), None]);
}

#[test]
fn transform_keeps_undeclared_and_unreadable_attributes() {
    let out = elements(r#"<img src="a.png" width="abc" height="20" platform="qq"/>"#);
    let Element::Image(img) = &out[0] else {
        panic!("expected image");
    };
    assert_eq!(img.width, None);
    assert_eq!(img.height, Some(20));
    let extra: Vec<&str> = img.base.extra.keys().map(String::as_str).collect();
    assert_eq!(extra, ["width", "platform"]);
    assert_eq!(img.base.extra["width"], AttrValue::from("abc"));
}

#[test]
fn transform_style_tags_keep_first_child_text() {
    let out = elements("<b>bold</b><em>it<at id=\"1\"/></em><code></code>");
    assert_eq!(
        out,
        vec![
            Element::styled(Style::Bold, "bold"),
            Element::styled(Style::Italic, "it"),
            Element::styled(Style::Code, ""),
        ]
    );
}

#[test]
fn transform_line_breaks() {
    let out = elements("a<br/>b<newline/>");
    assert_eq!(out[1], Element::Br);
    assert_eq!(out[3], Element::Br);
    assert_eq!(plain_text(&out), "a\nb\n");
}

#[test]
fn transform_links() {
    let out = elements(r#"<a href="https://x.test"/><link href="https://y.test">y</link>"#);
    assert_eq!(out[0], Element::link("https://x.test"));
    assert_eq!(
        out[1],
        Element::Link(Link::new("https://y.test").display("y"))
    );
}

#[test]
fn transform_recurses_into_containers() {
    let out = elements(
        r#"<message forward><message id="1"><author id="u1" nickname="A"/>one</message><message id="2">two</message></message>"#,
    );
    let expected = Message::new().forward(true).content([
        Element::from(
            Message::new()
                .id("1")
                .content([Element::Author(Author::new("u1").nickname("A")), "one".into()]),
        ),
        Element::from(Message::new().id("2").content(["two"])),
    ]);
    assert_eq!(out, vec![Element::from(expected)]);
    assert_eq!(plain_text(&out), "onetwo");
    assert_eq!(select(&out, "message").len(), 3);
    assert_eq!(select(&out, "author").len(), 1);
}

#[test]
fn transform_quote_with_content() {
    let out = elements(r#"<quote id="9">hi</quote>rest"#);
    assert_eq!(
        out,
        vec![
            Element::from(Quote::new("9").content(["hi"])),
            Element::text("rest"),
        ]
    );
}

#[test]
fn strict_transform_reports_missing_required_attribute() {
    let err = parse_elements("<img/>", ParseOptions::strict()).unwrap_err();
    assert!(matches!(
        &err,
        Error::MissingAttribute { tag, attribute } if tag == "img" && attribute == "src"
    ));
    assert_eq!(err.to_string(), "<img> is missing required attribute `src`");

    assert!(parse_elements("<sharp/>", ParseOptions::strict()).is_err());
    assert!(parse_elements("<a>x</a>", ParseOptions::strict()).is_err());
}

#[test]
fn strict_is_the_default() {
    assert!(transform(&parse("<video/>")).is_err());
}

#[test]
fn lenient_transform_defaults_missing_attributes() {
    let out = parse_elements("<img/><sharp/>", ParseOptions::lenient()).unwrap();
    assert_eq!(out, vec![Element::image(""), Element::sharp("")]);
}

#[test]
fn flag_valued_string_field_stays_in_extras() {
    let out = elements("<at id/>");
    let Element::At(at) = &out[0] else {
        panic!("expected at");
    };
    assert_eq!(at.id, None);
    assert_eq!(at.base.extra.get("id"), Some(&AttrValue::Bool(true)));
    assert_eq!(out[0].to_string(), "<at id/>");
}

#[test]
fn elements_serialize_with_tag_discriminant() {
    let out = elements(r#"<at id="1"/><b>x</b><br/><qq:x k="v"/>"#);
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!([
            { "element": "at", "id": "1" },
            { "element": "styled", "style": "bold", "text": "x" },
            { "element": "br" },
            { "element": "custom", "tag": "qq:x", "attrs": { "k": "v" } },
        ])
    );
}

#[test]
fn literal_text_tag_transforms_as_custom() {
    let out = elements("<text>hi</text> there");
    let Element::Custom(custom) = &out[0] else {
        panic!("expected custom element, got {:?}", out[0]);
    };
    assert_eq!(custom.tag, "text");
    assert_eq!(custom.children, vec![Element::text("hi")]);
    assert_eq!(plain_text(&out), "hi there");

    assert_eq!(
        normalize("<text>hi</text> there", ParseOptions::strict()).unwrap(),
        "<text>hi</text> there"
    );
    assert_eq!(normalize("<text/>", ParseOptions::strict()).unwrap(), "<text/>");
}

#[test]
fn lenient_default_replaces_unreadable_required_attribute() {
    let lenient = ParseOptions::lenient();
    let once = normalize(r#"<img url="b" src/>"#, lenient).unwrap();
    assert_eq!(once, r#"<img src="" url="b"/>"#);
    assert_eq!(normalize(&once, lenient).unwrap(), once);

    assert_eq!(normalize("<sharp id/>", lenient).unwrap(), r#"<sharp id=""/>"#);
    assert_eq!(normalize("<a href>x</a>", lenient).unwrap(), r#"<a href="">x</a>"#);
}
