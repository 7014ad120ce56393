//! Raw node tree → typed elements.

use crate::attrs::{AttrValue, Attributes};
use crate::element::{
    At, Audio, Author, BaseAttrs, Custom, Element, File, Image, Link, Message, Quote,
    ResourceAttrs, Sharp, Style, Styled, Text, Video,
};
use crate::node::{RawNode, TEXT};
use crate::registry::{ElementConstructor, ElementRegistry, registered_constructor};
use crate::{Error, ParseOptions, Result};

/// Transforms with [`ParseOptions::default`] and the process-wide registry.
pub fn transform(nodes: &[RawNode]) -> Result<Vec<Element>> {
    transform_with(nodes, ParseOptions::default())
}

pub fn transform_with(nodes: &[RawNode], options: ParseOptions) -> Result<Vec<Element>> {
    Transformer {
        options,
        registry: None,
    }
    .nodes(nodes)
}

/// Like [`transform_with`], but consults `registry` instead of the process-wide one.
pub fn transform_with_registry(
    nodes: &[RawNode],
    options: ParseOptions,
    registry: &ElementRegistry,
) -> Result<Vec<Element>> {
    Transformer {
        options,
        registry: Some(registry),
    }
    .nodes(nodes)
}

struct Transformer<'r> {
    options: ParseOptions,
    registry: Option<&'r ElementRegistry>,
}

impl Transformer<'_> {
    fn lookup(&self, tag: &str) -> Option<ElementConstructor> {
        match self.registry {
            Some(registry) => registry.get(tag),
            None => registered_constructor(tag),
        }
    }

    fn nodes(&self, nodes: &[RawNode]) -> Result<Vec<Element>> {
        nodes.iter().map(|node| self.node(node)).collect()
    }

    fn node(&self, node: &RawNode) -> Result<Element> {
        let mut attrs = AttrReader::new(node, self.options);
        let element = match node.kind() {
            TEXT if node.is_text() => Element::Text(Text {
                text: attrs.required("text")?,
            }),
            "at" => Element::At(At {
                id: attrs.string("id"),
                name: attrs.string("name"),
                role: attrs.string("role"),
                kind: attrs.string("type"),
                base: attrs.finish(),
            }),
            "sharp" => Element::Sharp(Sharp {
                id: attrs.required("id")?,
                name: attrs.string("name"),
                base: attrs.finish(),
            }),
            "a" | "link" => {
                let display = node.text_content();
                Element::Link(Link {
                    href: attrs.required("href")?,
                    display: (!display.is_empty()).then_some(display),
                    base: attrs.finish(),
                })
            }
            "img" | "image" => Element::Image(Image {
                resource: attrs.resource()?,
                width: attrs.parsed("width", |v| v.as_u64().and_then(|n| u32::try_from(n).ok())),
                height: attrs.parsed("height", |v| {
                    v.as_u64().and_then(|n| u32::try_from(n).ok())
                }),
                base: attrs.finish(),
            }),
            "audio" => Element::Audio(Audio {
                resource: attrs.resource()?,
                duration: attrs.parsed("duration", AttrValue::as_f64),
                poster: attrs.string("poster"),
                base: attrs.finish(),
            }),
            "video" => Element::Video(Video {
                resource: attrs.resource()?,
                duration: attrs.parsed("duration", AttrValue::as_f64),
                poster: attrs.string("poster"),
                base: attrs.finish(),
            }),
            "file" => Element::File(File {
                resource: attrs.resource()?,
                poster: attrs.string("poster"),
                base: attrs.finish(),
            }),
            "br" | "newline" => Element::Br,
            "message" => Element::Message(Message {
                id: attrs.string("id"),
                forward: attrs.flag("forward").unwrap_or(false),
                content: self.nodes(node.children())?,
                base: attrs.finish(),
            }),
            "quote" => Element::Quote(Quote {
                id: attrs.string("id"),
                forward: attrs.flag("forward").unwrap_or(false),
                content: self.nodes(node.children())?,
                base: attrs.finish(),
            }),
            "author" => Element::Author(Author {
                id: attrs.string("id"),
                nickname: attrs.string("nickname"),
                avatar: attrs.string("avatar"),
                base: attrs.finish(),
            }),
            kind => match Style::from_tag(kind) {
                // Style tags wrap a single text run; only the first child is kept.
                Some(style) => Element::Styled(Styled {
                    style,
                    text: node
                        .children()
                        .first()
                        .map(RawNode::text_content)
                        .unwrap_or_default(),
                    base: attrs.finish(),
                }),
                None => self.fallback(node)?,
            },
        };
        Ok(element)
    }

    fn fallback(&self, node: &RawNode) -> Result<Element> {
        let children = self.nodes(node.children())?;
        if let Some(constructor) = self.lookup(node.kind()) {
            tracing::debug!(tag = node.kind(), "dispatching to registered constructor");
            return constructor(node, &children);
        }
        tracing::debug!(tag = node.kind(), "unknown tag kept as custom element");
        Ok(Element::Custom(Custom {
            tag: node.kind().to_string(),
            attrs: node.attrs().clone(),
            children,
        }))
    }
}

/// Moves declared attributes out of a copy of the node's map; whatever is left over becomes the
/// element's [`BaseAttrs`].
struct AttrReader<'a> {
    tag: &'a str,
    attrs: Attributes,
    strict: bool,
}

impl<'a> AttrReader<'a> {
    fn new(node: &'a RawNode, options: ParseOptions) -> Self {
        Self {
            tag: node.kind(),
            attrs: node.attrs().clone(),
            strict: options.strict,
        }
    }

    /// Strings and numbers are read as text; a bare flag stays in the leftovers.
    fn string(&mut self, key: &str) -> Option<String> {
        match self.attrs.get(key)? {
            AttrValue::Str(_) | AttrValue::Number(_) => {
                self.attrs.shift_remove(key).map(|v| v.to_string())
            }
            AttrValue::Bool(_) => None,
        }
    }

    /// In lenient mode a missing or unreadable value becomes `""`, and whatever was under `key`
    /// is dropped so the rendered element carries the key once.
    fn require(&mut self, key: &str, value: Option<String>) -> Result<String> {
        match value {
            Some(value) => Ok(value),
            None if self.strict => Err(Error::MissingAttribute {
                tag: self.tag.to_string(),
                attribute: key.to_string(),
            }),
            None => {
                self.attrs.shift_remove(key);
                Ok(String::new())
            }
        }
    }

    fn required(&mut self, key: &str) -> Result<String> {
        let value = self.string(key);
        self.require(key, value)
    }

    fn flag(&mut self, key: &str) -> Option<bool> {
        self.parsed(key, AttrValue::as_bool)
    }

    /// Takes the attribute only if `read` accepts it; otherwise the raw value is left in place.
    fn parsed<T>(&mut self, key: &str, read: impl Fn(&AttrValue) -> Option<T>) -> Option<T> {
        let value = read(self.attrs.get(key)?)?;
        self.attrs.shift_remove(key);
        Some(value)
    }

    fn resource(&mut self) -> Result<ResourceAttrs> {
        // `url` is the older spelling of `src`, read only when `src` is absent altogether.
        let src = if self.attrs.contains_key("src") {
            self.string("src")
        } else {
            self.string("url")
        };
        Ok(ResourceAttrs {
            src: self.require("src", src)?,
            title: self.string("title"),
            cache: self.flag("cache"),
            timeout: self.parsed("timeout", AttrValue::as_u64),
        })
    }

    fn finish(&mut self) -> BaseAttrs {
        BaseAttrs {
            extra: std::mem::take(&mut self.attrs),
        }
    }
}
