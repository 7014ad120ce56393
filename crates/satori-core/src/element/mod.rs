//! Typed Satori message elements.
//!
//! [`Element`] is a closed set of variants. Every variant that can carry attributes embeds a
//! [`BaseAttrs`] holding the attributes its type does not declare, so platform-specific extras
//! survive a parse/render round trip.

mod basic;
mod container;
mod resource;
mod style;

pub use basic::{At, Author, Link, Sharp, Text};
pub use container::{Custom, Message, Quote};
pub use resource::{Audio, File, Image, ResourceAttrs, Video};
pub use style::{Style, Styled};

use crate::attrs::{Attributes, push_attrs, push_open_end};
use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Attributes not declared by the element type, rendered after the declared ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BaseAttrs {
    pub extra: Attributes,
}

impl BaseAttrs {
    pub fn is_empty(&self) -> bool {
        self.extra.is_empty()
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        push_attrs(out, &self.extra);
    }
}

/// A value produced by a constructor registered through [`crate::registry`].
pub trait ExtensionElement: fmt::Debug + Send + Sync {
    fn tag(&self) -> &str;

    /// Markup for this element.
    fn render(&self) -> String;

    fn as_any(&self) -> &dyn Any;

    fn plain_text(&self) -> String {
        String::new()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum Element {
    Text(Text),
    At(At),
    Sharp(Sharp),
    Link(Link),
    Image(Image),
    Audio(Audio),
    Video(Video),
    File(File),
    Styled(Styled),
    Br,
    Message(Message),
    Quote(Quote),
    Author(Author),
    Custom(Custom),
    Extension(#[serde(serialize_with = "serialize_extension")] Arc<dyn ExtensionElement>),
}

fn serialize_extension<S: Serializer>(
    ext: &Arc<dyn ExtensionElement>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Extension", 2)?;
    state.serialize_field("tag", ext.tag())?;
    state.serialize_field("markup", &ext.render())?;
    state.end()
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Element::Text(a), Element::Text(b)) => a == b,
            (Element::At(a), Element::At(b)) => a == b,
            (Element::Sharp(a), Element::Sharp(b)) => a == b,
            (Element::Link(a), Element::Link(b)) => a == b,
            (Element::Image(a), Element::Image(b)) => a == b,
            (Element::Audio(a), Element::Audio(b)) => a == b,
            (Element::Video(a), Element::Video(b)) => a == b,
            (Element::File(a), Element::File(b)) => a == b,
            (Element::Styled(a), Element::Styled(b)) => a == b,
            (Element::Br, Element::Br) => true,
            (Element::Message(a), Element::Message(b)) => a == b,
            (Element::Quote(a), Element::Quote(b)) => a == b,
            (Element::Author(a), Element::Author(b)) => a == b,
            (Element::Custom(a), Element::Custom(b)) => a == b,
            // Extension values are opaque; compare what they render to.
            (Element::Extension(a), Element::Extension(b)) => {
                a.tag() == b.tag() && a.render() == b.render()
            }
            _ => false,
        }
    }
}

impl Element {
    pub fn text(text: impl Into<String>) -> Self {
        Element::Text(Text::new(text))
    }

    pub fn at(id: impl Into<String>) -> Self {
        Element::At(At::user(id))
    }

    pub fn at_all() -> Self {
        Element::At(At::all())
    }

    pub fn sharp(id: impl Into<String>) -> Self {
        Element::Sharp(Sharp::new(id))
    }

    pub fn link(href: impl Into<String>) -> Self {
        Element::Link(Link::new(href))
    }

    pub fn image(src: impl Into<String>) -> Self {
        Element::Image(Image::new(src))
    }

    pub fn audio(src: impl Into<String>) -> Self {
        Element::Audio(Audio::new(src))
    }

    pub fn video(src: impl Into<String>) -> Self {
        Element::Video(Video::new(src))
    }

    pub fn file(src: impl Into<String>) -> Self {
        Element::File(File::new(src))
    }

    pub fn styled(style: Style, text: impl Into<String>) -> Self {
        Element::Styled(Styled::new(style, text))
    }

    pub fn br() -> Self {
        Element::Br
    }

    /// Canonical tag this element renders with.
    pub fn tag(&self) -> &str {
        match self {
            Element::Text(_) => crate::node::TEXT,
            Element::At(_) => "at",
            Element::Sharp(_) => "sharp",
            Element::Link(_) => "a",
            Element::Image(_) => "img",
            Element::Audio(_) => "audio",
            Element::Video(_) => "video",
            Element::File(_) => "file",
            Element::Styled(s) => s.style.tag(),
            Element::Br => "br",
            Element::Message(_) => "message",
            Element::Quote(_) => "quote",
            Element::Author(_) => "author",
            Element::Custom(c) => &c.tag,
            Element::Extension(e) => e.tag(),
        }
    }

    /// Nested content of container elements.
    pub fn content(&self) -> &[Element] {
        match self {
            Element::Message(m) => &m.content,
            Element::Quote(q) => &q.content,
            Element::Custom(c) => &c.children,
            _ => &[],
        }
    }

    /// Human-readable text of this element. Mentions and resources contribute nothing.
    pub fn plain_text(&self) -> String {
        match self {
            Element::Text(t) => t.text.clone(),
            Element::Styled(s) => s.text.clone(),
            Element::Br => "\n".to_string(),
            Element::Link(l) => l.display.clone().unwrap_or_else(|| l.href.clone()),
            Element::Extension(e) => e.plain_text(),
            Element::Message(_) | Element::Quote(_) | Element::Custom(_) => {
                plain_text(self.content())
            }
            _ => String::new(),
        }
    }

    fn content_mut(&mut self) -> Option<&mut Vec<Element>> {
        match self {
            Element::Message(m) => Some(&mut m.content),
            Element::Quote(q) => Some(&mut q.content),
            Element::Custom(c) => Some(&mut c.children),
            _ => None,
        }
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        match self {
            Element::Text(t) => t.render_into(out),
            Element::At(a) => a.render_into(out),
            Element::Sharp(s) => s.render_into(out),
            Element::Link(l) => l.render_into(out),
            Element::Image(i) => i.render_into(out),
            Element::Audio(a) => a.render_into(out),
            Element::Video(v) => v.render_into(out),
            Element::File(f) => f.render_into(out),
            Element::Styled(s) => s.render_into(out),
            Element::Br => out.push_str("<br/>"),
            Element::Message(m) => m.render_into(out),
            Element::Quote(q) => q.render_into(out),
            Element::Author(a) => a.render_into(out),
            Element::Custom(c) => c.render_into(out),
            Element::Extension(e) => out.push_str(&e.render()),
        }
    }
}

impl Drop for Element {
    fn drop(&mut self) {
        let Some(content) = self.content_mut() else {
            return;
        };
        // Nested content is released from a heap stack instead of recursively.
        let mut pending = std::mem::take(content);
        while let Some(mut element) = pending.pop() {
            if let Some(content) = element.content_mut() {
                pending.append(content);
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render_into(&mut out);
        f.write_str(&out)
    }
}

macro_rules! impl_into_element {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Element {
                fn from(value: $ty) -> Self {
                    Element::$ty(value)
                }
            }
        )*
    };
}

impl_into_element!(
    Text, At, Sharp, Link, Image, Audio, Video, File, Styled, Message, Quote, Author, Custom,
);

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::text(value)
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::text(value)
    }
}

/// Renders an element sequence back to markup.
pub fn render_elements(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        element.render_into(&mut out);
    }
    out
}

/// Concatenated [`Element::plain_text`] of a sequence.
pub fn plain_text(elements: &[Element]) -> String {
    elements.iter().map(Element::plain_text).collect()
}

/// Depth-first, pre-order search for elements whose canonical tag is `tag`, descending into
/// container content.
pub fn select<'a>(elements: &'a [Element], tag: &str) -> Vec<&'a Element> {
    let mut out = Vec::new();
    select_into(elements, tag, &mut out);
    out
}

fn select_into<'a>(elements: &'a [Element], tag: &str, out: &mut Vec<&'a Element>) {
    for element in elements {
        if element.tag() == tag {
            out.push(element);
        }
        select_into(element.content(), tag, out);
    }
}

pub(crate) fn render_children(out: &mut String, tag: &str, content: &[Element]) {
    if content.is_empty() {
        out.push_str("/>");
        return;
    }
    push_open_end(out);
    for element in content {
        element.render_into(out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

pub(crate) fn push_opt_attr(out: &mut String, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        crate::attrs::push_str_attr(out, key, value);
    }
}
