use super::{BaseAttrs, Element, push_opt_attr, render_children};
use crate::attrs::{Attributes, push_attrs};
use serde::Serialize;

/// A message, or with `forward` set, a bundle of forwarded messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub forward: bool,
    pub content: Vec<Element>,
    #[serde(rename = "extra", skip_serializing_if = "BaseAttrs::is_empty")]
    pub base: BaseAttrs,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn forward(mut self, forward: bool) -> Self {
        self.forward = forward;
        self
    }

    pub fn content<E: Into<Element>>(mut self, content: impl IntoIterator<Item = E>) -> Self {
        self.content.extend(content.into_iter().map(Into::into));
        self
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str("<message");
        push_opt_attr(out, "id", self.id.as_deref());
        if self.forward {
            out.push_str(" forward");
        }
        self.base.render_into(out);
        render_children(out, "message", &self.content);
    }
}

/// A reply reference; `content` optionally carries the quoted message body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Quote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub forward: bool,
    pub content: Vec<Element>,
    #[serde(rename = "extra", skip_serializing_if = "BaseAttrs::is_empty")]
    pub base: BaseAttrs,
}

impl Quote {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn forward(mut self, forward: bool) -> Self {
        self.forward = forward;
        self
    }

    pub fn content<E: Into<Element>>(mut self, content: impl IntoIterator<Item = E>) -> Self {
        self.content.extend(content.into_iter().map(Into::into));
        self
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push_str("<quote");
        push_opt_attr(out, "id", self.id.as_deref());
        if self.forward {
            out.push_str(" forward");
        }
        self.base.render_into(out);
        render_children(out, "quote", &self.content);
    }
}

/// Any tag without a built-in type or a registered constructor, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Custom {
    pub tag: String,
    pub attrs: Attributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Custom {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        push_attrs(out, &self.attrs);
        render_children(out, &self.tag, &self.children);
    }
}
