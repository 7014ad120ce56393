use crate::attrs::{AttrValue, Attributes, push_attrs, push_open_end};
use crate::escape::escape;
use serde::Serialize;
use std::fmt;

/// Kind of the literal text node.
pub const TEXT: &str = "text";

/// Generic parse-tree node.
///
/// Text runs are nodes of kind [`TEXT`] with a single `text` attribute and no children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawNode {
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) attrs: Attributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) children: Vec<RawNode>,
    #[serde(skip)]
    pub(crate) literal_source: Option<String>,
}

impl RawNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: Attributes::new(),
            children: Vec::new(),
            literal_source: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        let mut node = Self::new(TEXT);
        node.attrs
            .insert("text".to_string(), AttrValue::Str(content.into()));
        node
    }

    pub(crate) fn with_attrs(kind: impl Into<String>, attrs: Attributes) -> Self {
        let mut node = Self::new(kind);
        node.attrs = attrs;
        node
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = RawNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    pub fn children(&self) -> &[RawNode] {
        &self.children
    }

    /// Verbatim input for a node that was never confirmed by a matching close tag.
    pub fn literal_source(&self) -> Option<&str> {
        self.literal_source.as_deref()
    }

    /// A text run: kind [`TEXT`], a string `text` attribute and no children. A literal
    /// `<text>...</text>` tag is an ordinary element.
    pub fn is_text(&self) -> bool {
        self.kind == TEXT
            && self.children.is_empty()
            && matches!(self.attrs.get("text"), Some(AttrValue::Str(_)))
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if self.is_text() {
            if let Some(text) = self.attrs.get("text") {
                out.push_str(&text.to_string());
            }
            return;
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Depth-first, pre-order search for nodes of the given kind (including `self`).
    pub fn select(&self, kind: &str) -> Vec<&RawNode> {
        let mut out = Vec::new();
        self.select_into(kind, &mut out);
        out
    }

    fn select_into<'a>(&'a self, kind: &str, out: &mut Vec<&'a RawNode>) {
        if self.kind == kind {
            out.push(self);
        }
        for child in &self.children {
            child.select_into(kind, out);
        }
    }

    fn render_into(&self, out: &mut String) {
        // Only open frames inside the tree builder carry a source; returned nodes never do.
        if let Some(source) = &self.literal_source {
            out.push_str(source);
            return;
        }
        if self.is_text() {
            if let Some(text) = self.attrs.get("text") {
                out.push_str(&escape(&text.to_string()));
            }
            return;
        }

        out.push('<');
        out.push_str(&self.kind);
        push_attrs(out, &self.attrs);
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        push_open_end(out);
        for child in &self.children {
            child.render_into(out);
        }
        out.push_str("</");
        out.push_str(&self.kind);
        out.push('>');
    }
}

impl Drop for RawNode {
    fn drop(&mut self) {
        // Release descendants from a heap stack so deep trees do not recurse on drop.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl fmt::Display for RawNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render_into(&mut out);
        f.write_str(&out)
    }
}

/// Renders a node sequence back to markup.
pub fn render_nodes(nodes: &[RawNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.render_into(&mut out);
    }
    out
}

/// Depth-first, pre-order search across a node sequence.
pub fn select_nodes<'a>(nodes: &'a [RawNode], kind: &str) -> Vec<&'a RawNode> {
    let mut out = Vec::new();
    for node in nodes {
        node.select_into(kind, &mut out);
    }
    out
}
