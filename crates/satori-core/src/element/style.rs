use super::BaseAttrs;
use crate::attrs::push_open_end;
use crate::escape::escape;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Code,
    Superscript,
    Subscript,
    Paragraph,
}

impl Style {
    pub const ALL: [Style; 9] = [
        Style::Bold,
        Style::Italic,
        Style::Underline,
        Style::Strikethrough,
        Style::Spoiler,
        Style::Code,
        Style::Superscript,
        Style::Subscript,
        Style::Paragraph,
    ];

    /// Resolves a tag name, including aliases (`strong`, `em`, `ins`, `del`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "b" | "strong" => Style::Bold,
            "i" | "em" => Style::Italic,
            "u" | "ins" => Style::Underline,
            "s" | "del" => Style::Strikethrough,
            "spl" => Style::Spoiler,
            "code" => Style::Code,
            "sup" => Style::Superscript,
            "sub" => Style::Subscript,
            "p" => Style::Paragraph,
            _ => return None,
        })
    }

    /// Canonical tag used when rendering.
    pub fn tag(self) -> &'static str {
        match self {
            Style::Bold => "b",
            Style::Italic => "i",
            Style::Underline => "u",
            Style::Strikethrough => "s",
            Style::Spoiler => "spl",
            Style::Code => "code",
            Style::Superscript => "sup",
            Style::Subscript => "sub",
            Style::Paragraph => "p",
        }
    }
}

/// A style wrapper around a single run of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Styled {
    pub style: Style,
    pub text: String,
    #[serde(rename = "extra", skip_serializing_if = "BaseAttrs::is_empty")]
    pub base: BaseAttrs,
}

impl Styled {
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
            base: BaseAttrs::default(),
        }
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        let tag = self.style.tag();
        out.push('<');
        out.push_str(tag);
        self.base.render_into(out);
        push_open_end(out);
        out.push_str(&escape(&self.text));
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}
