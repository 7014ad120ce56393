//! Flat tokenizer for Satori markup.
//!
//! Tags and comments are located with a single pattern; everything between two matches is a
//! text run. Attributes are kept as the raw substring and only parsed by the tree builder, which
//! needs them for open tags alone.

use crate::escape::unescape;
use regex::Regex;
use std::sync::OnceLock;

/// Kind assigned to a tag whose name is empty (`<>`, `</>`, `<!x>`).
pub const TEMPLATE: &str = "template";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text between tags, already unescaped. Never empty.
    Text(String),
    Tag(TagToken<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken<'a> {
    pub name: &'a str,
    pub close: bool,
    pub self_closing: bool,
    /// Attribute substring between the name and the closing `>` / `/>`, unparsed.
    pub raw_attrs: &'a str,
    /// The whole tag exactly as it appears in the input.
    pub source: &'a str,
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"<!--[\s\S]*?-->|<(/?)([^!\s>/]*)([^>]*?)\s*(/?)>").expect("valid regex")
    })
}

fn push_text(tokens: &mut Vec<Token<'_>>, raw: &str) {
    if raw.is_empty() {
        return;
    }
    tokens.push(Token::Text(unescape(raw).into_owned()));
}

/// Splits `source` into text runs and tag tokens. Comments produce no token; text on either side
/// of a comment stays as two separate runs.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0usize;

    for caps in tag_regex().captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_text(&mut tokens, &source[last..whole.start()]);
        last = whole.end();

        if whole.as_str().starts_with("<!--") {
            tracing::trace!(comment = whole.as_str(), "skipping comment");
            continue;
        }

        let name = caps.get(2).map_or("", |m| m.as_str());
        let token = TagToken {
            name: if name.is_empty() { TEMPLATE } else { name },
            close: caps.get(1).is_some_and(|m| !m.as_str().is_empty()),
            self_closing: caps.get(4).is_some_and(|m| !m.as_str().is_empty()),
            raw_attrs: caps.get(3).map_or("", |m| m.as_str()),
            source: whole.as_str(),
        };
        tracing::trace!(
            name = token.name,
            close = token.close,
            self_closing = token.self_closing,
            "tag token"
        );
        tokens.push(Token::Tag(token));
    }

    push_text(&mut tokens, &source[last..]);
    tokens
}
