//! Stack-based tree builder with rollback recovery.
//!
//! Open tags become frames on an explicit stack; content is appended to the innermost frame. A
//! frame is attached to its parent only once its matching close tag arrives. Frames that never
//! get one are rolled back: the parent receives the frame's original tag text as a literal text
//! node followed by the children the frame had collected.

use crate::attrs::parse_attrs;
use crate::lexer::{TEMPLATE, Token, tokenize};
use crate::node::RawNode;

/// Most tags that may be open at once. An open tag past this depth is kept as literal text, so
/// every tree the parser returns can be rendered, transformed and serialized without exhausting
/// the stack.
pub const MAX_DEPTH: usize = 128;

struct TreeBuilder {
    /// `stack[0]` is the synthetic root and is never popped.
    stack: Vec<RawNode>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![RawNode::new(TEMPLATE)],
        }
    }

    fn top(&mut self) -> &mut RawNode {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn push_child(&mut self, node: RawNode) {
        self.top().children.push(node);
    }

    /// Demotes the `depth` innermost frames to literal text.
    fn rollback(&mut self, depth: usize) {
        for _ in 0..depth {
            if self.stack.len() <= 1 {
                return;
            }
            let Some(mut frame) = self.stack.pop() else {
                return;
            };
            let source = frame.literal_source.take().unwrap_or_default();
            tracing::debug!(
                kind = frame.kind.as_str(),
                source = source.as_str(),
                children = frame.children.len(),
                "rolling back unclosed tag"
            );
            let parent = self.top();
            parent.children.push(RawNode::text(source));
            parent.children.append(&mut frame.children);
        }
    }

    fn close(&mut self, name: &str, source: &str) {
        let matched = self.stack[1..].iter().rposition(|frame| frame.kind == name);
        let Some(pos) = matched else {
            tracing::debug!(source, "unmatched close tag kept as text");
            self.push_child(RawNode::text(source));
            return;
        };

        // `pos` indexes `stack[1..]`; everything above the matched frame is unclosed.
        let depth = self.stack.len() - 1 - (pos + 1);
        self.rollback(depth);

        let Some(mut element) = self.stack.pop() else {
            return;
        };
        element.literal_source = None;
        self.push_child(element);
    }

    fn open(&mut self, name: &str, raw_attrs: &str, self_closing: bool, source: &str) {
        if !self_closing && self.stack.len() > MAX_DEPTH {
            tracing::debug!(source, "nesting limit reached, tag kept as text");
            self.push_child(RawNode::text(source));
            return;
        }

        let mut node = RawNode::with_attrs(name, parse_attrs(raw_attrs));
        if self_closing {
            self.push_child(node);
            return;
        }
        node.literal_source = Some(source.to_string());
        self.stack.push(node);
    }

    fn finish(mut self) -> Vec<RawNode> {
        let depth = self.stack.len() - 1;
        self.rollback(depth);
        let Some(mut root) = self.stack.pop() else {
            return Vec::new();
        };
        std::mem::take(&mut root.children)
    }
}

/// Reconstructs a nested tree from a token stream. Never fails: unmatched close tags and
/// unclosed open tags degrade to literal text.
pub fn build(tokens: Vec<Token<'_>>) -> Vec<RawNode> {
    let mut builder = TreeBuilder::new();
    for token in tokens {
        match token {
            Token::Text(text) => builder.push_child(RawNode::text(text)),
            Token::Tag(tag) if tag.close => builder.close(tag.name, tag.source),
            Token::Tag(tag) => builder.open(tag.name, tag.raw_attrs, tag.self_closing, tag.source),
        }
    }
    builder.finish()
}

/// Parses Satori markup into a sequence of top-level nodes.
pub fn parse(source: &str) -> Vec<RawNode> {
    build(tokenize(source))
}
