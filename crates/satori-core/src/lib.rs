#![forbid(unsafe_code)]

//! Satori message markup: parser + typed element model (headless).
//!
//! Pipeline:
//! - [`lexer::tokenize`] splits markup into text runs and tag tokens
//! - [`tree::build`] nests them, degrading malformed spans to literal text
//! - [`transform()`] maps the raw tree onto typed [`Element`]s
//! - `Display` on [`RawNode`] / [`Element`] renders markup again
//!
//! Parsing never fails. Only the transform step returns errors, and only in strict mode.

pub mod attrs;
pub mod element;
pub mod error;
pub mod escape;
pub mod lexer;
pub mod node;
pub mod registry;
pub mod transform;
pub mod tree;

pub use attrs::{AttrValue, Attributes, parse_attrs};
pub use element::{
    At, Audio, Author, BaseAttrs, Custom, Element, ExtensionElement, File, Image, Link, Message,
    Quote, ResourceAttrs, Sharp, Style, Styled, Text, Video, plain_text, render_elements, select,
};
pub use error::{Error, Result};
pub use escape::{escape, unescape};
pub use lexer::{TagToken, Token, tokenize};
pub use node::{RawNode, render_nodes, select_nodes};
pub use registry::{
    ElementConstructor, ElementRegistry, register_element, registered_constructor,
    unregister_element,
};
pub use transform::{transform, transform_with, transform_with_registry};
pub use tree::{MAX_DEPTH, build, parse};

/// How the transform step treats a typed element missing a required attribute
/// (`sharp.id`, `a.href`, resource `src`).
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl ParseOptions {
    /// Missing required attributes are returned as [`Error::MissingAttribute`].
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Missing required attributes default to an empty string.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

/// Parses markup straight to typed elements.
pub fn parse_elements(text: &str, options: ParseOptions) -> Result<Vec<Element>> {
    transform_with(&parse(text), options)
}

/// Parses, transforms and renders again. Applying it to its own output returns the same string.
pub fn normalize(text: &str, options: ParseOptions) -> Result<String> {
    Ok(render_elements(&parse_elements(text, options)?))
}

#[cfg(test)]
mod tests;
