use crate::escape::{escape, unescape};
use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Insertion-ordered attribute map. Order of appearance in the source is preserved so that
/// re-rendering a parsed node reproduces its attributes in the same order.
pub type Attributes = IndexMap<String, AttrValue>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
    /// Never produced by the parser; exists for programmatically built nodes.
    Number(f64),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            AttrValue::Str(s) if s == "true" => Some(true),
            AttrValue::Str(s) if s == "false" => Some(false),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Str(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            AttrValue::Bool(_) => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            AttrValue::Number(n) if *n >= 0.0 && n.fract() == 0.0 && *n <= u64::MAX as f64 => {
                Some(*n as u64)
            }
            AttrValue::Str(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<u64> for AttrValue {
    fn from(value: u64) -> Self {
        AttrValue::Number(value as f64)
    }
}

fn attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([^\s=]+)(?:="([^"]*)"|='([^']*)')?"#).expect("valid regex")
    })
}

/// Parses the raw attribute substring of a tag.
///
/// - `key="v"` / `key='v'` store the unescaped value
/// - a bare `key` stores `true`
/// - a bare `no-key` stores `key = false`
///
/// Fragments the grammar cannot match (a stray `=`, an unterminated quote) are skipped; this
/// never fails.
pub fn parse_attrs(raw: &str) -> Attributes {
    let mut attrs = Attributes::new();
    for caps in attr_regex().captures_iter(raw) {
        let Some(key) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        let value = caps.get(2).or_else(|| caps.get(3));
        match value {
            Some(v) => {
                attrs.insert(key.to_string(), AttrValue::Str(unescape(v.as_str()).into_owned()));
            }
            None => match key.strip_prefix("no-") {
                Some(negated) => {
                    attrs.insert(negated.to_string(), AttrValue::Bool(false));
                }
                None => {
                    attrs.insert(key.to_string(), AttrValue::Bool(true));
                }
            },
        }
    }
    attrs
}

/// Appends ` key...` in canonical form: `true` → bare key, `false` → `no-key`, numbers unquoted,
/// strings quoted and escaped.
pub(crate) fn push_attr(out: &mut String, key: &str, value: &AttrValue) {
    match value {
        AttrValue::Bool(true) => {
            out.push(' ');
            out.push_str(key);
        }
        AttrValue::Bool(false) => {
            out.push_str(" no-");
            out.push_str(key);
        }
        AttrValue::Number(n) => {
            out.push(' ');
            out.push_str(key);
            out.push('=');
            out.push_str(&n.to_string());
        }
        AttrValue::Str(s) => push_str_attr(out, key, s),
    }
}

pub(crate) fn push_str_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

pub(crate) fn push_attrs(out: &mut String, attrs: &Attributes) {
    for (key, value) in attrs {
        push_attr(out, key, value);
    }
}

/// Ends an open tag that will have content. A bare attribute key may end in `/`, which would
/// otherwise read back as a self-closing tag.
pub(crate) fn push_open_end(out: &mut String) {
    if out.ends_with('/') {
        out.push(' ');
    }
    out.push('>');
}
