use std::borrow::Cow;

/// Encodes the four characters that are significant in Satori markup (`&`, `"`, `<`, `>`).
///
/// Every other character is copied through untouched. `&` is handled in the same pass as the
/// rest, so already-encoded input is escaped once more rather than being left as-is.
pub fn escape(text: &str) -> Cow<'_, str> {
    // Fast path: nothing to encode.
    if !text.contains(['&', '"', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

const ENTITIES: [(&str, char); 4] = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>'), ("&quot;", '"')];

/// Decodes `&amp;`, `&lt;`, `&gt;` and `&quot;`; any other `&...;` sequence is left alone.
///
/// Decoding is a single left-to-right scan, so a decoded `&` never combines with the text that
/// follows it into a new entity (`&amp;lt;` decodes to `&lt;`, not `<`).
pub fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        match ENTITIES
            .iter()
            .find(|(entity, _)| rest.starts_with(entity))
        {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
