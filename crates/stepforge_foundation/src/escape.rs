//! Literal escaping for generated JavaScript/TypeScript source.
//!
//! Every escaping function has an inverse so that the literal step text can
//! be recovered from generated declarations.

/// Characters with meaning inside a JavaScript regular-expression literal.
const REGEX_META: &[char] = &[
    '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')', '[', ']', '{', '}', '/',
];

/// Escapes text for a string literal delimited by `quote`.
#[must_use]
pub fn escape_string_literal(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Reverses [`escape_string_literal`] for any quote character.
#[must_use]
pub fn unescape_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => match unicode_escape(chars.as_str()) {
                Some(c) => {
                    out.push(c);
                    chars.nth(3);
                }
                None => out.push('u'),
            },
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Decodes the four hex digits of a `\uXXXX` escape.
fn unicode_escape(rest: &str) -> Option<char> {
    let hex = rest.get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Escapes text for the body of a `/.../` regular-expression literal.
#[must_use]
pub fn escape_regex_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if REGEX_META.contains(&c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Reverses [`escape_regex_literal`].
#[must_use]
pub fn unescape_regex_literal(text: &str) -> String {
    // Same escape vocabulary: a backslash always precedes a literal
    // character, one of n/r/t, or a `u` line-separator escape.
    unescape_string_literal(text)
}

/// Escapes text so it stays on one comment line.
///
/// JavaScript also ends a line comment at U+2028 and U+2029.
#[must_use]
pub fn escape_comment_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Renders text as a single-quoted JavaScript string literal.
#[must_use]
pub fn js_string(text: &str) -> String {
    format!("'{}'", escape_string_literal(text, '\''))
}
