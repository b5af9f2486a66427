//! Plain-text cleanup for titles, descriptions, and headings.

/// Strip markdown syntax and normalize whitespace.
///
/// Order matters: links and code spans are unwrapped before whitespace
/// collapsing, since removed syntax can leave irregular spacing behind.
pub(crate) fn clean_markdown(text: &str) -> String {
    let text = strip_links(text);
    let text = strip_inline_code(&text);
    let text = strip_emphasis(&text);
    normalize_whitespace(&text)
}

/// `[label](url)` -> `label`. Image syntax (`![alt](src)`) is left alone.
fn strip_links(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'[' || (i > 0 && bytes[i - 1] == b'!') {
            i += 1;
            continue;
        }

        let Some(close_bracket) = text[i + 1..].find(']').map(|rel| i + 1 + rel) else {
            break;
        };
        if close_bracket + 1 >= bytes.len() || bytes[close_bracket + 1] != b'(' {
            i = close_bracket + 1;
            continue;
        }
        let Some(close_paren) = text[close_bracket + 2..]
            .find(')')
            .map(|rel| close_bracket + 2 + rel)
        else {
            i = close_bracket + 1;
            continue;
        };

        out.push_str(&text[copied..i]);
        out.push_str(text[i + 1..close_bracket].trim());
        copied = close_paren + 1;
        i = close_paren + 1;
    }

    out.push_str(&text[copied..]);
    out
}

/// `` `x` `` -> `x`. Unpaired backticks are left alone.
fn strip_inline_code(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'`' {
            i += 1;
            continue;
        }
        let Some(close) = text[i + 1..].find('`').map(|rel| i + 1 + rel) else {
            break;
        };

        out.push_str(&text[copied..i]);
        out.push_str(&text[i + 1..close]);
        copied = close + 1;
        i = close + 1;
    }

    out.push_str(&text[copied..]);
    out
}

/// `**x**` -> `x`, then `*x*` -> `x`.
fn strip_emphasis(text: &str) -> String {
    let stripped = strip_delimited(text, "**");
    strip_delimited(&stripped, "*")
}

fn strip_delimited(text: &str, delim: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    loop {
        let Some(start) = rest.find(delim) else {
            out.push_str(rest);
            return out;
        };
        let after = &rest[start + delim.len()..];
        let Some(end) = after.find(delim) else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..start]);
        out.push_str(&after[..end]);
        rest = &after[end + delim.len()..];
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
