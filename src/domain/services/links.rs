#[cfg(test)]
#[path = "links_test.rs"]
mod tests;

const SCHEMES: [&str; 2] = ["https://", "http://"];

fn is_url_char(c: char) -> bool {
    return !(c.is_whitespace() || c == '[' || c == ']' || c == ')');
}

/// Byte offset where the URL starting at `start` ends. A URL is a scheme
/// followed by at least one character that isn't whitespace, `[`, `]` or `)`.
fn url_end(text: &str, start: usize) -> Option<usize> {
    let rest = &text[start..];
    let scheme = SCHEMES.iter().find(|scheme| return rest.starts_with(**scheme))?;
    let after = &rest[scheme.len()..];
    let run = after
        .char_indices()
        .find(|(_, c)| return !is_url_char(*c))
        .map(|(idx, _)| return idx)
        .unwrap_or(after.len());

    if run == 0 {
        return None;
    }

    return Some(start + scheme.len() + run);
}

/// Byte offset where a `[123]` citation marker starting at `start` ends.
fn citation_end(text: &str, start: usize) -> Option<usize> {
    let rest = text[start..].strip_prefix('[')?;
    let digits = rest
        .char_indices()
        .find(|(_, c)| return !c.is_ascii_digit())
        .map(|(idx, _)| return idx)
        .unwrap_or(rest.len());

    if digits == 0 || !rest[digits..].starts_with(']') {
        return None;
    }

    return Some(start + 1 + digits + 1);
}

/// True when the URL is already the target (`](url`) or the label
/// (`[url](`) of a markdown link.
fn is_wrapped(text: &str, start: usize, end: usize) -> bool {
    let before = &text[..start];
    if before.ends_with("](") {
        return true;
    }

    return before.ends_with('[') && text[end..].starts_with("](");
}

fn next_char_boundary(text: &str, idx: usize) -> usize {
    return idx
        + text[idx..]
            .chars()
            .next()
            .map(|c| return c.len_utf8())
            .unwrap_or(1);
}

fn link(url: &str) -> String {
    return format!("[{url}]({url})");
}

/// `https://a.b/c[1]` becomes `[https://a.b/c](https://a.b/c) [1]`.
fn separate_citations(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    let mut copied = 0;
    let mut idx = 0;

    while idx < text.len() {
        let Some(end) = url_end(text, idx) else {
            idx = next_char_boundary(text, idx);
            continue;
        };

        if let Some(citation_end) = citation_end(text, end) {
            res.push_str(&text[copied..idx]);
            res.push_str(&link(&text[idx..end]));
            res.push(' ');
            res.push_str(&text[end..citation_end]);
            copied = citation_end;
            idx = citation_end;
            continue;
        }

        idx = end;
    }

    res.push_str(&text[copied..]);
    return res;
}

fn wrap_bare_urls(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    let mut copied = 0;
    let mut idx = 0;

    while idx < text.len() {
        let Some(end) = url_end(text, idx) else {
            idx = next_char_boundary(text, idx);
            continue;
        };

        if !is_wrapped(text, idx, end) {
            res.push_str(&text[copied..idx]);
            res.push_str(&link(&text[idx..end]));
            copied = end;
        }

        idx = end;
    }

    res.push_str(&text[copied..]);
    return res;
}

/// Turns URLs in an answer into markdown links. URLs glued to a citation
/// marker are split from it first, then every bare URL left is wrapped.
/// Rendering already rendered text returns it unchanged.
pub fn render_links(text: &str) -> String {
    return wrap_bare_urls(&separate_citations(text));
}
