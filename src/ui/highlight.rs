//! Case-insensitive highlighting of the search text inside table cells.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

// Byte length of `needle` matched at the start of `haystack`, if it matches.
fn match_len_at(haystack: &str, needle: &str) -> Option<usize> {
    let mut hay = haystack.char_indices();
    for n in needle.chars() {
        let (_, h) = hay.next()?;
        if !chars_eq_ignore_case(h, n) {
            return None;
        }
    }
    Some(hay.next().map_or(haystack.len(), |(i, _)| i))
}

/// Splits `text` into plain and matching runs. The needle is taken literally;
/// an empty needle highlights nothing.
pub fn highlight<'a>(text: &'a str, needle: &str) -> Vec<Segment<'a>> {
    if needle.is_empty() {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Plain(text)]
        };
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        match match_len_at(&text[pos..], needle) {
            Some(len) => {
                if plain_start < pos {
                    segments.push(Segment::Plain(&text[plain_start..pos]));
                }
                segments.push(Segment::Match(&text[pos..pos + len]));
                pos += len;
                plain_start = pos;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::Plain(&text[plain_start..]));
    }
    segments
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escaped HTML with every match wrapped in `<span class="highlight">`.
pub fn highlight_html(text: &str, needle: &str) -> String {
    highlight(text, needle)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(s) => escape_html(s),
            Segment::Match(s) => format!("<span class=\"highlight\">{}</span>", escape_html(s)),
        })
        .collect()
}
