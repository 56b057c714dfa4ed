//! HTML-safe cue text with phrase italicization

use crate::phrase::PhraseMatcher;

/// Escape `& < > " '` for WebVTT cue payloads
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Escape one raw cue line, wrapping every phrase match in `<i>...</i>`.
///
/// Matching runs against the raw line, never against escaped output, so
/// markup cannot nest or double-wrap. Without a matcher the line is only
/// escaped.
pub fn italicize_line(line: &str, matcher: Option<&PhraseMatcher>) -> String {
    let Some(matcher) = matcher else {
        return escape_html(line);
    };

    let mut out = String::with_capacity(line.len() + 16);
    let mut last = 0;

    for m in matcher.find_iter(line) {
        push_escaped(&mut out, &line[last..m.boundary.start]);
        push_escaped(&mut out, &line[m.boundary.clone()]);
        out.push_str("<i>");
        push_escaped(&mut out, &line[m.phrase.clone()]);
        out.push_str("</i>");
        last = m.phrase.end;
    }

    push_escaped(&mut out, &line[last..]);
    out
}
