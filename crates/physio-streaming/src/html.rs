//! HTML escaping.

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text and turn line breaks into `<br>` tags.
pub fn escape_multiline(s: &str) -> String {
    escape_html(s)
        .replace("\r\n", "\n")
        .replace('\n', "<br>\n")
}
