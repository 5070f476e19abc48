// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Make a cell safe inside a pipe table: collapse whitespace
/// (newlines included), escape unescaped `|`.
pub fn markdown_cell(s: &str) -> String {
    let flat = normalize_ws(s);
    let mut out = String::with_capacity(flat.len());
    let mut escaped = false;
    for ch in flat.chars() {
        if ch == '|' && !escaped {
            out.push('\\');
        }
        out.push(ch);
        escaped = ch == '\\' && !escaped;
    }
    out
}
