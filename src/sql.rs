//! Lexical helpers for rewriting SQL text.
//!
//! This is not a parser. It knows just enough to step over quoted literals,
//! quoted identifiers and comments, so that placeholders, keywords, commas and
//! parentheses inside them are left alone. Dollar-quoted bodies (`$$ ... $$`)
//! and backslash escapes in `E'...'` strings are not recognized.
//!
//! A placeholder is a sigil (`:`, `@` or `$`) followed by one or more
//! `[A-Za-z0-9_]` characters, and not preceded by an identifier character or
//! another sigil. Matching always takes the whole token, so `:p1` never
//! matches the head of `:p10`, and casts like `x::int` are not placeholders.

use memchr::memmem;

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_sigil(b: u8) -> bool {
    matches!(b, b':' | b'@' | b'$')
}

/// If a quoted literal, quoted identifier or comment starts at `i`, return
/// the index just past it. Unterminated ones run to the end of the input.
fn skip_non_code(bytes: &[u8], i: usize) -> Option<usize> {
    match bytes[i] {
        quote @ (b'\'' | b'"') => {
            let mut j = i + 1;
            while let Some(n) = memchr::memchr(quote, &bytes[j..]) {
                let at = j + n;
                // doubled quote is an escaped quote
                if bytes.get(at + 1) == Some(&quote) {
                    j = at + 2;
                    continue;
                }
                return Some(at + 1);
            }
            Some(bytes.len())
        }
        b'-' if bytes.get(i + 1) == Some(&b'-') => {
            Some(memchr::memchr(b'\n', &bytes[i..]).map_or(bytes.len(), |n| i + n + 1))
        }
        b'/' if bytes.get(i + 1) == Some(&b'*') => Some(
            memmem::find(&bytes[i + 2..], b"*/").map_or(bytes.len(), |n| i + 2 + n + 2),
        ),
        _ => None,
    }
}

/// If a placeholder token starts at `i`, return the index just past it.
fn placeholder_end(bytes: &[u8], i: usize) -> Option<usize> {
    if !is_sigil(bytes[i]) {
        return None;
    }
    if i > 0 && (is_ident_byte(bytes[i - 1]) || is_sigil(bytes[i - 1])) {
        return None;
    }
    let len = bytes[i + 1..]
        .iter()
        .take_while(|b| is_ident_byte(**b))
        .count();
    (len > 0).then_some(i + 1 + len)
}

/// Returns true if `name` is a complete placeholder token, e.g. `:id` or `$1`.
pub fn is_placeholder(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 2 && is_sigil(bytes[0]) && bytes[1..].iter().all(|b| is_ident_byte(*b))
}

/// Rewrite every placeholder token in code position for which `f` returns a
/// replacement. Tokens for which `f` returns `None` are kept as they are.
pub fn rewrite_placeholders<F>(sql: &str, mut f: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let bytes = sql.as_bytes();
    let mut out = String::with_capacity(sql.len() + 16);
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if let Some(end) = skip_non_code(bytes, i) {
            i = end;
            continue;
        }
        if let Some(end) = placeholder_end(bytes, i) {
            if let Some(new_name) = f(&sql[i..end]) {
                out.push_str(&sql[copied..i]);
                out.push_str(&new_name);
                copied = end;
            }
            i = end;
            continue;
        }
        i += 1;
    }
    out.push_str(&sql[copied..]);
    out
}

/// Returns true if `keyword` occurs anywhere in `sql`, quoted or not.
pub fn contains(sql: &str, keyword: &str) -> bool {
    memmem::find(sql.as_bytes(), keyword.as_bytes()).is_some()
}

/// Find the first whole-word, case-sensitive occurrence of `keyword` in code position.
pub fn find_keyword(sql: &str, keyword: &str) -> Option<usize> {
    if !contains(sql, keyword) {
        return None;
    }
    let bytes = sql.as_bytes();
    let kw = keyword.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if let Some(end) = skip_non_code(bytes, i) {
            i = end;
            continue;
        }
        if bytes[i..].starts_with(kw)
            && (i == 0 || !is_ident_byte(bytes[i - 1]))
            && bytes.get(i + kw.len()).is_none_or(|b| !is_ident_byte(*b))
        {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Given the index of an opening parenthesis, return the index of its match.
pub fn matching_paren(sql: &str, open: usize) -> Option<usize> {
    let bytes = sql.as_bytes();
    if bytes.get(open) != Some(&b'(') {
        return None;
    }
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        if let Some(end) = skip_non_code(bytes, i) {
            i = end;
            continue;
        }
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Returns true if `sql` ends inside a `--` comment, so that anything appended
/// on the same line would be commented out.
pub fn ends_in_line_comment(sql: &str) -> bool {
    let bytes = sql.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if let Some(end) = skip_non_code(bytes, i) {
            if end == bytes.len() && bytes[i] == b'-' && bytes[end - 1] != b'\n' {
                return true;
            }
            i = end;
            continue;
        }
        i += 1;
    }
    false
}

/// Split on top-level `delimiter`s and trim each part, keeping empty parts.
///
/// Delimiters inside parentheses, quotes or comments do not split.
/// `delimiter` must be an ASCII byte. An empty input yields one empty part.
pub fn split_top_level(s: &str, delimiter: u8) -> Vec<&str> {
    debug_assert!(delimiter.is_ascii());
    let bytes = s.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if let Some(end) = skip_non_code(bytes, i) {
            i = end;
            continue;
        }
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b if b == delimiter && depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(s[start..].trim());
    parts
}

/// Like [`split_top_level`], but drops empty parts.
pub fn split_and_trim(s: &str, delimiter: u8) -> Vec<&str> {
    let mut parts = split_top_level(s, delimiter);
    parts.retain(|p| !p.is_empty());
    parts
}
