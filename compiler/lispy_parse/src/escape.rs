//! Escape sequence processing for string literals.
//!
//! Recognized escapes: `\a` `\b` `\f` `\n` `\r` `\t` `\v` `\\` `\'` `\"` `\0`.

/// Resolve a single escape character to its replacement.
#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{0B}'),
        '\\' => Some('\\'),
        '\'' => Some('\''),
        '"' => Some('"'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// The escape letter that prints `c`, if `c` needs escaping.
#[inline]
fn escape_letter(c: char) -> Option<char> {
    match c {
        '\u{07}' => Some('a'),
        '\u{08}' => Some('b'),
        '\u{0C}' => Some('f'),
        '\n' => Some('n'),
        '\r' => Some('r'),
        '\t' => Some('t'),
        '\u{0B}' => Some('v'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\0' => Some('0'),
        _ => None,
    }
}

/// Resolve the escape sequences in string literal contents.
///
/// Unrecognized escapes are kept literally (`\q` stays `\q`).
pub fn unescape(s: &str) -> String {
    if !s.contains('\\') {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => match resolve_escape(esc) {
                Some(resolved) => result.push(resolved),
                None => {
                    result.push('\\');
                    result.push(esc);
                }
            },
            None => result.push('\\'),
        }
    }

    result
}

/// Escape a string for printing between double quotes.
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if let Some(letter) = escape_letter(c) {
            result.push('\\');
            result.push(letter);
        } else {
            result.push(c);
        }
    }
    result
}
