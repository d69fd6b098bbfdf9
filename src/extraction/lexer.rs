//! Minimal lexing helpers shared by the header and binding scanners.
//!
//! Neither input is parsed by a real front end. These helpers only know enough
//! about C and Rust surface syntax to blank out comments, balance parentheses
//! and split argument lists on their top-level commas.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Code,
    LineComment,
    BlockComment,
    StringLiteral,
}

/// Replace `//` and `/* */` comments with spaces.
///
/// Newlines are always kept so line numbers in the stripped text match the
/// original. Double-quoted string literals are copied verbatim, which keeps a
/// `"//"` inside `#[link(...)]` or a C string from swallowing the rest of the
/// line.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut state = LexState::Code;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            LexState::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push_str("  ");
                    state = LexState::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push_str("  ");
                    state = LexState::BlockComment;
                }
                '\'' if chars.peek() == Some(&'"') => {
                    // '"' char literal, not the start of a string
                    out.push(c);
                    out.extend(chars.next());
                }
                '"' => {
                    out.push(c);
                    state = LexState::StringLiteral;
                }
                _ => out.push(c),
            },
            LexState::LineComment => {
                if c == '\n' {
                    out.push('\n');
                    state = LexState::Code;
                } else {
                    out.push(' ');
                }
            }
            LexState::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    state = LexState::Code;
                } else if c == '\n' {
                    out.push('\n');
                } else {
                    out.push(' ');
                }
            }
            LexState::StringLiteral => {
                out.push(c);
                if c == '\\' {
                    out.extend(chars.next());
                } else if c == '"' {
                    state = LexState::Code;
                }
            }
        }
    }

    out
}

/// Byte index of the `)` closing the `(` at `open`, if any.
pub fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(open + idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on `separator` where it is not nested inside `()`, `[]`, `{}` or `<>`.
///
/// The `>` of a Rust `->` arrow does not close an angle bracket.
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut prev = '\0';

    for (idx, c) in text.char_indices() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            '>' if prev != '-' => depth = depth.saturating_sub(1),
            _ if c == separator && depth == 0 => {
                parts.push(&text[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
        prev = c;
    }
    parts.push(&text[start..]);

    parts
}

/// Collapse runs of whitespace into single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
