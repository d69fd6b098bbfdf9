//! `fn` declaration scanner for Rust binding sources.

use super::lexer::{matching_paren, normalize_whitespace, split_top_level, strip_comments};
use super::types::{RawDeclaration, TargetSignature};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

static FN_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[\s;{}])fn\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());
static RETURN_ARROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\)\s*->").unwrap());

/// Collect every `fn` declaration in source order.
///
/// Multi-line declarations are joined until a line ends with `;`, opens a
/// body with `{`, or carries the `) ->` return arrow.
pub fn extract_target_signatures(bindings: &str) -> Vec<TargetSignature> {
    let stripped = strip_comments(bindings);
    let lines: Vec<&str> = stripped.lines().collect();
    let mut signatures = Vec::new();
    let mut pos = 0;

    while pos < lines.len() {
        let Some(name) = FN_DECLARATION.captures(lines[pos]).and_then(|caps| caps.get(1)) else {
            pos += 1;
            continue;
        };

        let start = pos;
        let mut text = lines[pos][name.start()..].trim_end().to_string();
        while !ends_declaration(lines[pos]) {
            pos += 1;
            if pos == lines.len() {
                warn!(line = start + 1, "Binding declaration is never terminated");
                break;
            }
            text.push(' ');
            text.push_str(lines[pos].trim());
        }

        let raw = RawDeclaration {
            text,
            line: start + 1,
        };
        match parse_declaration(&raw) {
            Some(signature) => signatures.push(signature),
            None => debug!(line = raw.line, "Could not parse fn declaration"),
        }
        pos += 1;
    }

    signatures
}

fn ends_declaration(line: &str) -> bool {
    let line = line.trim_end();
    line.ends_with(';') || line.contains('{') || RETURN_ARROW.is_match(line)
}

/// Parse `name(params) -> ret;` text that starts at the function name.
fn parse_declaration(raw: &RawDeclaration) -> Option<TargetSignature> {
    let text = raw.text.as_str();
    let name_len = text
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(text.len());
    let name = &text[..name_len];
    let open = name_len + text[name_len..].find('(')?;
    let close = matching_paren(text, open);

    let params_text = &text[open + 1..close.unwrap_or(text.len())];
    let return_type = close.and_then(|close| parse_return_type(&text[close + 1..]));

    Some(TargetSignature {
        name: name.to_string(),
        parameters: parse_rust_arguments(params_text),
        return_type,
        line: raw.line,
    })
}

/// Parameter types of a Rust parameter list, in order.
///
/// Each parameter's type is everything after its first `:`; a parameter
/// without a colon (such as `...`) is kept whole.
pub fn parse_rust_arguments(text: &str) -> Vec<String> {
    split_top_level(text, ',')
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let ty = part.split_once(':').map_or(part, |(_, ty)| ty);
            normalize_whitespace(ty)
        })
        .collect()
}

/// Text after `->`, up to `;`, `{` or a `where` clause. `()` counts as none.
fn parse_return_type(after_params: &str) -> Option<String> {
    let rest = after_params.trim_start().strip_prefix("->")?;
    let end = [rest.find(';'), rest.find('{'), rest.find(" where ")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(rest.len());
    let ty = normalize_whitespace(&rest[..end]);

    if ty.is_empty() || ty == "()" {
        None
    } else {
        Some(ty)
    }
}
