//! Exported-function scanner for C headers.
//!
//! A declaration is any line carrying the export marker (`GEOS_DLL` by
//! default) followed by `name(`. The argument list may continue over several
//! lines; the declaration ends at the first line ending in `);`.

use super::lexer::{matching_paren, normalize_whitespace, split_top_level, strip_comments};
use super::types::{CSignature, CSignatureTable, CType, RawDeclaration};
use crate::errors::{Error, Result};
use regex::Regex;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Export marker used by the GEOS C API.
pub const DEFAULT_EXPORT_MARKER: &str = "GEOS_DLL";

/// Retired GEOS exports that are never expected to have a binding.
pub const DEPRECATED_GEOS_EXPORTS: &[&str] = &[
    "initGEOS_r",              // deprecated in 3.5
    "finishGEOS_r",            // deprecated in 3.5
    "GEOSGeomFromWKT",         // deprecated
    "GEOSGeomFromWKT_r",       // deprecated
    "GEOSGeomToWKT",           // deprecated
    "GEOSGeomToWKT_r",         // deprecated
    "GEOSSingleSidedBuffer",   // deprecated in 3.3
    "GEOSSingleSidedBuffer_r", // deprecated in 3.3
    "GEOSUnionCascaded",       // deprecated in 3.3
    "GEOSUnionCascaded_r",     // deprecated in 3.3
];

/// Words that can stand alone as a C base type once a declarator name is gone.
const TYPE_QUALIFIERS: &[&str] = &["const", "volatile", "struct", "enum", "union"];

const PRIMITIVE_KEYWORDS: &[&str] = &[
    "void", "char", "short", "int", "long", "float", "double", "signed", "unsigned",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    pub export_marker: String,
    /// Export names dropped from the table unconditionally
    pub ignored: BTreeSet<String>,
}

impl HeaderOptions {
    pub fn new(export_marker: impl Into<String>) -> Self {
        Self {
            export_marker: export_marker.into(),
            ignored: BTreeSet::new(),
        }
    }

    pub fn with_ignored<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(names.into_iter().map(Into::into));
        self
    }
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_MARKER).with_ignored(DEPRECATED_GEOS_EXPORTS.iter().copied())
    }
}

pub struct HeaderScanner {
    marker: Regex,
    ignored: BTreeSet<String>,
}

impl HeaderScanner {
    pub fn new(options: &HeaderOptions) -> Result<Self> {
        let marker = options.export_marker.trim();
        if marker.is_empty() || marker.contains(char::is_whitespace) {
            return Err(Error::InvalidOption(format!(
                "export marker must be a single token, got {:?}",
                options.export_marker
            )));
        }

        let pattern = format!(r"(?:^|\s){}(?:\s|$)", regex::escape(marker));
        let marker = Regex::new(&pattern)
            .map_err(|e| Error::InvalidOption(format!("export marker {marker:?}: {e}")))?;

        Ok(Self {
            marker,
            ignored: options.ignored.clone(),
        })
    }

    /// Collect every exported declaration, keyed by function name.
    ///
    /// A name declared twice keeps the last declaration.
    pub fn scan(&self, header: &str) -> CSignatureTable {
        let stripped = strip_comments(header);
        let lines: Vec<&str> = stripped.lines().collect();
        let mut table = CSignatureTable::new();
        let mut pos = 0;

        while pos < lines.len() {
            if !self.is_declaration_start(lines[pos]) {
                pos += 1;
                continue;
            }

            let start = pos;
            let mut text = lines[pos].trim().to_string();
            while !lines[pos].trim_end().ends_with(");") {
                pos += 1;
                if pos == lines.len() {
                    warn!(line = start + 1, "Header declaration is never terminated");
                    break;
                }
                text.push(' ');
                text.push_str(lines[pos].trim());
            }

            let raw = RawDeclaration {
                text,
                line: start + 1,
            };
            match self.parse_declaration(&raw) {
                Some(signature) if self.ignored.contains(&signature.name) => {
                    debug!(name = %signature.name, "Skipping ignored export");
                }
                Some(signature) => {
                    table.insert(signature.name.clone(), signature);
                }
                None => debug!(line = raw.line, "Could not parse exported declaration"),
            }
            pos += 1;
        }

        table
    }

    fn is_declaration_start(&self, line: &str) -> bool {
        if line.trim_start().starts_with('#') {
            return false;
        }
        self.marker
            .find(line)
            .is_some_and(|m| line[m.end()..].contains('('))
    }

    fn parse_declaration(&self, raw: &RawDeclaration) -> Option<CSignature> {
        let marker = self.marker.find(&raw.text)?;
        let prefix = &raw.text[..marker.start()];
        let rest = &raw.text[marker.end()..];
        let open = rest.find('(')?;

        // Return type words may sit on either side of the marker.
        let head = rest[..open].trim();
        let (leading, mut name) = head
            .rsplit_once(char::is_whitespace)
            .unwrap_or(("", head));
        let mut return_type = prefix
            .split_whitespace()
            .chain(leading.split_whitespace())
            .skip_while(|word| *word == "extern")
            .collect::<Vec<_>>()
            .join(" ");
        while let Some(stripped) = name.strip_prefix('*') {
            return_type.push('*');
            name = stripped.trim_start();
        }

        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }

        let close = matching_paren(rest, open).unwrap_or(rest.len());
        Some(CSignature {
            name: name.to_string(),
            parameters: parse_c_arguments(&rest[open + 1..close]),
            return_type: CType::new(return_type),
            line: raw.line,
        })
    }
}

/// Extract the exported functions of `header`.
pub fn extract_c_signatures(header: &str, options: &HeaderOptions) -> Result<CSignatureTable> {
    Ok(HeaderScanner::new(options)?.scan(header))
}

/// Parse the text between a declaration's parentheses into parameter types.
///
/// A list that is exactly `void` declares no parameters.
pub fn parse_c_arguments(text: &str) -> Vec<CType> {
    let parts: Vec<&str> = split_top_level(text, ',')
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts == ["void"] {
        return Vec::new();
    }

    parts.into_iter().map(parse_c_parameter).collect()
}

fn parse_c_parameter(part: &str) -> CType {
    let mut tokens: Vec<String> = part.split_whitespace().map(String::from).collect();
    let mut name = tokens.pop().unwrap_or_default();

    let mut array_levels = 0;
    while let Some(stripped) = strip_array_suffix(&name) {
        array_levels += 1;
        name = stripped.trim_end().to_string();
    }

    // Detached `[]`: the declarator name sits one token further left.
    if name.is_empty()
        && array_levels > 0
        && tokens.len() > 1
        && has_base_word(&tokens[..tokens.len() - 1])
    {
        name = tokens.pop().unwrap_or_default();
    }

    // Nameless parameter such as `int` or `double*`: the "name" is the type.
    if tokens.is_empty() || is_type_word(&name) {
        tokens.push(std::mem::take(&mut name));
    }

    let mut type_text = tokens.join(" ");
    for _ in 0..array_levels {
        type_text.push_str(" *const");
    }
    while let Some(stripped) = name.strip_prefix('*') {
        type_text.push('*');
        name = stripped.to_string();
    }

    CType::new(normalize_whitespace(&type_text).replace("* const", "*const"))
}

/// `name[]` or `name[16]` without its trailing subscript.
fn strip_array_suffix(declarator: &str) -> Option<String> {
    let body = declarator.strip_suffix(']')?;
    let open = body.rfind('[')?;
    Some(body[..open].to_string())
}

fn has_base_word(tokens: &[String]) -> bool {
    tokens
        .iter()
        .any(|token| !TYPE_QUALIFIERS.contains(&token.trim_end_matches('*')))
}

fn is_type_word(token: &str) -> bool {
    let bare = token.trim_start_matches('*');
    bare.ends_with('*') || PRIMITIVE_KEYWORDS.contains(&bare)
}
