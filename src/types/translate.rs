//! Translation of C declarators into the canonical Rust form.
//!
//! The rules mirror how a hand-written `extern "C"` block spells C types:
//!
//! - a leading `const` makes every plain `*` a `*const`, otherwise `*mut`
//! - an explicit `* const` and an array suffix (`[]`, `[N]`) always give `*const`
//! - each pointer peeled off the right end is prepended, so the leftmost C
//!   pointer ends up outermost
//! - `unsigned`/`signed` fold into the following integer keyword, and a
//!   second `long` widens `long` to `long long`
//!
//! Only top-level constness is tracked; `const` anywhere but the first token
//! is dropped.

use super::canonical::{BaseType, CanonicalType, PointerKind, Primitive};

#[derive(Debug, Clone, PartialEq, Eq)]
enum DeclToken {
    Word(String),
    Pointer,
    ConstPointer,
}

/// Translate a C type such as `const double *` into its canonical form.
pub fn translate_c_type(c_type: &str) -> CanonicalType {
    let mut tokens = tokenize(c_type);

    let is_outer_const = matches!(tokens.first(), Some(DeclToken::Word(word)) if word == "const");
    tokens.retain(|token| !matches!(token, DeclToken::Word(word) if word == "const"));

    let mut pointers = Vec::new();
    while let Some(last) = tokens.last() {
        let kind = match last {
            DeclToken::Pointer if is_outer_const => PointerKind::Const,
            DeclToken::Pointer => PointerKind::Mut,
            DeclToken::ConstPointer => PointerKind::Const,
            DeclToken::Word(_) => break,
        };
        tokens.pop();
        pointers.insert(0, kind);
    }

    CanonicalType::new(pointers, substitute_base(tokens))
}

/// Split a declarator into words and pointer markers.
///
/// `*` is its own token wherever it appears, `* const` merges into one
/// const-pointer marker, and an array subscript decays to a const pointer.
fn tokenize(c_type: &str) -> Vec<DeclToken> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut chars = c_type.chars();

    let flush = |word: &mut String, tokens: &mut Vec<DeclToken>| {
        if !word.is_empty() {
            tokens.push(DeclToken::Word(std::mem::take(word)));
        }
    };

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                flush(&mut word, &mut tokens);
                tokens.push(DeclToken::Pointer);
            }
            '[' => {
                flush(&mut word, &mut tokens);
                chars.by_ref().find(|&c| c == ']');
                tokens.push(DeclToken::ConstPointer);
            }
            c if c.is_whitespace() => flush(&mut word, &mut tokens),
            c => word.push(c),
        }
    }
    flush(&mut word, &mut tokens);

    let mut merged: Vec<DeclToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match (merged.last(), &token) {
            (Some(DeclToken::Pointer), DeclToken::Word(word)) if word == "const" => {
                merged.pop();
                merged.push(DeclToken::ConstPointer);
            }
            _ => merged.push(token),
        }
    }
    merged
}

/// Replace C keywords with primitives; anything unknown passes through.
fn substitute_base(tokens: Vec<DeclToken>) -> BaseType {
    let mut parts: Vec<BaseType> = Vec::new();
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let word = match token {
            DeclToken::Word(word) => word,
            DeclToken::Pointer => {
                parts.push(BaseType::Named("*".to_string()));
                continue;
            }
            DeclToken::ConstPointer => {
                parts.push(BaseType::Named("*const".to_string()));
                continue;
            }
        };

        let primitive = if word == "unsigned" {
            let unsigned = iter
                .next_if(|next| next_primitive(next).and_then(Primitive::to_unsigned).is_some())
                .and_then(|next| next_primitive(&next))
                .and_then(Primitive::to_unsigned);
            Some(unsigned.unwrap_or(Primitive::UInt))
        } else if word == "signed" {
            let signed = iter
                .next_if(|next| next_primitive(next).and_then(Primitive::to_signed).is_some())
                .and_then(|next| next_primitive(&next))
                .and_then(Primitive::to_signed);
            Some(signed.unwrap_or(Primitive::Int))
        } else {
            lookup_primitive(&word)
        };

        let part = match primitive {
            Some(primitive) => {
                let widened = primitive.widen().filter(|_| {
                    iter.next_if(|next| matches!(next, DeclToken::Word(w) if w == "long"))
                        .is_some()
                });
                BaseType::Primitive(widened.unwrap_or(primitive))
            }
            None => BaseType::Named(word),
        };
        parts.push(part);
    }

    match parts.len() {
        1 => parts.remove(0),
        _ => BaseType::Named(
            parts
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}

/// C keyword or an already-canonical `c_*` alias.
fn lookup_primitive(word: &str) -> Option<Primitive> {
    Primitive::from_c_keyword(word).or_else(|| Primitive::from_rust_name(word))
}

fn next_primitive(token: &DeclToken) -> Option<Primitive> {
    match token {
        DeclToken::Word(word) => lookup_primitive(word),
        _ => None,
    }
}
