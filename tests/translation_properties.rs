//! Property tests for C-to-Rust type translation.

use bindcheck::{translate_c_type, CanonicalType, PointerKind};
use proptest::prelude::*;

fn plain_keyword() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["void", "char", "short", "int", "long", "float", "double"])
}

fn opaque_name() -> impl Strategy<Value = String> {
    "GEOS[A-Z][A-Za-z]{0,10}(_t)?".prop_map(String::from)
}

proptest! {
    #[test]
    fn prop_translation_is_idempotent(keyword in plain_keyword()) {
        let once = translate_c_type(keyword);
        let twice = translate_c_type(&once.to_string());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_const_and_mut_differ_only_in_pointer_kind(name in opaque_name(), depth in 1usize..4) {
        let stars = "*".repeat(depth);
        let constant = translate_c_type(&format!("const {name}{stars}"));
        let mutable = translate_c_type(&format!("{name} {stars}"));

        prop_assert_eq!(&constant.base, &mutable.base);
        prop_assert_eq!(constant.pointers, vec![PointerKind::Const; depth]);
        prop_assert_eq!(mutable.pointers, vec![PointerKind::Mut; depth]);
    }

    #[test]
    fn prop_array_equals_const_pointer(keyword in plain_keyword(), size in proptest::option::of(1u32..64)) {
        let subscript = size.map(|n| n.to_string()).unwrap_or_default();
        prop_assert_eq!(
            translate_c_type(&format!("{keyword}[{subscript}]")),
            translate_c_type(&format!("{keyword} *const"))
        );
    }

    #[test]
    fn prop_rendered_form_parses_back(name in opaque_name(), depth in 0usize..4, leading_const in any::<bool>()) {
        let c_type = format!("{}{} {}", if leading_const { "const " } else { "" }, name, "*".repeat(depth));
        let translated = translate_c_type(&c_type);
        prop_assert_eq!(CanonicalType::parse_rust(&translated.to_string()), translated);
    }
}

#[test]
fn test_unsigned_int_and_unsigned_char_are_distinct() {
    assert_ne!(translate_c_type("unsigned int"), translate_c_type("unsigned char"));
}
