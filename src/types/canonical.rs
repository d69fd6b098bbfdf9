//! Structured, notation-independent representation of an FFI type.

use std::fmt;

/// Prefixes under which the C primitive aliases are commonly imported.
const FFI_PATH_PREFIXES: &[&str] = &["libc::", "std::os::raw::", "std::ffi::", "core::ffi::"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Const,
    Mut,
}

impl PointerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Const => "*const",
            Self::Mut => "*mut",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Void,
    Char,
    SChar,
    UChar,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    LongLong,
    ULongLong,
    Float,
    Double,
}

impl Primitive {
    /// Map a C keyword such as `double` to its primitive.
    pub fn from_c_keyword(word: &str) -> Option<Self> {
        match word {
            "void" => Some(Self::Void),
            "char" => Some(Self::Char),
            "short" => Some(Self::Short),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    /// Map a Rust alias such as `c_double` to its primitive.
    pub fn from_rust_name(name: &str) -> Option<Self> {
        match name {
            "c_void" => Some(Self::Void),
            "c_char" => Some(Self::Char),
            "c_schar" => Some(Self::SChar),
            "c_uchar" => Some(Self::UChar),
            "c_short" => Some(Self::Short),
            "c_ushort" => Some(Self::UShort),
            "c_int" => Some(Self::Int),
            "c_uint" => Some(Self::UInt),
            "c_long" => Some(Self::Long),
            "c_ulong" => Some(Self::ULong),
            "c_longlong" => Some(Self::LongLong),
            "c_ulonglong" => Some(Self::ULongLong),
            "c_float" => Some(Self::Float),
            "c_double" => Some(Self::Double),
            _ => None,
        }
    }

    pub fn rust_name(self) -> &'static str {
        match self {
            Self::Void => "c_void",
            Self::Char => "c_char",
            Self::SChar => "c_schar",
            Self::UChar => "c_uchar",
            Self::Short => "c_short",
            Self::UShort => "c_ushort",
            Self::Int => "c_int",
            Self::UInt => "c_uint",
            Self::Long => "c_long",
            Self::ULong => "c_ulong",
            Self::LongLong => "c_longlong",
            Self::ULongLong => "c_ulonglong",
            Self::Float => "c_float",
            Self::Double => "c_double",
        }
    }

    /// The `unsigned` variant, for the integer types that have one.
    pub fn to_unsigned(self) -> Option<Self> {
        match self {
            Self::Char | Self::UChar => Some(Self::UChar),
            Self::Short | Self::UShort => Some(Self::UShort),
            Self::Int | Self::UInt => Some(Self::UInt),
            Self::Long | Self::ULong => Some(Self::ULong),
            Self::LongLong | Self::ULongLong => Some(Self::ULongLong),
            _ => None,
        }
    }

    /// The `long long` form of `long` and `unsigned long`.
    pub fn widen(self) -> Option<Self> {
        match self {
            Self::Long => Some(Self::LongLong),
            Self::ULong => Some(Self::ULongLong),
            _ => None,
        }
    }

    /// The `signed` variant; only `char` differs from its plain form.
    pub fn to_signed(self) -> Option<Self> {
        match self {
            Self::Char | Self::SChar => Some(Self::SChar),
            Self::Short | Self::Int | Self::Long | Self::LongLong => Some(self),
            _ => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BaseType {
    Primitive(Primitive),
    /// Opaque or unrecognized type, e.g. `GEOSGeometry` or `size_t`
    Named(String),
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(primitive) => f.write_str(primitive.rust_name()),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// A base type wrapped in zero or more raw pointers.
///
/// `pointers` is ordered outermost first, so `*const *mut c_char` is
/// `[Const, Mut]` around `Char`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalType {
    pub pointers: Vec<PointerKind>,
    pub base: BaseType,
}

impl CanonicalType {
    pub fn new(pointers: Vec<PointerKind>, base: BaseType) -> Self {
        Self { pointers, base }
    }

    pub fn primitive(primitive: Primitive) -> Self {
        Self::new(Vec::new(), BaseType::Primitive(primitive))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Vec::new(), BaseType::Named(name.into()))
    }

    pub fn pointer_depth(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_outer_const(&self) -> bool {
        self.pointers.first() == Some(&PointerKind::Const)
    }

    /// Plain `void`: a function returning it returns nothing.
    pub fn is_void(&self) -> bool {
        self.pointers.is_empty() && self.base == BaseType::Primitive(Primitive::Void)
    }

    /// Parse a type written in Rust FFI notation, e.g. `*const libc::c_char`.
    pub fn parse_rust(text: &str) -> Self {
        let mut rest = text.trim();
        let mut pointers = Vec::new();
        loop {
            if let Some(stripped) = rest.strip_prefix("*const") {
                pointers.push(PointerKind::Const);
                rest = stripped.trim_start();
            } else if let Some(stripped) = rest.strip_prefix("*mut") {
                pointers.push(PointerKind::Mut);
                rest = stripped.trim_start();
            } else {
                break;
            }
        }

        let rest = FFI_PATH_PREFIXES
            .iter()
            .find_map(|prefix| rest.strip_prefix(prefix))
            .unwrap_or(rest);
        let base = match Primitive::from_rust_name(rest) {
            Some(primitive) => BaseType::Primitive(primitive),
            None => BaseType::Named(rest.split_whitespace().collect::<Vec<_>>().join(" ")),
        };

        Self::new(pointers, base)
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pointer in &self.pointers {
            write!(f, "{} ", pointer.as_str())?;
        }
        write!(f, "{}", self.base)
    }
}
