/// The closed set of leaf kinds a field may bind as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Bool,
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    Int,
    U8,
    U16,
    U32,
    U64,
    Uint,
    Duration,
    Url,
    Regex,
}

impl Kind {
    pub fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "String" => Some(Kind::Text),
            "bool" => Some(Kind::Bool),
            "f32" => Some(Kind::F32),
            "f64" => Some(Kind::F64),
            "i8" => Some(Kind::I8),
            "i16" => Some(Kind::I16),
            "i32" => Some(Kind::I32),
            "i64" => Some(Kind::I64),
            "isize" => Some(Kind::Int),
            "u8" => Some(Kind::U8),
            "u16" => Some(Kind::U16),
            "u32" => Some(Kind::U32),
            "u64" => Some(Kind::U64),
            "usize" => Some(Kind::Uint),
            "Duration" => Some(Kind::Duration),
            "Url" => Some(Kind::Url),
            "Regex" => Some(Kind::Regex),
            _ => None,
        }
    }

    /// The matching `Target` variant name in the runtime crate.
    pub fn variant(&self) -> &'static str {
        match self {
            Kind::Text => "Text",
            Kind::Bool => "Bool",
            Kind::F32 => "F32",
            Kind::F64 => "F64",
            Kind::I8 => "I8",
            Kind::I16 => "I16",
            Kind::I32 => "I32",
            Kind::I64 => "I64",
            Kind::Int => "Int",
            Kind::U8 => "U8",
            Kind::U16 => "U16",
            Kind::U32 => "U32",
            Kind::U64 => "U64",
            Kind::Uint => "Uint",
            Kind::Duration => "Duration",
            Kind::Url => "Url",
            Kind::Regex => "Regex",
        }
    }
}

/// The storage arity of a leaf field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Value,
    Optional,
    List,
}

/// A parsed `#[flag(..)]` attribute, before type classification.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FlagAttribute {
    pub tag: String,
    pub sep: Option<String>,
}

/// How one tagged field participates in the walk.
#[derive(Debug, PartialEq, Eq)]
pub enum FieldBinding {
    Leaf {
        kind: Kind,
        arity: Arity,
        name: String,
        help: Option<String>,
        list_sep: String,
    },
    Nested {
        prefix: String,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveField {
    pub field_name: syn::Ident,
    pub binding: FieldBinding,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveRecord {
    pub struct_name: syn::Ident,
    pub fields: Vec<DeriveField>,
}
