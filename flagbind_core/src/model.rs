use std::time::Duration;

use regex::Regex;
use url::Url;

use crate::value::{FlagValue, ParseError};

/// The storage arity of a bound field: a plain value, an optional value, or
/// a homogeneous list.
///
/// The three variants carry the only write paths into a record; the walker
/// never copies a field's value out.
pub enum Slot<'a, T> {
    /// A plain field.
    Value(&'a mut T),
    /// A nullable field; parsing into an unset slot is always a change.
    Optional(&'a mut Option<T>),
    /// A list field, assigned whole from one delimited argument.
    List(&'a mut Vec<T>),
}

impl<'a, T> Slot<'a, T>
where
    T: FlagValue,
{
    pub(crate) fn apply(&mut self, sep: &str, text: &str) -> Result<bool, ParseError> {
        match self {
            Slot::Value(current) => {
                let parsed = T::parse_text(text)?;
                if parsed.same(&**current) {
                    return Ok(false);
                }

                **current = parsed;
                Ok(true)
            }
            Slot::Optional(current) => {
                let parsed = T::parse_text(text)?;
                if let Some(existing) = current.as_ref() {
                    if parsed.same(existing) {
                        return Ok(false);
                    }
                }

                **current = Some(parsed);
                Ok(true)
            }
            Slot::List(current) => {
                // Every element must parse before anything is written.
                let parsed = text
                    .split(sep)
                    .map(T::parse_text)
                    .collect::<Result<Vec<T>, ParseError>>()?;
                let unchanged = parsed.len() == current.len()
                    && parsed.iter().zip(current.iter()).all(|(new, old)| new.same(old));
                if unchanged {
                    return Ok(false);
                }

                **current = parsed;
                Ok(true)
            }
        }
    }

    pub(crate) fn render(&self, sep: &str) -> String {
        match self {
            Slot::Value(current) => current.render(),
            Slot::Optional(current) => match current.as_ref() {
                Some(value) => value.render(),
                None => String::new(),
            },
            Slot::List(items) => items
                .iter()
                .map(T::render)
                .collect::<Vec<String>>()
                .join(sep),
        }
    }

    pub(crate) fn is_list(&self) -> bool {
        matches!(self, Slot::List(_))
    }
}

macro_rules! targets {
    ($(($variant:ident, $ty:ty)),+ $(,)?) => {
        /// A settable handle into one field's storage, tagged by the field's
        /// kind.
        ///
        /// The variant set is closed: a field whose type is not covered here
        /// never produces a [`Binding`](crate::Binding).
        pub enum Target<'a> {
            $(
                #[doc = concat!("Handle to a `", stringify!($ty), "` field.")]
                $variant(Slot<'a, $ty>),
            )+
        }

        impl<'a> Target<'a> {
            /// Parse `text` and write it into the underlying storage,
            /// reporting whether the stored value actually changed.
            ///
            /// On a parse failure the storage is left untouched and the
            /// underlying error is returned unchanged.
            pub fn coerce(&mut self, sep: &str, text: &str) -> Result<bool, ParseError> {
                match self {
                    $(Target::$variant(slot) => slot.apply(sep, text),)+
                }
            }

            /// Display name of the underlying kind.
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(Target::$variant(_) => <$ty as FlagValue>::TYPE_NAME,)+
                }
            }

            /// Whether this target holds a list.
            pub fn is_list(&self) -> bool {
                match self {
                    $(Target::$variant(slot) => slot.is_list(),)+
                }
            }

            /// Render the current value with the kind's canonical formatter;
            /// list elements are joined with `sep`, an unset optional renders
            /// empty.
            pub fn render(&self, sep: &str) -> String {
                match self {
                    $(Target::$variant(slot) => slot.render(sep),)+
                }
            }
        }
    };
}

targets![
    (Text, String),
    (Bool, bool),
    (F32, f32),
    (F64, f64),
    (I8, i8),
    (I16, i16),
    (I32, i32),
    (I64, i64),
    (Int, isize),
    (U8, u8),
    (U16, u16),
    (U32, u32),
    (U64, u64),
    (Uint, usize),
    (Duration, Duration),
    (Url, Url),
    (Regex, Regex),
];

/// One discovered association between a record field and a flag name.
///
/// Bindings are produced fresh on every walk and live only as long as the
/// borrow of the record they point into.
pub struct Binding<'a> {
    /// Settable handle into the field's storage.
    pub target: Target<'a>,
    /// The field's declared name in its record, for diagnostics.
    pub field_name: &'static str,
    /// Fully qualified flag name after prefix concatenation.
    pub flag_name: String,
    /// Help text from the tag's second comma-separated segment.
    pub help: Option<&'static str>,
    /// Separator used to split a list argument into elements.
    pub list_sep: &'static str,
}

impl<'a> Binding<'a> {
    /// Coerce `text` into this binding's field using its list separator.
    pub fn assign(&mut self, text: &str) -> Result<bool, ParseError> {
        self.target.coerce(self.list_sep, text)
    }
}
