use std::time::Duration;

use regex::Regex;
use thiserror::Error;
use url::Url;

mod duration;

/// The failure of a single textual coercion attempt.
///
/// Parse failures carry the underlying error unchanged; nothing is rewrapped
/// or rephrased on the way out.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not a recognized boolean spelling.
    #[error("cannot parse '{0}' as a bool.")]
    Bool(String),

    /// The text is not an integer, or exceeds the kind's range.
    #[error(transparent)]
    Int(#[from] std::num::ParseIntError),

    /// The text is not a floating point number.
    #[error(transparent)]
    Float(#[from] std::num::ParseFloatError),

    /// The text is not a magnitude+unit duration.
    #[error("cannot parse '{0}' as a duration.")]
    Duration(String),

    /// The text is not an absolute URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// The text is not a compilable regular expression.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

/// A kind of value that may be bound to a flag.
///
/// One implementation exists per supported kind; the set is closed.
/// We use this at the bottom of the coercion engine so a single generic
/// assignment path can serve every kind.
pub trait FlagValue: Sized {
    /// Display name for the kind, used in generated help text.
    const TYPE_NAME: &'static str;

    /// Parse `text` using the kind's canonical grammar.
    fn parse_text(text: &str) -> Result<Self, ParseError>;

    /// Structural equality appropriate to the kind.
    fn same(&self, other: &Self) -> bool;

    /// Render the value with the kind's canonical formatter.
    fn render(&self) -> String;
}

impl FlagValue for String {
    const TYPE_NAME: &'static str = "String";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        Ok(text.to_string())
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl FlagValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        match text {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            _ => Err(ParseError::Bool(text.to_string())),
        }
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

macro_rules! numeric_flag_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FlagValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn parse_text(text: &str) -> Result<Self, ParseError> {
                    Ok(text.parse::<$ty>()?)
                }

                fn same(&self, other: &Self) -> bool {
                    self == other
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

numeric_flag_value!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FlagValue for Duration {
    const TYPE_NAME: &'static str = "Duration";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        duration::parse(text)
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self) -> String {
        duration::format(self)
    }
}

impl FlagValue for Url {
    const TYPE_NAME: &'static str = "Url";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        Ok(Url::parse(text)?)
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn render(&self) -> String {
        self.as_str().to_string()
    }
}

impl FlagValue for Regex {
    const TYPE_NAME: &'static str = "Regex";

    fn parse_text(text: &str) -> Result<Self, ParseError> {
        Ok(Regex::new(text)?)
    }

    // Compiled patterns carry no stable identity; the pattern source does.
    fn same(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }

    fn render(&self) -> String {
        self.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", true)]
    #[case("t", true)]
    #[case("T", true)]
    #[case("true", true)]
    #[case("TRUE", true)]
    #[case("True", true)]
    #[case("0", false)]
    #[case("f", false)]
    #[case("F", false)]
    #[case("false", false)]
    #[case("FALSE", false)]
    #[case("False", false)]
    fn parse_bool(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(bool::parse_text(text).unwrap(), expected);
    }

    #[rstest]
    #[case("yes")]
    #[case("tRuE")]
    #[case("2")]
    #[case("")]
    fn parse_bool_invalid(#[case] text: &str) {
        assert_matches!(bool::parse_text(text), Err(ParseError::Bool(_)));
    }

    #[rstest]
    #[case("127", 127)]
    #[case("-128", -128)]
    #[case("0", 0)]
    fn parse_i8(#[case] text: &str, #[case] expected: i8) {
        assert_eq!(i8::parse_text(text).unwrap(), expected);
    }

    #[rstest]
    #[case("200")]
    #[case("-129")]
    #[case("abc")]
    #[case("")]
    fn parse_i8_out_of_range(#[case] text: &str) {
        assert_matches!(i8::parse_text(text), Err(ParseError::Int(_)));
    }

    #[rstest]
    #[case("255", 255)]
    #[case("0", 0)]
    fn parse_u8(#[case] text: &str, #[case] expected: u8) {
        assert_eq!(u8::parse_text(text).unwrap(), expected);
    }

    #[rstest]
    #[case("256")]
    #[case("-1")]
    fn parse_u8_out_of_range(#[case] text: &str) {
        assert_matches!(u8::parse_text(text), Err(ParseError::Int(_)));
    }

    #[test]
    fn parse_float() {
        assert_eq!(f64::parse_text("2.71828").unwrap(), 2.71828);
        assert_matches!(f64::parse_text("not-a-float"), Err(ParseError::Float(_)));
    }

    #[test]
    fn parse_url() {
        // Setup & execute
        let url = Url::parse_text("https://example.com/path?q=1").unwrap();

        // Verify
        assert_eq!(url.host_str(), Some("example.com"));
        assert!(url.same(&Url::parse_text("https://example.com/path?q=1").unwrap()));
        assert_matches!(Url::parse_text("://nope"), Err(ParseError::Url(_)));
    }

    #[test]
    fn parse_regex() {
        // Setup & execute
        let pattern = Regex::parse_text("[a-z]+[0-9]*").unwrap();

        // Verify: equality follows the pattern source, not the compiled form.
        assert!(pattern.same(&Regex::parse_text("[a-z]+[0-9]*").unwrap()));
        assert!(!pattern.same(&Regex::parse_text("[a-z]+").unwrap()));
        assert_matches!(Regex::parse_text("[unclosed"), Err(ParseError::Regex(_)));
    }

    #[rstest]
    #[case("90")]
    #[case("-1.5")]
    #[case("hello world")]
    fn render_round_trip_text(#[case] text: &str) {
        let value = String::parse_text(text).unwrap();
        assert_eq!(value.render(), text);
    }

    #[test]
    fn render_numeric() {
        assert_eq!(42u16.render(), "42");
        assert_eq!((-7i64).render(), "-7");
        assert_eq!(1.5f64.render(), "1.5");
    }
}
