use std::time::Duration;

use crate::value::ParseError;

// Scales in nanoseconds, ordered so that two-letter units strip before their
// one-letter prefixes ("ms" before "m").
const UNITS: [(&str, u128); 7] = [
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60_000_000_000),
    ("h", 3_600_000_000_000),
];

/// Parse a compound magnitude+unit duration, such as "90m", "1h30m", or
/// "1.5s".
///
/// The bare text "0" is accepted without a unit. Negative durations are
/// rejected: the underlying representation is unsigned.
pub(crate) fn parse(text: &str) -> Result<Duration, ParseError> {
    let invalid = || ParseError::Duration(text.to_string());

    if text == "0" {
        return Ok(Duration::ZERO);
    }
    if text.is_empty() {
        return Err(invalid());
    }

    let mut nanos: u128 = 0;
    let mut rest = text;

    while !rest.is_empty() {
        let split = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(invalid)?;
        if split == 0 {
            return Err(invalid());
        }

        let (magnitude, after) = rest.split_at(split);
        let magnitude: f64 = magnitude.parse().map_err(|_| invalid())?;
        let (scale, after) = split_unit(after).ok_or_else(invalid)?;
        nanos += (magnitude * scale as f64) as u128;
        rest = after;
    }

    u64::try_from(nanos)
        .map(Duration::from_nanos)
        .map_err(|_| invalid())
}

fn split_unit(text: &str) -> Option<(u128, &str)> {
    for (unit, scale) in UNITS {
        if let Some(rest) = text.strip_prefix(unit) {
            return Some((scale, rest));
        }
    }

    None
}

/// Render a duration as its compound unit breakdown, such as "1h30m" or
/// "250ms". The zero duration renders as "0s".
pub(crate) fn format(duration: &Duration) -> String {
    if duration.is_zero() {
        return "0s".to_string();
    }

    let mut nanos = duration.as_nanos();
    let mut rendered = String::new();

    for (unit, scale) in [
        ("h", 3_600_000_000_000u128),
        ("m", 60_000_000_000),
        ("s", 1_000_000_000),
        ("ms", 1_000_000),
        ("us", 1_000),
        ("ns", 1),
    ] {
        let count = nanos / scale;
        if count > 0 {
            rendered.push_str(&format!("{count}{unit}"));
            nanos %= scale;
        }
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Duration::ZERO)]
    #[case("1s", Duration::from_secs(1))]
    #[case("90m", Duration::from_secs(5400))]
    #[case("4h", Duration::from_secs(14400))]
    #[case("1h30m", Duration::from_secs(5400))]
    #[case("2m30s", Duration::from_secs(150))]
    #[case("1.5s", Duration::from_millis(1500))]
    #[case("250ms", Duration::from_millis(250))]
    #[case("10us", Duration::from_micros(10))]
    #[case("10µs", Duration::from_micros(10))]
    #[case("750ns", Duration::from_nanos(750))]
    #[case("1h30m15s", Duration::from_secs(5415))]
    fn parse_valid(#[case] text: &str, #[case] expected: Duration) {
        assert_eq!(parse(text).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("10")]
    #[case("s")]
    #[case("5x")]
    #[case("-1h")]
    #[case("1h30")]
    #[case("1..5s")]
    fn parse_invalid(#[case] text: &str) {
        assert_matches!(parse(text), Err(ParseError::Duration(_)));
    }

    #[rstest]
    #[case(Duration::ZERO, "0s")]
    #[case(Duration::from_secs(1), "1s")]
    #[case(Duration::from_secs(5400), "1h30m")]
    #[case(Duration::from_secs(150), "2m30s")]
    #[case(Duration::from_millis(1500), "1s500ms")]
    #[case(Duration::from_nanos(1_000_010), "1ms10ns")]
    fn format_compound(#[case] duration: Duration, #[case] expected: &str) {
        assert_eq!(format(&duration), expected);
    }

    #[rstest]
    #[case("90m")]
    #[case("1h30m15s")]
    #[case("250ms")]
    #[case("1.5s")]
    fn round_trip(#[case] text: &str) {
        let duration = parse(text).unwrap();
        assert_eq!(parse(&format(&duration)).unwrap(), duration);
    }
}
