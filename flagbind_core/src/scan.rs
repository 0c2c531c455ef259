//! Linear scan of raw process arguments for a single flag's value.

/// Resolve the textual value supplied for `flag_name` within `args`.
///
/// The scanner recognizes `-name value`, `--name value`, `-name=value`,
/// `--name=value`, and the bare presence forms `-name` / `--name`, which
/// resolve to the literal text `"true"`. A following token is only consumed
/// as the value when it does not itself look like a flag (one or two dashes
/// followed by a letter), so a negative number such as `-10` is taken as a
/// value, never as a flag.
///
/// An empty result means the flag was not supplied anywhere in `args`. A
/// flag explicitly set to an empty value is indistinguishable from an absent
/// one and is therefore never applied.
pub fn flag_value(flag_name: &str, args: &[&str]) -> String {
    for (i, arg) in args.iter().enumerate() {
        if let Some(rest) = match_flag(arg, flag_name) {
            if let Some(value) = rest.strip_prefix('=') {
                return value.to_string();
            }

            if let Some(next) = args.get(i + 1) {
                if !looks_like_flag(next) {
                    return next.to_string();
                }
            }

            // Boolean presence form.
            return "true".to_string();
        }
    }

    String::new()
}

// Matches `-name` or `--name` up to a boundary: end-of-token or '='. The
// boundary keeps a shorter flag name from matching inside a longer one
// ("int" must not match "-int8=5").
fn match_flag<'t>(token: &'t str, flag_name: &str) -> Option<&'t str> {
    let rest = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;
    let rest = rest.strip_prefix(flag_name)?;

    if rest.is_empty() || rest.starts_with('=') {
        Some(rest)
    } else {
        None
    }
}

fn looks_like_flag(token: &str) -> bool {
    let rest = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'));

    match rest.and_then(|r| r.chars().next()) {
        Some(c) => c.is_ascii_alphabetic(),
        None => false,
    }
}
