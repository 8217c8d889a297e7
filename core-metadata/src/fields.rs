//! Parsing rules for raw tag values.
//!
//! Tag frames store numbers and flags as text. These helpers turn that text
//! into typed values with lenient, stream-style semantics: leading whitespace
//! is skipped, trailing garbage is ignored, and anything unparsable becomes
//! zero or `false`.

/// Parses a leading unsigned integer.
///
/// Leading whitespace and an optional `+` are accepted. Digits after the
/// first non-digit are ignored. Text without leading digits yields 0, and
/// values past `u32::MAX` saturate.
pub fn parse_uint(text: &str) -> u32 {
    take_uint(text).map_or(0, |(value, _)| value)
}

/// Parses an `N/M` integer pair such as a disc or track position.
///
/// The first component is always returned when present. The second is only
/// kept when the character following the first number is literally `/`;
/// `"3-10"` yields `(3, 0)`. Text without a leading number yields `(0, 0)`.
pub fn parse_uint_pair(text: &str) -> (u32, u32) {
    let Some((first, rest)) = take_uint(text) else {
        return (0, 0);
    };

    let rest = rest.trim_start();
    let mut chars = rest.chars();
    let separator = chars.next();
    let second = take_uint(chars.as_str()).map_or(0, |(value, _)| value);

    if separator == Some('/') {
        (first, second)
    } else {
        (first, 0)
    }
}

/// Parses a boolean flag.
///
/// True iff the ASCII-lowercased text is exactly `"1"` or `"true"`. No
/// trimming is applied.
pub fn parse_flag(text: &str) -> bool {
    let lowered = text.to_ascii_lowercase();
    lowered == "1" || lowered == "true"
}

fn take_uint(text: &str) -> Option<(u32, &str)> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);

    let digits = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if digits == 0 {
        return None;
    }

    let (number, rest) = text.split_at(digits);
    let value = number.parse::<u32>().unwrap_or(u32::MAX);
    Some((value, rest))
}
