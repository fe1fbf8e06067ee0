//! Shared string utilities for identifier derivation.

/// Uppercase the first character, leaving the rest untouched
/// (e.g., "someField" -> "SomeField").
///
/// A first character whose uppercase form is more than one character
/// (e.g., 'ß') is kept as is.
pub fn first_char_upper(s: &str) -> String {
    map_first_char(s, char::to_uppercase)
}

/// Lowercase the first character, leaving the rest untouched
/// (e.g., "SomeField" -> "someField").
pub fn first_char_lower(s: &str) -> String {
    map_first_char(s, char::to_lowercase)
}

fn map_first_char<I>(s: &str, map: impl Fn(char) -> I) -> String
where
    I: Iterator<Item = char>,
{
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut mapped = map(first);
    let replacement = match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    std::iter::once(replacement).chain(chars).collect()
}

/// Drop a dotted package qualifier (e.g., "address.line1" -> "line1").
pub fn strip_qualifier(s: &str) -> &str {
    match s.rfind('.') {
        Some(index) => &s[index + 1..],
        None => s,
    }
}
