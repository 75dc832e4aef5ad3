use std::fmt::Display;

/// Formats any displayable value into an owned `String`.
pub fn to_string<T: Display>(value: T) -> String {
    format!("{}", value)
}

/// Splits `input` on every occurrence of `separator`, keeping empty tokens.
/// `separator` must not be empty.
pub fn split_string(input: &str, separator: &str) -> Vec<String> {
    verify!(!separator.is_empty());

    input.split(separator).map(String::from).collect()
}

/// ASCII-uppercased copy of `s`; non-ASCII characters pass through unchanged.
pub fn to_upper(s: &str) -> String {
    s.to_ascii_uppercase()
}
