// src/util/util.rs

use crate::error::Error;

/// retrieve environment variable
pub fn getenv(key: &str) -> Result<String, Error> {
    std::env::var(key).map_err(|_| Error::MissingEnv(key.to_string()))
}

/// retrieve environment variable, with default value
pub fn getenv_default(key: &str, default_val: &str) -> String {
    match std::env::var(key) {
        Ok(v) => v,
        Err(_) => String::from(default_val),
    }
}

/// Keep the first `size` characters of `s`.
/// Strings shorter than `size` are returned whole.
///
/// ```
///   use hexseal::util::truncate_to;
///   assert_eq!(truncate_to("abcdef", 3), "abc");
///   assert_eq!(truncate_to("abc", 64), "abc");
///   assert_eq!(truncate_to("abc", 0), "");
/// ```
pub fn truncate_to(s: &str, size: usize) -> &str {
    match s.char_indices().nth(size) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
