use serde::{Deserialize, Deserializer};

pub mod categories;
pub mod products;
pub mod tags;

/// Maximum allowed length for any entity name, counted after sanitization.
pub(crate) const NAME_MAX_LEN: usize = 128;

pub(crate) fn exceeds_name_limit(name: &str) -> bool {
    name.chars().count() > NAME_MAX_LEN
}

/// Collapse runs of whitespace into single spaces, drop control characters and trim.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized.trim().to_string()
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`).
///
/// Use together with `#[serde(default)]`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
