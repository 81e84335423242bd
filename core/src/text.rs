//! Small string helpers: repeat, truncate with an ellipsis, and a
//! null-or-empty check.
//!
//! Lengths are counted in `char`s, so truncation never splits a code point.

use crate::error::ArgumentError;

/// Marker appended by [`truncate`] when text was cut.
pub const ELLIPSIS: &str = "...";

/// Repeat `text` `count` times with no separator.
///
/// `count` must be positive; repeating zero or fewer times is a caller error,
/// not an empty result.
pub fn repeat(text: &str, count: i64) -> Result<String, ArgumentError> {
    let times = usize::try_from(count)
        .ok()
        .filter(|n| *n > 0)
        .ok_or(ArgumentError::InvalidCount { count })?;
    text.len()
        .checked_mul(times)
        .filter(|total| isize::try_from(*total).is_ok())
        .ok_or(ArgumentError::TooLarge {
            len: text.len(),
            count,
        })?;
    Ok(text.repeat(times))
}

/// Cut `text` to at most `max_length` chars, appending [`ELLIPSIS`] when
/// anything was removed.
///
/// Text that already fits is returned unchanged, with no ellipsis.
pub fn truncate(text: &str, max_length: i64) -> Result<String, ArgumentError> {
    let limit = usize::try_from(max_length)
        .ok()
        .filter(|n| *n > 0)
        .ok_or(ArgumentError::OutOfRange {
            parameter: "maxLength",
            value: max_length,
        })?;
    Ok(truncate_chars(text, limit))
}

/// True when `text` is present and non-empty. Whitespace counts as set.
pub fn is_set<S: AsRef<str>>(text: Option<S>) -> bool {
    text.is_some_and(|t| !t.as_ref().is_empty())
}

/// Truncation with an already validated limit.
pub(crate) fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Method-call form of the helpers in this module.
pub trait TextExt {
    fn repeated(&self, count: i64) -> Result<String, ArgumentError>;
    fn truncated(&self, max_length: i64) -> Result<String, ArgumentError>;
    fn is_set(&self) -> bool;
}

impl TextExt for str {
    fn repeated(&self, count: i64) -> Result<String, ArgumentError> {
        repeat(self, count)
    }

    fn truncated(&self, max_length: i64) -> Result<String, ArgumentError> {
        truncate(self, max_length)
    }

    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

/// `is_set` for optional text, where `None` plays the role of null.
pub trait OptionTextExt {
    fn is_set(&self) -> bool;
}

impl<S: AsRef<str>> OptionTextExt for Option<S> {
    fn is_set(&self) -> bool {
        is_set(self.as_ref())
    }
}
