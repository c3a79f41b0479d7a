//! Strict integer parsing.

use crate::error::InputError;

/// Parse `text` as a signed 64-bit integer in `radix`.
///
/// The whole token must be consumed: surrounding whitespace, trailing
/// garbage, and out-of-range values are errors. A leading `+` or `-` is
/// accepted.
///
/// # Panics
///
/// Panics if `radix` is outside `2..=36`.
pub fn parse_int(text: &str, radix: u32) -> Result<i64, InputError> {
    i64::from_str_radix(text, radix).map_err(|_| InputError::InvalidInteger {
        text: text.to_owned(),
        radix,
    })
}
