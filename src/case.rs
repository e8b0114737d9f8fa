//! Unicode uppercasing of text buffers.
//!
//! Fast-path optimized: pure ASCII input is uppercased in place without
//! reallocating; anything else goes through the full Unicode mapping.

/// Uppercase an owned string.
///
/// Characters with no uppercase form are left unchanged. One character may
/// map to several (`ß` becomes `SS`), so the output can be longer than the
/// input.
///
/// # Example
/// ```
/// let out = wholestream::case::to_uppercase("hello".to_string());
/// assert_eq!(out, "HELLO");
/// ```
pub fn to_uppercase(mut text: String) -> String {
    if text.is_ascii() {
        text.make_ascii_uppercase();
        return text;
    }

    to_uppercase_str(&text)
}

/// Uppercase a string using the full Unicode case mapping.
#[inline]
pub fn to_uppercase_str(text: &str) -> String {
    text.to_uppercase()
}
