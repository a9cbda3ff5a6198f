//! Fragment sanitization for blank-line-delimited framing.
//!
//! The outbound protocol ends a frame on a blank line, so a payload must
//! never contain a raw newline. Every `\n` is rewritten to [`NEWLINE_TOKEN`]
//! before framing; receivers reverse the substitution for display.

/// Two-character stand-in for `\n` inside a frame payload.
///
/// The substitution is ambiguous when a fragment legitimately contains
/// `||`: receivers cannot tell it apart from an encoded newline. The token
/// is kept as-is for wire compatibility with existing consumers.
pub const NEWLINE_TOKEN: &str = "||";

/// Rewrite every newline in `fragment` so the result is frame-safe.
///
/// Only `\n` is rewritten; a preceding `\r` passes through untouched.
///
/// # Example
///
/// ```
/// use qrelay_core::relay::sanitize;
///
/// assert_eq!(sanitize("Line1\nLine2"), "Line1||Line2");
/// ```
#[must_use]
pub fn sanitize(fragment: &str) -> String {
    fragment.replace('\n', NEWLINE_TOKEN)
}

/// Reverse [`sanitize`] on a received payload.
///
/// Recovers the original text exactly when it contained no literal
/// [`NEWLINE_TOKEN`] before sanitization.
#[must_use]
pub fn restore_newlines(payload: &str) -> String {
    payload.replace(NEWLINE_TOKEN, "\n")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_newline() {
        assert_eq!(sanitize("a\nb\nc"), "a||b||c");
    }

    #[test]
    fn leaves_newline_free_text_untouched() {
        assert_eq!(sanitize("plain text"), "plain text");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn carriage_return_passes_through() {
        assert_eq!(sanitize("a\r\nb"), "a\r||b");
    }

    #[test]
    fn sanitized_payload_never_contains_a_raw_newline() {
        let sanitized = sanitize("x\n\n\ny");
        assert!(!sanitized.contains('\n'));
        assert_eq!(sanitized, "x||||||y");
    }

    #[test]
    fn round_trips_when_fragment_has_no_literal_token() {
        let original = "first line\nsecond line\nthird";
        assert_eq!(restore_newlines(&sanitize(original)), original);
    }

    #[test]
    fn literal_token_collides_with_encoded_newline() {
        // "a||b" never contained a newline, yet the receiver sees one.
        assert_eq!(restore_newlines(&sanitize("a||b")), "a\nb");
    }
}
