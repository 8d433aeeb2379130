//! Record deframer for the pseudo-JSON-array index layout.
//!
//! The index is one large JSON array written with one object per physical
//! line, each line except the last ending with the element-separator comma.
//! Deframing unwraps that layout so the decode step only ever sees a single
//! candidate object; the `[` and `]` envelope lines are rejected here.

/// Strip the array framing from one raw index line.
///
/// Removes one trailing newline (tolerating CRLF) and one trailing comma,
/// then returns the remaining bytes if they can be a JSON object. Returns
/// `None` for envelope lines and anything else that does not start with `{`.
pub fn deframe(raw: &[u8]) -> Option<&[u8]> {
    let mut line = raw;
    if let Some(rest) = line.strip_suffix(b"\n") {
        line = rest;
    }
    if let Some(rest) = line.strip_suffix(b"\r") {
        line = rest;
    }
    if let Some(rest) = line.strip_suffix(b",") {
        line = rest;
    }
    if line.first() == Some(&b'{') {
        Some(line)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_comma_and_newline() {
        assert_eq!(deframe(b"{\"a\":1},\n"), Some(&b"{\"a\":1}"[..]));
    }

    #[test]
    fn test_last_element_has_no_comma() {
        assert_eq!(deframe(b"{\"a\":1}\n"), Some(&b"{\"a\":1}"[..]));
    }

    #[test]
    fn test_missing_trailing_newline_at_eof() {
        assert_eq!(deframe(b"{\"a\":1},"), Some(&b"{\"a\":1}"[..]));
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(deframe(b"{\"a\":1},\r\n"), Some(&b"{\"a\":1}"[..]));
    }

    #[test]
    fn test_rejects_envelope_lines() {
        assert_eq!(deframe(b"[\n"), None);
        assert_eq!(deframe(b"]\n"), None);
        assert_eq!(deframe(b"]"), None);
    }

    #[test]
    fn test_rejects_empty_line() {
        assert_eq!(deframe(b"\n"), None);
        assert_eq!(deframe(b""), None);
    }
}
