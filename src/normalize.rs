//! Line-break normalization.

/// Replaces every line break (`\r\n`, lone `\r` or lone `\n`) with `\r\n`.
///
/// The operation is idempotent.
///
/// # Examples
///
/// ```rust
/// use form_encoding::normalize;
///
/// assert_eq!(normalize("a\rb\nc\r\nd"), "a\r\nb\r\nc\r\nd");
/// ```
#[must_use]
pub fn normalize(value: &str) -> String {
    let mut output = String::with_capacity(value.len() + value.len() / 8);
    let mut rest = value;

    while let Some(pos) = rest.find(['\r', '\n']) {
        output.push_str(&rest[..pos]);
        output.push_str("\r\n");
        // `\r\n` is a single break, not two
        let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + width..];
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_breaks() {
        assert_eq!(normalize("a\rb\nc\r\nd"), "a\r\nb\r\nc\r\nd");
    }

    #[test]
    fn test_no_breaks() {
        assert_eq!(normalize("plain"), "plain");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_edges_and_runs() {
        assert_eq!(normalize("\n"), "\r\n");
        assert_eq!(normalize("\r"), "\r\n");
        assert_eq!(normalize("\n\r"), "\r\n\r\n");
        assert_eq!(normalize("\r\r\n\n"), "\r\n\r\n\r\n");
        assert_eq!(normalize("x\n"), "x\r\n");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("one\ntwo\rthree\r\n\n");
        assert_eq!(normalize(&once), once);
    }
}
