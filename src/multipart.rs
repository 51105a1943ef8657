//! `multipart/form-data` encoding.
//!
//! Each entry becomes one section:
//!
//! ```text
//! --{boundary}\r\n
//! Content-Disposition: form-data; name="{name}"[; filename="{filename}"]\r\n
//! [Content-Type: {mime}\r\n]
//! \r\n
//! {value}\r\n
//! ```
//!
//! and the body ends with `--{boundary}--\r\n`. Text values are line-break
//! normalized and encoded in the target charset; binary values are copied
//! through unchanged.

use crate::entry::submitted_value;
use crate::{normalize, Charset, Entry, FormOptions};
use std::fmt::Write;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub(crate) fn encode(entries: &[Entry], boundary: &str, options: &FormOptions) -> Vec<u8> {
    let charset = options.charset;
    log::trace!(
        "Encoding {} entries as multipart/form-data ({charset})",
        entries.len()
    );

    let payload: usize = entries.iter().map(|entry| entry.payload().len()).sum();
    let mut output = Vec::with_capacity(payload + entries.len() * (boundary.len() + 64));

    for entry in entries {
        output.extend_from_slice(b"--");
        output.extend_from_slice(boundary.as_bytes());
        output.extend_from_slice(b"\r\nContent-Disposition: form-data; name=\"");
        write_quoted(&mut output, entry.name(), charset);
        output.push(b'"');

        match entry {
            Entry::Text {
                name,
                field_type,
                value,
            } => {
                output.extend_from_slice(b"\r\n\r\n");
                let text = submitted_value(name, field_type, value, charset);
                output.extend_from_slice(&charset.encode(&normalize(text)));
            }
            Entry::Binary {
                name,
                value,
                filename,
                content_type,
                ..
            } => {
                output.extend_from_slice(b"; filename=\"");
                write_quoted(&mut output, filename.as_deref().unwrap_or(name), charset);
                output.extend_from_slice(b"\"\r\nContent-Type: ");
                let mime = content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE);
                output.extend_from_slice(&charset.encode(&escape_header_value(mime)));
                output.extend_from_slice(b"\r\n\r\n");
                output.extend_from_slice(value);
            }
        }

        output.extend_from_slice(b"\r\n");
    }

    output.extend_from_slice(b"--");
    output.extend_from_slice(boundary.as_bytes());
    output.extend_from_slice(b"--\r\n");
    output
}

/// Writes `text` for use inside a quoted header parameter.
///
/// `"` and ASCII control characters become `%XX`; characters the charset
/// cannot represent become numeric character references.
fn write_quoted(output: &mut Vec<u8>, text: &str, charset: Charset) {
    let escaped = escape_quoted(text);
    output.extend_from_slice(&charset.encode(&escaped));
}

fn escape_quoted(text: &str) -> String {
    escape_with(text, |ch| ch == '"' || ch.is_ascii_control())
}

/// Escapes an unquoted header value such as a MIME type. Only control
/// characters are escaped; quoted parameters pass through.
fn escape_header_value(text: &str) -> String {
    escape_with(text, |ch| ch.is_ascii_control())
}

fn escape_with(text: &str, needs_escape: impl Fn(char) -> bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if needs_escape(ch) {
            // writing to a String cannot fail
            let _ = write!(escaped, "%{:02X}", u32::from(ch));
        } else {
            escaped.push(ch);
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(name: &str, field_type: &str, value: &str) -> Entry {
        Entry::Text {
            name: name.to_string(),
            field_type: field_type.to_string(),
            value: value.to_string(),
        }
    }

    fn encode_str(entries: &[Entry], options: &FormOptions) -> String {
        String::from_utf8(encode(entries, "B", options)).unwrap()
    }

    #[test]
    fn test_single_text_entry() {
        let body = encode_str(&[text("field", "text", "value")], &FormOptions::default());
        assert_eq!(
            body,
            "--B\r\nContent-Disposition: form-data; name=\"field\"\r\n\r\nvalue\r\n--B--\r\n"
        );
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(encode_str(&[], &FormOptions::default()), "--B--\r\n");
    }

    #[test]
    fn test_text_value_is_normalized() {
        let body = encode_str(&[text("t", "text", "a\nb")], &FormOptions::default());
        assert!(body.contains("\r\n\r\na\r\nb\r\n--B--"));
    }

    #[test]
    fn test_escape_quoted() {
        assert_eq!(escape_quoted("a\"b"), "a%22b");
        assert_eq!(escape_quoted("line\r\nbreak"), "line%0D%0Abreak");
        assert_eq!(escape_quoted("tab\there"), "tab%09here");
        assert_eq!(escape_quoted("caf\u{e9}"), "caf\u{e9}");
    }

    #[test]
    fn test_escape_header_value() {
        assert_eq!(
            escape_header_value("text/plain; charset=\"utf-8\""),
            "text/plain; charset=\"utf-8\""
        );
        assert_eq!(
            escape_header_value("text/plain\r\nX-Injected: 1"),
            "text/plain%0D%0AX-Injected: 1"
        );
    }

    #[test]
    fn test_content_type_parameters_are_kept() {
        let entry = Entry::Binary {
            name: "doc".to_string(),
            field_type: "file".to_string(),
            value: b"hi".to_vec(),
            filename: Some("a \"b\".txt".to_string()),
            content_type: Some("text/plain; charset=\"utf-8\"".to_string()),
        };

        let body = encode_str(&[entry], &FormOptions::default());
        assert_eq!(
            body,
            "--B\r\nContent-Disposition: form-data; name=\"doc\"; filename=\"a %22b%22.txt\"\r\n\
             Content-Type: text/plain; charset=\"utf-8\"\r\n\r\nhi\r\n--B--\r\n"
        );
    }

    #[test]
    fn test_binary_without_metadata() {
        let entry = Entry::Binary {
            name: "upload".to_string(),
            field_type: "file".to_string(),
            value: vec![0xff, 0x00],
            filename: None,
            content_type: None,
        };

        let body = encode(&[entry], "B", &FormOptions::default());
        let mut expected = b"--B\r\nContent-Disposition: form-data; name=\"upload\"; filename=\"upload\"\r\nContent-Type: application/octet-stream\r\n\r\n".to_vec();
        expected.extend_from_slice(&[0xff, 0x00]);
        expected.extend_from_slice(b"\r\n--B--\r\n");
        assert_eq!(body, expected);
    }

    #[test]
    fn test_charset_override_leaves_entry_untouched() {
        let entries = [text("_charset_", "hidden", "stored")];
        let body = encode_str(&entries, &FormOptions::default());

        assert!(body.contains("\r\n\r\nUTF-8\r\n"));
        assert_eq!(entries[0].payload(), b"stored");
    }
}
