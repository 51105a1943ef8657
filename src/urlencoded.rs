//! `application/x-www-form-urlencoded` encoding.
//!
//! Names and values are encoded in the target charset (unmappable characters
//! become numeric character references) and the resulting bytes go through
//! the urlencoded byte serializer: ASCII alphanumerics and `*-._` stay as
//! they are, space becomes `+`, and every other byte becomes `%XX`.

use crate::{BinaryPolicy, Charset, Entry, FormOptions};
use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped by the urlencoded byte serializer. Space is handled apart.
const FORM_URLENCODED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

pub(crate) fn encode(entries: &[Entry], options: &FormOptions) -> String {
    let charset = options.charset;
    log::trace!(
        "Encoding {} entries as application/x-www-form-urlencoded ({charset})",
        entries.len()
    );

    let mut output = String::new();
    for entry in entries {
        let value = match entry.submitted_text(charset) {
            Some(text) => text,
            None if options.binary_policy == BinaryPolicy::Omit => continue,
            None => "",
        };

        if !output.is_empty() {
            output.push('&');
        }
        push_serialized(&mut output, entry.name(), charset);
        output.push('=');
        push_serialized(&mut output, value, charset);
    }
    output
}

fn push_serialized(output: &mut String, text: &str, charset: Charset) {
    let bytes = charset.encode(text);
    for (i, chunk) in bytes.split(|&b| b == b' ').enumerate() {
        if i > 0 {
            output.push('+');
        }
        output.extend(percent_encode(chunk, FORM_URLENCODED));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(text: &str, charset: Charset) -> String {
        let mut output = String::new();
        push_serialized(&mut output, text, charset);
        output
    }

    #[test]
    fn test_byte_serializer() {
        let utf8 = Charset::utf8();
        assert_eq!(serialize("azAZ09*-._", utf8), "azAZ09*-._");
        assert_eq!(serialize("a b  c", utf8), "a+b++c");
        assert_eq!(serialize("a+b=c&d", utf8), "a%2Bb%3Dc%26d");
        assert_eq!(serialize("~/?", utf8), "%7E%2F%3F");
        assert_eq!(serialize("\u{e9}", utf8), "%C3%A9");
    }

    #[test]
    fn test_ncr_fallback_is_percent_encoded() {
        let latin = Charset::for_label("windows-1252").unwrap();
        assert_eq!(serialize("\u{e9}", latin), "%E9");
        assert_eq!(serialize("\u{2603}", latin), "%26%239731%3B");
    }

    #[test]
    fn test_empty_value() {
        let entries = [Entry::Text {
            name: "empty".to_string(),
            field_type: "text".to_string(),
            value: String::new(),
        }];
        assert_eq!(encode(&entries, &FormOptions::default()), "empty=");
    }
}
