//! `text/plain` encoding.
//!
//! Every entry becomes a `name=value\r\n` line with no escaping at all. The
//! body is returned as text: characters the target charset cannot represent
//! already appear as numeric character references, so the caller only has
//! to encode the string in that charset for transmission.

use crate::{BinaryPolicy, Entry, FormOptions};

pub(crate) fn encode(entries: &[Entry], options: &FormOptions) -> String {
    let charset = options.charset;
    log::trace!(
        "Encoding {} entries as text/plain ({charset})",
        entries.len()
    );

    let mut output = String::new();
    for entry in entries {
        let value = match entry.submitted_text(charset) {
            Some(text) => text,
            None if options.binary_policy == BinaryPolicy::Omit => continue,
            None => "",
        };

        output.push_str(&charset.round_trip(entry.name()));
        output.push('=');
        output.push_str(&charset.round_trip(value));
        output.push_str("\r\n");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Charset;

    fn text(name: &str, value: &str) -> Entry {
        Entry::Text {
            name: name.to_string(),
            field_type: "text".to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_two_entries() {
        let entries = [text("a", "1"), text("b", "2")];
        assert_eq!(encode(&entries, &FormOptions::default()), "a=1\r\nb=2\r\n");
    }

    #[test]
    fn test_no_escaping() {
        let entries = [text("a=b", "c&d e\n")];
        assert_eq!(
            encode(&entries, &FormOptions::default()),
            "a=b=c&d e\n\r\n"
        );
    }

    #[test]
    fn test_legacy_charset_substitutes_references() {
        let options =
            FormOptions::new().with_charset(Charset::for_label("windows-1252").unwrap());
        let entries = [text("snow", "\u{2603} caf\u{e9}")];
        assert_eq!(encode(&entries, &options), "snow=&#9731; caf\u{e9}\r\n");
    }
}
