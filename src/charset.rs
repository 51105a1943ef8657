//! Target character encodings for form submission.
//!
//! [`Charset`] wraps a WHATWG encoding from `encoding_rs`. Encoding text
//! with it never fails: characters the encoding cannot represent are
//! replaced with decimal numeric character references (`&#NNN;`), the
//! fallback HTML forms use when submitting in a legacy charset.

use crate::{Error, Result};
use encoding_rs::Encoding;
use std::borrow::Cow;
use std::fmt;

/// A character encoding used to serialize form names and values.
///
/// # Examples
///
/// ```rust
/// use form_encoding::Charset;
///
/// let latin = Charset::for_label("latin1").unwrap();
/// assert_eq!(latin.name(), "windows-1252");
/// assert_eq!(&*latin.encode("\u{2603}"), b"&#9731;");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
    /// Resolves a charset label such as `"utf-8"`, `"Shift_JIS"` or `"latin1"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCharset`] when no encoding matches the label.
    pub fn for_label(label: &str) -> Result<Self> {
        Encoding::for_label(label.trim().as_bytes())
            .map(Charset::from)
            .ok_or_else(|| Error::unknown_charset(label))
    }

    /// The UTF-8 charset.
    #[must_use]
    pub fn utf8() -> Self {
        Charset(encoding_rs::UTF_8)
    }

    /// Canonical name of the encoding, e.g. `UTF-8` or `windows-1252`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// The underlying `encoding_rs` encoding.
    #[must_use]
    pub fn encoding(&self) -> &'static Encoding {
        self.0
    }

    /// Encodes `text`, substituting numeric character references for
    /// characters the encoding cannot represent.
    #[must_use]
    pub fn encode<'a>(&self, text: &'a str) -> Cow<'a, [u8]> {
        let (bytes, _, _) = self.0.encode(text);
        bytes
    }

    /// Returns `text` as it reads after a trip through this charset.
    ///
    /// Representable characters are unchanged; the rest come back as
    /// numeric character references.
    #[must_use]
    pub fn round_trip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.0 == encoding_rs::UTF_8 {
            return Cow::Borrowed(text);
        }
        match self.encode(text) {
            // Encoders only borrow the input when it was ASCII and passed through untouched
            Cow::Borrowed(_) => Cow::Borrowed(text),
            Cow::Owned(bytes) => {
                let (decoded, _) = self.0.decode_without_bom_handling(&bytes);
                Cow::Owned(decoded.into_owned())
            }
        }
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl From<&'static Encoding> for Charset {
    /// UTF-16 and `replacement` map to UTF-8, since forms are never submitted in them.
    fn from(encoding: &'static Encoding) -> Self {
        Charset(encoding.output_encoding())
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name()).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(Charset::default().name(), "UTF-8");
        assert_eq!(Charset::for_label("utf-8").unwrap(), Charset::utf8());
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let charset = Charset::for_label("  ISO-8859-1 ").unwrap();
        assert_eq!(charset.name(), "windows-1252");
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(
            Charset::for_label("not-a-charset"),
            Err(Error::UnknownCharset("not-a-charset".to_string()))
        );
    }

    #[test]
    fn test_utf16_maps_to_utf8() {
        assert_eq!(Charset::for_label("utf-16le").unwrap().name(), "UTF-8");
    }

    #[test]
    fn test_encode_with_ncr_fallback() {
        let charset = Charset::for_label("windows-1252").unwrap();
        assert_eq!(&*charset.encode("caf\u{e9} \u{20ac}"), b"caf\xe9 \x80");
        assert_eq!(&*charset.encode("a\u{2603}b"), b"a&#9731;b");
    }

    #[test]
    fn test_round_trip() {
        let charset = Charset::for_label("windows-1252").unwrap();
        assert_eq!(charset.round_trip("caf\u{e9}"), "caf\u{e9}");
        assert_eq!(charset.round_trip("\u{2603}"), "&#9731;");
        assert_eq!(Charset::utf8().round_trip("\u{2603}"), "\u{2603}");
    }
}
