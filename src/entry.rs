//! Form entries.
//!
//! An [`Entry`] is one submitted field: a name, the declared type of the
//! control that produced it (`text`, `textarea`, `hidden`, `file`, ...) and
//! either a text or a binary value. Entries are created by the append
//! operations of [`FormDataSet`](crate::FormDataSet) and never change
//! afterwards.

use crate::Charset;

/// Name of the hidden field whose value is replaced by the submission charset.
pub const CHARSET_FIELD: &str = "_charset_";

/// One entry of a form data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A text field
    Text {
        name: String,
        field_type: String,
        value: String,
    },
    /// A binary payload, typically a selected file
    Binary {
        name: String,
        field_type: String,
        value: Vec<u8>,
        filename: Option<String>,
        content_type: Option<String>,
    },
}

impl Entry {
    /// The entry's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Entry::Text { name, .. } | Entry::Binary { name, .. } => name,
        }
    }

    /// The declared type of the control that produced the entry.
    #[must_use]
    pub fn field_type(&self) -> &str {
        match self {
            Entry::Text { field_type, .. } | Entry::Binary { field_type, .. } => field_type,
        }
    }

    /// The stored value as bytes (UTF-8 for text entries).
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        match self {
            Entry::Text { value, .. } => value.as_bytes(),
            Entry::Binary { value, .. } => value,
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Entry::Text { .. })
    }

    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self, Entry::Binary { .. })
    }

    /// The text this entry serializes to when submitted in `charset`, or
    /// `None` for binary entries.
    ///
    /// A hidden field named `_charset_` reports the charset's name instead of
    /// its stored value. The stored value is left as it is.
    pub(crate) fn submitted_text(&self, charset: Charset) -> Option<&str> {
        match self {
            Entry::Text {
                name,
                field_type,
                value,
            } => Some(submitted_value(name, field_type, value, charset)),
            Entry::Binary { .. } => None,
        }
    }
}

/// The text submitted for a text entry with the given fields.
pub(crate) fn submitted_value<'a>(
    name: &str,
    field_type: &str,
    value: &'a str,
    charset: Charset,
) -> &'a str {
    if name == CHARSET_FIELD && field_type.eq_ignore_ascii_case("hidden") {
        charset.name()
    } else {
        value
    }
}

/// A file selected for upload: its bytes plus the metadata the multipart
/// encoder writes into the section headers.
///
/// # Examples
///
/// ```rust
/// use form_encoding::FormFile;
///
/// let file = FormFile::new("notes.txt", b"hello".to_vec()).with_content_type("text/plain");
/// assert_eq!(file.filename, "notes.txt");
/// assert_eq!(file.content_type.as_deref(), Some("text/plain"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl FormFile {
    #[must_use]
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        FormFile {
            filename: filename.into(),
            content_type: None,
            data: data.into(),
        }
    }

    /// Sets the MIME type written to the section's `Content-Type` header.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}
