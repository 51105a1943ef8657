//! Configuration options for form encoding.
//!
//! This module provides types to customize how a [`FormDataSet`](crate::FormDataSet)
//! is encoded:
//!
//! - [`FormOptions`]: Main configuration struct
//! - [`BinaryPolicy`]: What the urlencoded and text/plain encoders do with binary entries
//!
//! ## Examples
//!
//! ```rust
//! use form_encoding::{BinaryPolicy, Charset, FormOptions};
//!
//! let options = FormOptions::new()
//!     .with_charset(Charset::for_label("windows-1252").unwrap())
//!     .with_binary_policy(BinaryPolicy::Omit);
//! assert_eq!(options.charset.name(), "windows-1252");
//! ```

use crate::Charset;

/// How binary entries appear in `application/x-www-form-urlencoded` and
/// `text/plain` bodies.
///
/// Neither format can carry raw bytes, so a binary entry either keeps its
/// name with an empty value or disappears from the body.
///
/// # Examples
///
/// ```rust
/// use form_encoding::BinaryPolicy;
///
/// assert_eq!(BinaryPolicy::default(), BinaryPolicy::EmptyValue);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BinaryPolicy {
    /// Emit `name=` with an empty value
    #[default]
    EmptyValue,
    /// Leave the entry out entirely
    Omit,
}

/// Configuration options for the form encoders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormOptions {
    pub charset: Charset,
    pub binary_policy: BinaryPolicy,
}

impl FormOptions {
    /// Creates default options (UTF-8, binary entries as empty values).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_encoding::{BinaryPolicy, FormOptions};
    ///
    /// let options = FormOptions::new();
    /// assert_eq!(options.charset.name(), "UTF-8");
    /// assert_eq!(options.binary_policy, BinaryPolicy::EmptyValue);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target charset.
    #[must_use]
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Sets the policy for binary entries in non-multipart encodings.
    #[must_use]
    pub fn with_binary_policy(mut self, binary_policy: BinaryPolicy) -> Self {
        self.binary_policy = binary_policy;
        self
    }
}
