//! Error types for building and encoding form data sets.
//!
//! Encoding itself never fails: characters the target charset cannot
//! represent fall back to numeric character references. Errors therefore
//! only surface while entries are being appended or serialized into a set.
//!
//! ## Error Categories
//!
//! - **Validation**: an entry was appended with an empty name
//! - **Boundary exhaustion**: no collision-free multipart boundary could be found
//! - **Charset lookup**: a charset label matched no known encoding
//! - **Serialization**: a serde value has no form-entry representation
//!
//! ## Examples
//!
//! ```rust
//! use form_encoding::{Error, FormDataSet};
//!
//! let mut set = FormDataSet::new();
//! let result = set.append_text("", "value", "text");
//! assert!(matches!(result, Err(Error::EmptyName)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while building a form data set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An entry was appended without a name
    #[error("Invalid entry: name must not be empty")]
    EmptyName,

    /// Every regenerated boundary collided with a stored entry value
    #[error("Boundary exhausted: no collision-free boundary found after {attempts} attempts")]
    BoundaryExhausted { attempts: usize },

    /// Charset label that matches no WHATWG encoding
    #[error("Unknown charset label: {0:?}")]
    UnknownCharset(String),

    /// Unsupported type for serialization into form entries
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates the error raised when the boundary retry budget runs out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_encoding::Error;
    ///
    /// let err = Error::boundary_exhausted(32);
    /// assert!(err.to_string().contains("32 attempts"));
    /// ```
    pub fn boundary_exhausted(attempts: usize) -> Self {
        Error::BoundaryExhausted { attempts }
    }

    /// Creates an unknown charset error for the given label.
    pub fn unknown_charset(label: &str) -> Self {
        Error::UnknownCharset(label.to_string())
    }

    /// Creates an unsupported type error for values with no form-entry shape.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_encoding::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
