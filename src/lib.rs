//! # form_encoding
//!
//! Encoders for the three body formats of HTML form submission:
//! `multipart/form-data`, `application/x-www-form-urlencoded` and `text/plain`.
//!
//! ## What does it do?
//!
//! A form submission is an ordered list of named entries, each either text
//! or a binary payload such as a selected file. This crate collects those
//! entries into a [`FormDataSet`] and serializes the set into any of the
//! three wire formats, following the HTML form-encoding algorithms:
//!
//! - **Line-break normalization**: `textarea` values and multipart text are sent with `\r\n`
//! - **Collision-free boundaries**: the multipart boundary never occurs inside a value
//! - **Legacy charsets**: characters a charset cannot represent fall back to `&#NNN;`
//! - **Serde Compatible**: any struct or map with `#[derive(Serialize)]` becomes entries
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! form_encoding = "0.1"
//! ```
//!
//! ### Building and Encoding a Set
//!
//! ```rust
//! use form_encoding::{FormDataSet, FormFile, FormOptions};
//!
//! let mut set = FormDataSet::new();
//! set.append_text("title", "Hello", "text").unwrap();
//! set.append_file(
//!     "attachment",
//!     FormFile::new("notes.txt", b"some notes".to_vec()).with_content_type("text/plain"),
//!     "file",
//! )
//! .unwrap();
//!
//! let body = set.as_multipart(&FormOptions::default());
//! let header = format!("multipart/form-data; boundary={}", set.boundary());
//! assert!(body.starts_with(format!("--{}\r\n", set.boundary()).as_bytes()));
//! # let _ = header;
//! ```
//!
//! ### Serializing Structs
//!
//! ```rust
//! use form_encoding::to_url_encoded;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Login {
//!     user: String,
//!     password: String,
//! }
//!
//! let login = Login { user: "alice".to_string(), password: "p&ss word".to_string() };
//! assert_eq!(to_url_encoded(&login).unwrap(), "user=alice&password=p%26ss+word");
//! ```
//!
//! ### Legacy Charsets
//!
//! ```rust
//! use form_encoding::{form_data, Charset, FormOptions};
//!
//! let set = form_data! { "q" => "caf\u{e9} \u{2603}" }.unwrap();
//! let options = FormOptions::new().with_charset(Charset::for_label("latin1").unwrap());
//! assert_eq!(set.as_url_encoded(&options), "q=caf%E9+%26%239731%3B");
//! ```
//!
//! ## Format Reference
//!
//! See the [`formats`] module for the exact output of each encoder.
//!
//! ## Examples
//!
//! See `demos/submit.rs` for a complete submission. Run it with:
//! `cargo run --example submit`

pub mod boundary;
pub mod charset;
pub mod entry;
pub mod error;
pub mod form;
pub mod formats;
pub mod macros;
pub mod normalize;
pub mod options;

mod multipart;
mod plaintext;
mod ser;
mod urlencoded;

pub use charset::Charset;
pub use entry::{Entry, FormFile};
pub use error::{Error, Result};
pub use form::{FormDataSet, Names};
pub use normalize::normalize;
pub use options::{BinaryPolicy, FormOptions};

use serde::Serialize;

/// Collects the fields of any `T: Serialize` struct or map into a new [`FormDataSet`].
///
/// # Examples
///
/// ```rust
/// use form_encoding::to_form_data_set;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let set = to_form_data_set(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(set.names().collect::<Vec<_>>(), ["x", "y"]);
/// ```
///
/// # Errors
///
/// Returns an error if the value has no form-entry representation (e.g. a
/// nested struct) or if an entry cannot be appended.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_form_data_set<T>(value: &T) -> Result<FormDataSet>
where
    T: ?Sized + Serialize,
{
    let mut set = FormDataSet::new();
    set.append_serialized(value)?;
    Ok(set)
}

/// Serialize any `T: Serialize` to an `application/x-www-form-urlencoded` string.
///
/// # Errors
///
/// Returns an error if the value cannot be turned into form entries.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_url_encoded<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_url_encoded_with_options(value, FormOptions::default())
}

/// Serialize any `T: Serialize` to an `application/x-www-form-urlencoded`
/// string with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be turned into form entries.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_url_encoded_with_options<T>(value: &T, options: FormOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(to_form_data_set(value)?.as_url_encoded(&options))
}

/// Serialize any `T: Serialize` to a `text/plain` form body.
///
/// # Examples
///
/// ```rust
/// use form_encoding::to_plaintext;
///
/// let body = to_plaintext(&[("a", "1"), ("b", "2")].to_vec()).unwrap();
/// assert_eq!(body, "a=1\r\nb=2\r\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be turned into form entries.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_plaintext<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_plaintext_with_options(value, FormOptions::default())
}

/// Serialize any `T: Serialize` to a `text/plain` form body with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be turned into form entries.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_plaintext_with_options<T>(value: &T, options: FormOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(to_form_data_set(value)?.as_plaintext(&options))
}

/// Serialize any `T: Serialize` to a UTF-8 `multipart/form-data` body.
///
/// Returns the body together with the boundary that belongs in the
/// request's `Content-Type` header.
///
/// # Errors
///
/// Returns an error if the value cannot be turned into form entries.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_multipart<T>(value: &T) -> Result<(Vec<u8>, String)>
where
    T: ?Sized + Serialize,
{
    let set = to_form_data_set(value)?;
    let body = set.as_multipart(&FormOptions::default());
    Ok((body, set.boundary().to_string()))
}
