//! Form Submission Formats
//!
//! This module documents the three body formats produced by this library
//! and the rules shared by all of them.
//!
//! # Entries
//!
//! A form data set is an ordered list of entries. Each entry has a name, the
//! declared type of the control that produced it, and a text or binary
//! value. Order is significant: it is the order of the submitted body.
//!
//! | Declared type | Value | Normalized at append time |
//! |---------------|-------|---------------------------|
//! | `textarea` | text | name and value |
//! | `file` | binary | name only |
//! | anything else | text or binary | nothing |
//!
//! Normalization replaces every `\r\n`, lone `\r` and lone `\n` with `\r\n`.
//! Type comparisons are ASCII case-insensitive.
//!
//! ## The `_charset_` field
//!
//! A text entry named exactly `_charset_` whose type is `hidden` submits the
//! canonical name of the target charset (`UTF-8`, `windows-1252`, ...)
//! instead of its stored value, in all three formats.
//!
//! # Charsets
//!
//! Charsets are WHATWG encodings resolved by label. UTF-16 labels submit as
//! UTF-8. A character that the charset cannot represent is written as a
//! decimal numeric character reference, e.g. `☃` in `windows-1252` becomes
//! `&#9731;`. Encoding therefore never fails.
//!
//! # `multipart/form-data`
//!
//! ```text
//! --{boundary}
//! Content-Disposition: form-data; name="field"
//!
//! value
//! --{boundary}
//! Content-Disposition: form-data; name="upload"; filename="notes.txt"
//! Content-Type: text/plain
//!
//! <raw bytes>
//! --{boundary}--
//! ```
//!
//! Every line ends in `\r\n`, including the closing delimiter.
//!
//! **Rules**:
//! - Text values are normalized and charset-encoded; binary values are copied as-is
//! - Binary sections carry a `filename` (the file's name, or the entry name when
//!   none was given) and a `Content-Type` (the file's MIME type, or
//!   `application/octet-stream`)
//! - Inside quoted parameters, `"` and ASCII control characters are written as
//!   `%XX` (`%22`, `%0D`, `%0A`, ...)
//!
//! ## Boundaries
//!
//! A boundary is `----FormDataBoundary` plus 24 random characters from
//! `[A-Za-z0-9]`. It is checked against each value as it is appended; on a
//! hit a new boundary is drawn and checked against every stored value. After
//! 32 failed draws the append is rejected.
//!
//! The check runs over the UTF-8 (text) or raw (binary) bytes of the stored
//! value. The boundary alphabet contains neither `&`, `#` nor `;`, so
//! numeric character references cannot create a boundary that was not
//! already there.
//!
//! # `application/x-www-form-urlencoded`
//!
//! ```text
//! name=value&other=a+b%26c
//! ```
//!
//! Names and values are charset-encoded, then each byte is written as:
//!
//! | Byte | Output |
//! |------|--------|
//! | `A-Z a-z 0-9 * - . _` | itself |
//! | space | `+` |
//! | anything else | `%XX` (uppercase hex) |
//!
//! Values are not normalized here, so ASCII pairs survive a decode unchanged.
//!
//! # `text/plain`
//!
//! ```text
//! name=value
//! other=a b&c
//! ```
//!
//! One `name=value` line per entry, terminated by `\r\n`, with no escaping.
//! This format is ambiguous by nature and meant for humans, not parsers.
//!
//! # Binary Entries Outside Multipart
//!
//! Neither urlencoded nor text/plain can carry raw bytes. The
//! [`BinaryPolicy`](crate::BinaryPolicy) option decides:
//!
//! | Policy | urlencoded | text/plain |
//! |--------|------------|------------|
//! | `EmptyValue` (default) | `upload=` | `upload=\r\n` |
//! | `Omit` | (nothing) | (nothing) |

// This module contains only documentation; no implementation code
