//! The form data set.
//!
//! [`FormDataSet`] owns the ordered entries of a form submission together
//! with the multipart boundary that separates them. The boundary is checked
//! on every append and regenerated whenever a new value contains it, so at
//! any point in time it occurs in none of the stored values.
//!
//! ## Examples
//!
//! ```rust
//! use form_encoding::{FormDataSet, FormOptions};
//!
//! let mut set = FormDataSet::new();
//! set.append_text("user", "alice", "text").unwrap();
//! set.append_text("comment", "line one\nline two", "textarea").unwrap();
//!
//! let names: Vec<&str> = set.names().collect();
//! assert_eq!(names, ["user", "comment"]);
//!
//! let body = set.as_url_encoded(&FormOptions::default());
//! assert_eq!(body, "user=alice&comment=line+one%0D%0Aline+two");
//! ```

use crate::boundary::{self, MAX_BOUNDARY_ATTEMPTS};
use crate::{
    multipart, normalize, plaintext, ser, urlencoded, Entry, Error, FormFile, FormOptions, Result,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use std::fmt;
use std::iter::FusedIterator;
use std::slice;

/// An ordered collection of form entries plus their multipart boundary.
///
/// The random source used for boundaries is a type parameter so that it can
/// be seeded; [`FormDataSet::new`] seeds a [`StdRng`] from the OS.
///
/// Appends take `&mut self` and encoders take `&self`, so a set can never be
/// appended to while it is being encoded.
///
/// Cloning a set clones its random source as well, so a clone regenerates
/// the same boundaries as the original. Use [`FormDataSet::with_rng`] with a
/// fresh source when the copies must diverge.
#[derive(Clone)]
pub struct FormDataSet<R = StdRng> {
    entries: Vec<Entry>,
    boundary: String,
    rng: R,
}

impl FormDataSet {
    /// Creates an empty set whose boundaries come from an OS-seeded [`StdRng`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for FormDataSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> FormDataSet<R> {
    /// Creates an empty set that draws boundaries from `rng`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_encoding::FormDataSet;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let a = FormDataSet::with_rng(StdRng::seed_from_u64(3));
    /// let b = FormDataSet::with_rng(StdRng::seed_from_u64(3));
    /// assert_eq!(a.boundary(), b.boundary());
    /// ```
    pub fn with_rng(mut rng: R) -> Self {
        let boundary = boundary::generate(&mut rng);
        FormDataSet {
            entries: Vec::new(),
            boundary,
            rng,
        }
    }

    /// Appends a text entry.
    ///
    /// Both name and value are line-break normalized when `field_type` is
    /// `textarea` (ASCII case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`] for an empty name and
    /// [`Error::BoundaryExhausted`] if no collision-free boundary could be
    /// found. The set is unchanged in both cases.
    pub fn append_text(&mut self, name: &str, value: &str, field_type: &str) -> Result<()> {
        ensure_name(name)?;

        let (name, value) = if field_type.eq_ignore_ascii_case("textarea") {
            (normalize(name), normalize(value))
        } else {
            (name.to_string(), value.to_string())
        };

        self.check_boundary(value.as_bytes())?;
        self.entries.push(Entry::Text {
            name,
            field_type: field_type.to_string(),
            value,
        });
        Ok(())
    }

    /// Appends a binary entry. Its name is line-break normalized when
    /// `field_type` is `file` (ASCII case-insensitive).
    ///
    /// The multipart encoder uses the entry name as the filename; use
    /// [`FormDataSet::append_file`] to supply the real one.
    ///
    /// # Errors
    ///
    /// Same as [`FormDataSet::append_text`].
    pub fn append_binary(
        &mut self,
        name: &str,
        value: impl Into<Vec<u8>>,
        field_type: &str,
    ) -> Result<()> {
        self.push_binary(name, value.into(), field_type, None, None)
    }

    /// Appends a file together with its filename and MIME type.
    ///
    /// # Errors
    ///
    /// Same as [`FormDataSet::append_text`].
    pub fn append_file(&mut self, name: &str, file: FormFile, field_type: &str) -> Result<()> {
        self.push_binary(
            name,
            file.data,
            field_type,
            Some(file.filename),
            file.content_type,
        )
    }

    /// Appends every field of a serializable struct or map as entries.
    ///
    /// Either all fields are appended or, on error, none are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_encoding::FormDataSet;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Login<'a> { user: &'a str, remember: bool }
    ///
    /// let mut set = FormDataSet::new();
    /// set.append_serialized(&Login { user: "alice", remember: true }).unwrap();
    /// assert_eq!(set.names().collect::<Vec<_>>(), ["user", "remember"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] for values with no form-entry shape,
    /// plus any error the individual appends raise.
    pub fn append_serialized<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let fields = ser::to_fields(value)?;

        let len = self.entries.len();
        let saved_boundary = self.boundary.clone();
        let result = fields.into_iter().try_for_each(|field| match field.value {
            ser::FieldValue::Text(text) => self.append_text(&field.name, &text, "text"),
            ser::FieldValue::Bytes(bytes) => self.append_binary(&field.name, bytes, "file"),
        });

        if result.is_err() {
            self.entries.truncate(len);
            self.boundary = saved_boundary;
        }
        result
    }

    fn push_binary(
        &mut self,
        name: &str,
        value: Vec<u8>,
        field_type: &str,
        filename: Option<String>,
        content_type: Option<String>,
    ) -> Result<()> {
        ensure_name(name)?;

        let name = if field_type.eq_ignore_ascii_case("file") {
            normalize(name)
        } else {
            name.to_string()
        };

        self.check_boundary(&value)?;
        self.entries.push(Entry::Binary {
            name,
            field_type: field_type.to_string(),
            value,
            filename,
            content_type,
        });
        Ok(())
    }

    /// Makes sure the boundary does not occur in `candidate` nor in any
    /// stored value, regenerating it if needed.
    ///
    /// The boundary is only replaced once a new one clears every value, so a
    /// failed check leaves it as it was.
    fn check_boundary(&mut self, candidate: &[u8]) -> Result<()> {
        if !boundary::occurs_in(&self.boundary, candidate) {
            return Ok(());
        }

        for attempt in 1..=MAX_BOUNDARY_ATTEMPTS {
            let next = boundary::generate(&mut self.rng);
            log::debug!("Boundary collision, trying new boundary (attempt {attempt})");

            let collides = boundary::occurs_in(&next, candidate)
                || self
                    .entries
                    .iter()
                    .any(|entry| boundary::occurs_in(&next, entry.payload()));
            if !collides {
                self.boundary = next;
                return Ok(());
            }
        }

        log::error!(
            "No collision-free boundary after {MAX_BOUNDARY_ATTEMPTS} attempts; the random source is likely degenerate"
        );
        Err(Error::boundary_exhausted(MAX_BOUNDARY_ATTEMPTS))
    }
}

impl<R> FormDataSet<R> {
    /// The boundary separating multipart sections.
    ///
    /// Callers place it in the `Content-Type: multipart/form-data; boundary=...`
    /// header. It may change after any append.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Entry names in insertion order.
    ///
    /// Each call starts a fresh enumeration.
    pub fn names(&self) -> Names<'_> {
        Names {
            inner: self.entries.iter(),
        }
    }

    /// The stored entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encodes the set as a `multipart/form-data` body.
    #[must_use]
    pub fn as_multipart(&self, options: &FormOptions) -> Vec<u8> {
        multipart::encode(&self.entries, &self.boundary, options)
    }

    /// Encodes the set as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn as_url_encoded(&self, options: &FormOptions) -> String {
        urlencoded::encode(&self.entries, options)
    }

    /// Encodes the set as a `text/plain` body.
    #[must_use]
    pub fn as_plaintext(&self, options: &FormOptions) -> String {
        plaintext::encode(&self.entries, options)
    }
}

impl<R> fmt::Debug for FormDataSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormDataSet")
            .field("entries", &self.entries)
            .field("boundary", &self.boundary)
            .finish_non_exhaustive()
    }
}

impl<'a, R> IntoIterator for &'a FormDataSet<R> {
    type Item = &'a str;
    type IntoIter = Names<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.names()
    }
}

/// Iterator over the entry names of a [`FormDataSet`], in insertion order.
#[derive(Clone, Debug)]
pub struct Names<'a> {
    inner: slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Names<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Entry::name)
    }
}

impl ExactSizeIterator for Names<'_> {}

impl FusedIterator for Names<'_> {}

fn ensure_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(())
}
