//! Multipart boundary generation.
//!
//! A boundary is [`BOUNDARY_PREFIX`] followed by [`TOKEN_LEN`] characters
//! drawn from `[A-Za-z0-9]`, roughly 143 bits of entropy. The random source is
//! supplied by the caller so that tests can pin the sequence of boundaries.

use rand::Rng;

/// Fixed prefix of every generated boundary.
pub const BOUNDARY_PREFIX: &str = "----FormDataBoundary";

/// Number of random characters following the prefix.
pub const TOKEN_LEN: usize = 24;

/// How many fresh boundaries are tried before an append gives up.
pub const MAX_BOUNDARY_ATTEMPTS: usize = 32;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Draws a new boundary from `rng`.
pub(crate) fn generate<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut boundary = String::with_capacity(BOUNDARY_PREFIX.len() + TOKEN_LEN);
    boundary.push_str(BOUNDARY_PREFIX);
    boundary.extend(
        (0..TOKEN_LEN).map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())])),
    );
    boundary
}

/// Returns `true` if `boundary` occurs anywhere in `haystack`.
pub(crate) fn occurs_in(boundary: &str, haystack: &[u8]) -> bool {
    let needle = boundary.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack.len() >= needle.len() && haystack.windows(needle.len()).any(|window| window == needle)
}
