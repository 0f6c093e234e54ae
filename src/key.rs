//! Substitution keys: validation, generation, and lookup.
//!
//! A [`Key`] is a permutation of the 26 lowercase Latin letters. Position
//! `i` of the key is the cipher image of position `i` of [`ALPHABET`];
//! those two parallel sequences are the entire substitution table. The
//! inverse direction is resolved by searching the key.
//!
//! Keys are immutable values stored in canonical lowercase. The engine
//! replaces its key wholesale; individual positions are never mutated.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;

use crate::error::InvalidKeyError;

/// The 26 lowercase Latin letters in canonical order.
///
/// Process-wide immutable reference sequence for every validation and
/// lookup in the crate.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Number of letters in [`ALPHABET`], and therefore in every valid key.
pub const KEY_LEN: usize = 26;

/// Checks whether a candidate string is a valid substitution key.
///
/// A candidate is valid when, after lower-casing every character, it is
/// exactly 26 characters long and contains every letter of [`ALPHABET`].
/// Those two conditions together force a true permutation: 26 slots that
/// must hold 26 distinct required letters leave no room for a repeated
/// letter, so no separate duplicate check is needed. Both conditions are
/// enforced explicitly; coverage alone would admit over-long keys and
/// length alone would admit duplicates masking missing letters.
///
/// Pure and total: returns `false` for any invalid input, never errors.
///
/// # Parameters
/// - `candidate`: The key text to check, any case.
///
/// # Examples
///
/// ```
/// use subcipher::key::is_valid_key;
///
/// assert!(is_valid_key("zyxwvutsrqponmlkjihgfedcba"));
/// assert!(is_valid_key("bcdefghijklmnopqrstuvwxyzA"));
/// assert!(!is_valid_key("short"));
/// assert!(!is_valid_key("aacdefghijklmnopqrstuvwxyz"));
/// ```
pub fn is_valid_key(candidate: &str) -> bool {
    let mut seen = [false; KEY_LEN];
    let mut len = 0usize;
    for c in candidate.chars() {
        len += 1;
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            seen[(lower as u8 - b'a') as usize] = true;
        }
    }
    len == KEY_LEN && seen.iter().all(|&present| present)
}

/// A substitution key: a permutation of [`ALPHABET`].
///
/// Stored in canonical lowercase. Construction always goes through
/// validation ([`Key::from_str`]) or the uniform generator
/// ([`Key::random`]), so every `Key` in existence is a valid permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Generates a uniformly random key.
    ///
    /// Shuffles a copy of [`ALPHABET`] with a Fisher–Yates shuffle, so
    /// every one of the 26! permutations is equally likely. Cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::key::{is_valid_key, Key};
    ///
    /// let key = Key::random();
    /// assert!(is_valid_key(key.as_str()));
    /// ```
    pub fn random() -> Self {
        let mut letters = [0u8; KEY_LEN];
        letters.copy_from_slice(ALPHABET.as_bytes());
        letters.shuffle(&mut rand::rng());
        Key(letters)
    }

    /// Returns the key as a lowercase string slice.
    pub fn as_str(&self) -> &str {
        // A Key only ever holds lowercase ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or(ALPHABET)
    }

    /// Cipher image of alphabet position `index` (the forward lookup
    /// used by encryption).
    pub(crate) fn substitute(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// Alphabet position of `letter` within the key (the inverse lookup
    /// used by decryption), or `None` if `letter` is not a lowercase
    /// ASCII letter. For any valid key the search succeeds on every
    /// letter `a..=z`.
    pub(crate) fn position_of(&self, letter: u8) -> Option<usize> {
        self.0.iter().position(|&k| k == letter)
    }
}

impl FromStr for Key {
    type Err = InvalidKeyError;

    /// Parses and validates a candidate key, canonicalizing to lowercase.
    ///
    /// # Errors
    /// Returns [`InvalidKeyError`] if the candidate fails [`is_valid_key`].
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::Key;
    ///
    /// let key: Key = "QWERTYUIOPASDFGHJKLZXCVBNM".parse().unwrap();
    /// assert_eq!(key.as_str(), "qwertyuiopasdfghjklzxcvbnm");
    ///
    /// assert!("not a key".parse::<Key>().is_err());
    /// ```
    fn from_str(candidate: &str) -> Result<Self, Self::Err> {
        if !is_valid_key(candidate) {
            return Err(InvalidKeyError);
        }
        let mut letters = [0u8; KEY_LEN];
        for (slot, c) in letters.iter_mut().zip(candidate.chars()) {
            *slot = c.to_ascii_lowercase() as u8;
        }
        Ok(Key(letters))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
