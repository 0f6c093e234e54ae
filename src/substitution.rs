//! SubstitutionCipher: the monoalphabetic cipher engine.
//!
//! Holds the current [`Key`] and applies the substitution transform in
//! both directions. Encryption maps each letter through alphabet position
//! to key position; decryption searches the key and maps back to the
//! alphabet. Letter case is preserved and every non-letter character
//! passes through verbatim, so `decrypt(encrypt(text))` always returns
//! `text` exactly.
//!
//! The engine does no I/O and never retries on its own: a failed key
//! change reports [`InvalidKeyError`] once and leaves the current key in
//! place, so interactive hosts decide whether to re-prompt.

use crate::error::InvalidKeyError;
use crate::key::Key;

/// Monoalphabetic substitution cipher engine.
///
/// Always holds exactly one valid key. The key is replaced atomically by
/// [`set_random_key`](Self::set_random_key) or [`set_key`](Self::set_key);
/// a partially-updated key is never observable, and a rejected candidate
/// leaves the previous key untouched.
pub struct SubstitutionCipher {
    key: Key,
}

impl Default for SubstitutionCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl SubstitutionCipher {
    /// Creates a new engine with a freshly generated random key.
    ///
    /// A new key is generated on every call. Cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::SubstitutionCipher;
    ///
    /// let cipher = SubstitutionCipher::new();
    /// assert_eq!(cipher.key().as_str().len(), 26);
    /// ```
    pub fn new() -> Self {
        SubstitutionCipher { key: Key::random() }
    }

    /// Creates a new engine with a caller-supplied key, validating it.
    ///
    /// The candidate is canonicalized to lowercase before storage.
    ///
    /// # Parameters
    /// - `candidate`: The key text, any case.
    ///
    /// # Errors
    /// Returns [`InvalidKeyError`] if the candidate is not, case-folded, a
    /// 26-letter permutation of the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::SubstitutionCipher;
    ///
    /// let cipher = SubstitutionCipher::with_key("zyxwvutsrqponmlkjihgfedcba").unwrap();
    /// assert_eq!(cipher.key().as_str(), "zyxwvutsrqponmlkjihgfedcba");
    ///
    /// assert!(SubstitutionCipher::with_key("too short").is_err());
    /// ```
    pub fn with_key(candidate: &str) -> Result<Self, InvalidKeyError> {
        Ok(SubstitutionCipher {
            key: candidate.parse()?,
        })
    }

    /// Returns the current key as a read-only snapshot.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Replaces the current key with a freshly generated random key.
    ///
    /// Always succeeds.
    pub fn set_random_key(&mut self) {
        self.key = Key::random();
    }

    /// Replaces the current key with a validated caller-supplied key.
    ///
    /// On success the candidate is stored in canonical lowercase. On
    /// failure the current key is left unchanged; the engine never
    /// re-prompts or retries, that is the caller's loop.
    ///
    /// # Parameters
    /// - `candidate`: The key text, any case.
    ///
    /// # Errors
    /// Returns [`InvalidKeyError`] if the candidate fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::SubstitutionCipher;
    ///
    /// let mut cipher = SubstitutionCipher::new();
    /// assert!(cipher.set_key("mnbvcxzlkjhgfdsapoiuytrewq").is_ok());
    /// assert_eq!(cipher.key().as_str(), "mnbvcxzlkjhgfdsapoiuytrewq");
    ///
    /// assert!(cipher.set_key("nope").is_err());
    /// assert_eq!(cipher.key().as_str(), "mnbvcxzlkjhgfdsapoiuytrewq");
    /// ```
    pub fn set_key(&mut self, candidate: &str) -> Result<(), InvalidKeyError> {
        self.key = candidate.parse()?;
        Ok(())
    }

    /// Encrypts text with the current key.
    ///
    /// Each Latin letter is replaced by the key letter at the same
    /// alphabet position, uppercase input producing uppercase output.
    /// Punctuation, digits, whitespace, and non-Latin characters are
    /// appended unchanged. Total: never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::SubstitutionCipher;
    ///
    /// let cipher = SubstitutionCipher::with_key("bcdefghijklmnopqrstuvwxyza").unwrap();
    /// assert_eq!(cipher.encrypt("Hello, World!"), "Ifmmp, Xpsme!");
    /// ```
    pub fn encrypt(&self, plaintext: &str) -> String {
        let mut output = String::with_capacity(plaintext.len());
        for c in plaintext.chars() {
            if !c.is_ascii_alphabetic() {
                output.push(c);
                continue;
            }
            let index = (c.to_ascii_lowercase() as u8 - b'a') as usize;
            let substituted = self.key.substitute(index) as char;
            output.push(if c.is_ascii_uppercase() {
                substituted.to_ascii_uppercase()
            } else {
                substituted
            });
        }
        output
    }

    /// Decrypts text with the current key.
    ///
    /// Mirror of [`encrypt`](Self::encrypt) with the lookup reversed:
    /// each Latin letter is located within the key and replaced by the
    /// alphabet letter at that position, case preserved, non-letters
    /// unchanged. For any valid key, `decrypt(encrypt(text)) == text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcipher::SubstitutionCipher;
    ///
    /// let cipher = SubstitutionCipher::with_key("bcdefghijklmnopqrstuvwxyza").unwrap();
    /// assert_eq!(cipher.decrypt("Ifmmp, Xpsme!"), "Hello, World!");
    /// ```
    pub fn decrypt(&self, ciphertext: &str) -> String {
        let mut output = String::with_capacity(ciphertext.len());
        for c in ciphertext.chars() {
            if !c.is_ascii_alphabetic() {
                output.push(c);
                continue;
            }
            // Every lowercase letter occurs in a valid key, so the search
            // always succeeds here; None would mean a broken key invariant
            // and degrades to passthrough rather than panicking.
            match self.key.position_of(c.to_ascii_lowercase() as u8) {
                Some(index) => {
                    let original = (b'a' + index as u8) as char;
                    output.push(if c.is_ascii_uppercase() {
                        original.to_ascii_uppercase()
                    } else {
                        original
                    });
                }
                None => output.push(c),
            }
        }
        output
    }
}
