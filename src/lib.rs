//! Monoalphabetic substitution cipher engine.
//!
//! A substitution cipher replaces each Latin letter of a message with its
//! image under a fixed permutation of the alphabet (the key). Non-letter
//! characters pass through untouched and letter case is preserved, so
//! decrypting an encrypted message always restores the original exactly.
//!
//! This crate provides the cipher engine only: key validation, uniform
//! random key generation, and the encrypt/decrypt transforms. It performs
//! no I/O; interactive shells or other hosts drive it through the
//! [`SubstitutionCipher`] API and own all prompting, printing, and retry
//! behavior.
//!
//! No cryptographic security is claimed. Monoalphabetic substitution is
//! trivially broken by frequency analysis; this is a classical cipher for
//! educational and recreational use.
//!
//! # Architecture
//!
//! ```text
//! Key                 (26-letter permutation of the alphabet — validation,
//!                      uniform random generation, forward/inverse lookup)
//!     ↑ owned by
//! SubstitutionCipher  (engine — holds the current key, applies the
//!                      character-by-character transform in each direction)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a caller-supplied key:
//!
//! ```
//! use subcipher::SubstitutionCipher;
//!
//! let cipher = SubstitutionCipher::with_key("bcdefghijklmnopqrstuvwxyza").unwrap();
//!
//! let encrypted = cipher.encrypt("Hello, World!");
//! assert_eq!(encrypted, "Ifmmp, Xpsme!");
//!
//! let decrypted = cipher.decrypt(&encrypted);
//! assert_eq!(decrypted, "Hello, World!");
//! ```
//!
//! Let the engine generate a random key:
//!
//! ```
//! use subcipher::SubstitutionCipher;
//!
//! let cipher = SubstitutionCipher::new();
//! let message = "attack at dawn";
//! assert_eq!(cipher.decrypt(&cipher.encrypt(message)), message);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod key;

mod substitution;

pub use key::Key;
pub use substitution::SubstitutionCipher;
