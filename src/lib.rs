//! Secure password generation, and statistics about the space a password was drawn from.
//!
//! The pieces compose like so:
//!
//! ```
//! use genpass::{charset, collision, duration, password_generation};
//!
//! let alphabet = charset::normalize(charset::CHARSET_LOWER);
//! let password = password_generation::generate(&alphabet, 8).unwrap();
//! assert_eq!(password.as_str().chars().count(), 8);
//!
//! let seconds = collision::collision_count_from_sizes(alphabet.len(), 8).unwrap();
//! println!("{}", duration::format_duration(&seconds));
//! ```

use serde::{Serialize, Serializer};
use zeroize::Zeroize;

pub mod charset;
pub mod collision;
pub mod duration;
pub mod entropy;
pub mod password_generation;

pub use charset::Alphabet;

/// A generated password.
///
/// The contents never show up in `Debug` output, and are wiped from memory on drop.
#[derive(Clone, Eq, PartialEq)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct GenpassError(GenpassErrorRepr);

impl GenpassError {
    /// The alphabet had no characters in it.
    pub fn is_empty_alphabet(&self) -> bool {
        matches!(self.0, GenpassErrorRepr::EmptyAlphabet)
    }

    /// The space of possible passwords was zero.
    pub fn is_empty_space(&self) -> bool {
        matches!(self.0, GenpassErrorRepr::EmptySpace)
    }

    pub fn is_zero_rate(&self) -> bool {
        matches!(self.0, GenpassErrorRepr::ZeroRate)
    }

    /// The operating system's entropy source could not be read.
    pub fn is_entropy_unavailable(&self) -> bool {
        matches!(self.0, GenpassErrorRepr::EntropyUnavailable(_))
    }
}

impl From<GenpassErrorRepr> for GenpassError {
    fn from(err: GenpassErrorRepr) -> GenpassError {
        GenpassError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum GenpassErrorRepr {
    #[error("the alphabet is empty; there is nothing to choose from")]
    EmptyAlphabet,
    #[error("the space of possible passwords is empty")]
    EmptySpace,
    #[error("the generation rate must be at least one password per second")]
    ZeroRate,
    #[error("the secure entropy source failed: {0}")]
    EntropyUnavailable(#[source] rand::Error),
}
