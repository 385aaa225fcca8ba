//! Shannon entropy of passwords drawn uniformly from an alphabet.

use std::fmt;

use serde::Serialize;

/// Bits of entropy in a password of `len` characters, each drawn uniformly from `alphabet_size`
/// characters: `log2(alphabet_size) * len`.
pub fn entropy_bits(alphabet_size: usize, len: usize) -> f64 {
    if alphabet_size == 0 || len == 0 {
        return 0.0;
    }
    (alphabet_size as f64).log2() * len as f64
}

/// A coarse label for an amount of entropy.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    const MIN_WEAK: f64 = 28.0;
    const MIN_FAIR: f64 = 56.0;
    const MIN_STRONG: f64 = 84.0;
    const MIN_VERY_STRONG: f64 = 128.0;

    pub fn from_bits(bits: f64) -> Strength {
        if bits >= Self::MIN_VERY_STRONG {
            Strength::VeryStrong
        } else if bits >= Self::MIN_STRONG {
            Strength::Strong
        } else if bits >= Self::MIN_FAIR {
            Strength::Fair
        } else if bits >= Self::MIN_WEAK {
            Strength::Weak
        } else {
            Strength::VeryWeak
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::VeryWeak => "very weak",
            Strength::Weak => "weak",
            Strength::Fair => "fair",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very strong",
        };
        f.write_str(label)
    }
}
