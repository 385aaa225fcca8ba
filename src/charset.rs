//! Character sets, and turning them into alphabets.

use std::fmt;

pub const CHARSET_HEX: &str = "abcdef0123456789";
pub const CHARSET_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const CHARSET_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const CHARSET_NUM: &str = "0123456789";
pub const CHARSET_SPECIAL: &str = "!@#$%^&*()_";
pub const CHARSET_ALPHA: &str = concat!("abcdefghijklmnopqrstuvwxyz", "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
pub const CHARSET_ALPHANUM: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789"
);
pub const CHARSET_ALL: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!@#$%^&*()_"
);

/// The distinct characters of a charset, in ascending code point order.
///
/// The only way to get one is through [`normalize`] (or collecting an iterator of `char`s, which
/// normalizes too), so two alphabets built from the same characters always compare equal, no
/// matter how the input was ordered or how often a character repeated.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Alphabet {
        let mut chars = iter.into_iter().collect::<Vec<_>>();
        chars.sort_unstable();
        chars.dedup();
        Alphabet(chars)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.0 {
            fmt::Write::write_char(f, *ch)?;
        }
        Ok(())
    }
}

/// Remove duplicate characters from `charset` and sort what remains.
pub fn normalize(charset: &str) -> Alphabet {
    let alphabet = charset.chars().collect::<Alphabet>();
    log::trace!(
        "normalized a charset of {} chars into an alphabet of {}",
        charset.chars().count(),
        alphabet.len()
    );
    alphabet
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sorts_and_dedups() {
        assert_eq!(normalize("cabbac").to_string(), "abc");
        assert_eq!(normalize(CHARSET_HEX).to_string(), "0123456789abcdef");
    }

    #[test]
    fn empty_charset() {
        let alphabet = normalize("");
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.to_string(), "");
    }

    #[test]
    fn non_ascii_orders_by_code_point() {
        assert_eq!(normalize("éaÅa").as_slice(), &['a', 'Å', 'é']);
    }

    #[test]
    fn constants() {
        assert_eq!(normalize(CHARSET_LOWER).len(), 26);
        assert_eq!(normalize(CHARSET_UPPER).len(), 26);
        assert_eq!(normalize(CHARSET_NUM).len(), 10);
        assert_eq!(normalize(CHARSET_HEX).len(), 16);
        assert_eq!(normalize(CHARSET_SPECIAL).len(), 11);
        assert_eq!(CHARSET_ALPHA, format!("{CHARSET_LOWER}{CHARSET_UPPER}"));
        assert_eq!(
            CHARSET_ALPHANUM,
            format!("{CHARSET_LOWER}{CHARSET_UPPER}{CHARSET_NUM}")
        );
        assert_eq!(
            CHARSET_ALL,
            format!("{CHARSET_LOWER}{CHARSET_UPPER}{CHARSET_NUM}{CHARSET_SPECIAL}")
        );
        assert_eq!(normalize(CHARSET_ALL).len(), 73);
    }

    #[test]
    fn special_chars() {
        assert_eq!(normalize(CHARSET_SPECIAL).to_string(), "!#$%&()*@^_");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC*") {
            let once = normalize(&s);
            let twice = normalize(&once.to_string());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn order_and_repetition_do_not_matter(mut chars in prop::collection::vec(any::<char>(), 0..64)) {
            let forward = chars.iter().collect::<String>();
            chars.reverse();
            let mut doubled = chars.clone();
            doubled.extend(chars.iter().copied());
            let backward = doubled.iter().collect::<String>();
            prop_assert_eq!(normalize(&forward), normalize(&backward));
        }
    }
}
