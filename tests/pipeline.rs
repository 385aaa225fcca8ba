use genpass::charset::{self, CHARSET_ALL, CHARSET_HEX, CHARSET_LOWER};
use genpass::{collision, duration, entropy, password_generation};
use num_bigint::BigUint;

#[test]
fn lowercase_eight_end_to_end() {
    let alphabet = charset::normalize(CHARSET_LOWER);
    let password = password_generation::generate(&alphabet, 8).unwrap();
    assert_eq!(password.as_str().len(), 8);
    assert!(password.as_str().chars().all(|ch| ch.is_ascii_lowercase()));

    let seconds = collision::collision_count_from_sizes(alphabet.len(), 8).unwrap();
    assert_eq!(duration::format_duration(&seconds), "17 hours");
}

#[test]
fn default_charset_at_default_length() {
    let alphabet = charset::normalize(CHARSET_ALL);
    assert_eq!(alphabet.len(), 73);

    let seconds = collision::collision_count_from_sizes(alphabet.len(), 16).unwrap();
    // 73^16 is about 6.5 * 10^29, so roughly 1.1 * 10^14 seconds: millions of years.
    assert_eq!(
        duration::format_duration(&seconds),
        format!(
            "{} million years",
            &seconds / BigUint::from(31_536_000_000_000u64)
        )
    );
    assert!(entropy::entropy_bits(alphabet.len(), 16) > 98.0);
}

#[test]
fn long_hex_keys_are_an_eternity_apart() {
    let alphabet = charset::normalize(CHARSET_HEX);
    // 16^512 = 2^2048; the square root is still far past 999 googol years.
    let seconds = collision::collision_count_from_sizes(alphabet.len(), 512).unwrap();
    assert_eq!(duration::format_duration(&seconds), "an eternity");
}

#[test]
fn normalized_alphabets_agree_however_they_are_spelled() {
    let scrambled = format!("{}{}", CHARSET_LOWER.chars().rev().collect::<String>(), "zzz");
    assert_eq!(charset::normalize(&scrambled), charset::normalize(CHARSET_LOWER));
}

#[test]
fn empty_alphabet_is_rejected_everywhere() {
    let empty = charset::normalize("");
    assert!(password_generation::generate(&empty, 8)
        .unwrap_err()
        .is_empty_alphabet());
    assert!(collision::collision_count_from_sizes(empty.len(), 8)
        .unwrap_err()
        .is_empty_alphabet());
}
