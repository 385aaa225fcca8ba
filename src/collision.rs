//! Birthday-paradox estimates: how long until repeated generation produces the same password twice.
//!
//! The number of draws from a uniform space of size `M` before the chance of at least one
//! collision reaches `p` is approximately
//!
//! ```text
//! N = sqrt(2 * M * ln(1 / (1 - p)))
//! ```
//!
//! Here `p` is fixed at 1%, and one password is assumed to be generated per second, so `N` reads as
//! a number of seconds. `M` routinely has hundreds of digits, so everything is done in `BigUint`
//! fixed-point arithmetic; no floats are involved.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{Pow, Zero};

use crate::GenpassErrorRepr;

/// Fewest decimal digits of fixed-point precision used for `ln(1 / (1 - p))`.
const MIN_SCALE_DIGITS: u64 = 60;

/// Digits of precision kept beyond the size of the space.
const GUARD_DIGITS: u64 = 40;

/// Inverse of the collision probability (p = 1/100).
const INV_PROBABILITY: u32 = 100;

/// Decimal digits of precision needed for an exact result over `space`.
///
/// The error in the scaled logarithm is multiplied by `M` before the square root, so the scale has
/// to outgrow `M` itself. `bits / 3` over-counts the decimal digits of `M`. Always even, so the
/// square root of the scale is a power of ten as well.
fn scale_digits_for(space: &BigUint) -> u32 {
    let digits = std::cmp::max(MIN_SCALE_DIGITS, space.bits() / 3 + GUARD_DIGITS);
    let digits = digits + digits % 2;
    u32::try_from(digits).unwrap_or(u32::MAX - 1)
}

/// `2 * ln(1 / (1 - p))`, scaled by `10^scale_digits`.
///
/// For `p = 1/q`, `ln(1 / (1 - p))` is the series `sum(1 / (k * q^k))`, so each term can be taken
/// exactly as an integer quotient. Terms stop once they fall below one unit of the scale.
fn double_ln_factor(scale_digits: u32) -> BigUint {
    let scale = BigUint::from(10u32).pow(scale_digits);
    let q = BigUint::from(INV_PROBABILITY);
    let mut sum = BigUint::zero();
    let mut q_pow = q.clone();
    let mut k = 1u32;
    loop {
        let term = &scale / (&q_pow * k);
        if term.is_zero() {
            break;
        }
        sum += term;
        q_pow *= &q;
        k += 1;
    }
    sum * 2u32
}

/// `ceil(sqrt(2 * M * ln(1 / (1 - p))))` with the logarithm held to `scale_digits` digits.
fn collision_count_with_scale(space: &BigUint, scale_digits: u32) -> BigUint {
    // radicand = 2 * M * ln(1 / (1 - p)) * 10^scale_digits
    let radicand = space * double_ln_factor(scale_digits);
    log::debug!(
        "collision radicand has {} bits at {} digits of precision",
        radicand.bits(),
        scale_digits
    );
    let root = radicand.sqrt();
    let exact = &root * &root == radicand;

    // sqrt(radicand) / 10^(scale_digits / 2), rounded up.
    let root_scale = BigUint::from(10u32).pow(scale_digits / 2);
    let (quotient, remainder) = root.div_rem(&root_scale);
    if exact && remainder.is_zero() {
        quotient
    } else {
        quotient + 1u32
    }
}

/// Number of passwords that can be built from `alphabet_size` characters at `len` characters long.
pub fn possible_passwords(alphabet_size: usize, len: usize) -> BigUint {
    Pow::pow(BigUint::from(alphabet_size), len)
}

/// Number of passwords that can be generated (one a second) from a space of `space` possible
/// passwords before there's a 1% chance that two of them were the same.
///
/// The result is rounded up: a partial last generation still counts.
///
/// An empty space is rejected.
pub fn collision_count(space: &BigUint) -> Result<BigUint, crate::GenpassError> {
    if space.is_zero() {
        return Err(GenpassErrorRepr::EmptySpace.into());
    }

    Ok(collision_count_with_scale(space, scale_digits_for(space)))
}

/// Like [`collision_count`], but computes the space from an alphabet size and a password length.
///
/// An empty alphabet is rejected, the same as it is when generating a password.
pub fn collision_count_from_sizes(
    alphabet_size: usize,
    len: usize,
) -> Result<BigUint, crate::GenpassError> {
    if alphabet_size == 0 {
        return Err(GenpassErrorRepr::EmptyAlphabet.into());
    }
    collision_count(&possible_passwords(alphabet_size, len))
}

/// Scale a [`collision_count`] to `per_second` passwords generated each second, rounding up.
pub fn collision_seconds_at_rate(
    count: &BigUint,
    per_second: u64,
) -> Result<BigUint, crate::GenpassError> {
    if per_second == 0 {
        return Err(GenpassErrorRepr::ZeroRate.into());
    }
    if per_second == 1 {
        return Ok(count.clone());
    }
    Ok(count.div_ceil(&BigUint::from(per_second)))
}
