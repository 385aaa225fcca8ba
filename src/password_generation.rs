//! Utilities for generating passwords.

use rand::distributions::Slice;
use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};

use crate::charset::Alphabet;
use crate::{GenpassErrorRepr, Secret};

/// Generate an impossible-to-guess password by uniformly sampling the given alphabet, with the
/// operating system's CSPRNG as the source of randomness.
///
/// If the OS can't hand out entropy the whole password is abandoned; there's no weaker fallback.
pub fn generate(alphabet: &Alphabet, len: usize) -> Result<Secret, crate::GenpassError> {
    generate_with_rng(&mut OsRng, alphabet, len)
}

/// Like [`generate`], but seeded from the given RNG.
///
/// The seed is taken once, through the fallible path, so a broken entropy source is reported
/// instead of panicking halfway through a password. The characters themselves come from `rand`'s
/// uniform sampler, which re-samples rather than reducing with a modulo, so there is no bias
/// towards any part of the alphabet.
pub fn generate_with_rng<R>(
    rng: &mut R,
    alphabet: &Alphabet,
    len: usize,
) -> Result<Secret, crate::GenpassError>
where
    R: RngCore + CryptoRng,
{
    let chars = Slice::new(alphabet.as_slice()).map_err(|_| GenpassErrorRepr::EmptyAlphabet)?;
    let mut seeded = StdRng::from_rng(rng).map_err(GenpassErrorRepr::EntropyUnavailable)?;

    let password = (&mut seeded)
        .sample_iter(&chars)
        .take(len)
        .collect::<String>();
    Ok(Secret(password))
}
