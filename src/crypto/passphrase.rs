//! Random passphrase generation
//!
//! The alphabet leaves out characters that are easy to misread when a
//! passphrase is copied by hand (`I`, `O`, `l`, `0`, `1`).

use aes_gcm::aead::rand_core::{CryptoRng, RngCore};
use aes_gcm::aead::OsRng;

/// Characters a generated passphrase may contain
pub const PASSPHRASE_ALPHABET: &[u8] =
    b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!@#$%^&*()-_=+";

/// Length used when the caller does not ask for one
pub const DEFAULT_PASSPHRASE_LENGTH: usize = 20;

/// Generate a passphrase of `length` characters from the OS random source
pub fn generate_passphrase(length: usize) -> String {
    generate_passphrase_with(&mut OsRng, length)
}

/// Generate a passphrase using the given random source
pub fn generate_passphrase_with<R: RngCore + CryptoRng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| PASSPHRASE_ALPHABET[uniform_index(rng, PASSPHRASE_ALPHABET.len())] as char)
        .collect()
}

/// Uniform index in `0..bound` by rejection sampling
fn uniform_index<R: RngCore>(rng: &mut R, bound: usize) -> usize {
    let bound = bound as u32;
    // Largest multiple of `bound` that fits in a u32; draws above it are biased.
    let zone = u32::MAX - (u32::MAX % bound);
    loop {
        let draw = rng.next_u32();
        if draw < zone {
            return (draw % bound) as usize;
        }
    }
}
