//! Initialization vectors.

use aes_core::Block;
use rand::{CryptoRng, RngCore};

/// Fixed IV used when none is supplied: the ASCII bytes of `8899AABBCCDDEEFF`.
///
/// It is public and constant, so it provides no confidentiality for repeated
/// messages. Use [`random_iv`] for anything but compatibility.
pub const DEFAULT_IV: Block = *b"8899AABBCCDDEEFF";

/// Draws a fresh IV from `rng`.
pub fn random_iv<R: RngCore + CryptoRng>(rng: &mut R) -> Block {
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut iv);
    iv
}
