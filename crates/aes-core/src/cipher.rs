//! AES-128 block encryption and decryption.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, State};
use crate::error::Result;
use crate::key::{Aes128Key, RoundKeys};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::expand_key;

/// Number of rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// Runs the forward cipher over `state` in place.
pub fn encrypt_state(state: &mut State, round_keys: &RoundKeys) {
    add_round_key(state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, round_keys.get(round));
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, round_keys.get(ROUNDS));
}

/// Runs the inverse cipher over `state` in place.
///
/// Inside the loop the round key is added before `InvMixColumns`; the two do
/// not commute.
pub fn decrypt_state(state: &mut State, round_keys: &RoundKeys) {
    add_round_key(state, round_keys.get(ROUNDS));

    for round in (1..ROUNDS).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, round_keys.get(round));
        inv_mix_columns(state);
    }

    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, round_keys.get(0));
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(*block);
    encrypt_state(&mut state, round_keys);
    state.to_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(*block);
    decrypt_state(&mut state, round_keys);
    state.to_block()
}

/// AES-128 cipher instance owning its expanded key schedule.
///
/// The schedule is wiped when the instance is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` into a new cipher instance.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Builds a cipher from a key slice, which must be exactly 16 bytes.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        let mut key = Aes128Key::from_slice(key)?;
        let cipher = Self::new(&key);
        key.zeroize();
        Ok(cipher)
    }

    /// The expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts `state` in place.
    pub fn encrypt_state(&self, state: &mut State) {
        encrypt_state(state, &self.round_keys);
    }

    /// Decrypts `state` in place.
    pub fn decrypt_state(&self, state: &mut State) {
        decrypt_state(state, &self.round_keys);
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }
}

impl fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes128").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::key::Aes128Key;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn encrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let ct = encrypt_block(&NIST_PLAIN, &round_keys);
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let pt = decrypt_block(&NIST_CIPHER, &round_keys);
        assert_eq!(pt, NIST_PLAIN);
    }

    #[test]
    fn encrypt_matches_fips_appendix_b() {
        let key = Aes128Key::from([
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ]);
        let plain = [
            0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37,
            0x07, 0x34,
        ];
        let expected = [
            0x39, 0x25, 0x84, 0x1d, 0x02, 0xdc, 0x09, 0xfb, 0xdc, 0x11, 0x85, 0x97, 0x19, 0x6a,
            0x0b, 0x32,
        ];
        let cipher = Aes128::new(&key);
        assert_eq!(cipher.encrypt_block(&plain), expected);
        assert_eq!(cipher.decrypt_block(&expected), plain);
    }

    #[test]
    fn from_slice_rejects_wrong_key_sizes() {
        assert_eq!(
            Aes128::from_slice(&[0u8; 15]).unwrap_err(),
            Error::InvalidKeyLength { got: 15 }
        );
        assert_eq!(
            Aes128::from_slice(&[0u8; 17]).unwrap_err(),
            Error::InvalidKeyLength { got: 17 }
        );
        let cipher = Aes128::from_slice(&NIST_KEY).expect("valid key");
        assert_eq!(cipher.encrypt_block(&NIST_PLAIN), NIST_CIPHER);
    }

    #[test]
    fn debug_does_not_print_round_keys() {
        let cipher = Aes128::new(&Aes128Key::from(NIST_KEY));
        assert_eq!(format!("{cipher:?}"), "Aes128 { .. }");
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let key = Aes128Key::from(key_bytes);
            let rks = expand_key(&key);
            let ct = encrypt_block(&block, &rks);
            let pt = decrypt_block(&ct, &rks);
            assert_eq!(pt, block);
        }
    }
}
