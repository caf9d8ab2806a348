//! AES-128 key expansion.

use crate::block::State;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::sbox::{sbox, RCON};

/// Words in the expanded key (4 per round key).
const EXPANDED_WORDS: usize = 4 * ROUND_KEY_COUNT;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into 11 round keys.
///
/// Round key `r` is built from words `W[4r..4r+3]`, word `j` becoming column
/// `j` of the state, so round key 0 is the key itself.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; EXPANDED_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 4..EXPANDED_WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / 4]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    let round_keys = core::array::from_fn(|round| {
        let mut state = State::default();
        for col in 0..4 {
            state.set_column(col, w[round * 4 + col].to_be_bytes());
        }
        state
    });

    RoundKeys(round_keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_block(s: &str) -> [u8; 16] {
        core::array::from_fn(|i| u8::from_str_radix(&s[2 * i..2 * i + 2], 16).unwrap())
    }

    #[test]
    fn round_key_zero_is_the_raw_key() {
        let key = Aes128Key::from(hex_block("000102030405060708090a0b0c0d0e0f"));
        let rks = expand_key(&key);
        assert_eq!(rks.get(0).to_block(), key.0);
    }

    #[test]
    fn expansion_is_deterministic() {
        let key = Aes128Key::from([0x42; 16]);
        assert_eq!(expand_key(&key), expand_key(&key));
    }

    #[test]
    fn matches_fips_197_appendix_a1() {
        let key = Aes128Key::from(hex_block("2b7e151628aed2a6abf7158809cf4f3c"));
        let rks = expand_key(&key);
        assert_eq!(
            rks.get(1).to_block(),
            hex_block("a0fafe1788542cb123a339392a6c7605")
        );
        assert_eq!(
            rks.get(10).to_block(),
            hex_block("d014f9a8c9ee2589e13f0cc8b6630ca6")
        );
    }

    #[test]
    fn all_zero_key_schedule() {
        let rks = expand_key(&Aes128Key::from([0u8; 16]));
        assert_eq!(
            rks.get(1).to_block(),
            hex_block("62636363626363636263636362636363")
        );
        assert_eq!(
            rks.get(10).to_block(),
            hex_block("b4ef5bcb3e92e21123e951cf6f8f188e")
        );
    }
}
