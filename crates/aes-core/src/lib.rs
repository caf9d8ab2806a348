//! AES-128 block cipher built from first principles.
//!
//! This crate follows the FIPS-197 specification and provides:
//! - GF(2^8) arithmetic and the per-constant multiplication tables used by
//!   column mixing.
//! - The forward and inverse S-boxes and the key-expansion round constants.
//! - Key schedule for AES-128.
//! - The round transformations and single-block encryption and decryption.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
mod sbox;
mod schedule;

pub use crate::block::{block_from_slice, xor_in_place, Block, State, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, decrypt_state, encrypt_block, encrypt_state, Aes128, ROUNDS,
};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, RCON, SBOX};
pub use crate::schedule::expand_key;
