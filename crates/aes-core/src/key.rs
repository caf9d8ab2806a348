//! Key types for AES-128.

use zeroize::Zeroize;

use crate::block::State;
use crate::error::{Error, Result};

/// Number of round keys produced for AES-128 (rounds 0..=10).
pub const ROUND_KEY_COUNT: usize = 11;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct Aes128Key(pub [u8; 16]);

impl Aes128Key {
    /// Builds a key from an arbitrary byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::try_from(bytes)
    }

    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        let bytes: [u8; 16] = value
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { got: value.len() })?;
        Ok(Self(bytes))
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct RoundKeys(pub [State; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &State {
        &self.0[round]
    }
}
