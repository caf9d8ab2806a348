//! Incremental chaining session.

use core::fmt;

use aes_core::round::add_round_key;
use aes_core::{block_from_slice, Aes128, Block, Result, State};
use tracing::trace;
use zeroize::Zeroize;

/// Direction a session transforms its blocks in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext in, ciphertext out.
    Encrypt,
    /// Ciphertext in, plaintext out.
    Decrypt,
}

/// A single chaining session: cipher, current chain value and direction.
///
/// Blocks are processed strictly in the order they are fed. The chain value
/// is wiped when the session is dropped.
pub struct ChainSession {
    cipher: Aes128,
    chain: State,
    direction: Direction,
    processed: usize,
}

impl ChainSession {
    /// Starts a session from a raw key, which must be exactly 16 bytes.
    pub fn new(key: &[u8], iv: &Block, direction: Direction) -> Result<Self> {
        Ok(Self::with_cipher(Aes128::from_slice(key)?, iv, direction))
    }

    /// Starts a session around an already expanded cipher.
    pub fn with_cipher(cipher: Aes128, iv: &Block, direction: Direction) -> Self {
        Self {
            cipher,
            chain: State::from_block(*iv),
            direction,
            processed: 0,
        }
    }

    /// Shorthand for an encrypting session.
    pub fn encryptor(key: &[u8], iv: &Block) -> Result<Self> {
        Self::new(key, iv, Direction::Encrypt)
    }

    /// Shorthand for a decrypting session.
    pub fn decryptor(key: &[u8], iv: &Block) -> Result<Self> {
        Self::new(key, iv, Direction::Decrypt)
    }

    /// Direction of this session.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of blocks processed so far.
    pub fn blocks_processed(&self) -> usize {
        self.processed
    }

    /// The value the next block will be chained with.
    pub fn chain_value(&self) -> Block {
        self.chain.to_block()
    }

    /// Validates and processes the next block.
    ///
    /// A block that is not 16 bytes is rejected without touching the chain
    /// value.
    pub fn process_block(&mut self, block: &[u8]) -> Result<Block> {
        let block = block_from_slice(block, self.processed)?;
        Ok(self.process(&block))
    }

    pub(crate) fn process(&mut self, block: &Block) -> Block {
        let out = match self.direction {
            Direction::Encrypt => self.encrypt_next(block),
            Direction::Decrypt => self.decrypt_next(block),
        };
        trace!(index = self.processed, direction = ?self.direction, "block processed");
        self.processed += 1;
        out
    }

    fn encrypt_next(&mut self, block: &Block) -> Block {
        let mut state = State::from_block(*block);
        add_round_key(&mut state, &self.chain);
        self.cipher.encrypt_state(&mut state);
        self.chain = state;
        state.to_block()
    }

    fn decrypt_next(&mut self, block: &Block) -> Block {
        let saved = State::from_block(*block);
        let mut state = saved;
        self.cipher.decrypt_state(&mut state);
        add_round_key(&mut state, &self.chain);
        self.chain = saved;
        state.to_block()
    }
}

impl Drop for ChainSession {
    fn drop(&mut self) {
        self.chain.zeroize();
    }
}

impl fmt::Debug for ChainSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainSession")
            .field("direction", &self.direction)
            .field("processed", &self.processed)
            .finish_non_exhaustive()
    }
}
