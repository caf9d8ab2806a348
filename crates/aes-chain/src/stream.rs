//! Whole-sequence entry points.

use aes_core::{block_from_slice, Block, Result};
use tracing::debug;

use crate::session::{ChainSession, Direction};

/// Runs every block of `blocks` through a fresh session, in order.
///
/// The key and every block length are validated before any block is
/// transformed; on error nothing is returned.
pub fn process_stream<I>(
    key: &[u8],
    iv: &Block,
    blocks: I,
    direction: Direction,
) -> Result<Vec<Block>>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut session = ChainSession::new(key, iv, direction)?;
    let blocks = blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| block_from_slice(block.as_ref(), index))
        .collect::<Result<Vec<_>>>()?;

    debug!(?direction, blocks = blocks.len(), "processing block stream");
    Ok(blocks.iter().map(|block| session.process(block)).collect())
}

/// Encrypts `blocks` under `key`, chaining from `iv`.
pub fn encrypt<I>(key: &[u8], iv: &Block, blocks: I) -> Result<Vec<Block>>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    process_stream(key, iv, blocks, Direction::Encrypt)
}

/// Decrypts `blocks` under `key`, chaining from `iv`.
pub fn decrypt<I>(key: &[u8], iv: &Block, blocks: I) -> Result<Vec<Block>>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    process_stream(key, iv, blocks, Direction::Decrypt)
}
