//! Error types for the AES-128 core.

use thiserror::Error;

/// Errors raised while validating cipher inputs.
///
/// Both variants are detected before any transformation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The supplied key is not exactly 16 bytes.
    #[error("invalid key length: expected 16 bytes, got {got}")]
    InvalidKeyLength {
        /// Length of the rejected key.
        got: usize,
    },

    /// A block at `index` in the input sequence is not exactly 16 bytes.
    #[error("invalid block length at index {index}: expected 16 bytes, got {got}")]
    InvalidBlockLength {
        /// Position of the offending block.
        index: usize,
        /// Length of the offending block.
        got: usize,
    },
}

/// Result alias used across the workspace.
pub type Result<T> = core::result::Result<T, Error>;
