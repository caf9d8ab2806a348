//! Previous-ciphertext block chaining over the AES-128 core.
//!
//! Every plaintext block is XORed with a chain value before encryption. The
//! chain value starts as the IV and then becomes the previous ciphertext
//! block, so blocks must be processed strictly in order.
//!
//! No padding is applied: callers supply complete 16-byte blocks.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod iv;
mod session;
mod stream;

pub use aes_core::{Block, Error, Result, BLOCK_SIZE};

pub use crate::iv::{random_iv, DEFAULT_IV};
pub use crate::session::{ChainSession, Direction};
pub use crate::stream::{decrypt, encrypt, process_stream};
