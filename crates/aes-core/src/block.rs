//! Block and state representation helpers.

use core::fmt;

use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Copies `bytes` into a [`Block`], rejecting anything that is not 16 bytes.
///
/// `index` is the position of the block within its stream and is reported in
/// the error.
pub fn block_from_slice(bytes: &[u8], index: usize) -> Result<Block> {
    bytes.try_into().map_err(|_| Error::InvalidBlockLength {
        index,
        got: bytes.len(),
    })
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// The 4×4 cipher state.
///
/// Bytes are stored column-major: row `r`, column `c` lives at offset
/// `4 * c + r`, which is also the offset of that byte in the input block.
#[derive(Clone, Copy, Default, PartialEq, Eq, Zeroize)]
pub struct State([u8; BLOCK_SIZE]);

impl State {
    /// Wraps a block as a state without reordering bytes.
    #[inline]
    pub const fn from_block(block: Block) -> Self {
        Self(block)
    }

    /// Returns the state serialized back to a block.
    #[inline]
    pub const fn to_block(self) -> Block {
        self.0
    }

    /// Byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[4 * col + row]
    }

    /// Overwrites the byte at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.0[4 * col + row] = value;
    }

    /// Copy of row `row`, ordered by column.
    pub fn row(&self, row: usize) -> [u8; 4] {
        core::array::from_fn(|col| self.get(row, col))
    }

    /// Replaces row `row`.
    pub fn set_row(&mut self, row: usize, values: [u8; 4]) {
        for (col, value) in values.into_iter().enumerate() {
            self.set(row, col, value);
        }
    }

    /// Copy of column `col`, ordered by row.
    pub fn column(&self, col: usize) -> [u8; 4] {
        let idx = 4 * col;
        [self.0[idx], self.0[idx + 1], self.0[idx + 2], self.0[idx + 3]]
    }

    /// Replaces column `col`.
    pub fn set_column(&mut self, col: usize, values: [u8; 4]) {
        let idx = 4 * col;
        self.0[idx..idx + 4].copy_from_slice(&values);
    }

    /// Mutable access to every byte, in block order.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8; BLOCK_SIZE] {
        &mut self.0
    }

    /// Raw bytes in block order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    /// XORs `rhs` into `self`.
    #[inline]
    pub fn xor_in_place(&mut self, rhs: &State) {
        xor_in_place(&mut self.0, &rhs.0);
    }
}

impl From<Block> for State {
    fn from(value: Block) -> Self {
        Self::from_block(value)
    }
}

impl From<State> for Block {
    fn from(value: State) -> Self {
        value.to_block()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("State(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_column_major() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let state = State::from_block(block);
        assert_eq!(state.get(0, 0), 0);
        assert_eq!(state.get(1, 0), 1);
        assert_eq!(state.get(0, 1), 4);
        assert_eq!(state.get(3, 2), 11);
        assert_eq!(state.row(1), [1, 5, 9, 13]);
        assert_eq!(state.column(3), [12, 13, 14, 15]);
        assert_eq!(state.to_block(), block);
    }

    #[test]
    fn set_row_and_column_write_through() {
        let mut state = State::default();
        state.set_row(2, [1, 2, 3, 4]);
        state.set_column(0, [9, 9, 9, 9]);
        assert_eq!(state.row(2), [9, 2, 3, 4]);
        assert_eq!(state.as_bytes()[6], 2);
    }

    #[test]
    fn block_from_slice_rejects_short_and_long_input() {
        assert_eq!(
            block_from_slice(&[0u8; 15], 3),
            Err(Error::InvalidBlockLength { index: 3, got: 15 })
        );
        assert_eq!(
            block_from_slice(&[0u8; 17], 0),
            Err(Error::InvalidBlockLength { index: 0, got: 17 })
        );
        assert_eq!(block_from_slice(&[7u8; 16], 0), Ok([7u8; 16]));
    }

    #[test]
    fn debug_prints_hex() {
        let state = State::from_block([0xab; 16]);
        assert_eq!(format!("{state:?}"), format!("State({})", "ab".repeat(16)));
    }
}
