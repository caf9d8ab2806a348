//! AES round transformations.

use crate::block::State;
use crate::gf::mul;
use crate::sbox::{inv_sbox, sbox};

const MIX_COLUMNS_MATRIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

const INV_MIX_COLUMNS_MATRIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.bytes_mut().iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for row in 1..4 {
        let mut values = state.row(row);
        values.rotate_left(row);
        state.set_row(row, values);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for row in 1..4 {
        let mut values = state.row(row);
        values.rotate_right(row);
        state.set_row(row, values);
    }
}

fn mix_with(state: &mut State, matrix: &[[u8; 4]; 4]) {
    for col in 0..4 {
        let column = state.column(col);
        let mixed = core::array::from_fn(|row| {
            matrix[row]
                .iter()
                .zip(column.iter())
                .fold(0u8, |acc, (&c, &b)| acc ^ mul(c, b))
        });
        state.set_column(col, mixed);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    mix_with(state, &MIX_COLUMNS_MATRIX);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    mix_with(state, &INV_MIX_COLUMNS_MATRIX);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    state.xor_in_place(round_key);
}
