//! Arithmetic over GF(2^8) with the AES reduction polynomial.
//!
//! Column mixing only ever multiplies by a handful of fixed constants, so each
//! of them gets a 256-entry lookup table. The tables are generated at compile
//! time from [`gmul`], which keeps a single source of truth for the field
//! multiplication.

/// Low byte of the reduction polynomial `x^8 + x^4 + x^3 + x + 1` (0x11b).
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x` (i.e. by 2).
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Generic GF(2^8) multiplication.
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

const fn mul_table(constant: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = gmul(constant, i as u8);
        i += 1;
    }
    table
}

/// `MUL_2[b] = 2 · b`.
pub const MUL_2: [u8; 256] = mul_table(0x02);
/// `MUL_3[b] = 3 · b`.
pub const MUL_3: [u8; 256] = mul_table(0x03);
/// `MUL_9[b] = 9 · b`.
pub const MUL_9: [u8; 256] = mul_table(0x09);
/// `MUL_11[b] = 11 · b`.
pub const MUL_11: [u8; 256] = mul_table(0x0b);
/// `MUL_13[b] = 13 · b`.
pub const MUL_13: [u8; 256] = mul_table(0x0d);
/// `MUL_14[b] = 14 · b`.
pub const MUL_14: [u8; 256] = mul_table(0x0e);

/// Multiplies `byte` by one of the mixing constants through its lookup table.
///
/// Constants without a table fall back to [`gmul`].
#[inline]
pub fn mul(constant: u8, byte: u8) -> u8 {
    let idx = byte as usize;
    match constant {
        0x01 => byte,
        0x02 => MUL_2[idx],
        0x03 => MUL_3[idx],
        0x09 => MUL_9[idx],
        0x0b => MUL_11[idx],
        0x0d => MUL_13[idx],
        0x0e => MUL_14[idx],
        _ => gmul(constant, byte),
    }
}
