//! The four round transformations and their inverses.
//!
//! The state is a flat 16-byte block holding the 4x4 matrix in column-major
//! order: byte `i` sits at row `i % 4`, column `i / 4`.

use crate::block::{xor_in_place, Block};
use crate::sbox::{inv_sbox, sbox};

/// Doubles a field element, reducing modulo the AES polynomial.
#[inline]
pub(crate) fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Multiplies two bytes in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.
pub(crate) fn gmul(mut a: u8, mut b: u8) -> u8 {
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

/// Replaces every state byte through the S-box.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Inverse of [`sub_bytes`].
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
pub fn shift_rows(state: &mut Block) {
    let prev = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[row + 4 * col] = prev[row + 4 * ((col + row) % 4)];
        }
    }
}

/// Rotates row `r` right by `r` positions, undoing [`shift_rows`].
pub fn inv_shift_rows(state: &mut Block) {
    let prev = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[row + 4 * ((col + row) % 4)] = prev[row + 4 * col];
        }
    }
}

fn mix_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

fn inv_mix_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
    col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
    col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
    col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
}

fn for_each_column(state: &mut Block, f: impl Fn(&mut [u8; 4])) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        f(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Multiplies every column by the fixed MixColumns matrix.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for_each_column(state, mix_column);
}

/// Multiplies every column by the inverse MixColumns matrix.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for_each_column(state, inv_mix_column);
}

/// XORs a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
