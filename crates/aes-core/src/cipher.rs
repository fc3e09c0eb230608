//! Key schedule expansion and single-block encryption/decryption.

use core::convert::TryInto;

use crate::block::Block;
use crate::key::{InvalidKeyLength, KeySchedule, KeySize};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands root key bytes into the per-round key schedule.
///
/// The key must be exactly 16, 24, or 32 bytes; the matching variant runs
/// 10, 12, or 14 rounds and the schedule holds one extra key for the initial
/// whitening step. Deterministic: equal keys produce equal schedules.
pub fn expand_key(key: &[u8]) -> Result<KeySchedule, InvalidKeyLength> {
    let size = KeySize::from_key_len(key.len())?;
    let nk = size.nk();
    let total_words = 4 * (size.rounds() + 1);

    let mut w = vec![0u32; total_words];
    for (i, chunk) in key.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / nk - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            // AES-256 applies SubWord to the middle of each eight-word group.
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    let mut round_keys = Vec::with_capacity(size.rounds() + 1);
    for words in w.chunks_exact(4) {
        let mut round_key: Block = [0u8; 16];
        for (word_idx, word) in words.iter().enumerate() {
            round_key[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&word.to_be_bytes());
        }
        round_keys.push(round_key);
    }

    Ok(KeySchedule::new(size, round_keys))
}

/// Encrypts a single 16-byte block with a pre-expanded schedule.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let rounds = schedule.rounds();
    let mut state = *block;

    add_round_key(&mut state, schedule.get(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule.get(round));
    }

    // Final round skips MixColumns.
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, schedule.get(rounds));

    state
}

/// Decrypts a single 16-byte block with a pre-expanded schedule.
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let rounds = schedule.rounds();
    let mut state = *block;

    add_round_key(&mut state, schedule.get(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, schedule.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, schedule.get(0));

    state
}
