//! CBC chaining over the block cipher.

use aes_core::{
    decrypt_block, encrypt_block, expand_key, xor_in_place, Block, KeySchedule, BLOCK_SIZE,
};
use rand::rngs::OsRng;
use rand::RngCore;
use rayon::prelude::*;

use crate::error::CryptoError;
use crate::padding::{pad, unpad};

/// Encrypts a buffer under CBC with a fresh random IV.
///
/// Output layout is `IV || E_1 || ... || E_n`. The IV comes from the OS RNG
/// on every call, so encrypting the same plaintext twice under the same key
/// yields different ciphertexts. Fails only on an unsupported key length.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let schedule = expand_key(key)?;
    let mut iv: Block = [0u8; BLOCK_SIZE];
    OsRng.fill_bytes(&mut iv);
    Ok(encrypt_with_iv(&schedule, &iv, plaintext))
}

// The chain makes block i depend on ciphertext block i-1, so this loop is
// inherently sequential.
fn encrypt_with_iv(schedule: &KeySchedule, iv: &Block, plaintext: &[u8]) -> Vec<u8> {
    let padded = pad(plaintext);
    let mut out = Vec::with_capacity(BLOCK_SIZE + padded.len());
    out.extend_from_slice(iv);

    let mut previous = *iv;
    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut block: Block = chunk.try_into().expect("chunk length matches block");
        xor_in_place(&mut block, &previous);
        previous = encrypt_block(&block, schedule);
        out.extend_from_slice(&previous);
    }
    out
}

/// Decrypts a buffer produced by [`encrypt`].
///
/// The first 16 bytes are taken as the IV. Fails with `TruncatedInput` when
/// the buffer is not an IV followed by whole blocks, and with
/// `InvalidPadding` when the recovered pad is inconsistent; no partial
/// plaintext is ever returned.
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let schedule = expand_key(key)?;
    if ciphertext.len() < BLOCK_SIZE || (ciphertext.len() - BLOCK_SIZE) % BLOCK_SIZE != 0 {
        return Err(CryptoError::TruncatedInput {
            len: ciphertext.len(),
        });
    }
    let (iv, body) = ciphertext.split_at(BLOCK_SIZE);

    // Each block needs only ciphertext blocks i-1 and i plus the shared
    // schedule, so unlike encryption this loop parallelizes cleanly.
    let mut padded = vec![0u8; body.len()];
    padded
        .par_chunks_exact_mut(BLOCK_SIZE)
        .enumerate()
        .for_each(|(i, out)| {
            let start = i * BLOCK_SIZE;
            let block: Block = body[start..start + BLOCK_SIZE]
                .try_into()
                .expect("chunk length matches block");
            let previous = if i == 0 {
                iv
            } else {
                &body[start - BLOCK_SIZE..start]
            };
            let mut plain = decrypt_block(&block, &schedule);
            for (dst, src) in plain.iter_mut().zip(previous.iter()) {
                *dst ^= *src;
            }
            out.copy_from_slice(&plain);
        });

    unpad(&padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    // SP 800-38A F.2.1 (CBC-AES128) first segment, extended with the pad
    // block our encryption appends.
    const KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    const IV: Block = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const PLAIN: [u8; 16] = [
        0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17,
        0x2a,
    ];
    const CIPHER_FIRST: [u8; 16] = [
        0x76, 0x49, 0xab, 0xac, 0x81, 0x19, 0xb2, 0x46, 0xce, 0xe9, 0x8e, 0x9b, 0x12, 0xe9, 0x19,
        0x7d,
    ];
    const CIPHER_PAD: [u8; 16] = [
        0x89, 0x64, 0xe0, 0xb1, 0x49, 0xc1, 0x0b, 0x7b, 0x68, 0x2e, 0x6e, 0x39, 0xaa, 0xeb, 0x73,
        0x1c,
    ];

    #[test]
    fn chaining_matches_nist_cbc_vector() {
        let schedule = expand_key(&KEY).unwrap();
        let ct = encrypt_with_iv(&schedule, &IV, &PLAIN);
        assert_eq!(ct.len(), 48);
        assert_eq!(&ct[..16], &IV[..]);
        assert_eq!(&ct[16..32], &CIPHER_FIRST[..]);
        assert_eq!(&ct[32..], &CIPHER_PAD[..]);
    }

    #[test]
    fn decrypt_recovers_nist_cbc_vector() {
        let mut ct = Vec::new();
        ct.extend_from_slice(&IV);
        ct.extend_from_slice(&CIPHER_FIRST);
        ct.extend_from_slice(&CIPHER_PAD);
        assert_eq!(decrypt(&KEY, &ct).unwrap(), &PLAIN[..]);
    }

    #[test]
    fn identical_blocks_chain_to_distinct_ciphertext() {
        let schedule = expand_key(&KEY).unwrap();
        let plaintext = [0x42u8; 32];
        let ct = encrypt_with_iv(&schedule, &IV, &plaintext);
        assert_ne!(&ct[16..32], &ct[32..48]);
    }

    #[test]
    fn iv_only_buffer_fails_padding_validation() {
        // Length-wise valid but carries zero blocks; unpad rejects it.
        assert_eq!(decrypt(&KEY, &IV), Err(CryptoError::InvalidPadding));
    }
}
