//! AES block cipher core used by the filecrypt engine.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedules for AES-128, AES-192, and AES-256.
//! - Single-block encryption and decryption.
//! - The S-box and GF(2^8) arithmetic backing both.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::key::{InvalidKeyLength, KeySchedule, KeySize};
