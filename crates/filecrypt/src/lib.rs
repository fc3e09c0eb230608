//! Buffer-level encryption engine built on the `aes-core` block cipher.
//!
//! This crate turns the fixed-size block cipher into a transform over
//! arbitrary-length byte buffers:
//! - PKCS#7 padding to and from exact block boundaries.
//! - CBC chaining with a fresh random IV per encryption.
//! - A deterministic passphrase-to-key mapping (SHA-256, truncated).
//!
//! The wire format is `IV || E_1 || ... || E_n`, all 16-byte blocks, with no
//! length prefix. There is no authentication tag; a padding check catches most
//! corruption but is not a substitute for a MAC.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cbc;
mod error;
mod keyderive;
mod padding;

pub use aes_core::{InvalidKeyLength, KeySize, BLOCK_SIZE};
pub use crate::cbc::{decrypt, encrypt};
pub use crate::error::CryptoError;
pub use crate::keyderive::derive_key;
pub use crate::padding::{pad, unpad};
