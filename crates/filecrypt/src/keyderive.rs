//! Deterministic passphrase-to-key mapping.

use aes_core::KeySize;
use sha2::{Digest, Sha256};

use crate::error::CryptoError;

/// Derives root key bytes from a human-readable passphrase.
///
/// The key is the SHA-256 digest of the passphrase's UTF-8 bytes, truncated
/// to the requested key length. The mapping is stable across runs and
/// platforms; changing it would make existing ciphertexts undecryptable, so
/// it must be treated as part of the wire format.
pub fn derive_key(passphrase: &str, size: KeySize) -> Result<Vec<u8>, CryptoError> {
    let digest = Sha256::digest(passphrase.as_bytes());
    let key = digest[..size.key_len()].to_vec();
    // Post-condition guard for the supported-size invariant.
    if KeySize::from_key_len(key.len()).is_err() {
        return Err(CryptoError::UnsupportedKeySize(key.len()));
    }
    Ok(key)
}
