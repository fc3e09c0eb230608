//! Failure values surfaced by the engine.

use thiserror::Error;

/// Everything that can go wrong while encrypting or decrypting a buffer.
///
/// All variants are returned to the caller as-is; the engine never logs,
/// retries, or produces partial output alongside an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Root key bytes were not 16, 24, or 32 bytes long.
    #[error(transparent)]
    InvalidKeyLength(#[from] aes_core::InvalidKeyLength),

    /// Ciphertext was shorter than one IV block, or not an IV followed by
    /// whole 16-byte blocks.
    #[error("ciphertext of {len} bytes is not an IV followed by whole 16-byte blocks")]
    TruncatedInput {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// The trailing pad bytes were inconsistent. Indicates corruption or a
    /// wrong key; no partial plaintext is returned.
    #[error("padding bytes are inconsistent; the ciphertext is corrupted or the key is wrong")]
    InvalidPadding,

    /// The passphrase mapping produced a byte count outside the supported
    /// set. Indicates a derivation bug.
    #[error("key derivation produced {0} bytes, which is not a supported key size")]
    UnsupportedKeySize(usize),
}
