//! Key-size selection and expanded key schedules.

use thiserror::Error;

use crate::block::Block;

/// Root key bytes were not 16, 24, or 32 bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key length {0} is not one of the supported sizes (16, 24, or 32 bytes)")]
pub struct InvalidKeyLength(pub usize);

/// The three AES variants, selected by root key length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Selects the variant matching a root key length in bytes.
    pub fn from_key_len(len: usize) -> Result<Self, InvalidKeyLength> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(InvalidKeyLength(other)),
        }
    }

    /// Root key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Key length in 32-bit words (Nk in FIPS-197).
    pub const fn nk(self) -> usize {
        self.key_len() / 4
    }

    /// Number of cipher rounds (Nr in FIPS-197).
    pub const fn rounds(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }
}

/// Expanded round keys for one root key.
///
/// Holds `rounds + 1` 16-byte round keys. Immutable once produced; safe to
/// share read-only across any number of block operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    size: KeySize,
    round_keys: Vec<Block>,
}

impl KeySchedule {
    pub(crate) fn new(size: KeySize, round_keys: Vec<Block>) -> Self {
        debug_assert_eq!(round_keys.len(), size.rounds() + 1);
        Self { size, round_keys }
    }

    /// The variant this schedule was expanded for.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Number of cipher rounds the schedule covers.
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Returns the round key at the requested index (0..=rounds).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.round_keys[round]
    }
}
