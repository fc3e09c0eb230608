//! PKCS#7 padding over 16-byte blocks.

use aes_core::BLOCK_SIZE;

use crate::error::CryptoError;

/// Appends pad bytes until the length is a multiple of the block size.
///
/// Always appends between 1 and 16 bytes, each carrying the pad length, so
/// block-aligned input grows by a full pad block and [`unpad`] stays
/// unambiguous.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let fill = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + fill);
    padded.extend_from_slice(data);
    padded.resize(data.len() + fill, fill as u8);
    padded
}

/// Strips and validates the pad appended by [`pad`].
///
/// Rejects empty input, a pad length outside 1..=16, and any trailing byte
/// that disagrees with the pad length. The validation is mandatory; without
/// it truncated or corrupted ciphertext would silently decode to garbage.
pub fn unpad(data: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let last = *data.last().ok_or(CryptoError::InvalidPadding)?;
    let fill = last as usize;
    if fill == 0 || fill > BLOCK_SIZE || fill > data.len() {
        return Err(CryptoError::InvalidPadding);
    }
    let (body, tail) = data.split_at(data.len() - fill);
    if tail.iter().any(|&byte| byte != last) {
        return Err(CryptoError::InvalidPadding);
    }
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_fills_to_block_multiple() {
        assert_eq!(pad(b""), vec![16u8; 16]);
        assert_eq!(pad(b"a"), {
            let mut expected = vec![b'a'];
            expected.extend(std::iter::repeat(15u8).take(15));
            expected
        });
        let aligned = pad(&[0u8; 16]);
        assert_eq!(aligned.len(), 32);
        assert_eq!(&aligned[16..], &[16u8; 16]);
    }

    #[test]
    fn pad_is_always_strictly_longer() {
        for len in 0..64 {
            let padded = pad(&vec![0xab; len]);
            assert!(padded.len() > len);
            assert_eq!(padded.len() % 16, 0);
        }
    }

    #[test]
    fn unpad_reverses_pad() {
        for len in [0usize, 1, 15, 16, 17, 31, 32, 1000] {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            assert_eq!(unpad(&pad(&data)).unwrap(), data);
        }
    }

    #[test]
    fn unpad_rejects_empty_input() {
        assert_eq!(unpad(&[]), Err(CryptoError::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_out_of_range_lengths() {
        assert_eq!(unpad(&[1, 2, 0]), Err(CryptoError::InvalidPadding));
        let mut data = vec![0u8; 16];
        data[15] = 17;
        assert_eq!(unpad(&data), Err(CryptoError::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_inconsistent_run() {
        let mut data = pad(b"hello");
        data[10] ^= 0x01;
        assert_eq!(unpad(&data), Err(CryptoError::InvalidPadding));
    }

    #[test]
    fn unpad_rejects_run_longer_than_input() {
        // Last byte claims 5 pad bytes but only 3 are present.
        assert_eq!(unpad(&[5, 5, 5]), Err(CryptoError::InvalidPadding));
    }
}
