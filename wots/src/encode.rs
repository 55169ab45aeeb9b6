//! Base-w encoding and the message checksum.
//!
//! A message digest is signed as its base-w digits followed by the base-w
//! digits of a checksum. Advancing any message chain forward lowers the
//! checksum, which would require walking a checksum chain backwards.

use crate::params::Params;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Extract `out_len` base-2^`log_w` digits from `x`, most significant bits first.
///
/// Bytes are pulled into the bit buffer one at a time whenever fewer than
/// `log_w` bits remain. If `x` runs out before `out_len` digits have been
/// produced, the remaining low bits are zero-padded.
///
/// # Arguments
/// * `x` - Input bytes
/// * `log_w` - Bits per digit, in `1..=16`
/// * `out_len` - Number of digits to produce
///
/// # Returns
/// Vector of digits, each in `[0, 2^log_w)`
#[must_use]
pub fn base_w(x: &[u8], log_w: u32, out_len: usize) -> Vec<u32> {
    debug_assert!(log_w > 0 && log_w <= 16);

    let mut result = Vec::with_capacity(out_len);
    let mask = (1u32 << log_w) - 1;

    let mut bits: u32 = 0;
    let mut num_bits: u32 = 0;
    let mut byte_idx: usize = 0;

    for _ in 0..out_len {
        while num_bits < log_w && byte_idx < x.len() {
            bits = (bits << 8) | u32::from(x[byte_idx]);
            num_bits += 8;
            byte_idx += 1;
        }

        if num_bits >= log_w {
            num_bits -= log_w;
            result.push((bits >> num_bits) & mask);
        } else {
            result.push((bits << (log_w - num_bits)) & mask);
            num_bits = 0;
        }
        bits &= (1u32 << num_bits) - 1;
    }

    result
}

/// Base-w encode all of `x`: `8 * x.len() / log_w` digits.
///
/// Remainder bits that do not fill a whole digit are discarded.
#[must_use]
pub fn to_base_w(x: &[u8], params: &Params) -> Vec<u32> {
    let log_w = params.log_w();
    base_w(x, log_w, 8 * x.len() / log_w as usize)
}

/// Checksum over message digits: `sum(w - 1 - digit)`.
///
/// Bounded by `len1 * (w - 1)`.
#[must_use]
pub fn checksum(digits: &[u32], w: u32) -> u64 {
    digits.iter().map(|&d| u64::from(w - 1 - d)).sum()
}

/// Little-endian checksum bytes, truncated or zero-padded to `len2` bytes.
#[must_use]
pub fn checksum_bytes(csum: u64, len2: usize) -> Vec<u8> {
    let le = csum.to_le_bytes();
    let mut out = vec![0u8; len2];
    let take = len2.min(le.len());
    out[..take].copy_from_slice(&le[..take]);
    out
}

/// Digits `b` signed for an n-byte message digest.
///
/// `len1` message digits followed by `len2` checksum digits. The checksum
/// digits are the first `len2` base-w digits of [`checksum_bytes`].
#[must_use]
pub fn message_digits(params: &Params, digest: &[u8]) -> Vec<u32> {
    debug_assert_eq!(digest.len(), params.n());

    let log_w = params.log_w();
    let mut digits = base_w(digest, log_w, params.len1());

    let csum = checksum(&digits, params.w());
    let csum_bytes = checksum_bytes(csum, params.len2());
    digits.extend(base_w(&csum_bytes, log_w, params.len2()));

    digits
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
mod tests {
    use super::*;

    #[test]
    fn test_base_w_4bit() {
        // 0xAB = 1010_1011 -> [10, 11] in base 16
        assert_eq!(base_w(&[0xAB], 4, 2), vec![0xA, 0xB]);
    }

    #[test]
    fn test_base_w_2bit() {
        // 0b11_10_01_00
        assert_eq!(base_w(&[0xE4], 2, 4), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_base_w_1bit() {
        assert_eq!(base_w(&[0x81], 1, 8), vec![1, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_base_w_8bit() {
        assert_eq!(base_w(&[0x12, 0x34], 8, 2), vec![0x12, 0x34]);
    }

    #[test]
    fn test_base_w_16bit() {
        assert_eq!(base_w(&[0x12, 0x34, 0xFF, 0x01], 16, 2), vec![0x1234, 0xFF01]);
    }

    #[test]
    fn test_base_w_straddles_bytes() {
        // 3-bit digits over 0b101_100_11 0b1_000_000_0
        assert_eq!(base_w(&[0xB3, 0x80], 3, 5), vec![5, 4, 7, 0, 0]);
    }

    #[test]
    fn test_base_w_pads_short_input() {
        assert_eq!(base_w(&[0xFF], 4, 3), vec![0xF, 0xF, 0]);
        // Two bits left over, padded into a 3-bit digit.
        assert_eq!(base_w(&[0xFF], 3, 3), vec![7, 7, 6]);
    }

    #[test]
    fn test_base_w_prefix() {
        // Asking for fewer digits yields a prefix of the full encoding.
        let full = base_w(&[0xDE, 0xAD], 2, 8);
        assert_eq!(base_w(&[0xDE, 0xAD], 2, 3), full[..3].to_vec());
    }

    #[test]
    fn test_to_base_w_length() {
        let params = Params::new(32, 4).unwrap();
        assert_eq!(to_base_w(&[0u8; 32], &params).len(), 128);
        assert_eq!(to_base_w(&[0u8; 7], &params).len(), 28);

        let params = Params::new(32, 8).unwrap();
        // 8 bits / 3 -> 2 digits, remainder discarded.
        assert_eq!(to_base_w(&[0xFF], &params), vec![7, 7]);
    }

    #[test]
    fn test_checksum() {
        // For w=16, each digit is in [0, 15]
        assert_eq!(checksum(&[0, 0, 0, 0], 16), 60);
        assert_eq!(checksum(&[15, 15, 15, 15], 16), 0);
        assert_eq!(checksum(&[8, 8, 8, 8], 16), 28);
    }

    #[test]
    fn test_checksum_bytes_little_endian() {
        assert_eq!(checksum_bytes(0x0180, 7), vec![0x80, 0x01, 0, 0, 0, 0, 0]);
        assert_eq!(checksum_bytes(0x0102_0304, 2), vec![0x04, 0x03]);
        assert_eq!(checksum_bytes(0x01, 10), vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_message_digits_all_zero_digest() {
        // n = 32, w = 4: 128 zero digits, checksum 128 * 3 = 384 = 0x0180.
        let params = Params::new(32, 4).unwrap();
        let digits = message_digits(&params, &[0u8; 32]);

        assert_eq!(digits.len(), params.len());
        assert!(digits[..128].iter().all(|&d| d == 0));
        // 0x80 -> [2, 0, 0, 0], then the top 6 bits of 0x01 -> [0, 0, 0].
        assert_eq!(&digits[128..], &[2, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_message_digits_all_ones_digest() {
        // Maximal digits give a zero checksum.
        let params = Params::new(64, 16).unwrap();
        let digits = message_digits(&params, &[0xFF; 64]);

        assert_eq!(digits.len(), 136);
        assert!(digits[..128].iter().all(|&d| d == 15));
        assert!(digits[128..].iter().all(|&d| d == 0));
    }

    #[test]
    fn test_message_digits_sha512_w16_checksum() {
        // 128 zero digits: checksum 1920 = 0x0780 -> LE [0x80, 0x07, 0, 0]
        let params = Params::new(64, 16).unwrap();
        let digits = message_digits(&params, &[0u8; 64]);
        assert_eq!(&digits[128..], &[8, 0, 0, 7, 0, 0, 0, 0]);
    }

    #[test]
    fn test_message_digits_in_range() {
        let params = Params::new(32, 16).unwrap();
        let digest: Vec<u8> = (0..32u8).map(|i| i.wrapping_mul(37)).collect();
        let digits = message_digits(&params, &digest);

        assert_eq!(digits.len(), params.len());
        assert!(digits.iter().all(|&d| d < params.w()));
    }
}
