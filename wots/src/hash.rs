//! Hash core and pseudo-random function.
//!
//! The security parameter fixes the hash function:
//! - **n = 32**: SHA-256
//! - **n = 64**: SHA-512
//!
//! Both are used with their full output, so the digest size is always `n`.

use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Hash function selected by the security parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// SHA-256, n = 32.
    Sha256,
    /// SHA-512, n = 64.
    Sha512,
}

impl HashKind {
    /// Select the hash function for a security parameter.
    ///
    /// Returns `None` for any `n` other than 32 or 64.
    pub const fn from_n(n: usize) -> Option<Self> {
        match n {
            32 => Some(Self::Sha256),
            64 => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Digest size in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Lowercase name, as used in parameter set names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Hash the concatenation of `parts` into `out`.
    ///
    /// # Panics
    /// Panics if `out.len()` differs from [`output_len`](Self::output_len).
    pub fn digest_to(self, out: &mut [u8], parts: &[&[u8]]) {
        match self {
            Self::Sha256 => {
                let mut hasher = Sha256::new();
                for part in parts {
                    hasher.update(part);
                }
                out.copy_from_slice(&hasher.finalize());
            }
            Self::Sha512 => {
                let mut hasher = Sha512::new();
                for part in parts {
                    hasher.update(part);
                }
                out.copy_from_slice(&hasher.finalize());
            }
        }
    }

    /// Hash the concatenation of `parts`.
    pub fn digest(self, parts: &[&[u8]]) -> Vec<u8> {
        let mut out = vec![0u8; self.output_len()];
        self.digest_to(&mut out, parts);
        out
    }

    /// Replace `buf` with its own digest. One chain step.
    pub fn hash_in_place(self, buf: &mut [u8]) {
        match self {
            Self::Sha256 => {
                let digest = Sha256::digest(&*buf);
                buf.copy_from_slice(&digest);
            }
            Self::Sha512 => {
                let digest = Sha512::digest(&*buf);
                buf.copy_from_slice(&digest);
            }
        }
    }
}

/// PRF: `H(key || input)`.
///
/// Expands a master key into per-segment secret values; never used for
/// chaining. The result is wrapped in `Zeroizing` for automatic cleanup.
pub fn prf(kind: HashKind, key: &[u8], input: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(vec![0u8; kind.output_len()]);
    prf_to(kind, &mut out, key, input);
    out
}

/// PRF into a caller-provided buffer.
///
/// The caller is responsible for zeroizing `out`.
pub fn prf_to(kind: HashKind, out: &mut [u8], key: &[u8], input: &[u8]) {
    kind.digest_to(out, &[key, input]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_n() {
        assert_eq!(HashKind::from_n(32), Some(HashKind::Sha256));
        assert_eq!(HashKind::from_n(64), Some(HashKind::Sha512));
        assert_eq!(HashKind::from_n(48), None);
    }

    #[test]
    fn test_sha256_empty() {
        let digest = HashKind::Sha256.digest(&[]);
        assert_eq!(
            hex::encode(digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha512_abc() {
        let digest = HashKind::Sha512.digest(&[b"abc"]);
        assert_eq!(
            hex::encode(digest),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_digest_parts_concatenate() {
        let joined = HashKind::Sha256.digest(&[b"hello world"]);
        let split = HashKind::Sha256.digest(&[b"hello", b" ", b"world"]);
        assert_eq!(joined, split);
    }

    #[test]
    fn test_hash_in_place_matches_digest() {
        let mut buf = [7u8; 64];
        let expected = HashKind::Sha512.digest(&[&buf]);
        HashKind::Sha512.hash_in_place(&mut buf);
        assert_eq!(buf.to_vec(), expected);
    }

    #[test]
    fn test_prf_key_first() {
        let key = [1u8; 32];
        let input = [2u8; 32];
        let out = prf(HashKind::Sha256, &key, &input);
        assert_eq!(out.as_slice(), HashKind::Sha256.digest(&[&key, &input]));
        assert_ne!(out.as_slice(), HashKind::Sha256.digest(&[&input, &key]));
    }

    #[test]
    fn test_prf_deterministic() {
        let key = [9u8; 64];
        let input = [3u8; 64];
        assert_eq!(
            prf(HashKind::Sha512, &key, &input),
            prf(HashKind::Sha512, &key, &input)
        );
        assert_eq!(prf(HashKind::Sha512, &key, &input).len(), 64);
    }
}
