//! WOTS parameter derivation and the named parameter sets.
//!
//! A parameter set is fully determined by the security parameter `n` (bytes)
//! and the Winternitz parameter `w`. Everything else is derived:
//!
//! - `log_w = log2(w)`
//! - `len1 = ceil(8n / log_w)`, the number of base-w digits of an n-byte digest
//! - `len2 = floor(log2(len1 * (w - 1) / log_w + 1))`, the checksum digits
//! - `len = len1 + len2`, the number of n-byte segments in keys and signatures

use crate::hash::HashKind;
use core::fmt;
use core::str::FromStr;
use wots_core::{Error, Result};

/// Smallest accepted `log2(w)`.
pub const MIN_LOG_W: u32 = 1;

/// Largest accepted `log2(w)`.
pub const MAX_LOG_W: u32 = 16;

/// Supported security parameters, in bytes.
pub const SUPPORTED_N: [usize; 2] = [32, 64];

/// Derived WOTS parameters.
///
/// Immutable once constructed; every key, signature and digit array built
/// under a `Params` value has the lengths recorded here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Params {
    n: usize,
    w: u32,
    log_w: u32,
    len1: usize,
    len2: usize,
    hash: HashKind,
}

impl Params {
    /// Validate `(n, w)` and derive the remaining parameters.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `w` is not a power of two in
    /// `[2, 2^16]`, or if `n` is not 32 or 64.
    pub fn new(n: usize, w: u32) -> Result<Self> {
        if w & w.wrapping_sub(1) != 0 || w < (1 << MIN_LOG_W) || w > (1 << MAX_LOG_W) {
            return Err(Error::InvalidParameter {
                name: "w",
                value: w as usize,
            });
        }

        let hash = HashKind::from_n(n).ok_or(Error::InvalidParameter { name: "n", value: n })?;

        Ok(Self::derive(n, w, hash))
    }

    /// Derive lengths for an already validated `(n, w)` pair.
    const fn derive(n: usize, w: u32, hash: HashKind) -> Self {
        let log_w = w.trailing_zeros();
        let len1 = (8 * n).div_ceil(log_w as usize);
        let len2 = (len1 * (w as usize - 1) / log_w as usize + 1).ilog2() as usize;

        Self {
            n,
            w,
            log_w,
            len1,
            len2,
            hash,
        }
    }

    /// Security parameter in bytes (chain element and digest size).
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Winternitz parameter.
    pub const fn w(&self) -> u32 {
        self.w
    }

    /// Bits consumed per base-w digit.
    pub const fn log_w(&self) -> u32 {
        self.log_w
    }

    /// Number of message digits.
    pub const fn len1(&self) -> usize {
        self.len1
    }

    /// Number of checksum digits.
    pub const fn len2(&self) -> usize {
        self.len2
    }

    /// Total number of digits, and of n-byte segments per key or signature.
    pub const fn len(&self) -> usize {
        self.len1 + self.len2
    }

    /// Hash function selected by `n`.
    pub const fn hash_kind(&self) -> HashKind {
        self.hash
    }

    /// Size of a secret key, public key or signature in bytes (`n * len`).
    pub const fn key_bytes(&self) -> usize {
        self.n * self.len()
    }

    /// Size of a signature in bytes. Same as [`key_bytes`](Self::key_bytes).
    pub const fn signature_bytes(&self) -> usize {
        self.key_bytes()
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-w{}", self.hash.name(), self.w)
    }
}

/// Parses names of the form `sha256-w16` or `sha512-w4`.
impl FromStr for Params {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        let s = s.strip_prefix("wots-").unwrap_or(s.as_str());
        let (hash, w) = s.split_once("-w").ok_or(Error::UnsupportedParameterSet)?;
        let n = match hash {
            "sha256" => 32,
            "sha512" => 64,
            _ => return Err(Error::UnsupportedParameterSet),
        };
        let w: u32 = w.parse().map_err(|_| Error::UnsupportedParameterSet)?;
        Self::new(n, w)
    }
}

/// Compile-time description of a named parameter set.
pub trait ParamsSet {
    /// Display name of the set.
    const NAME: &'static str;

    /// Security parameter n (hash output length in bytes).
    const N: usize;

    /// Winternitz parameter.
    const W: u32;

    /// log2(W).
    const LOG_W: u32;

    /// Hash function for this set.
    const HASH: HashKind;

    /// len1 = ceil(8n / log_w).
    const LEN1: usize;

    /// len2 = floor(log2(len1 * (w - 1) / log_w + 1)).
    const LEN2: usize;

    /// Total number of segments: len = len1 + len2.
    const LEN: usize = Self::LEN1 + Self::LEN2;

    /// Secret key size in bytes.
    const SK_BYTES: usize = Self::N * Self::LEN;

    /// Public key size in bytes.
    const PK_BYTES: usize = Self::N * Self::LEN;

    /// Signature size in bytes.
    const SIG_BYTES: usize = Self::N * Self::LEN;

    /// Runtime parameters for this set.
    fn params() -> Params {
        Params::derive(Self::N, Self::W, Self::HASH)
    }
}

// =============================================================================
// SHA-256, w = 4
// =============================================================================

/// WOTS-SHA256-W4 parameters.
#[cfg(feature = "wots-sha256-w4")]
pub mod wots_sha256_w4 {
    use crate::hash::HashKind;

    /// Security parameter (32 bytes, SHA-256).
    pub const N: usize = 32;
    /// Winternitz parameter.
    pub const W: u32 = 4;
    /// log2(W).
    pub const LOG_W: u32 = 2;
    /// Message digits: 256 / 2.
    pub const LEN1: usize = 128;
    /// Checksum digits: floor(log2(128 * 3 / 2 + 1)).
    pub const LEN2: usize = 7;
    /// Total segments.
    pub const LEN: usize = LEN1 + LEN2;
    /// Secret key size: 32 * 135 = 4320.
    pub const SK_BYTES: usize = N * LEN;
    /// Public key size.
    pub const PK_BYTES: usize = N * LEN;
    /// Signature size.
    pub const SIG_BYTES: usize = N * LEN;

    /// Parameter set marker type.
    pub struct ParamsSha256W4;

    impl super::ParamsSet for ParamsSha256W4 {
        const NAME: &'static str = "WOTS-SHA256-W4";
        const N: usize = N;
        const W: u32 = W;
        const LOG_W: u32 = LOG_W;
        const HASH: HashKind = HashKind::Sha256;
        const LEN1: usize = LEN1;
        const LEN2: usize = LEN2;
    }
}

// =============================================================================
// SHA-256, w = 16
// =============================================================================

/// WOTS-SHA256-W16 parameters.
#[cfg(feature = "wots-sha256-w16")]
pub mod wots_sha256_w16 {
    use crate::hash::HashKind;

    /// Security parameter (32 bytes, SHA-256).
    pub const N: usize = 32;
    /// Winternitz parameter.
    pub const W: u32 = 16;
    /// log2(W).
    pub const LOG_W: u32 = 4;
    /// Message digits: 256 / 4.
    pub const LEN1: usize = 64;
    /// Checksum digits: floor(log2(64 * 15 / 4 + 1)).
    pub const LEN2: usize = 7;
    /// Total segments.
    pub const LEN: usize = LEN1 + LEN2;
    /// Secret key size: 32 * 71 = 2272.
    pub const SK_BYTES: usize = N * LEN;
    /// Public key size.
    pub const PK_BYTES: usize = N * LEN;
    /// Signature size.
    pub const SIG_BYTES: usize = N * LEN;

    /// Parameter set marker type.
    pub struct ParamsSha256W16;

    impl super::ParamsSet for ParamsSha256W16 {
        const NAME: &'static str = "WOTS-SHA256-W16";
        const N: usize = N;
        const W: u32 = W;
        const LOG_W: u32 = LOG_W;
        const HASH: HashKind = HashKind::Sha256;
        const LEN1: usize = LEN1;
        const LEN2: usize = LEN2;
    }
}

// =============================================================================
// SHA-512, w = 4
// =============================================================================

/// WOTS-SHA512-W4 parameters.
#[cfg(feature = "wots-sha512-w4")]
pub mod wots_sha512_w4 {
    use crate::hash::HashKind;

    /// Security parameter (64 bytes, SHA-512).
    pub const N: usize = 64;
    /// Winternitz parameter.
    pub const W: u32 = 4;
    /// log2(W).
    pub const LOG_W: u32 = 2;
    /// Message digits: 512 / 2.
    pub const LEN1: usize = 256;
    /// Checksum digits: floor(log2(256 * 3 / 2 + 1)).
    pub const LEN2: usize = 8;
    /// Total segments.
    pub const LEN: usize = LEN1 + LEN2;
    /// Secret key size: 64 * 264 = 16896.
    pub const SK_BYTES: usize = N * LEN;
    /// Public key size.
    pub const PK_BYTES: usize = N * LEN;
    /// Signature size.
    pub const SIG_BYTES: usize = N * LEN;

    /// Parameter set marker type.
    pub struct ParamsSha512W4;

    impl super::ParamsSet for ParamsSha512W4 {
        const NAME: &'static str = "WOTS-SHA512-W4";
        const N: usize = N;
        const W: u32 = W;
        const LOG_W: u32 = LOG_W;
        const HASH: HashKind = HashKind::Sha512;
        const LEN1: usize = LEN1;
        const LEN2: usize = LEN2;
    }
}

// =============================================================================
// SHA-512, w = 16
// =============================================================================

/// WOTS-SHA512-W16 parameters.
#[cfg(feature = "wots-sha512-w16")]
pub mod wots_sha512_w16 {
    use crate::hash::HashKind;

    /// Security parameter (64 bytes, SHA-512).
    pub const N: usize = 64;
    /// Winternitz parameter.
    pub const W: u32 = 16;
    /// log2(W).
    pub const LOG_W: u32 = 4;
    /// Message digits: 512 / 4.
    pub const LEN1: usize = 128;
    /// Checksum digits: floor(log2(128 * 15 / 4 + 1)).
    pub const LEN2: usize = 8;
    /// Total segments.
    pub const LEN: usize = LEN1 + LEN2;
    /// Secret key size: 64 * 136 = 8704.
    pub const SK_BYTES: usize = N * LEN;
    /// Public key size.
    pub const PK_BYTES: usize = N * LEN;
    /// Signature size.
    pub const SIG_BYTES: usize = N * LEN;

    /// Parameter set marker type.
    pub struct ParamsSha512W16;

    impl super::ParamsSet for ParamsSha512W16 {
        const NAME: &'static str = "WOTS-SHA512-W16";
        const N: usize = N;
        const W: u32 = W;
        const LOG_W: u32 = LOG_W;
        const HASH: HashKind = HashKind::Sha512;
        const LEN1: usize = LEN1;
        const LEN2: usize = LEN2;
    }
}
