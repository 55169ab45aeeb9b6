//! Key and signature containers.
//!
//! All three hold `n * len` bytes laid out as `len` consecutive n-byte
//! segments, segment index ascending. That raw layout is also the
//! serialization format.

use crate::params::Params;
use crate::sign::{digest_message, sign_digest_to, verify};
use core::fmt;
use wots_core::{Error, Result};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// WOTS secret key.
///
/// Single use: signing consumes the key, and there is no `Clone`. The key
/// material is wiped when the value is dropped.
pub struct SecretKey {
    params: Params,
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Allocate a zeroed key to be filled by key expansion.
    pub(crate) fn zeroed(params: Params) -> Self {
        Self {
            params,
            bytes: vec![0u8; params.key_bytes()],
        }
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Create a secret key from its serialized bytes.
    ///
    /// # Errors
    /// [`Error::InvalidKeyLength`] unless `bytes` is exactly `n * len` long.
    pub fn from_bytes(params: Params, bytes: &[u8]) -> Result<Self> {
        check_len(&params, bytes.len())?;
        let mut key = Self::zeroed(params);
        key.bytes.copy_from_slice(bytes);
        Ok(key)
    }

    /// Parameters this key was generated under.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Serialize the secret key.
    ///
    /// The copy is wiped when the returned value is dropped.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.clone())
    }

    /// Sign `message`, consuming the key.
    pub fn sign(self, message: &[u8]) -> Signature {
        let digest = digest_message(&self.params, message);
        let mut sig = vec![0u8; self.params.signature_bytes()];
        sign_digest_to(&self.params, &mut sig, &digest, &self.bytes);
        Signature {
            params: self.params,
            bytes: sig,
        }
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// WOTS public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    params: Params,
    bytes: Vec<u8>,
}

impl PublicKey {
    pub(crate) fn from_vec(params: Params, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), params.key_bytes());
        Self { params, bytes }
    }

    /// Create a public key from its serialized bytes.
    ///
    /// # Errors
    /// [`Error::InvalidKeyLength`] unless `bytes` is exactly `n * len` long.
    pub fn from_bytes(params: Params, bytes: &[u8]) -> Result<Self> {
        check_len(&params, bytes.len())?;
        Ok(Self {
            params,
            bytes: bytes.to_vec(),
        })
    }

    /// Parameters this key was generated under.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Serialize the public key.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Check `signature` over `message` against this key.
    ///
    /// Signatures made under different parameters never verify.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.params == signature.params
            && verify(&self.params, message, &self.bytes, &signature.bytes)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// WOTS signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    params: Params,
    bytes: Vec<u8>,
}

impl Signature {
    /// Create a signature from its serialized bytes.
    ///
    /// # Errors
    /// [`Error::InvalidSignatureLength`] unless `bytes` is exactly `n * len` long.
    pub fn from_bytes(params: Params, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != params.signature_bytes() {
            return Err(Error::InvalidSignatureLength {
                expected: params.signature_bytes(),
                actual: bytes.len(),
            });
        }
        Ok(Self {
            params,
            bytes: bytes.to_vec(),
        })
    }

    /// Parameters the signature was made under.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Raw signature bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Serialize the signature.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

fn check_len(params: &Params, actual: usize) -> Result<()> {
    if actual != params.key_bytes() {
        return Err(Error::InvalidKeyLength {
            expected: params.key_bytes(),
            actual,
        });
    }
    Ok(())
}
