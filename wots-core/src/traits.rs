//! Cryptographic primitive traits.

use crate::Result;
use rand_core::CryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// One-time digital signature trait.
///
/// A signing key produced by [`keygen`](OneTimeSigner::keygen) may sign
/// exactly one message. [`sign`](OneTimeSigner::sign) therefore takes the
/// signing key by value: once a signature has been produced the key is gone
/// from the calling scope and its memory has been wiped.
///
/// Keys that were serialized and restored (or generated twice from the same
/// master key) can still be reused; that misuse is outside what a stateless
/// signer can detect.
///
/// # Example
///
/// ```ignore
/// use wots_core::OneTimeSigner;
///
/// let (sk, pk) = MyScheme::keygen(&mut rng)?;
/// let sig = MyScheme::sign(sk, message)?;
/// MyScheme::verify(&pk, message, &sig)?;
/// ```
pub trait OneTimeSigner {
    /// Signing key (private key). Single use.
    type SigningKey: Zeroize + ZeroizeOnDrop;

    /// Verification key (public key).
    type VerificationKey: Clone;

    /// Signature produced by signing.
    type Signature: Clone;

    /// Size of the master key consumed by key generation, in bytes.
    const MASTER_KEY_SIZE: usize;

    /// Size of the signing key in bytes.
    const SIGNING_KEY_SIZE: usize;

    /// Size of the verification key in bytes.
    const VERIFICATION_KEY_SIZE: usize;

    /// Size of the signature in bytes.
    const SIGNATURE_SIZE: usize;

    /// Generate a new key pair from a fresh master key drawn from `rng`.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random number generator.
    ///
    /// # Returns
    ///
    /// A tuple of (signing_key, verification_key).
    fn keygen(rng: &mut impl CryptoRng) -> Result<(Self::SigningKey, Self::VerificationKey)>;

    /// Deterministically derive a key pair from caller-supplied master key bytes.
    ///
    /// The master key MUST be drawn uniformly at random and be exactly
    /// [`MASTER_KEY_SIZE`](OneTimeSigner::MASTER_KEY_SIZE) bytes long.
    fn keygen_from_master_key(
        master_key: &[u8],
    ) -> Result<(Self::SigningKey, Self::VerificationKey)>;

    /// Sign a message, consuming the signing key.
    ///
    /// # Arguments
    ///
    /// * `sk` - The signing (private) key.
    /// * `message` - The message to sign.
    ///
    /// # Returns
    ///
    /// The signature.
    fn sign(sk: Self::SigningKey, message: &[u8]) -> Result<Self::Signature>;

    /// Verify a signature.
    ///
    /// # Arguments
    ///
    /// * `pk` - The verification (public) key.
    /// * `message` - The message that was signed.
    /// * `signature` - The signature to verify.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the signature is valid, `Err(Error::VerificationFailed)` otherwise.
    fn verify(
        pk: &Self::VerificationKey,
        message: &[u8],
        signature: &Self::Signature,
    ) -> Result<()>;
}
