//! WOTS key generation, signing and verification.
//!
//! - **KeyGen**: secret segment `i` is `PRF(master_key, toByte(i, n))`; public
//!   segment `i` is that value advanced `w - 1` steps.
//! - **Sign**: segment `i` is secret segment `i` advanced `b[i]` steps, where
//!   `b` are the digits of `H(message)` plus checksum.
//! - **Verify**: advance each signature segment the remaining `w - 1 - b[i]`
//!   steps and compare against the public key.

use crate::chain::chain_to;
use crate::encode::message_digits;
use crate::hash::prf_to;
use crate::keys::{PublicKey, SecretKey};
use crate::params::Params;
use subtle::ConstantTimeEq;
use wots_core::{Error, Result};
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Largest supported `n`; sizes stack buffers.
const MAX_N: usize = 64;

/// Message digest `H(message)`, `n` bytes.
pub fn digest_message(params: &Params, message: &[u8]) -> Vec<u8> {
    params.hash_kind().digest(&[message])
}

/// `toByte(i, n)`: the segment index as an n-byte big-endian integer.
fn index_bytes_to(out: &mut [u8], index: usize) {
    out.fill(0);
    let be = (index as u64).to_be_bytes();
    let start = out.len() - be.len();
    out[start..].copy_from_slice(&be);
}

fn check_master_key(params: &Params, master_key: &[u8]) -> Result<()> {
    if master_key.len() != params.n() {
        return Err(Error::InvalidKeyLength {
            expected: params.n(),
            actual: master_key.len(),
        });
    }
    Ok(())
}

/// Secret segment `i`: `PRF(master_key, toByte(i, n))`.
pub(crate) fn expand_segment_to(params: &Params, out: &mut [u8], master_key: &[u8], index: usize) {
    let n = params.n();
    let mut input = [0u8; MAX_N];
    index_bytes_to(&mut input[..n], index);
    prf_to(params.hash_kind(), out, master_key, &input[..n]);
}

/// Expand an n-byte master key into `len` secret segments.
fn expand_key_to(params: &Params, out: &mut [u8], master_key: &[u8]) {
    #[cfg(feature = "parallel")]
    crate::parallel::expand_key_parallel_to(params, out, master_key);

    #[cfg(not(feature = "parallel"))]
    expand_key_sequential_to(params, out, master_key);
}

#[cfg_attr(all(feature = "parallel", not(test)), allow(dead_code))]
pub(crate) fn expand_key_sequential_to(params: &Params, out: &mut [u8], master_key: &[u8]) {
    for (i, segment) in out.chunks_exact_mut(params.n()).enumerate() {
        expand_segment_to(params, segment, master_key, i);
    }
}

/// Expand an n-byte master key into the `n * len` byte secret key.
///
/// # Errors
/// [`Error::InvalidKeyLength`] if `master_key` is not `n` bytes.
pub fn expand_key(params: &Params, master_key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    check_master_key(params, master_key)?;
    let mut out = Zeroizing::new(vec![0u8; params.key_bytes()]);
    expand_key_to(params, &mut out, master_key);
    Ok(out)
}

/// Evaluate every chain: segment `i` of `out` is segment `i` of `inputs`
/// advanced `steps(i)` times.
fn chains_to<F>(params: &Params, out: &mut [u8], inputs: &[u8], steps: F)
where
    F: Fn(usize) -> u32 + Sync,
{
    #[cfg(feature = "parallel")]
    crate::parallel::chains_parallel_to(params, out, inputs, steps);

    #[cfg(not(feature = "parallel"))]
    chains_sequential_to(params, out, inputs, steps);
}

/// Sequential chain evaluation.
#[cfg_attr(all(feature = "parallel", not(test)), allow(dead_code))]
pub(crate) fn chains_sequential_to<F>(params: &Params, out: &mut [u8], inputs: &[u8], steps: F)
where
    F: Fn(usize) -> u32,
{
    debug_assert_eq!(out.len(), inputs.len());
    let n = params.n();

    for (i, (dst, src)) in out
        .chunks_exact_mut(n)
        .zip(inputs.chunks_exact(n))
        .enumerate()
    {
        chain_to(params, dst, src, 0, steps(i));
    }
}

/// Public key from secret key bytes: every chain advanced to `w - 1`.
pub(crate) fn pk_gen_to(params: &Params, out: &mut [u8], sk: &[u8]) {
    let top = params.w() - 1;
    chains_to(params, out, sk, |_| top);
}

/// Signature over an n-byte digest.
pub(crate) fn sign_digest_to(params: &Params, out: &mut [u8], digest: &[u8], sk: &[u8]) {
    let digits = message_digits(params, digest);
    chains_to(params, out, sk, |i| digits[i]);
}

/// Candidate public key recovered from a signature over an n-byte digest.
pub(crate) fn pk_from_sig_to(params: &Params, out: &mut [u8], digest: &[u8], sig: &[u8]) {
    let digits = message_digits(params, digest);
    let top = params.w() - 1;
    chains_to(params, out, sig, |i| top - digits[i]);
}

/// Generate a key pair from an n-byte master key.
///
/// The master key MUST be drawn uniformly at random; it is the only entropy
/// in the key pair. Generation is deterministic in `(params, master_key)`.
///
/// # Errors
/// [`Error::InvalidKeyLength`] if `master_key` is not `n` bytes.
pub fn keygen(params: &Params, master_key: &[u8]) -> Result<(SecretKey, PublicKey)> {
    check_master_key(params, master_key)?;

    let mut sk = SecretKey::zeroed(*params);
    expand_key_to(params, sk.as_mut_bytes(), master_key);

    let mut pk = vec![0u8; params.key_bytes()];
    pk_gen_to(params, &mut pk, sk.as_bytes());

    Ok((sk, PublicKey::from_vec(*params, pk)))
}

/// Sign `message` with raw secret key bytes.
///
/// Deterministic. A secret key MUST sign only one message; prefer
/// [`SecretKey::sign`], which consumes the key.
///
/// # Errors
/// [`Error::InvalidKeyLength`] if `sk` is not `n * len` bytes.
pub fn sign_bytes(params: &Params, message: &[u8], sk: &[u8]) -> Result<Vec<u8>> {
    if sk.len() != params.key_bytes() {
        return Err(Error::InvalidKeyLength {
            expected: params.key_bytes(),
            actual: sk.len(),
        });
    }

    let digest = digest_message(params, message);
    let mut sig = vec![0u8; params.signature_bytes()];
    sign_digest_to(params, &mut sig, &digest, sk);
    Ok(sig)
}

/// Recover the public key a signature commits to.
///
/// The result equals the signer's public key exactly when the signature is
/// valid for `message`.
///
/// # Errors
/// [`Error::InvalidSignatureLength`] if `sig` is not `n * len` bytes.
pub fn pk_from_sig(params: &Params, message: &[u8], sig: &[u8]) -> Result<Vec<u8>> {
    if sig.len() != params.signature_bytes() {
        return Err(Error::InvalidSignatureLength {
            expected: params.signature_bytes(),
            actual: sig.len(),
        });
    }

    let digest = digest_message(params, message);
    let mut pk = vec![0u8; params.key_bytes()];
    pk_from_sig_to(params, &mut pk, &digest, sig);
    Ok(pk)
}

/// Verify a signature against raw public key bytes.
///
/// Returns `false` on any segment mismatch, and when `pk` or `sig` is not
/// `n * len` bytes long.
pub fn verify(params: &Params, message: &[u8], pk: &[u8], sig: &[u8]) -> bool {
    if pk.len() != params.key_bytes() {
        return false;
    }

    match pk_from_sig(params, message, sig) {
        Ok(candidate) => candidate.as_slice().ct_eq(pk).into(),
        Err(_) => false,
    }
}
