//! Hash-chain evaluation.
//!
//! A chain starts at a secret segment and applies the hash core once per
//! step. Public keys sit at position `w - 1`; a signature segment sits at the
//! position given by its digit.

use crate::params::Params;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Number of hash applications performed for `(start, steps)`.
///
/// The chain origin is advanced `start + steps` times in total, capped at `w`.
#[inline]
pub fn chain_rounds(params: &Params, start: u32, steps: u32) -> u32 {
    start.saturating_add(steps).min(params.w())
}

/// Advance `x` along its hash chain.
///
/// Returns `x` after `min(start + steps, w)` applications of the hash core.
/// Identical inputs always give identical outputs.
pub fn chain(params: &Params, x: &[u8], start: u32, steps: u32) -> Vec<u8> {
    let mut out = vec![0u8; params.n()];
    chain_to(params, &mut out, x, start, steps);
    out
}

/// Advance `x` along its hash chain into a caller-provided buffer.
///
/// # Panics
/// Panics if `out` or `x` is not `n` bytes long.
pub fn chain_to(params: &Params, out: &mut [u8], x: &[u8], start: u32, steps: u32) {
    out.copy_from_slice(x);

    let hash = params.hash_kind();
    for _ in 0..chain_rounds(params, start, steps) {
        hash.hash_in_place(out);
    }
}
