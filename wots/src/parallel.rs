//! Parallel chain evaluation using Rayon.
//!
//! The `len` chains of a key pair or signature are independent, so key
//! generation, signing and verification all fan out across segments.
//! Output is byte-identical to the sequential path.

use crate::chain::chain_to;
use crate::params::Params;

use rayon::prelude::*;

/// Evaluate every chain in parallel: segment `i` of `out` is segment `i` of
/// `inputs` advanced `steps(i)` times.
pub(crate) fn chains_parallel_to<F>(params: &Params, out: &mut [u8], inputs: &[u8], steps: F)
where
    F: Fn(usize) -> u32 + Sync,
{
    debug_assert_eq!(out.len(), inputs.len());
    let n = params.n();

    out.par_chunks_mut(n)
        .zip(inputs.par_chunks(n))
        .enumerate()
        .for_each(|(i, (dst, src))| {
            chain_to(params, dst, src, 0, steps(i));
        });
}

/// Expand a master key into secret segments in parallel.
pub(crate) fn expand_key_parallel_to(params: &Params, out: &mut [u8], master_key: &[u8]) {
    let n = params.n();

    out.par_chunks_mut(n).enumerate().for_each(|(i, segment)| {
        crate::sign::expand_segment_to(params, segment, master_key, i);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::message_digits;
    use crate::sign::{chains_sequential_to, digest_message, expand_key_sequential_to, keygen};

    fn all_params() -> Vec<Params> {
        vec![
            Params::new(32, 4).unwrap(),
            Params::new(32, 16).unwrap(),
            Params::new(64, 4).unwrap(),
            Params::new(64, 16).unwrap(),
        ]
    }

    #[test]
    fn test_parallel_expand_key_matches_sequential() {
        for params in all_params() {
            let master_key = vec![1u8; params.n()];
            let mut seq = vec![0u8; params.key_bytes()];
            let mut par = vec![0u8; params.key_bytes()];

            expand_key_sequential_to(&params, &mut seq, &master_key);
            expand_key_parallel_to(&params, &mut par, &master_key);

            assert_eq!(seq, par, "{params}");
        }
    }

    #[test]
    fn test_parallel_pk_gen_matches_sequential() {
        for params in all_params() {
            let (sk, pk) = keygen(&params, &vec![2u8; params.n()]).unwrap();
            let top = params.w() - 1;

            let mut seq = vec![0u8; params.key_bytes()];
            chains_sequential_to(&params, &mut seq, sk.as_bytes(), |_| top);

            assert_eq!(seq, pk.as_bytes(), "{params}");
        }
    }

    #[test]
    fn test_parallel_sign_matches_sequential() {
        for params in all_params() {
            let (sk, _pk) = keygen(&params, &vec![3u8; params.n()]).unwrap();
            let digits = message_digits(&params, &digest_message(&params, b"parallel"));

            let mut seq = vec![0u8; params.signature_bytes()];
            let mut par = vec![0u8; params.signature_bytes()];
            chains_sequential_to(&params, &mut seq, sk.as_bytes(), |i| digits[i]);
            chains_parallel_to(&params, &mut par, sk.as_bytes(), |i| digits[i]);

            assert_eq!(seq, par, "{params}");
        }
    }

    #[test]
    fn test_parallel_round_trip() {
        for params in all_params() {
            let (sk, pk) = keygen(&params, &vec![4u8; params.n()]).unwrap();
            let sig = sk.sign(b"fan out");
            assert!(pk.verify(b"fan out", &sig), "{params}");
        }
    }
}
