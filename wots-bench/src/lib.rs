//! Shared fixtures for the WOTS benchmarks.

use wots::Params;

/// Test message for signing benchmarks.
pub const TEST_MESSAGE: &[u8] = b"The quick brown fox jumps over the lazy dog";

/// Preset `(n, w)` pairs, in the order they are reported.
pub const PRESETS: [(usize, u32); 4] = [(32, 4), (32, 16), (64, 4), (64, 16)];

/// Runtime parameters for every preset.
pub fn preset_params() -> Vec<Params> {
    PRESETS
        .iter()
        .filter_map(|&(n, w)| Params::new(n, w).ok())
        .collect()
}

/// Fixed master key of `n` bytes. Benchmarks only; never use a constant key.
pub fn fixed_master_key(n: usize) -> Vec<u8> {
    (0..n).map(|i| i as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(preset_params().len(), PRESETS.len());
    }

    #[test]
    fn test_fixed_master_key_length() {
        for params in preset_params() {
            assert_eq!(fixed_master_key(params.n()).len(), params.n());
        }
    }
}
