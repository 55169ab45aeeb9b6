//! WOTS-SHA512-W16 implementation.
//!
//! SHA-512 with w = 16: 136 chains.
//! Key and signature size: 8,704 bytes

use crate::params::wots_sha512_w16::*;

crate::types::define_wots_variant!(
    variant_name: WotsSha512W16,
    params_type: ParamsSha512W16,
    sk_size: 8704,
    pk_size: 8704,
    sig_size: 8704
);
