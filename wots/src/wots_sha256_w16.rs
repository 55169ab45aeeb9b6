//! WOTS-SHA256-W16 implementation.
//!
//! SHA-256 with w = 16: 71 chains.
//! Key and signature size: 2,272 bytes

use crate::params::wots_sha256_w16::*;

crate::types::define_wots_variant!(
    variant_name: WotsSha256W16,
    params_type: ParamsSha256W16,
    sk_size: 2272,
    pk_size: 2272,
    sig_size: 2272
);
