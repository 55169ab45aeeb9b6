//! WOTS-SHA512-W4 implementation.
//!
//! SHA-512 with w = 4: 264 short chains.
//! Key and signature size: 16,896 bytes

use crate::params::wots_sha512_w4::*;

crate::types::define_wots_variant!(
    variant_name: WotsSha512W4,
    params_type: ParamsSha512W4,
    sk_size: 16896,
    pk_size: 16896,
    sig_size: 16896
);
