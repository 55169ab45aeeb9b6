//! WOTS-SHA256-W4 implementation.
//!
//! SHA-256 with w = 4: 135 short chains. Fewer hash calls than w = 16 at
//! roughly twice the size.
//! Key and signature size: 4,320 bytes

use crate::params::wots_sha256_w4::*;

crate::types::define_wots_variant!(
    variant_name: WotsSha256W4,
    params_type: ParamsSha256W4,
    sk_size: 4320,
    pk_size: 4320,
    sig_size: 4320
);
