//! Key type wrapper macros for the named WOTS parameter sets.
//!
//! Each named set gets its own `SigningKey`, `VerificationKey` and
//! `Signature` types, so keys from different sets cannot be mixed up at
//! compile time, plus a marker type implementing [`OneTimeSigner`].
//!
//! [`OneTimeSigner`]: wots_core::OneTimeSigner

/// Generate WOTS types and the `OneTimeSigner` implementation for a named
/// parameter set.
macro_rules! define_wots_variant {
    (
        variant_name: $variant_name:ident,
        params_type: $params_type:ty,
        sk_size: $sk_size:expr,
        pk_size: $pk_size:expr,
        sig_size: $sig_size:expr
    ) => {
        use crate::keys::{PublicKey, SecretKey};
        use crate::params::{Params, ParamsSet};
        use crate::sign::keygen;

        use core::fmt;
        use rand_core::CryptoRng;
        use wots_core::{Error, OneTimeSigner, Result};
        use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

        #[cfg(not(feature = "std"))]
        use alloc::vec::Vec;

        /// Runtime parameters of this set.
        pub fn params() -> Params {
            <$params_type as ParamsSet>::params()
        }

        /// Signing key (secret key). Single use.
        pub struct SigningKey(SecretKey);

        impl SigningKey {
            /// Create a signing key from bytes.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                SecretKey::from_bytes(params(), bytes).map(Self)
            }

            /// Serialize the signing key to bytes.
            ///
            /// The copy is wiped when the returned value is dropped.
            pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
                self.0.to_bytes()
            }

            /// Sign `message`, consuming the key.
            pub fn sign(self, message: &[u8]) -> Signature {
                Signature(self.0.sign(message))
            }
        }

        impl Zeroize for SigningKey {
            fn zeroize(&mut self) {
                self.0.zeroize();
            }
        }

        // The inner key wipes itself on drop.
        impl ZeroizeOnDrop for SigningKey {}

        impl fmt::Debug for SigningKey {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple("SigningKey").field(&self.0).finish()
            }
        }

        /// Verification key (public key).
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct VerificationKey(PublicKey);

        impl VerificationKey {
            /// Create a verification key from bytes.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                PublicKey::from_bytes(params(), bytes).map(Self)
            }

            /// Serialize the verification key to bytes.
            pub fn to_bytes(&self) -> Vec<u8> {
                self.0.to_bytes()
            }
        }

        impl AsRef<[u8]> for VerificationKey {
            fn as_ref(&self) -> &[u8] {
                self.0.as_bytes()
            }
        }

        /// Signature.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct Signature(crate::keys::Signature);

        impl Signature {
            /// Create a signature from bytes.
            pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
                crate::keys::Signature::from_bytes(params(), bytes).map(Self)
            }

            /// Get the signature bytes.
            pub fn to_bytes(&self) -> &[u8] {
                self.0.as_bytes()
            }
        }

        impl AsRef<[u8]> for Signature {
            fn as_ref(&self) -> &[u8] {
                self.0.as_bytes()
            }
        }

        /// Algorithm marker type.
        pub struct $variant_name;

        impl OneTimeSigner for $variant_name {
            type SigningKey = SigningKey;
            type VerificationKey = VerificationKey;
            type Signature = Signature;

            const MASTER_KEY_SIZE: usize = N;
            const SIGNING_KEY_SIZE: usize = SK_BYTES;
            const VERIFICATION_KEY_SIZE: usize = PK_BYTES;
            const SIGNATURE_SIZE: usize = SIG_BYTES;

            fn keygen(rng: &mut impl CryptoRng) -> Result<(Self::SigningKey, Self::VerificationKey)> {
                let mut master_key = Zeroizing::new([0u8; N]);
                rng.fill_bytes(master_key.as_mut_slice());
                Self::keygen_from_master_key(master_key.as_slice())
            }

            fn keygen_from_master_key(
                master_key: &[u8],
            ) -> Result<(Self::SigningKey, Self::VerificationKey)> {
                let (sk, pk) = keygen(&params(), master_key)?;
                Ok((SigningKey(sk), VerificationKey(pk)))
            }

            fn sign(sk: Self::SigningKey, message: &[u8]) -> Result<Self::Signature> {
                Ok(sk.sign(message))
            }

            fn verify(
                pk: &Self::VerificationKey,
                message: &[u8],
                signature: &Self::Signature,
            ) -> Result<()> {
                if pk.0.verify(message, &signature.0) {
                    Ok(())
                } else {
                    Err(Error::VerificationFailed)
                }
            }
        }

    };
}

pub(crate) use define_wots_variant;
