//! Winternitz One-Time Signatures (WOTS)
//!
//! This crate provides a pure Rust implementation of the Winternitz one-time
//! signature scheme over SHA-256 and SHA-512. WOTS is a hash-based signature:
//! its security rests only on the one-wayness of the underlying hash function.
//!
//! **A secret key may sign exactly one message.** Signing twice with the same
//! key lets an observer forge signatures on other messages. [`SecretKey::sign`]
//! and [`OneTimeSigner::sign`] consume the key to make reuse hard to write by
//! accident.
//!
//! # Parameters
//!
//! Any pair of security parameter `n` (32 or 64 bytes) and Winternitz
//! parameter `w` (a power of two, `2 <= w <= 65536`) is accepted at runtime
//! through [`Params::new`]. Four sets are also available as typed variants:
//!
//! | Variant | Hash | w | Chains | Key / Signature |
//! |---------|------|---|--------|-----------------|
//! | WOTS-SHA256-W4 | SHA-256 | 4 | 135 | 4,320 bytes |
//! | WOTS-SHA256-W16 | SHA-256 | 16 | 71 | 2,272 bytes |
//! | WOTS-SHA512-W4 | SHA-512 | 4 | 264 | 16,896 bytes |
//! | WOTS-SHA512-W16 | SHA-512 | 16 | 136 | 8,704 bytes |
//!
//! Larger `w` gives smaller keys and signatures at the cost of longer chains.
//!
//! # Example
//!
//! ```rust
//! use wots::{keygen, Params};
//!
//! let params = Params::new(32, 16).unwrap();
//! let master_key = [0x42u8; 32]; // use a fresh random key in practice
//!
//! let (sk, pk) = keygen(&params, &master_key).unwrap();
//!
//! let message = b"Hello, hash-based world!";
//! let signature = sk.sign(message);
//!
//! assert!(pk.verify(message, &signature));
//! assert!(!pk.verify(b"another message", &signature));
//! ```
//!
//! With a typed variant:
//!
//! ```rust
//! use wots::{OneTimeSigner, WotsSha256W16};
//!
//! let mut rng = rand::rng();
//! let (sk, pk) = WotsSha256W16::keygen(&mut rng).unwrap();
//!
//! let signature = WotsSha256W16::sign(sk, b"once").unwrap();
//! assert!(WotsSha256W16::verify(&pk, b"once", &signature).is_ok());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::wildcard_imports,
    clippy::len_without_is_empty
)]

// alloc is available in both std and no_std environments
extern crate alloc;

/// Hash chains.
pub mod chain;
/// Base-w encoding and checksum.
pub mod encode;
/// Hash core and PRF.
pub mod hash;
mod keys;
/// Parameter derivation and named parameter sets.
pub mod params;
/// Key generation, signing and verification.
pub mod sign;
#[cfg(feature = "any-variant")]
mod types;

#[cfg(feature = "parallel")]
mod parallel;

// Variant-specific modules (public for access to SigningKey, VerificationKey, Signature types)
#[cfg(feature = "wots-sha256-w16")]
pub mod wots_sha256_w16;
#[cfg(feature = "wots-sha256-w4")]
pub mod wots_sha256_w4;
#[cfg(feature = "wots-sha512-w16")]
pub mod wots_sha512_w16;
#[cfg(feature = "wots-sha512-w4")]
pub mod wots_sha512_w4;

// Public exports
pub use hash::HashKind;
pub use keys::{PublicKey, SecretKey, Signature};
pub use params::{Params, ParamsSet};
pub use sign::{digest_message, expand_key, keygen, pk_from_sig, sign_bytes, verify};

// Re-export core types
pub use wots_core::{Error, OneTimeSigner, Result};

// Variant exports
#[cfg(feature = "wots-sha256-w16")]
pub use wots_sha256_w16::WotsSha256W16;
#[cfg(feature = "wots-sha256-w4")]
pub use wots_sha256_w4::WotsSha256W4;
#[cfg(feature = "wots-sha512-w16")]
pub use wots_sha512_w16::WotsSha512W16;
#[cfg(feature = "wots-sha512-w4")]
pub use wots_sha512_w4::WotsSha512W4;
