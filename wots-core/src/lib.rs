//! # WOTS Core
//!
//! Core traits and utilities shared by the WOTS crates.
//!
//! This crate provides:
//! - Common error types
//! - The [`OneTimeSigner`] trait for single-use signature schemes
//! - Secure memory handling with zeroize integration

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod traits;

pub use error::{Error, Result};
pub use traits::OneTimeSigner;

/// Re-export zeroize for convenience.
pub use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Re-export subtle for constant-time operations.
pub use subtle;
