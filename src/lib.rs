//! # WOTS+
//!
//! Winternitz One-Time Signature Plus over an injectable hash function.
//!
//! ```
//! # #[cfg(feature = "keccak")]
//! # fn main() -> wots_plus::Result<()> {
//! use wots_plus::{Keccak256Hasher, WotsPlus};
//!
//! let wots = WotsPlus::new(Keccak256Hasher)?;
//! let (public_key, private_key) = wots.generate_key_pair(&[1u8; 32], &[2u8; 32])?;
//!
//! let message = [7u8; 32];
//! let signature = wots.sign(private_key.as_ref(), public_key.public_seed(), &message)?;
//! assert!(wots.verify(&public_key.to_bytes(), &message, &signature)?);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "keccak"))]
//! # fn main() {}
//! ```

mod error;
mod utils;

pub mod hash;
pub mod params;
#[cfg(feature = "serialization")]
pub mod vectors;
pub mod wots_plus;

pub use crate::error::{Error, Result};
pub use crate::hash::WotsHasher;
pub use crate::params::Params;
pub use crate::wots_plus::{PrivateKey, PublicKey, RandomizationElements, Signature, WotsPlus};

#[cfg(feature = "keccak")]
pub use crate::hash::Keccak256Hasher;
#[cfg(feature = "sha2")]
pub use crate::hash::Sha256Hasher;
#[cfg(feature = "shake")]
pub use crate::hash::Shake256Hasher;
