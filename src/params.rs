//! Parameter set of WOTS+.
//!
//! Every constant of the scheme is a pure function of the hash output length `n` and the
//! Winternitz parameter `w`. They are derived once in [`Params::new`] and never change afterwards,
//! so one [`Params`] value can back any number of key pairs.

use crate::error::{Error, Result};

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Hash output length in bytes used by [`Params::default`].
pub const DEFAULT_HASH_LEN: usize = 32;

/// Winternitz parameter used by [`Params::default`].
pub const DEFAULT_CHAIN_LEN: usize = 16;

/// Winternitz parameters accepted by [`Params::new`], as in XMSS (RFC 8391).
pub const SUPPORTED_CHAIN_LENS: [usize; 2] = [4, 16];

/// Domain separation byte prepended to every PRF input.
pub const PRF_DOMAIN_PREFIX: u8 = 0x03;

/// Upper bound on the number of chains. PRF indexes are 2-byte big-endian and secret derivation
/// for chain `i` uses index `i + 1`.
pub const MAX_SIGNATURE_CHUNKS: usize = u16::MAX as usize;

/// Derived WOTS+ constants.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(Serialize, Deserialize),
    serde(try_from = "ParamsConfig", into = "ParamsConfig")
)]
pub struct Params {
    hash_len: usize,
    chain_len: usize,
    lg_chain_len: usize,
    num_message_chunks: usize,
    num_checksum_chunks: usize,
}

impl Default for Params {
    fn default() -> Self {
        // (32, 16) always passes validation.
        Self::derive(DEFAULT_HASH_LEN, DEFAULT_CHAIN_LEN)
    }
}

impl Params {
    /// Validates `(hash_len, chain_len)` and derives the remaining constants.
    ///
    /// Fails with [`Error::InvalidParameter`] if `hash_len` is zero, if `chain_len` is not a power
    /// of two in [`SUPPORTED_CHAIN_LENS`], or if the resulting number of chains is either smaller
    /// than `chain_len` or larger than [`MAX_SIGNATURE_CHUNKS`].
    pub fn new(hash_len: usize, chain_len: usize) -> Result<Self> {
        if hash_len == 0 {
            return Err(invalid("hash length must be positive".to_owned()));
        }
        if !chain_len.is_power_of_two() {
            return Err(invalid(format!(
                "chain length {chain_len} is not a power of two"
            )));
        }
        if !SUPPORTED_CHAIN_LENS.contains(&chain_len) {
            return Err(invalid(format!(
                "chain length {chain_len} is not one of {SUPPORTED_CHAIN_LENS:?}"
            )));
        }
        // Bounds the checksum computation before deriving len_2 from it.
        if hash_len > MAX_SIGNATURE_CHUNKS {
            return Err(invalid(format!("hash length {hash_len} is too large")));
        }

        let params = Self::derive(hash_len, chain_len);

        // The chain function reads randomization element `chain_len - 1`.
        if params.num_signature_chunks() < chain_len {
            return Err(invalid(format!(
                "{} chains cannot cover a chain of length {chain_len}",
                params.num_signature_chunks()
            )));
        }
        if params.num_signature_chunks() > MAX_SIGNATURE_CHUNKS {
            return Err(invalid(format!(
                "{} chains exceed the PRF index range",
                params.num_signature_chunks()
            )));
        }

        Ok(params)
    }

    fn derive(hash_len: usize, chain_len: usize) -> Self {
        let lg_chain_len = chain_len.ilog2() as usize;

        // len_1 = ceil(8n / lg(w))
        let num_message_chunks = (8 * hash_len + lg_chain_len - 1) / lg_chain_len;

        // len_2 = floor(lg(len_1 * (w - 1)) / lg(w)) + 1
        let max_checksum = num_message_chunks * (chain_len - 1);
        let num_checksum_chunks = max_checksum.ilog2() as usize / lg_chain_len + 1;

        Self {
            hash_len,
            chain_len,
            lg_chain_len,
            num_message_chunks,
            num_checksum_chunks,
        }
    }

    /// `n`: hash output length in bytes.
    pub fn hash_len(&self) -> usize {
        self.hash_len
    }

    /// `m`: length of the message digest to be signed. Equal to [`Params::hash_len`].
    pub fn message_len(&self) -> usize {
        self.hash_len
    }

    /// `w`: number of values per hash chain.
    pub fn chain_len(&self) -> usize {
        self.chain_len
    }

    pub fn lg_chain_len(&self) -> usize {
        self.lg_chain_len
    }

    /// `len_1`: base-w digits of the message digest.
    pub fn num_message_chunks(&self) -> usize {
        self.num_message_chunks
    }

    /// `len_2`: base-w digits of the checksum.
    pub fn num_checksum_chunks(&self) -> usize {
        self.num_checksum_chunks
    }

    /// `len = len_1 + len_2`: number of hash chains.
    pub fn num_signature_chunks(&self) -> usize {
        self.num_message_chunks + self.num_checksum_chunks
    }

    pub fn signature_size(&self) -> usize {
        self.num_signature_chunks() * self.hash_len
    }

    /// Public seed followed by the public-key hash.
    pub fn public_key_size(&self) -> usize {
        2 * self.hash_len
    }

    /// Domain prefix, seed and 2-byte index.
    pub fn prf_input_size(&self) -> usize {
        1 + self.hash_len + 2
    }
}

fn invalid(reason: String) -> Error {
    tracing::debug!(%reason, "rejecting WOTS+ parameters");
    Error::InvalidParameter(reason)
}

/// Serialized form of [`Params`]. Only the two free parameters are stored; the rest is derived
/// again, and validated, on load.
#[cfg(feature = "serialization")]
#[derive(Serialize, Deserialize)]
struct ParamsConfig {
    hash_len: usize,
    chain_len: usize,
}

#[cfg(feature = "serialization")]
impl TryFrom<ParamsConfig> for Params {
    type Error = Error;
    fn try_from(config: ParamsConfig) -> Result<Self> {
        Params::new(config.hash_len, config.chain_len)
    }
}

#[cfg(feature = "serialization")]
impl From<Params> for ParamsConfig {
    fn from(params: Params) -> Self {
        Self {
            hash_len: params.hash_len,
            chain_len: params.chain_len,
        }
    }
}
