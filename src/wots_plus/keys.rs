//! Key, signature and randomization-element containers.
//!
//! Their lengths depend on the active [`Params`], so they hold heap buffers and are checked
//! against the parameter set when built from raw bytes.

use crate::error::{Error, Result};
use crate::params::Params;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// WOTS+ public key: the public seed followed by the hash of all chain endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PublicKey {
    public_seed: Vec<u8>,
    public_key_hash: Vec<u8>,
}

impl PublicKey {
    pub fn new(public_seed: Vec<u8>, public_key_hash: Vec<u8>) -> Self {
        Self {
            public_seed,
            public_key_hash,
        }
    }

    pub fn public_seed(&self) -> &[u8] {
        &self.public_seed
    }

    pub fn public_key_hash(&self) -> &[u8] {
        &self.public_key_hash
    }

    /// `public_seed || public_key_hash`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.public_seed.len() + self.public_key_hash.len());
        bytes.extend_from_slice(&self.public_seed);
        bytes.extend_from_slice(&self.public_key_hash);
        bytes
    }

    /// Splits `bytes` into seed and hash. Fails unless `bytes` is exactly
    /// [`Params::public_key_size`] long.
    pub fn from_bytes(params: &Params, bytes: &[u8]) -> Result<Self> {
        Error::check_len("public key", params.public_key_size(), bytes.len())?;
        let (seed, hash) = bytes.split_at(params.hash_len());
        Ok(Self::new(seed.to_vec(), hash.to_vec()))
    }
}

/// WOTS+ private key. Wiped from memory when dropped.
///
/// Cloning is supported but should be done cautiously, as it duplicates sensitive information
/// in memory.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(Vec<u8>);

impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for PrivateKey {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl PartialEq for PrivateKey {
    /// By no means constant time comparison
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey([REDACTED; {}])", self.0.len())
    }
}

/// WOTS+ signature: one `hash_len`-byte chain value per chain, in chain order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Signature(Vec<Vec<u8>>);

impl From<Vec<Vec<u8>>> for Signature {
    fn from(chunks: Vec<Vec<u8>>) -> Self {
        Self(chunks)
    }
}

impl Signature {
    pub fn chunks(&self) -> &[Vec<u8>] {
        &self.0
    }

    pub fn chunks_mut(&mut self) -> &mut [Vec<u8>] {
        &mut self.0
    }

    pub fn into_chunks(self) -> Vec<Vec<u8>> {
        self.0
    }

    /// Number of chain values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenation of all chain values.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.concat()
    }

    /// Splits `bytes` into `hash_len`-byte chain values. Fails unless `bytes` is exactly
    /// [`Params::signature_size`] long.
    pub fn from_bytes(params: &Params, bytes: &[u8]) -> Result<Self> {
        Error::check_len("signature", params.signature_size(), bytes.len())?;
        Ok(Self(
            bytes
                .chunks_exact(params.hash_len())
                .map(<[u8]>::to_vec)
                .collect(),
        ))
    }
}

/// Per-position randomization values expanded from a public seed. Element 0 is the function key;
/// the chain function reads the rest by position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RandomizationElements(Vec<Vec<u8>>);

impl From<Vec<Vec<u8>>> for RandomizationElements {
    fn from(elements: Vec<Vec<u8>>) -> Self {
        Self(elements)
    }
}

impl RandomizationElements {
    pub fn as_slice(&self) -> &[Vec<u8>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The element mixed into every secret segment derivation.
    pub fn function_key(&self) -> Option<&[u8]> {
        self.0.first().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_bytes() {
        let params = Params::default();
        let pk = PublicKey::new(vec![1u8; 32], vec![2u8; 32]);

        let bytes = pk.to_bytes();
        assert_eq!(bytes.len(), params.public_key_size());
        assert_eq!(bytes[..32], [1u8; 32]);
        assert_eq!(bytes[32..], [2u8; 32]);

        let recovered = PublicKey::from_bytes(&params, &bytes).unwrap();
        assert_eq!(recovered, pk);
        assert_eq!(recovered.public_seed(), &[1u8; 32]);
        assert_eq!(recovered.public_key_hash(), &[2u8; 32]);

        assert_eq!(
            PublicKey::from_bytes(&params, &bytes[1..]),
            Err(Error::InvalidLength {
                what: "public key",
                expected: 64,
                found: 63
            })
        );
    }

    #[test]
    fn test_signature_bytes() {
        let params = Params::default();
        let chunks: Vec<Vec<u8>> = (0..params.num_signature_chunks())
            .map(|i| vec![i as u8; params.hash_len()])
            .collect();
        let sig = Signature::from(chunks.clone());
        assert_eq!(sig.len(), 67);
        assert!(!sig.is_empty());

        let bytes = sig.to_bytes();
        assert_eq!(bytes.len(), params.signature_size());
        assert_eq!(bytes[32 * 66], 66);

        let recovered = Signature::from_bytes(&params, &bytes).unwrap();
        assert_eq!(recovered.chunks(), chunks.as_slice());

        assert!(matches!(
            Signature::from_bytes(&params, &bytes[..bytes.len() - 1]),
            Err(Error::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_private_key_debug_is_redacted() {
        let sk = PrivateKey::from(vec![0xAB; 32]);
        let shown = format!("{:?}", sk);
        assert!(!shown.contains("171"));
        assert_eq!(shown, "PrivateKey([REDACTED; 32])");
    }

    #[test]
    fn test_function_key() {
        let elements = RandomizationElements::from(vec![vec![7u8; 4], vec![8u8; 4]]);
        assert_eq!(elements.function_key(), Some(&[7u8; 4][..]));
        assert!(RandomizationElements::from(vec![]).function_key().is_none());
    }
}
