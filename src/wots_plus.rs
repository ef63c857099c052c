//! # Winternitz One-Time Signature Scheme Plus (W-OTS+)
//!
//! This module implements W-OTS+ over an injected hash function. A key pair is derived from a
//! private seed and a public seed, signs exactly one `hash_len`-byte message digest, and a
//! signature is checked against the public key by completing every hash chain and comparing the
//! hash of the chain endpoints.
//!
//! ## Construction
//!
//! - The public seed expands into `len` randomization elements
//!   `r_i = H(0x03 || public_seed || be16(i))`. Element 0 is the function key.
//! - The private key is `H(private_seed || public_seed)`.
//! - The secret start of chain `i` is `H(function_key || PRF(private_key, i + 1))`.
//! - One chain step at position `j` is `x <- H(x XOR r_j)`; a chain has `w` values.
//! - The public key is `public_seed || H(end_0 || .. || end_{len-1})`.
//!
//! ## Important Note
//!
//! Signing is deterministic and every signature reveals intermediate chain values. Signing two
//! different messages with one key pair leaks enough of the chains to forge further signatures.
//! Callers must track key usage themselves.

use crate::error::{Error, Result};
use crate::hash::WotsHasher;
use crate::params::{Params, PRF_DOMAIN_PREFIX};
use crate::utils::xor_in_place;
use tracing::{debug, trace};
use zeroize::Zeroizing;

pub(crate) mod encoding;
pub mod keys;

pub use keys::{PrivateKey, PublicKey, RandomizationElements, Signature};

/// W-OTS+ scheme instance: a validated [`Params`] and the hash function used for every step.
///
/// An instance holds no mutable state. With a `Sync` hasher it can be shared between threads.
#[derive(Clone, Debug)]
pub struct WotsPlus<H> {
    hasher: H,
    params: Params,
}

impl<H: WotsHasher> WotsPlus<H> {
    /// Creates a W-OTS+ instance with the default parameters (`n = 32`, `w = 16`).
    ///
    /// Fails if the hasher cannot produce 32-byte digests.
    pub fn new(hasher: H) -> Result<Self> {
        Self::with_params(hasher, Params::default())
    }

    /// Creates a W-OTS+ instance for an already validated parameter set.
    ///
    /// Fails with [`Error::InvalidParameter`] if `params.hash_len()` exceeds what the hasher can
    /// output.
    pub fn with_params(hasher: H, params: Params) -> Result<Self> {
        if let Some(max) = hasher.max_output_len() {
            if params.hash_len() > max {
                debug!(
                    hash_len = params.hash_len(),
                    max, "hash function output is too short"
                );
                return Err(Error::InvalidParameter(format!(
                    "hash length {} exceeds hash function output of {max} bytes",
                    params.hash_len()
                )));
            }
        }
        Ok(Self { hasher, params })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Generates a W-OTS+ key pair.
    ///
    /// # Arguments
    ///
    /// * `private_seed` - Secret seed of `hash_len` bytes.
    /// * `public_seed` - Public seed of `hash_len` bytes, embedded verbatim in the public key.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// * [`PublicKey`] - `public_seed || public_key_hash`.
    /// * [`PrivateKey`] - `H(private_seed || public_seed)`.
    ///
    /// The key pair must be used for at most one signature.
    pub fn generate_key_pair(
        &self,
        private_seed: &[u8],
        public_seed: &[u8],
    ) -> Result<(PublicKey, PrivateKey)> {
        let n = self.params.hash_len();
        Error::check_len("private seed", n, private_seed.len())?;
        Error::check_len("public seed", n, public_seed.len())?;

        let mut seeds = Zeroizing::new(Vec::with_capacity(2 * n));
        seeds.extend_from_slice(private_seed);
        seeds.extend_from_slice(public_seed);
        let private_key = PrivateKey::from(self.hash(&seeds));

        let public_key = self.derive_public_key(private_key.as_ref(), public_seed)?;
        trace!("generated W-OTS+ key pair");
        Ok((public_key, private_key))
    }

    /// Recomputes the public key belonging to `private_key` and `public_seed`.
    pub fn get_public_key(&self, private_key: &[u8], public_seed: &[u8]) -> Result<PublicKey> {
        let n = self.params.hash_len();
        Error::check_len("private key", n, private_key.len())?;
        Error::check_len("public seed", n, public_seed.len())?;
        self.derive_public_key(private_key, public_seed)
    }

    /// Signs a `message_len`-byte message digest.
    ///
    /// Chain `i` of the signature is the secret segment walked `index_i` steps, where `index` is
    /// the base-w encoding of the message followed by its checksum. No randomness is involved:
    /// the same inputs always give the same signature.
    pub fn sign(
        &self,
        private_key: &[u8],
        public_seed: &[u8],
        message: &[u8],
    ) -> Result<Signature> {
        let n = self.params.hash_len();
        Error::check_len("private key", n, private_key.len())?;
        Error::check_len("public seed", n, public_seed.len())?;
        let indexes = encoding::chain_indexes(&self.params, message)?;

        let elements = self.randomization_elements(public_seed);
        let function_key = &elements[0];

        let mut signature = Vec::with_capacity(self.params.num_signature_chunks());
        for (i, &index) in indexes.iter().enumerate() {
            let mut segment = self.secret_segment(private_key, function_key, i);
            self.walk_chain(&mut segment, &elements, 0, index as usize)?;
            signature.push(segment.to_vec());
        }

        trace!("signed W-OTS+ message");
        Ok(Signature::from(signature))
    }

    /// Verifies `signature` on `message` against a serialized public key
    /// (`public_seed || public_key_hash`).
    ///
    /// Returns `Ok(false)` for a well-formed but invalid signature, and
    /// [`Error::InvalidLength`] for malformed inputs.
    pub fn verify(&self, public_key: &[u8], message: &[u8], signature: &Signature) -> Result<bool> {
        let public_key = PublicKey::from_bytes(&self.params, public_key)?;
        let elements = self.generate_randomization_elements(public_key.public_seed())?;
        self.verify_with_randomization_elements(
            public_key.public_key_hash(),
            message,
            signature,
            &elements,
        )
    }

    /// Verifies `signature` using pre-computed randomization elements, so several signatures
    /// under the same public seed can share one expansion.
    pub fn verify_with_randomization_elements(
        &self,
        public_key_hash: &[u8],
        message: &[u8],
        signature: &Signature,
        randomization_elements: &RandomizationElements,
    ) -> Result<bool> {
        Error::check_len(
            "public key hash",
            self.params.hash_len(),
            public_key_hash.len(),
        )?;
        let computed =
            self.public_key_hash_from_signature(message, signature, randomization_elements)?;

        let valid = computed == public_key_hash;
        if valid {
            trace!("W-OTS+ signature verified");
        } else {
            debug!("W-OTS+ signature does not match public key hash");
        }
        Ok(valid)
    }

    /// Completes every chain from the signature values and returns the hash of the endpoints,
    /// i.e. the public-key hash the signature commits to.
    pub fn public_key_hash_from_signature(
        &self,
        message: &[u8],
        signature: &Signature,
        randomization_elements: &RandomizationElements,
    ) -> Result<Vec<u8>> {
        let n = self.params.hash_len();
        let w = self.params.chain_len();
        let indexes = encoding::chain_indexes(&self.params, message)?;
        self.check_chunks("signature", signature.chunks())?;
        self.check_chunks("randomization elements", randomization_elements.as_slice())?;

        let mut endpoints = Vec::with_capacity(self.params.signature_size());
        let mut value = vec![0u8; n];
        for (chunk, &index) in signature.chunks().iter().zip(indexes.iter()) {
            let index = index as usize;
            value.copy_from_slice(chunk);
            self.walk_chain(
                &mut value,
                randomization_elements.as_slice(),
                index,
                w - 1 - index,
            )?;
            endpoints.extend_from_slice(&value);
        }

        Ok(self.hash(&endpoints))
    }

    /// Expands `public_seed` into `len` randomization elements.
    pub fn generate_randomization_elements(
        &self,
        public_seed: &[u8],
    ) -> Result<RandomizationElements> {
        Error::check_len("public seed", self.params.hash_len(), public_seed.len())?;
        Ok(RandomizationElements::from(
            self.randomization_elements(public_seed),
        ))
    }

    /// Chain indexes of `message`: its base-w digits followed by the checksum digits.
    pub fn chain_indexes(&self, message: &[u8]) -> Result<Vec<u8>> {
        encoding::chain_indexes(&self.params, message)
    }

    /// Walks `steps` chain steps from `start_value`, taken to sit at position `start_index`.
    ///
    /// Step `k` (1-based) computes `H(value XOR r_{start_index + k})`. Fails with
    /// [`Error::ChainBounds`] unless `start_index + steps < w`.
    pub fn chain(
        &self,
        start_value: &[u8],
        randomization_elements: &RandomizationElements,
        start_index: usize,
        steps: usize,
    ) -> Result<Vec<u8>> {
        Error::check_len("chain value", self.params.hash_len(), start_value.len())?;
        self.check_chunks("randomization elements", randomization_elements.as_slice())?;

        let mut value = start_value.to_vec();
        self.walk_chain(
            &mut value,
            randomization_elements.as_slice(),
            start_index,
            steps,
        )?;
        Ok(value)
    }

    fn derive_public_key(&self, private_key: &[u8], public_seed: &[u8]) -> Result<PublicKey> {
        let w = self.params.chain_len();
        let elements = self.randomization_elements(public_seed);
        let function_key = &elements[0];

        let mut endpoints = Vec::with_capacity(self.params.signature_size());
        for i in 0..self.params.num_signature_chunks() {
            let mut segment = self.secret_segment(private_key, function_key, i);
            self.walk_chain(&mut segment, &elements, 0, w - 1)?;
            endpoints.extend_from_slice(&segment);
        }

        let public_key_hash = self.hash(&endpoints);
        Ok(PublicKey::new(public_seed.to_vec(), public_key_hash))
    }

    /// Computes the chaining function in place. `value` is interpreted as the `start`-th value
    /// of the chain.
    fn walk_chain(
        &self,
        value: &mut [u8],
        elements: &[Vec<u8>],
        start: usize,
        steps: usize,
    ) -> Result<()> {
        let chain_len = self.params.chain_len();
        if start.checked_add(steps).map_or(true, |end| end >= chain_len) {
            debug!(start, steps, chain_len, "chain walk out of bounds");
            return Err(Error::ChainBounds {
                start,
                steps,
                chain_len,
            });
        }

        let mut buf = vec![0u8; value.len()];
        for element in &elements[start + 1..=start + steps] {
            buf.copy_from_slice(value);
            xor_in_place(&mut buf, element);
            self.hasher.hash(value, &buf);
        }
        Ok(())
    }

    /// Start of chain `i`: `H(function_key || PRF(private_key, i + 1))`.
    fn secret_segment(
        &self,
        private_key: &[u8],
        function_key: &[u8],
        i: usize,
    ) -> Zeroizing<Vec<u8>> {
        let n = self.params.hash_len();
        let mut input = Zeroizing::new(Vec::with_capacity(2 * n));
        input.extend_from_slice(function_key);
        input.resize(2 * n, 0);
        self.prf_into(&mut input[n..], private_key, (i + 1) as u16);

        let mut segment = Zeroizing::new(vec![0u8; n]);
        self.hasher.hash(&mut segment, &input);
        segment
    }

    fn randomization_elements(&self, public_seed: &[u8]) -> Vec<Vec<u8>> {
        (0..self.params.num_signature_chunks())
            .map(|i| {
                let mut element = vec![0u8; self.params.hash_len()];
                self.prf_into(&mut element, public_seed, i as u16);
                element
            })
            .collect()
    }

    /// `H(0x03 || seed || be16(index))`.
    fn prf_into(&self, output: &mut [u8], seed: &[u8], index: u16) {
        let mut input = Zeroizing::new(Vec::with_capacity(self.params.prf_input_size()));
        input.push(PRF_DOMAIN_PREFIX);
        input.extend_from_slice(seed);
        input.extend_from_slice(&index.to_be_bytes());
        self.hasher.hash(output, &input);
    }

    fn hash(&self, input: &[u8]) -> Vec<u8> {
        let mut output = vec![0u8; self.params.hash_len()];
        self.hasher.hash(&mut output, input);
        output
    }

    /// Checks a per-chain vector: `len` entries of `hash_len` bytes each.
    fn check_chunks(&self, what: &'static str, chunks: &[Vec<u8>]) -> Result<()> {
        Error::check_len(what, self.params.num_signature_chunks(), chunks.len())?;
        chunks
            .iter()
            .try_for_each(|chunk| Error::check_len(what, self.params.hash_len(), chunk.len()))
    }
}
