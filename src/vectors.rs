//! Test-vector interchange format.
//!
//! A fixture file is a JSON object mapping a vector name to
//! `{publicKey, message, signature[], publicSeed, randomizationElements[]}`. Every byte field is
//! hex encoded, with or without a leading `0x`.

use crate::error::{Error, Result};
use crate::hash::WotsHasher;
use crate::wots_plus::{RandomizationElements, Signature, WotsPlus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One fixture entry, as stored on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestVector {
    pub public_key: String,
    pub message: String,
    pub signature: Vec<String>,
    pub public_seed: String,
    pub randomization_elements: Vec<String>,
}

/// A fixture entry with every hex field decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedVector {
    pub public_key: Vec<u8>,
    pub message: Vec<u8>,
    pub signature: Signature,
    pub public_seed: Vec<u8>,
    pub randomization_elements: RandomizationElements,
}

impl TestVector {
    /// Encodes a vector with `0x`-prefixed hex fields.
    pub fn new(
        public_key: &[u8],
        message: &[u8],
        signature: &Signature,
        public_seed: &[u8],
        randomization_elements: &RandomizationElements,
    ) -> Self {
        Self {
            public_key: encode_hex(public_key),
            message: encode_hex(message),
            signature: signature.chunks().iter().map(|c| encode_hex(c)).collect(),
            public_seed: encode_hex(public_seed),
            randomization_elements: randomization_elements
                .as_slice()
                .iter()
                .map(|e| encode_hex(e))
                .collect(),
        }
    }

    pub fn decode(&self) -> Result<DecodedVector> {
        Ok(DecodedVector {
            public_key: decode_hex(&self.public_key)?,
            message: decode_hex(&self.message)?,
            signature: Signature::from(decode_all(&self.signature)?),
            public_seed: decode_hex(&self.public_seed)?,
            randomization_elements: RandomizationElements::from(decode_all(
                &self.randomization_elements,
            )?),
        })
    }
}

impl DecodedVector {
    /// Runs both verification paths on this vector.
    ///
    /// Returns `Ok(true)` only if [`WotsPlus::verify`] and
    /// [`WotsPlus::verify_with_randomization_elements`] both accept, and the fixture's public
    /// seed matches the seed half of its public key.
    pub fn verify<H: WotsHasher>(&self, wots: &WotsPlus<H>) -> Result<bool> {
        let n = wots.params().hash_len();
        Error::check_len("public key", wots.params().public_key_size(), self.public_key.len())?;
        let (seed, public_key_hash) = self.public_key.split_at(n);
        if seed != self.public_seed.as_slice() {
            tracing::debug!("fixture public seed differs from public key");
            return Ok(false);
        }

        let high = wots.verify(&self.public_key, &self.message, &self.signature)?;
        let low = wots.verify_with_randomization_elements(
            public_key_hash,
            &self.message,
            &self.signature,
            &self.randomization_elements,
        )?;
        Ok(high && low)
    }
}

/// Parses a fixture file. Entries are returned in name order.
pub fn load_vectors(json: &str) -> Result<BTreeMap<String, TestVector>> {
    Ok(serde_json::from_str(json)?)
}

/// Decodes a hex string, accepting an optional `0x` or `0X` prefix.
pub fn decode_hex(value: &str) -> Result<Vec<u8>> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    Ok(hex::decode(digits)?)
}

fn decode_all(values: &[String]) -> Result<Vec<Vec<u8>>> {
    values.iter().map(|v| decode_hex(v)).collect()
}

fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
