use crate::hash::WotsHasher;
use sha3::{Digest, Keccak256};

/// Keccak-256 (the pre-standard SHA-3 padding), 32-byte digests.
#[derive(Copy, Clone, Debug, Default)]
pub struct Keccak256Hasher;

impl Keccak256Hasher {
    pub const OUTPUT_LEN: usize = 32;
}

impl WotsHasher for Keccak256Hasher {
    fn max_output_len(&self) -> Option<usize> {
        Some(Self::OUTPUT_LEN)
    }

    fn hash(&self, output: &mut [u8], input: &[u8]) {
        let digest = Keccak256::digest(input);
        let len = output.len().min(digest.len());
        output[..len].copy_from_slice(&digest[..len]);
    }
}
