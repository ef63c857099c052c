use crate::hash::WotsHasher;
use ::sha2::{Digest, Sha256};

/// SHA2-256, 32-byte digests.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub const OUTPUT_LEN: usize = 32;
}

impl WotsHasher for Sha256Hasher {
    fn max_output_len(&self) -> Option<usize> {
        Some(Self::OUTPUT_LEN)
    }

    fn hash(&self, output: &mut [u8], input: &[u8]) {
        let digest = Sha256::digest(input);
        let len = output.len().min(digest.len());
        output[..len].copy_from_slice(&digest[..len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty() {
        let mut output = [0u8; 32];
        Sha256Hasher.hash(&mut output, b"");
        assert_eq!(
            output.to_vec(),
            [
                0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f,
                0xb9, 0x24, 0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b,
                0x78, 0x52, 0xb8, 0x55,
            ]
        );
    }
}
