use crate::hash::WotsHasher;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// SHAKE256 read to whatever length the parameter set asks for.
#[derive(Copy, Clone, Debug, Default)]
pub struct Shake256Hasher;

impl WotsHasher for Shake256Hasher {
    fn max_output_len(&self) -> Option<usize> {
        None
    }

    fn hash(&self, output: &mut [u8], input: &[u8]) {
        let mut hasher = Shake256::default();
        hasher.update(input);
        let mut reader = hasher.finalize_xof();
        reader.read(output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shake256_empty() {
        let mut output = [0u8; 8];
        Shake256Hasher.hash(&mut output, b"");
        assert_eq!(output, [0x46, 0xb9, 0xdd, 0x2b, 0x0b, 0xa8, 0x8d, 0x13]);
    }

    #[test]
    fn test_shake256_prefix_stable() {
        let mut short = [0u8; 16];
        let mut long = [0u8; 64];
        Shake256Hasher.hash(&mut short, b"wots+");
        Shake256Hasher.hash(&mut long, b"wots+");
        assert_eq!(long[..16], short);
    }
}
