//! The hash capability injected into [`crate::WotsPlus`].
//!
//! WOTS+ never hashes by itself: every PRF call, chain step and public-key compression goes
//! through a [`WotsHasher`]. Implementations must be deterministic and free of side effects, and
//! a hasher that is also `Sync` lets one scheme instance serve many threads at once.
//!
//! The bundled hashers are selected with feature flags:
//! - `keccak`: [`Keccak256Hasher`], the binding used by the published test vectors.
//! - `sha2`: [`Sha256Hasher`].
//! - `shake`: [`Shake256Hasher`], an extendable-output hasher usable with any hash length.

#[cfg(feature = "keccak")]
mod keccak;
#[cfg(feature = "sha2")]
mod sha2;
#[cfg(feature = "shake")]
mod shake;

#[cfg(feature = "keccak")]
pub use crate::hash::keccak::Keccak256Hasher;
#[cfg(feature = "sha2")]
pub use crate::hash::sha2::Sha256Hasher;
#[cfg(feature = "shake")]
pub use crate::hash::shake::Shake256Hasher;

/// A pure function from arbitrary-length input to a fixed-length digest.
pub trait WotsHasher {
    /// Native digest size in bytes, or `None` for extendable-output functions.
    fn max_output_len(&self) -> Option<usize>;

    /// Writes the first `output.len()` bytes of the digest of `input` into `output`.
    ///
    /// If `output` is longer than [`WotsHasher::max_output_len`], only the native digest is
    /// written and the remaining bytes are left unchanged. [`crate::WotsPlus::with_params`]
    /// rejects such parameter sets up front.
    fn hash(&self, output: &mut [u8], input: &[u8]);
}

impl<H: WotsHasher + ?Sized> WotsHasher for &H {
    fn max_output_len(&self) -> Option<usize> {
        (**self).max_output_len()
    }

    fn hash(&self, output: &mut [u8], input: &[u8]) {
        (**self).hash(output, input)
    }
}

/// A bare 32-byte hash function, e.g. `keccak256 as fn(&[u8]) -> [u8; 32]`.
impl WotsHasher for fn(&[u8]) -> [u8; 32] {
    fn max_output_len(&self) -> Option<usize> {
        Some(32)
    }

    fn hash(&self, output: &mut [u8], input: &[u8]) {
        let digest = self(input);
        let len = output.len().min(digest.len());
        output[..len].copy_from_slice(&digest[..len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor_fold(input: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, b) in input.iter().enumerate() {
            out[i % 32] ^= b;
        }
        out
    }

    #[test]
    fn test_fn_pointer_hasher() {
        let hasher = xor_fold as fn(&[u8]) -> [u8; 32];
        assert_eq!(hasher.max_output_len(), Some(32));

        let mut output = [0u8; 4];
        hasher.hash(&mut output, &[1, 2, 3, 4, 5]);
        assert_eq!(output, [1, 2, 3, 4]);

        let mut long = [0xAAu8; 40];
        hasher.hash(&mut long, &[1, 2, 3, 4, 5]);
        assert_eq!(long[..5], [1, 2, 3, 4, 5]);
        assert_eq!(long[32..], [0xAA; 8]);

        let by_ref = &hasher;
        let mut again = [0u8; 4];
        by_ref.hash(&mut again, &[1, 2, 3, 4, 5]);
        assert_eq!(again, output);
    }
}
