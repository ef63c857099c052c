//! Message digest to chain index conversion.
//!
//! A `message_len`-byte digest becomes `len_1` base-w digits, followed by `len_2` base-w digits
//! of the checksum `sum(w - 1 - digit)`. Raising any message digit lowers the checksum, so a
//! forger who walks a chain further must walk back some checksum chain, which is infeasible.

use crate::error::{Error, Result};
use crate::params::Params;

/// Converts `input` into `out_len` integers in base `w`, most significant bits first.
///
/// `input` must hold at least `out_len * lg(w)` bits.
pub(crate) fn base_w(params: &Params, input: &[u8], out_len: usize) -> Result<Vec<u8>> {
    let lg_w = params.lg_chain_len();
    let needed_bytes = (out_len * lg_w + 7) / 8;
    if input.len() < needed_bytes {
        return Err(Error::InvalidLength {
            what: "base-w input",
            expected: needed_bytes,
            found: input.len(),
        });
    }

    let mask = (params.chain_len() - 1) as u8;
    let mut output = Vec::with_capacity(out_len);
    let mut bits = 0;
    let mut total: u8 = 0;
    let mut input_index = 0;

    for _ in 0..out_len {
        if bits == 0 {
            // Load a new byte from input
            total = input[input_index];
            input_index += 1;
            bits += 8;
        }

        bits -= lg_w;
        output.push((total >> bits) & mask);
    }

    Ok(output)
}

/// Computes the WOTS+ checksum over message digits and packs it into `len_2` base-w digits,
/// most significant digit first.
pub(crate) fn checksum(params: &Params, msg_base_w: &[u8]) -> Vec<u8> {
    let w = params.chain_len() as u32;
    let lg_w = params.lg_chain_len();

    let csum: u32 = msg_base_w
        .iter()
        .map(|&digit| w - 1 - u32::from(digit))
        .sum();

    (0..params.num_checksum_chunks())
        .rev()
        .map(|i| ((csum >> (i * lg_w)) & (w - 1)) as u8)
        .collect()
}

/// Takes a message digest and derives the matching chain indexes: `len_1` message digits
/// followed by `len_2` checksum digits.
pub(crate) fn chain_indexes(params: &Params, message: &[u8]) -> Result<Vec<u8>> {
    Error::check_len("message", params.message_len(), message.len())?;

    let mut indexes = base_w(params, message, params.num_message_chunks())?;
    let csum = checksum(params, &indexes);
    indexes.extend_from_slice(&csum);
    Ok(indexes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_w_nibbles() {
        let params = Params::default();
        assert_eq!(
            base_w(&params, &[0xAB, 0xCD], 4).unwrap(),
            vec![0xA, 0xB, 0xC, 0xD]
        );
        assert_eq!(base_w(&params, &[0xAB, 0xCD], 3).unwrap(), vec![0xA, 0xB, 0xC]);
        assert!(base_w(&params, &[0xAB], 3).is_err());
    }

    #[test]
    fn test_base_w_4() {
        let params = Params::new(32, 4).unwrap();
        // 0b11_01_10_00
        assert_eq!(base_w(&params, &[0xD8], 4).unwrap(), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_checksum_extremes() {
        let params = Params::default();

        // All-zero digest: every chain has 15 steps left, 64 * 15 = 960 = 0x3C0.
        let zeros = vec![0u8; params.num_message_chunks()];
        assert_eq!(checksum(&params, &zeros), vec![0x3, 0xC, 0x0]);

        // All-0xF digest: no steps left.
        let full = vec![0xFu8; params.num_message_chunks()];
        assert_eq!(checksum(&params, &full), vec![0, 0, 0]);
    }

    #[test]
    fn test_checksum_chain_len_4() {
        let params = Params::new(32, 4).unwrap();
        // 128 * 3 = 384 = 0b01_10_00_00_00 -> 5 base-4 digits
        let zeros = vec![0u8; params.num_message_chunks()];
        assert_eq!(checksum(&params, &zeros), vec![1, 2, 0, 0, 0]);
    }

    #[test]
    fn test_chain_indexes() {
        let params = Params::default();

        let mut message = [0u8; 32];
        message[0] = 0x12;
        message[31] = 0xF0;
        let indexes = chain_indexes(&params, &message).unwrap();
        assert_eq!(indexes.len(), params.num_signature_chunks());
        assert_eq!(indexes[..2], [0x1, 0x2]);
        assert_eq!(indexes[62..64], [0xF, 0x0]);

        // 960 - 1 - 2 - 15 = 942 = 0x3AE
        assert_eq!(indexes[64..], [0x3, 0xA, 0xE]);
        assert!(indexes.iter().all(|&d| (d as usize) < params.chain_len()));
    }

    #[test]
    fn test_chain_indexes_bad_message() {
        let params = Params::default();
        assert_eq!(
            chain_indexes(&params, &[0u8; 31]),
            Err(Error::InvalidLength {
                what: "message",
                expected: 32,
                found: 31
            })
        );
    }
}
