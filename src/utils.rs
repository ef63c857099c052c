/// `output ^= input`, over the common prefix of the two slices.
pub(crate) fn xor_in_place(output: &mut [u8], input: &[u8]) {
    output
        .iter_mut()
        .zip(input.iter())
        .for_each(|(o, i)| *o ^= i);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_in_place() {
        let mut a = [0b1010_1010, 0xff, 0x00];
        xor_in_place(&mut a, &[0b0101_0101, 0xff, 0x12]);
        assert_eq!(a, [0xff, 0x00, 0x12]);
    }

    #[test]
    fn test_xor_in_place_common_prefix() {
        let mut short = [0x0f, 0xf0];
        xor_in_place(&mut short, &[0xff, 0xff, 0xff]);
        assert_eq!(short, [0xf0, 0x0f]);

        let mut long = [0x0f, 0xf0, 0x33];
        xor_in_place(&mut long, &[0xff]);
        assert_eq!(long, [0xf0, 0xf0, 0x33]);
    }
}
