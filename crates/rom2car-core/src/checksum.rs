/// Sums every byte of `image` into a `u32`, wrapping on overflow.
///
/// This is the value stored big-endian at offset 8 of the container header.
pub fn checksum(image: &[u8]) -> u32 {
    image
        .iter()
        .fold(0u32, |sum, &byte| sum.wrapping_add(u32::from(byte)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_image_sums_to_zero() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn sums_bytes() {
        assert_eq!(checksum(&[1, 2, 3, 0xFF]), 0x105);
        assert_eq!(checksum(&vec![0xFF; 8 * 1024]), 0xFF * 8 * 1024);
    }

    #[test]
    fn wraps_modulo_2_32() {
        // 16_843_010 * 0xFF = 2^32 + 254, which only fits after wrapping.
        let image = vec![0xFFu8; 16_843_010];
        assert_eq!(checksum(&image), 254);
    }
}
