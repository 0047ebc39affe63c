// ABOUTME: Swapped semi-octet BCD codec for phone number fields
// ABOUTME: Includes the length-prefix helpers for both protocol units (RP octets, TP digits)

use crate::codec::EncodeError;

/// Decode a swapped semi-octet digit field back into the number it carries.
///
/// Each two-digit pair arrives with its nibbles transposed; an odd-length
/// number carries a trailing `F` pad nibble, stripped here. The input length
/// is always even because every caller reads whole octets.
pub fn decode_semi_octets(swapped: &str) -> String {
    debug_assert_eq!(swapped.len() % 2, 0);

    let bytes = swapped.as_bytes();
    let mut digits = String::with_capacity(bytes.len());
    for pair in bytes.chunks_exact(2) {
        digits.push(pair[1] as char);
        digits.push(pair[0] as char);
    }
    if digits.ends_with(['f', 'F']) {
        digits.pop();
    }
    digits
}

/// Encode a number into swapped semi-octet BCD octets, `F`-padded when the
/// digit count is odd. Anything but an ASCII digit is rejected.
pub fn encode_semi_octets(digits: &str) -> Result<Vec<u8>, EncodeError> {
    let mut nibbles = Vec::with_capacity(digits.len() + 1);
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => nibbles.push(d as u8),
            None => return Err(EncodeError::UnsupportedCharacter(c)),
        }
    }
    if nibbles.len() % 2 == 1 {
        nibbles.push(0x0f);
    }
    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| pair[1] << 4 | pair[0])
        .collect())
}

/// Length prefix in the RP unit: octets, counting the type octet too.
///
/// The RP and TP layers disagree on what an address length counts; the
/// protocol mandates the inconsistency and both sides of it live here.
pub fn rp_address_length(digits: &str) -> u8 {
    (digits.len().div_ceil(2) + 1) as u8
}

/// Length prefix in the TP unit: digits as transmitted, pad nibble excluded.
pub fn tp_address_length(digits: &str) -> u8 {
    digits.len() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_even_number() {
        assert_eq!(decode_semi_octets("2143"), "1234");
        assert_eq!(decode_semi_octets("9999"), "9999");
    }

    #[test]
    fn decode_strips_odd_pad() {
        assert_eq!(decode_semi_octets("2143f5"), "12345");
        assert_eq!(decode_semi_octets("2143F5"), "12345");
    }

    #[test]
    fn encode_even_number() {
        assert_eq!(encode_semi_octets("1234").unwrap(), vec![0x21, 0x43]);
    }

    #[test]
    fn encode_pads_odd_number() {
        assert_eq!(encode_semi_octets("12345").unwrap(), vec![0x21, 0x43, 0xf5]);
    }

    #[test]
    fn encode_rejects_non_digits() {
        let err = encode_semi_octets("12a4").unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedCharacter('a')));
    }

    #[test]
    fn encode_decode_round_trip() {
        for number in ["", "7", "42", "12345", "6285777000", "15551234567"] {
            let octets = encode_semi_octets(number).unwrap();
            assert_eq!(decode_semi_octets(&hex::encode(octets)), *number);
        }
    }

    #[test]
    fn length_units_differ_by_layer() {
        // "9999" is two address octets plus the type octet at the RP layer,
        // four digits at the TP layer.
        assert_eq!(rp_address_length("9999"), 3);
        assert_eq!(tp_address_length("9999"), 4);

        // Odd digit counts round up at the RP layer only.
        assert_eq!(rp_address_length("12345"), 4);
        assert_eq!(tp_address_length("12345"), 5);
    }
}
