// Inbound RP-DU decoding (GSM 04.11 7.3.1 RP-DATA carrying a GSM 03.40
// SMS-SUBMIT)
//
// A strict sequential consume: every field is fixed-width or announced by a
// length prefix, and the first field that cannot be read aborts the parse.
// Nothing partial ever escapes.

use bytes::Bytes;

use crate::codec::DecodeError;
use crate::cursor::HexCursor;
use crate::datatypes::{ParsedPdu, RpMessageType, decode_semi_octets};
use crate::gsm7;

/// Bit of the TP first octet announcing a relative validity period.
const VALIDITY_PERIOD_FLAG: u8 = 0x10;

/// Decode one mobile-originated RP-DU from its hex-digit representation.
pub fn parse(pdu: &str) -> Result<ParsedPdu, DecodeError> {
    if !pdu.is_ascii() {
        return Err(DecodeError::InvalidHex { field: "pdu" });
    }
    let cursor = HexCursor::new(pdu);

    // RP layer: type, reference, originator, destination, user-data length.
    let (type_octet, cursor) = cursor.read_octet("rp_message_type")?;
    let rp_message_type =
        RpMessageType::try_from(type_octet).map_err(|_| DecodeError::UnknownField {
            field: "rp_message_type",
            value: type_octet,
        })?;
    let (rp_message_reference, cursor) = cursor.read_octet("rp_message_reference")?;
    let (rp_originator_address, cursor) = cursor.read_octet("rp_originator_address")?;
    let (rp_dest_address_type, rp_dest_address, cursor) = read_rp_destination(cursor)?;
    let cursor = check_rp_user_data_length(cursor)?;

    // TP layer, framed inside the RP user data.
    let (tp_message_type, cursor) = cursor.read_octet("tp_message_type")?;
    let (tp_message_reference, cursor) = cursor.read_octet("tp_message_reference")?;
    let (tp_dest_address_type, tp_dest_address, cursor) = read_tp_destination(cursor)?;
    let (tp_protocol_id, cursor) = cursor.read_octet("tp_protocol_id")?;
    let (tp_data_coding_scheme, cursor) = cursor.read_octet("tp_data_coding_scheme")?;

    let (tp_validity_period, cursor) = if tp_message_type & VALIDITY_PERIOD_FLAG != 0 {
        let (vp, cursor) = cursor.read_octet("tp_validity_period")?;
        (Some(vp), cursor)
    } else {
        (None, cursor)
    };

    let (tp_user_data, text) = read_tp_user_data(cursor)?;

    tracing::trace!(
        ?rp_message_type,
        tp_dest = %tp_dest_address,
        chars = text.len(),
        "parsed RP-DU"
    );

    Ok(ParsedPdu {
        rp_message_type,
        rp_message_reference,
        rp_originator_address,
        rp_dest_address_type,
        rp_dest_address,
        tp_message_type,
        tp_message_reference,
        tp_dest_address_type,
        tp_dest_address,
        tp_protocol_id,
        tp_data_coding_scheme,
        tp_validity_period,
        tp_user_data,
        text,
    })
}

/// RP destination: one octet of length (covering the type octet and the
/// packed digits), one type octet, then the digits.
fn read_rp_destination(cursor: HexCursor<'_>) -> Result<(u8, String, HexCursor<'_>), DecodeError> {
    let (count, cursor) = cursor.read_octet("rp_dest_address_length")?;
    let Some(address_octets) = usize::from(count).checked_sub(1) else {
        // A zero count cannot even cover the mandatory type octet.
        return Err(DecodeError::LengthMismatch {
            field: "rp_dest_address_length",
            declared: 0,
            actual: 1,
        });
    };
    let (type_octet, cursor) = cursor.read_octet("rp_dest_address_type")?;
    let (swapped, cursor) = cursor.read(address_octets * 2)?;
    Ok((type_octet, decode_semi_octets(swapped), cursor))
}

/// TP destination: the length octet counts digits, not octets, and an odd
/// count means a pad nibble was inserted on the wire.
fn read_tp_destination(cursor: HexCursor<'_>) -> Result<(u8, String, HexCursor<'_>), DecodeError> {
    let (count, cursor) = cursor.read_octet("tp_dest_address_length")?;
    let digits = usize::from(count) + usize::from(count) % 2;
    let (type_octet, cursor) = cursor.read_octet("tp_dest_address_type")?;
    let (swapped, cursor) = cursor.read(digits)?;
    Ok((type_octet, decode_semi_octets(swapped), cursor))
}

/// The RP user-data length must account for every remaining digit exactly;
/// a short or long tail is a malformed message, not something to truncate.
fn check_rp_user_data_length(cursor: HexCursor<'_>) -> Result<HexCursor<'_>, DecodeError> {
    let (declared, cursor) = cursor.read_octet("rp_user_data_length")?;
    let declared_digits = usize::from(declared) * 2;
    if cursor.remaining() != declared_digits {
        return Err(DecodeError::LengthMismatch {
            field: "rp_user_data_length",
            declared: declared_digits,
            actual: cursor.remaining(),
        });
    }
    Ok(cursor)
}

/// TP user data: a septet-count octet, then everything left in the PDU.
///
/// The remaining digit count is trusted over the declared septet count (the
/// two can disagree under padding edge cases); a disagreement is logged, not
/// fatal. Trailing zero septets are padding and trimmed before alphabet
/// mapping.
fn read_tp_user_data(cursor: HexCursor<'_>) -> Result<(Bytes, String), DecodeError> {
    let (declared, cursor) = cursor.read_octet("tp_user_data_length")?;
    let (ud_hex, _) = cursor.rest();
    let octets = hex::decode(ud_hex).map_err(|_| DecodeError::InvalidHex {
        field: "tp_user_data",
    })?;

    let mut septets = gsm7::unpack(&octets);
    let slots = septets.len();
    while septets.last() == Some(&0) {
        septets.pop();
    }
    if usize::from(declared) != septets.len() && usize::from(declared) != slots {
        tracing::warn!(
            declared,
            unpacked = slots,
            kept = septets.len(),
            "septet count header disagrees with remaining user data; trusting remaining length"
        );
    }

    let text = gsm7::decode(&septets);
    Ok((Bytes::from(octets), text))
}

#[cfg(test)]
mod tests {
    use super::*;

    // RP-DATA MS->N, ref 2a, empty originator, destination 9999, carrying an
    // SMS-SUBMIT (no validity period) to 12345 with payload "hi".
    const NO_VALIDITY: &str = "002a00039199990c010705812143f5000002e834";

    #[test]
    fn parses_every_field() {
        let pdu = parse(NO_VALIDITY).unwrap();
        assert_eq!(pdu.rp_message_type, RpMessageType::DataMo);
        assert_eq!(pdu.rp_message_reference, 0x2a);
        assert_eq!(pdu.rp_originator_address, 0x00);
        assert_eq!(pdu.rp_dest_address_type, 0x91);
        assert_eq!(pdu.rp_dest_address, "9999");
        assert_eq!(pdu.tp_message_type, 0x01);
        assert_eq!(pdu.tp_message_reference, 0x07);
        assert_eq!(pdu.tp_dest_address_type, 0x81);
        assert_eq!(pdu.tp_dest_address, "12345");
        assert_eq!(pdu.tp_protocol_id, 0x00);
        assert_eq!(pdu.tp_data_coding_scheme, 0x00);
        assert_eq!(pdu.tp_validity_period, None);
        assert_eq!(pdu.tp_user_data.as_ref(), &[0xe8, 0x34]);
        assert_eq!(pdu.text, "hi");
    }

    #[test]
    fn validity_period_consumed_when_flag_set() {
        // Same message with TP first octet 0x11 and a validity octet 0xff.
        let pdu = parse("002a00039199990d110705812143f50000ff02e834").unwrap();
        assert_eq!(pdu.tp_message_type, 0x11);
        assert_eq!(pdu.tp_validity_period, Some(0xff));
        assert_eq!(pdu.text, "hi");
        assert_eq!(pdu.tp_dest_address, "12345");
    }

    #[test]
    fn rp_user_data_length_mismatch_is_fatal() {
        // Declared 0x0d octets of user data, but only 0x0c follow.
        let err = parse("002a00039199990d010705812143f5000002e834").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::LengthMismatch {
                field: "rp_user_data_length",
                declared: 26,
                actual: 24,
            }
        ));
    }

    #[test]
    fn truncated_pdu_is_unexpected_eof() {
        let err = parse("002a0003").unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedEof { .. }));
    }

    #[test]
    fn empty_input_is_unexpected_eof() {
        let err = parse("").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedEof {
                needed: 2,
                remaining: 0
            }
        ));
    }

    #[test]
    fn reserved_rp_message_type_is_unknown_field() {
        let err = parse("0f2a00039199990c010705812143f5000002e834").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownField {
                field: "rp_message_type",
                value: 0x0f
            }
        ));
    }

    #[test]
    fn zero_rp_destination_length_is_rejected() {
        let err = parse("002a0000").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::LengthMismatch {
                field: "rp_dest_address_length",
                ..
            }
        ));
    }

    #[test]
    fn non_hex_input_is_rejected() {
        assert!(matches!(
            parse("zz2a00039199990c010705812143f5000002e834").unwrap_err(),
            DecodeError::InvalidHex { .. }
        ));
        assert!(matches!(
            parse("время").unwrap_err(),
            DecodeError::InvalidHex { field: "pdu" }
        ));
    }

    #[test]
    fn even_tp_destination_length_reads_exactly() {
        // Destination 123456: six digits, no pad nibble to strip.
        let pdu = parse("002a00039199990c01070681214365000002e834").unwrap();
        assert_eq!(pdu.tp_dest_address, "123456");
        assert_eq!(pdu.text, "hi");
    }

    #[test]
    fn trailing_nul_padding_is_trimmed() {
        // "abcdefg" is seven septets in seven octets; the eighth unpacked
        // slot is padding and must not surface as '@'.
        let pdu = parse("002a000391999911010705812143f500000761f1985c369f01").unwrap();
        assert_eq!(pdu.text, "abcdefg");
    }
}
