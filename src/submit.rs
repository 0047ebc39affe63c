// SMS-SUBMIT TPDU encoder (GSM 03.40 9.2.2.2)
//
// Produces the complete submit PDU, service-center prefix included, the way
// the upstream message library hands it over. The RP builder consumes it the
// same way the dispatch glue consumed that library: drop the first
// [`HEADER_OCTETS`] (empty SMSC, first octet, reference placeholder), keep
// the rest as payload, and frame it under its own TP header.

use bytes::{BufMut, BytesMut};

use crate::codec::EncodeError;
use crate::datatypes::{AddressType, encode_semi_octets, tp_address_length};
use crate::gsm7;

/// Longest destination a TP address field can carry
/// (GSM 03.40 9.1.2.5: ten semi-octets of digits).
pub const MAX_ADDRESS_DIGITS: usize = 20;

/// First octet of every generated TPDU: SMS-SUBMIT message type with the
/// relative validity-period format flag (`0x10`) set, so the validity octet
/// is always present in generated output.
pub const FIRST_OCTET: u8 = 0x11;

/// Relative validity period ceiling: `(0xff - 192)` weeks, i.e. 63 weeks,
/// the longest the protocol can express.
pub const MAX_VALIDITY: u8 = 0xff;

/// Octets of self-generated prefix the RP builder discards: the empty
/// service-center address, [`FIRST_OCTET`], and the reference placeholder.
pub const HEADER_OCTETS: usize = 3;

/// Encode a complete SMS-SUBMIT PDU.
///
/// A leading `+` on the destination selects the international address type
/// and is not itself encoded. The reference octet is a placeholder; the RP
/// builder substitutes the one it draws.
pub fn encode(destination: &str, text: &str) -> Result<Vec<u8>, EncodeError> {
    let (digits, address_type) = match destination.strip_prefix('+') {
        Some(rest) => (rest, AddressType::INTERNATIONAL),
        None => (destination, AddressType::UNKNOWN_ISDN),
    };

    if digits.len() > MAX_ADDRESS_DIGITS {
        return Err(EncodeError::AddressTooLong {
            digits: digits.len(),
            max: MAX_ADDRESS_DIGITS,
        });
    }
    let address = encode_semi_octets(digits)?;

    let septets = gsm7::encode(text)?;
    if septets.len() > usize::from(u8::MAX) {
        return Err(EncodeError::LengthOverflow {
            field: "tp_user_data_length",
            value: septets.len(),
            max: usize::from(u8::MAX),
        });
    }
    let packed = gsm7::pack(&septets);

    let mut pdu = BytesMut::with_capacity(HEADER_OCTETS + 6 + address.len() + packed.len());
    pdu.put_u8(0x00); // no service-center address, route via the default
    pdu.put_u8(FIRST_OCTET);
    pdu.put_u8(0x00); // reference placeholder
    pdu.put_u8(tp_address_length(digits));
    pdu.put_u8(address_type.octet());
    pdu.put_slice(&address);
    pdu.put_u8(0x00); // protocol identifier: plain MS-to-SC short message
    pdu.put_u8(0x00); // data coding scheme: default 7-bit alphabet
    pdu.put_u8(MAX_VALIDITY);
    pdu.put_u8(septets.len() as u8);
    pdu.put_slice(&packed);
    Ok(pdu.to_vec())
}
