use crate::codec::DecodeError;
use crate::datatypes::{NumericPlanIndicator, TypeOfNumber};

/// Semantic view of an address type octet: extension bit 7 (always set for a
/// single-octet type field), type of number in bits 6..4, numbering plan in
/// bits 3..0.
///
/// The parser keeps type octets raw so a PDU round-trips byte for byte; this
/// type is the lens consumers apply when they care what the octet means.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AddressType {
    pub ton: TypeOfNumber,
    pub npi: NumericPlanIndicator,
}

impl AddressType {
    /// International ISDN number, the `0x91` seen on most address fields.
    pub const INTERNATIONAL: AddressType =
        AddressType::new(TypeOfNumber::International, NumericPlanIndicator::Isdn);

    /// Unknown type of number in the ISDN plan, `0x81`.
    pub const UNKNOWN_ISDN: AddressType =
        AddressType::new(TypeOfNumber::Unknown, NumericPlanIndicator::Isdn);

    pub const fn new(ton: TypeOfNumber, npi: NumericPlanIndicator) -> Self {
        AddressType { ton, npi }
    }

    /// Split a raw type octet into its TON and NPI parts.
    pub fn from_octet(octet: u8) -> Result<Self, DecodeError> {
        let ton = TypeOfNumber::try_from((octet >> 4) & 0b111).map_err(|_| {
            DecodeError::UnknownField {
                field: "address_type",
                value: octet,
            }
        })?;
        let npi = NumericPlanIndicator::try_from(octet & 0b1111).map_err(|_| {
            DecodeError::UnknownField {
                field: "address_type",
                value: octet,
            }
        })?;
        Ok(AddressType { ton, npi })
    }

    /// The wire octet, extension bit included.
    pub fn octet(&self) -> u8 {
        0x80 | ((self.ton as u8) << 4) | self.npi as u8
    }
}
