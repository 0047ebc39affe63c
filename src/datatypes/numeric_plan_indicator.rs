use num_enum::TryFromPrimitive;

/// Numbering plan identification, bits 3..0 of an address type octet
/// (GSM 04.08 10.5.4.7). Values not listed are reserved.
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NumericPlanIndicator {
    Unknown = 0b0000,
    Isdn = 0b0001,
    Data = 0b0011,
    Telex = 0b0100,
    National = 0b1000,
    Private = 0b1001,
    Ermes = 0b1010,
    ReservedForExtension = 0b1111,
}
