use num_enum::TryFromPrimitive;

/// Type of number, bits 6..4 of an address type octet (GSM 04.08 10.5.4.7).
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeOfNumber {
    Unknown = 0b000,
    International = 0b001,
    National = 0b010,
    NetworkSpecific = 0b011,
    SubscriberNumber = 0b100,
    Alphanumeric = 0b101,
    Abbreviated = 0b110,
    ReservedForExtension = 0b111,
}
