use num_enum::TryFromPrimitive;

/// RP message type indicator (GSM 04.11 8.2.2).
///
/// `Mo` variants travel mobile-originated (MS to network), `Mt` variants the
/// other way. An inbound short message submission arrives as `DataMo`; any
/// value past `SmmaMo` is reserved and rejected by the parser.
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RpMessageType {
    DataMo = 0x00,
    DataMt = 0x01,
    AckMo = 0x02,
    AckMt = 0x03,
    ErrorMo = 0x04,
    ErrorMt = 0x05,
    SmmaMo = 0x06,
}

impl RpMessageType {
    /// Check whether this message travelled from the mobile station toward
    /// the network. Even values are MO, odd values MT.
    pub fn is_mobile_originated(&self) -> bool {
        (*self as u8) & 1 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_low_bit() {
        assert!(RpMessageType::DataMo.is_mobile_originated());
        assert!(!RpMessageType::DataMt.is_mobile_originated());
        assert!(RpMessageType::SmmaMo.is_mobile_originated());
    }

    #[test]
    fn reserved_values_do_not_convert() {
        assert!(RpMessageType::try_from(0x07).is_err());
        assert!(RpMessageType::try_from(0xff).is_err());
    }
}
