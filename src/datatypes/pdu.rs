use std::fmt;

use bytes::Bytes;

use crate::datatypes::RpMessageType;

/// A decoded mobile-originated RP-DU and the SMS-SUBMIT TPDU it carries.
///
/// Produced once per successful [`crate::SmsCodec::parse`] and immutable
/// thereafter. Address type octets are kept raw so the PDU can be inspected
/// or re-encoded byte for byte; [`crate::datatypes::AddressType::from_octet`]
/// gives the semantic view when one is wanted.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedPdu {
    /// RP message type indicator (GSM 04.11 8.2.2).
    pub rp_message_type: RpMessageType,

    /// RP message reference, echoed back in RP-ACK / RP-ERROR.
    pub rp_message_reference: u8,

    /// Originator address length octet. Zero (empty) for mobile-originated
    /// traffic, where the network fills the originator in downstream.
    pub rp_originator_address: u8,

    /// Raw address type octet of the RP destination (the service center).
    pub rp_dest_address_type: u8,

    /// RP destination digits, semi-octet decoded.
    pub rp_dest_address: String,

    /// First octet of the TPDU: message type in bits 1..0 plus flag bits.
    /// Bit `0x10` decides whether a validity period follows.
    pub tp_message_type: u8,

    /// TP message reference (GSM 03.40 9.2.3.6).
    pub tp_message_reference: u8,

    /// Raw address type octet of the TP destination.
    pub tp_dest_address_type: u8,

    /// TP destination digits, semi-octet decoded.
    pub tp_dest_address: String,

    /// TP protocol identifier (GSM 03.40 9.2.3.9).
    pub tp_protocol_id: u8,

    /// TP data coding scheme; zero selects the default 7-bit alphabet.
    pub tp_data_coding_scheme: u8,

    /// Relative validity period octet, present iff bit `0x10` of
    /// [`tp_message_type`](Self::tp_message_type) is set.
    pub tp_validity_period: Option<u8>,

    /// Raw user data octets, still 7-bit packed.
    pub tp_user_data: Bytes,

    /// User data unpacked and mapped through the default alphabet, trailing
    /// NUL padding stripped.
    pub text: String,
}

/// One outbound message as handed over by the dispatch layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    /// Destination subscriber digits. A leading `+` marks the number
    /// international and selects the `0x91` address type.
    pub destination: String,

    /// Originating identity. Not encoded into the PDU — the RP destination
    /// of generated traffic is always the service center — but carried so
    /// the transport layer can fill its own envelope.
    pub origin: String,

    /// Message body, restricted to the GSM default alphabet.
    pub text: String,
}

impl OutboundRequest {
    pub fn new(
        destination: impl Into<String>,
        origin: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        OutboundRequest {
            destination: destination.into(),
            origin: origin.into(),
            text: text.into(),
        }
    }
}

/// A generated RP-DU, ready for transmission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedPdu {
    hex: String,
    reference: u8,
}

impl EncodedPdu {
    pub(crate) fn new(hex: String, reference: u8) -> Self {
        EncodedPdu { hex, reference }
    }

    /// The PDU as lowercase hex digits.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Consume the PDU, keeping only the hex string.
    pub fn into_string(self) -> String {
        self.hex
    }

    /// The message reference embedded in both the RP and TP headers, for
    /// callers that correlate later acknowledgements.
    pub fn reference(&self) -> u8 {
        self.reference
    }
}

impl fmt::Display for EncodedPdu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
