// GSM SMS codec facade - ties the RP/TP parser and builder together
//
// The codec is a pure transformation: hex digits in, semantic fields out, and
// the reverse. Errors carry field-level context so the dispatch layer can log
// something useful before dropping a malformed message; no recovery happens
// at this layer.

use thiserror::Error;

use crate::builder::PduBuilder;
use crate::datatypes::{EncodedPdu, OutboundRequest, ParsedPdu};
use crate::parser;

/// Errors raised while decoding an inbound RP-DU hex string.
///
/// The first failing field aborts the whole parse; no partial
/// [`ParsedPdu`] is ever produced.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A field ran past the end of the input.
    #[error("unexpected end of PDU: needed {needed} hex digits, {remaining} remain")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// A length prefix disagrees with the data actually present. Units are
    /// those of the offending field (octets for the RP user-data length,
    /// digits for address counts).
    #[error("length mismatch in '{field}': declared {declared}, found {actual}")]
    LengthMismatch {
        field: &'static str,
        declared: usize,
        actual: usize,
    },

    /// A field holds a value the protocol does not define.
    #[error("unknown value {value:#04x} in field '{field}'")]
    UnknownField { field: &'static str, value: u8 },

    /// A character outside `[0-9a-fA-F]` where a hex digit was required.
    #[error("invalid hex digit in field '{field}'")]
    InvalidHex { field: &'static str },
}

/// Errors raised while encoding an outbound PDU.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The message body contains a character the GSM default alphabet cannot
    /// express, or an address contains a non-digit.
    #[error("character {0:?} is not representable in the GSM default alphabet")]
    UnsupportedCharacter(char),

    /// The destination number does not fit a TP destination address field.
    #[error("destination address has {digits} digits, maximum is {max}")]
    AddressTooLong { digits: usize, max: usize },

    /// A single-octet length field would overflow.
    #[error("length field '{field}' cannot hold {value} (max {max})")]
    LengthOverflow {
        field: &'static str,
        value: usize,
        max: usize,
    },
}

/// Facade over the PDU parser and builder.
///
/// Both operations are synchronous and CPU-bound, share no state, and may be
/// called concurrently from any number of threads.
///
/// # Examples
///
/// ```rust
/// use smspdu::{OutboundRequest, SmsCodec};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let request = OutboundRequest::new("6285777000", "1000", "hi");
/// let pdu = SmsCodec::generate(&request)?;
///
/// let parsed = SmsCodec::parse(pdu.as_str())?;
/// assert_eq!(parsed.text, "hi");
/// assert_eq!(parsed.tp_dest_address, "6285777000");
/// # Ok(())
/// # }
/// ```
pub struct SmsCodec;

impl SmsCodec {
    /// Decode one mobile-originated RP-DU from its hex-digit representation.
    pub fn parse(pdu: &str) -> Result<ParsedPdu, DecodeError> {
        parser::parse(pdu)
    }

    /// Encode an outbound message into a transmission-ready RP-DU hex string.
    pub fn generate(request: &OutboundRequest) -> Result<EncodedPdu, EncodeError> {
        PduBuilder::new().generate(request)
    }
}
