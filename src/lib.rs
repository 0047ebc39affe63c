//! GSM short message RP/TP PDU codec.
//!
//! Decodes inbound mobile-originated RP-DATA hex strings (GSM 04.11 relay
//! layer wrapping a GSM 03.40 SMS-SUBMIT) into their semantic fields, and
//! encodes outbound messages into transmission-ready RP/TP hex. The codec is
//! pure and synchronous; transport, dispatch and storage live elsewhere.
//!
//! # Examples
//!
//! Decoding an inbound PDU:
//!
//! ```rust
//! use smspdu::SmsCodec;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pdu = SmsCodec::parse("002a00039199990c010705812143f5000002e834")?;
//! assert_eq!(pdu.tp_dest_address, "12345");
//! assert_eq!(pdu.text, "hi");
//! # Ok(())
//! # }
//! ```
//!
//! Encoding an outbound message:
//!
//! ```rust
//! use smspdu::{OutboundRequest, SmsCodec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let request = OutboundRequest::new("6285777000", "1000", "hi");
//! let pdu = SmsCodec::generate(&request)?;
//! assert!(pdu.as_str().starts_with("00"));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod codec;
pub mod cursor;
pub mod datatypes;
pub mod gsm7;
pub mod parser;
pub mod submit;


pub use builder::PduBuilder;
pub use codec::{DecodeError, EncodeError, SmsCodec};
pub use cursor::HexCursor;
pub use datatypes::{EncodedPdu, OutboundRequest, ParsedPdu};
