mod address;
mod address_type;
mod numeric_plan_indicator;
mod pdu;
mod rp_message_type;
mod type_of_number;

pub use address::{decode_semi_octets, encode_semi_octets, rp_address_length, tp_address_length};
pub use address_type::AddressType;
pub use numeric_plan_indicator::NumericPlanIndicator;
pub use pdu::{EncodedPdu, OutboundRequest, ParsedPdu};
pub use rp_message_type::RpMessageType;
pub use type_of_number::TypeOfNumber;
