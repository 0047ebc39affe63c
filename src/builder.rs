// Outbound RP-DATA assembly (GSM 04.11 7.3.1)
//
// The RP envelope is nearly constant for generated traffic: type RP-DATA
// MS->N, empty originator, the service-center short code as destination.
// Only the reference byte and the TPDU payload vary per message.

use bytes::{BufMut, BytesMut};
use rand::Rng;

use crate::codec::EncodeError;
use crate::datatypes::{
    AddressType, EncodedPdu, OutboundRequest, RpMessageType, encode_semi_octets,
    rp_address_length,
};
use crate::submit;

/// Service-center short code baked into the RP destination of every
/// outbound PDU; matches the network-side routing configuration.
const SERVICE_CENTER: &str = "9999";

/// Lowest reference the builder will draw. Values below this are kept clear
/// of reserved protocol handshakes.
const MIN_REFERENCE: u8 = 0x11;

/// Assembles outbound RP-DUs.
///
/// Each call to [`generate`](Self::generate) draws a fresh message reference
/// in `[0x11, 0xff]` and embeds it in both the RP and TP headers. Tests pin
/// the reference with [`with_reference`](Self::with_reference).
#[derive(Debug, Default)]
pub struct PduBuilder {
    reference: Option<u8>,
}

impl PduBuilder {
    pub fn new() -> Self {
        PduBuilder { reference: None }
    }

    /// Use a fixed message reference instead of drawing one. Must be at
    /// least `0x11`.
    pub fn with_reference(mut self, reference: u8) -> Self {
        debug_assert!(reference >= MIN_REFERENCE);
        self.reference = Some(reference);
        self
    }

    /// Encode one outbound message as a lowercase RP-DU hex string.
    ///
    /// Fails without partial output: an unsupported character, an oversized
    /// address, or a TPDU past 255 octets aborts the whole call.
    pub fn generate(&self, request: &OutboundRequest) -> Result<EncodedPdu, EncodeError> {
        let reference = self
            .reference
            .unwrap_or_else(|| rand::rng().random_range(MIN_REFERENCE..=u8::MAX));
        tracing::debug!(reference, destination = %request.destination, "assembling RP-DATA");

        // The submit encoder frames the destination and user data; its
        // self-generated prefix is dropped and replaced by our TP header so
        // the reference matches the RP layer.
        let submit_pdu = submit::encode(&request.destination, &request.text)?;
        let payload = &submit_pdu[submit::HEADER_OCTETS..];

        let mut tpdu = BytesMut::with_capacity(2 + payload.len());
        tpdu.put_u8(submit::FIRST_OCTET);
        tpdu.put_u8(reference);
        tpdu.put_slice(payload);

        if tpdu.len() > usize::from(u8::MAX) {
            return Err(EncodeError::LengthOverflow {
                field: "rp_user_data_length",
                value: tpdu.len(),
                max: usize::from(u8::MAX),
            });
        }

        let service_center = encode_semi_octets(SERVICE_CENTER)?;
        let mut rpdu = BytesMut::with_capacity(6 + service_center.len() + tpdu.len());
        rpdu.put_u8(RpMessageType::DataMo as u8);
        rpdu.put_u8(reference);
        rpdu.put_u8(0x00); // empty originator, filled in by the network
        rpdu.put_u8(rp_address_length(SERVICE_CENTER));
        rpdu.put_u8(AddressType::INTERNATIONAL.octet());
        rpdu.put_slice(&service_center);
        rpdu.put_u8(tpdu.len() as u8);
        rpdu.put_slice(&tpdu);

        Ok(EncodedPdu::new(hex::encode(&rpdu), reference))
    }
}
