// Decode an RP-DU hex string from the command line and print its fields.
// Handy when fishing a raw PDU out of a dispatcher log.

use std::process::ExitCode;

use smspdu::SmsCodec;
use smspdu::datatypes::AddressType;

fn main() -> ExitCode {
    let Some(hex) = std::env::args().nth(1) else {
        eprintln!("usage: pdu_dump <rp-du hex string>");
        return ExitCode::FAILURE;
    };

    let pdu = match SmsCodec::parse(&hex) {
        Ok(pdu) => pdu,
        Err(err) => {
            eprintln!("malformed PDU: {err}");
            return ExitCode::FAILURE;
        }
    };

    let direction = if pdu.rp_message_type.is_mobile_originated() {
        "mobile originated"
    } else {
        "mobile terminated"
    };

    println!("rp_message_type       {:?} ({direction})", pdu.rp_message_type);
    println!("rp_message_reference  {:#04x}", pdu.rp_message_reference);
    println!("rp_originator_address {:#04x}", pdu.rp_originator_address);
    print_address("rp_dest_address", pdu.rp_dest_address_type, &pdu.rp_dest_address);
    println!("tp_message_type       {:#04x}", pdu.tp_message_type);
    println!("tp_message_reference  {:#04x}", pdu.tp_message_reference);
    print_address("tp_dest_address", pdu.tp_dest_address_type, &pdu.tp_dest_address);
    println!("tp_protocol_id        {:#04x}", pdu.tp_protocol_id);
    println!("tp_data_coding_scheme {:#04x}", pdu.tp_data_coding_scheme);
    match pdu.tp_validity_period {
        Some(vp) => println!("tp_validity_period    {vp:#04x}"),
        None => println!("tp_validity_period    (absent)"),
    }
    println!("tp_user_data          {}", hex::encode(&pdu.tp_user_data));
    println!("text                  {:?}", pdu.text);

    ExitCode::SUCCESS
}

fn print_address(label: &str, type_octet: u8, digits: &str) {
    match AddressType::from_octet(type_octet) {
        Ok(ty) => println!("{label:<21} {digits} ({:?}/{:?})", ty.ton, ty.npi),
        Err(_) => println!("{label:<21} {digits} (type {type_octet:#04x})"),
    }
}
