//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod delivery_status;
mod payload;
mod send_sms;

pub use delivery_status::{
    DELIVERY_STATUS_PATH, decode_delivery_status_json_response, encode_delivery_status_form,
};
pub use send_sms::{SEND_SMS_PATH, decode_send_sms_json_response, encode_send_sms_form};
