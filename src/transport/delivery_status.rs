use super::payload::{TransportError, decode_object};
use crate::domain::{Credentials, DeliveryStatusResponse, Password, ReferenceId, Username};

/// Endpoint path relative to the API base URL.
pub const DELIVERY_STATUS_PATH: &str = "getDlrStatus";

pub fn encode_delivery_status_form(
    credentials: &Credentials,
    reference_id: &ReferenceId,
) -> Vec<(String, String)> {
    vec![
        (
            Username::FIELD.to_owned(),
            credentials.username().as_str().to_owned(),
        ),
        (
            Password::FIELD.to_owned(),
            credentials.password().as_str().to_owned(),
        ),
        (
            ReferenceId::FIELD.to_owned(),
            reference_id.as_str().to_owned(),
        ),
    ]
}

pub fn decode_delivery_status_json_response(
    json: &str,
) -> Result<DeliveryStatusResponse, TransportError> {
    Ok(DeliveryStatusResponse::new(decode_object(json)?))
}
