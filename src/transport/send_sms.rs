use super::payload::{TransportError, decode_object};
use crate::domain::{
    Credentials, Destination, ExternalReference, MessageText, Password, PreparedSend,
    SendSmsResponse, SenderId, Username,
};

/// Endpoint path relative to the API base URL.
pub const SEND_SMS_PATH: &str = "sendSMS";

const VALIDITY_FIELD: &str = "validity";
const VALIDITY: &str = "1";
const FORMAT_FIELD: &str = "format";
const RESPONSE_FORMAT: &str = "JSON";
const COUNTRY_CODE_FIELD: &str = "cc";
const COUNTRY_CODE: &str = "44";

pub fn encode_send_sms_form(
    credentials: &Credentials,
    request: &PreparedSend,
) -> Vec<(String, String)> {
    let mut params = vec![
        (
            Destination::FIELD.to_owned(),
            request.destination.as_str().to_owned(),
        ),
        (
            SenderId::FIELD.to_owned(),
            request.sender.as_str().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            request.message.as_str().to_owned(),
        ),
        (
            Username::FIELD.to_owned(),
            credentials.username().as_str().to_owned(),
        ),
        (
            Password::FIELD.to_owned(),
            credentials.password().as_str().to_owned(),
        ),
        (VALIDITY_FIELD.to_owned(), VALIDITY.to_owned()),
        (FORMAT_FIELD.to_owned(), RESPONSE_FORMAT.to_owned()),
        (COUNTRY_CODE_FIELD.to_owned(), COUNTRY_CODE.to_owned()),
    ];

    if let Some(reference) = request.external_reference.as_ref() {
        params.push((
            ExternalReference::FIELD.to_owned(),
            reference.as_str().to_owned(),
        ));
    }

    params
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    Ok(SendSmsResponse::new(decode_object(json)?))
}
