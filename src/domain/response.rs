use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde_json::{Map, Value};

const RESULT_FIELD: &str = "result";
const RESULT_TEXT_FIELD: &str = "resultText";
const REFERENCE_ID_FIELD: &str = "reference_id";
const MESSAGE_FIELD: &str = "message";
const DELIVERY_STATUS_FIELD: &str = "delivery_status";
const DELIVERY_DATETIME_FIELD: &str = "delivery_datetime";

/// `result` value VoodooSMS reports for a successful call.
pub const RESULT_OK: i64 = 200;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// A response payload lacked a field or held a value of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseFieldError {
    #[error("response field `{field}` is missing")]
    Missing { field: &'static str },

    #[error("response field `{field}` is not {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("response field `{field}` is not a valid date-time: {value:?}")]
    InvalidDateTime { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
/// Decoded `sendSMS` reply.
pub struct SendSmsResponse {
    payload: Map<String, Value>,
}

impl SendSmsResponse {
    pub fn new(payload: Map<String, Value>) -> Self {
        Self { payload }
    }

    /// Status code, coerced to an integer (`200` on success).
    pub fn result(&self) -> Result<i64, ResponseFieldError> {
        integer_field(&self.payload, RESULT_FIELD)
    }

    pub fn result_text(&self) -> Result<&str, ResponseFieldError> {
        str_field(&self.payload, RESULT_TEXT_FIELD)
    }

    /// Provider-assigned reference ids in the order returned.
    pub fn reference_ids(&self) -> Result<Vec<String>, ResponseFieldError> {
        let items = field(&self.payload, REFERENCE_ID_FIELD)?
            .as_array()
            .ok_or(ResponseFieldError::InvalidType {
                field: REFERENCE_ID_FIELD,
                expected: "an array",
            })?;

        items
            .iter()
            .map(|item| match item {
                Value::String(value) => Ok(value.clone()),
                Value::Number(value) => Ok(value.to_string()),
                _ => Err(ResponseFieldError::InvalidType {
                    field: REFERENCE_ID_FIELD,
                    expected: "an array of strings",
                }),
            })
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.result() == Ok(RESULT_OK)
    }

    /// The decoded JSON object as received.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Decoded `getDlrStatus` reply.
pub struct DeliveryStatusResponse {
    payload: Map<String, Value>,
}

impl DeliveryStatusResponse {
    pub fn new(payload: Map<String, Value>) -> Self {
        Self { payload }
    }

    /// Status code, coerced to an integer (`200` on success).
    pub fn result(&self) -> Result<i64, ResponseFieldError> {
        integer_field(&self.payload, RESULT_FIELD)
    }

    pub fn reference_id(&self) -> Result<&str, ResponseFieldError> {
        str_field(&self.payload, REFERENCE_ID_FIELD)
    }

    /// Original message text as echoed by VoodooSMS.
    pub fn message(&self) -> Result<&str, ResponseFieldError> {
        str_field(&self.payload, MESSAGE_FIELD)
    }

    pub fn delivery_status(&self) -> Result<&str, ResponseFieldError> {
        str_field(&self.payload, DELIVERY_STATUS_FIELD)
    }

    /// Delivery time, parsed on every call.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, or the same with a `T` separator.
    /// An offset sent by VoodooSMS is kept; values without one are read as UTC.
    pub fn delivery_datetime(&self) -> Result<DateTime<FixedOffset>, ResponseFieldError> {
        let raw = str_field(&self.payload, DELIVERY_DATETIME_FIELD)?;
        parse_datetime(raw).ok_or_else(|| ResponseFieldError::InvalidDateTime {
            field: DELIVERY_DATETIME_FIELD,
            value: raw.to_owned(),
        })
    }

    pub fn is_success(&self) -> bool {
        self.result() == Ok(RESULT_OK)
    }

    /// The decoded JSON object as received.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }
}

fn field<'a>(
    payload: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Value, ResponseFieldError> {
    payload
        .get(name)
        .filter(|value| !value.is_null())
        .ok_or(ResponseFieldError::Missing { field: name })
}

fn str_field<'a>(
    payload: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, ResponseFieldError> {
    field(payload, name)?
        .as_str()
        .ok_or(ResponseFieldError::InvalidType {
            field: name,
            expected: "a string",
        })
}

fn integer_field(
    payload: &Map<String, Value>,
    name: &'static str,
) -> Result<i64, ResponseFieldError> {
    let invalid = ResponseFieldError::InvalidType {
        field: name,
        expected: "an integer",
    };

    match field(payload, name)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.is_finite())
                    .map(|value| value.trunc() as i64)
            })
            .ok_or(invalid),
        Value::String(text) => text.trim().parse::<i64>().map_err(|_| invalid),
        _ => Err(invalid),
    }
}

fn parse_datetime(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|naive| naive.and_utc().fixed_offset())
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, sec: u32) -> DateTime<FixedOffset> {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, sec)
            .unwrap()
            .and_utc()
            .fixed_offset()
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn send_response_exposes_typed_fields() {
        let response = SendSmsResponse::new(object(json!({
            "result": 200,
            "resultText": "OK",
            "reference_id": ["abc123"]
        })));

        assert_eq!(response.result(), Ok(200));
        assert_eq!(response.result_text(), Ok("OK"));
        assert_eq!(response.reference_ids(), Ok(vec!["abc123".to_owned()]));
        assert!(response.is_success());
    }

    #[test]
    fn result_is_coerced_from_numeric_string() {
        let response = SendSmsResponse::new(object(json!({ "result": " 401 " })));
        assert_eq!(response.result(), Ok(401));
        assert!(!response.is_success());
    }

    #[test]
    fn result_rejects_non_numeric_values() {
        let response = SendSmsResponse::new(object(json!({ "result": "OK" })));
        assert_eq!(
            response.result(),
            Err(ResponseFieldError::InvalidType {
                field: "result",
                expected: "an integer"
            })
        );
    }

    #[test]
    fn missing_and_null_fields_are_reported_as_missing() {
        let response = SendSmsResponse::new(object(json!({ "resultText": null })));
        assert_eq!(
            response.result(),
            Err(ResponseFieldError::Missing { field: "result" })
        );
        assert_eq!(
            response.result_text(),
            Err(ResponseFieldError::Missing {
                field: "resultText"
            })
        );
        assert_eq!(
            response.reference_ids(),
            Err(ResponseFieldError::Missing {
                field: "reference_id"
            })
        );
    }

    #[test]
    fn reference_ids_keep_order_and_accept_numbers() {
        let response =
            SendSmsResponse::new(object(json!({ "reference_id": ["b", 42, "a"] })));
        assert_eq!(
            response.reference_ids(),
            Ok(vec!["b".to_owned(), "42".to_owned(), "a".to_owned()])
        );

        let response = SendSmsResponse::new(object(json!({ "reference_id": "abc123" })));
        assert!(matches!(
            response.reference_ids(),
            Err(ResponseFieldError::InvalidType { .. })
        ));
    }

    #[test]
    fn delivery_status_response_parses_datetime() {
        let response = DeliveryStatusResponse::new(object(json!({
            "result": 200,
            "reference_id": "abc123",
            "message": "hi",
            "delivery_status": "delivered",
            "delivery_datetime": "2023-01-01 12:00:00"
        })));

        let expected = utc(2023, 1, 1, 12, 0, 0);

        assert_eq!(response.result(), Ok(200));
        assert_eq!(response.reference_id(), Ok("abc123"));
        assert_eq!(response.message(), Ok("hi"));
        assert_eq!(response.delivery_status(), Ok("delivered"));
        assert_eq!(response.delivery_datetime(), Ok(expected));
    }

    #[test]
    fn delivery_datetime_accepts_iso_forms() {
        let expected = utc(2023, 1, 1, 12, 0, 0);

        for raw in ["2023-01-01T12:00:00", "2023-01-01T12:00:00Z"] {
            let response =
                DeliveryStatusResponse::new(object(json!({ "delivery_datetime": raw })));
            assert_eq!(response.delivery_datetime(), Ok(expected), "input: {raw}");
        }
    }

    #[test]
    fn delivery_datetime_keeps_provider_offset() {
        let response = DeliveryStatusResponse::new(object(json!({
            "delivery_datetime": "2023-01-01T14:00:00+02:00"
        })));

        let parsed = response.delivery_datetime().unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(
            parsed.naive_local(),
            NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap()
        );
        assert_eq!(parsed, utc(2023, 1, 1, 12, 0, 0));
    }

    #[test]
    fn delivery_datetime_rejects_garbage() {
        let response =
            DeliveryStatusResponse::new(object(json!({ "delivery_datetime": "yesterday" })));
        assert_eq!(
            response.delivery_datetime(),
            Err(ResponseFieldError::InvalidDateTime {
                field: "delivery_datetime",
                value: "yesterday".to_owned()
            })
        );
    }
}
