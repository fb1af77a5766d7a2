//! Domain layer: strong types with validation and invariants (no I/O).

mod config;
mod request;
mod response;
mod validation;
mod value;

pub use config::{ClientConfig, Credentials, PASSWORD_ENV, SENDER_ENV, USERNAME_ENV};
pub(crate) use request::PreparedSend;
pub use request::SendSms;
pub use response::{DeliveryStatusResponse, RESULT_OK, ResponseFieldError, SendSmsResponse};
pub use validation::ValidationError;
pub use value::{
    Destination, ExternalReference, MessageText, Password, ReferenceId, SenderId, Username,
};
