//! Typed Rust client for the VoodooSMS HTTP API.
//!
//! Two calls are covered: `sendSMS` and `getDlrStatus`. The crate keeps the same
//! split throughout: a domain layer of strong types, a transport layer for
//! wire-format details, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use voodoosms::{ClientConfig, Credentials, SendSms, SenderId, VoodooSmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), voodoosms::VoodooSmsError> {
//!     let config = ClientConfig::new(Credentials::new("user", "pass")?)
//!         .with_default_sender(SenderId::new("Sender")?);
//!     let client = VoodooSmsClient::new(config);
//!     let _resp = client.send(SendSms::new("hello", "441234567890")).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{VoodooSmsClient, VoodooSmsClientBuilder, VoodooSmsError};
pub use domain::{
    ClientConfig, Credentials, DeliveryStatusResponse, Destination, ExternalReference,
    MessageText, Password, ReferenceId, ResponseFieldError, SendSms, SendSmsResponse, SenderId,
    Username, ValidationError,
};
