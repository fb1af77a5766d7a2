use crate::domain::validation::ValidationError;
use crate::domain::value::{Destination, ExternalReference, MessageText, SenderId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single outgoing SMS as supplied by the caller.
///
/// Nothing is checked here; [`crate::VoodooSmsClient::send`] validates the request
/// before anything is transmitted.
pub struct SendSms {
    message: String,
    destination: Destination,
    sender: Option<String>,
    external_reference: Option<String>,
}

impl SendSms {
    pub fn new(message: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            destination: Destination::new(destination),
            sender: None,
            external_reference: None,
        }
    }

    /// Override the client's default sender id for this message.
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Attach a correlation string that VoodooSMS echoes back.
    pub fn external_reference(mut self, reference: impl Into<String>) -> Self {
        self.external_reference = Some(reference.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Check limits and resolve the effective sender.
    ///
    /// Order: message length, sender, external reference length.
    pub(crate) fn prepare(
        &self,
        default_sender: Option<&SenderId>,
    ) -> Result<PreparedSend, ValidationError> {
        let message = MessageText::new(self.message.as_str())?;

        let sender = match (self.sender.as_deref(), default_sender) {
            (Some(sender), _) => SenderId::new(sender)?,
            (None, Some(default)) => default.clone(),
            (None, None) => return Err(ValidationError::MissingSenderId),
        };

        let external_reference = self
            .external_reference
            .as_deref()
            .map(ExternalReference::new)
            .transpose()?;

        Ok(PreparedSend {
            destination: self.destination.clone(),
            sender,
            message,
            external_reference,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A [`SendSms`] that passed validation, with its sender resolved.
pub struct PreparedSend {
    pub(crate) destination: Destination,
    pub(crate) sender: SenderId,
    pub(crate) message: MessageText,
    pub(crate) external_reference: Option<ExternalReference>,
}
