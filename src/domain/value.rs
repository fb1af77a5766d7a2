use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// VoodooSMS account username (`uid`).
///
/// Invariant: must not be empty. The value is sent verbatim.
pub struct Username(String);

impl Username {
    /// Form field name used by VoodooSMS (`uid`).
    pub const FIELD: &'static str = "uid";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// VoodooSMS account password (`pass`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Form field name used by VoodooSMS (`pass`).
    pub const FIELD: &'static str = "pass";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Originator shown to the recipient (`orig`).
///
/// Invariant: must not be empty. The value is sent verbatim, whitespace included.
pub struct SenderId(String);

impl SenderId {
    /// Form field name used by VoodooSMS (`orig`).
    pub const FIELD: &'static str = "orig";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient number as sent to VoodooSMS (`dest`). Passed through unchanged.
pub struct Destination(String);

impl Destination {
    /// Form field name used by VoodooSMS (`dest`).
    pub const FIELD: &'static str = "dest";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`msg`).
///
/// Invariant: at most [`MessageText::MAX_CHARS`] characters. The value is kept verbatim.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by VoodooSMS (`msg`).
    pub const FIELD: &'static str = "msg";

    /// Longest message accepted for a single send.
    pub const MAX_CHARS: usize = 160;

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(ValidationError::MessageTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-supplied correlation string echoed back by VoodooSMS (`eref`).
///
/// Invariant: at most [`ExternalReference::MAX_CHARS`] characters.
pub struct ExternalReference(String);

impl ExternalReference {
    /// Form field name used by VoodooSMS (`eref`).
    pub const FIELD: &'static str = "eref";

    /// Longest external reference accepted by VoodooSMS.
    pub const MAX_CHARS: usize = 30;

    /// Create a validated [`ExternalReference`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(ValidationError::ExternalReferenceTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the reference as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Provider-assigned message id (`reference_id`) returned by `sendSMS`.
///
/// No format or length check is applied; the value is sent as given.
pub struct ReferenceId(String);

impl ReferenceId {
    /// Form field name used by VoodooSMS (`reference_id`).
    pub const FIELD: &'static str = "reference_id";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the reference id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReferenceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ReferenceId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
