use crate::domain::validation::ValidationError;
use crate::domain::value::{Password, SenderId, Username};

/// Environment variable holding the account username.
pub const USERNAME_ENV: &str = "VOODOO_USERNAME";
/// Environment variable holding the account password.
pub const PASSWORD_ENV: &str = "VOODOO_PASSWORD";
/// Optional environment variable holding the default sender id.
pub const SENDER_ENV: &str = "VOODOO_FROM";

#[derive(Debug, Clone, PartialEq, Eq)]
/// VoodooSMS account credentials, sent as `uid` and `pass` with every call.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Validate and pair a username with its password.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable per-client settings: credentials plus an optional default sender.
///
/// The default sender is used by [`crate::VoodooSmsClient::send`] whenever a request
/// does not carry its own sender id.
pub struct ClientConfig {
    credentials: Credentials,
    default_sender: Option<SenderId>,
}

impl ClientConfig {
    /// Config without a default sender.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            default_sender: None,
        }
    }

    /// Set the sender id used when a request has none.
    pub fn with_default_sender(mut self, sender: SenderId) -> Self {
        self.default_sender = Some(sender);
        self
    }

    /// Load `VOODOO_USERNAME`, `VOODOO_PASSWORD` and the optional `VOODOO_FROM`
    /// from the process environment.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading values through `lookup`.
    ///
    /// An empty `VOODOO_FROM` is treated as unset; any other value is used verbatim.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username =
            lookup(USERNAME_ENV).ok_or(ValidationError::MissingEnvVar { name: USERNAME_ENV })?;
        let password =
            lookup(PASSWORD_ENV).ok_or(ValidationError::MissingEnvVar { name: PASSWORD_ENV })?;

        let mut config = Self::new(Credentials::new(username, password)?);
        if let Some(sender) = lookup(SENDER_ENV).filter(|value| !value.is_empty()) {
            config = config.with_default_sender(SenderId::new(sender)?);
        }
        Ok(config)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn default_sender(&self) -> Option<&SenderId> {
        self.default_sender.as_ref()
    }
}
