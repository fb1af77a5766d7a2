//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderValue};
use url::Url;

use crate::domain::{
    ClientConfig, DeliveryStatusResponse, ReferenceId, ResponseFieldError, SendSms, SendSmsResponse,
    ValidationError,
};
use crate::transport::{DELIVERY_STATUS_PATH, SEND_SMS_PATH};

const DEFAULT_BASE_URL: &str = "https://www.voodooSMS.com/vapi/server/";
const ACCEPT_JSON: &str = "application/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(ACCEPT, HeaderValue::from_static(ACCEPT_JSON))
                .form(&params)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`VoodooSmsClient`].
///
/// Validation failures are raised before any request is sent. Everything else
/// comes from the HTTP exchange and is passed through without retries.
pub enum VoodooSmsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body was not a JSON object.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// A request or configuration value broke one of the domain rules.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A response accessor found a missing or malformed field.
    #[error("response error: {0}")]
    Response(#[from] ResponseFieldError),
}

#[derive(Debug, Clone)]
/// Builder for [`VoodooSmsClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct VoodooSmsClientBuilder {
    config: ClientConfig,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    no_proxy: bool,
}

impl VoodooSmsClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            no_proxy: false,
        }
    }

    /// Override the API base URL. Endpoint paths are resolved relative to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Ignore proxies configured through the environment (`HTTP_PROXY` and friends).
    pub fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    /// Build a [`VoodooSmsClient`].
    pub fn build(self) -> Result<VoodooSmsClient, VoodooSmsError> {
        let endpoints = Endpoints::with_base(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if self.no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|err| VoodooSmsError::Transport(Box::new(err)))?;

        Ok(VoodooSmsClient {
            config: self.config,
            endpoints,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Endpoints {
    send_sms: String,
    delivery_status: String,
}

impl Endpoints {
    fn default_base() -> Self {
        Self {
            send_sms: format!("{DEFAULT_BASE_URL}{SEND_SMS_PATH}"),
            delivery_status: format!("{DEFAULT_BASE_URL}{DELIVERY_STATUS_PATH}"),
        }
    }

    /// Resolve both endpoint paths against `base_url`, treating it as a directory.
    fn with_base(base_url: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            send_sms: base.join(SEND_SMS_PATH)?.into(),
            delivery_status: base.join(DELIVERY_STATUS_PATH)?.into(),
        })
    }
}

#[derive(Clone)]
/// High-level VoodooSMS client.
///
/// This type validates requests, form-encodes them, and wraps the JSON replies in
/// typed response models. By default it talks to
/// `https://www.voodooSMS.com/vapi/server/`.
///
/// The API-level `result` code is not inspected; check
/// [`SendSmsResponse::is_success`] or [`SendSmsResponse::result`] yourself.
pub struct VoodooSmsClient {
    config: ClientConfig,
    endpoints: Endpoints,
    http: Arc<dyn HttpTransport>,
}

impl VoodooSmsClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`VoodooSmsClient::builder`].
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            endpoints: Endpoints::default_base(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(config: ClientConfig) -> VoodooSmsClientBuilder {
        VoodooSmsClientBuilder::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one SMS through `sendSMS`.
    ///
    /// The request sender wins over the configured default sender. Country code `44`
    /// and a validity of `1` are always sent.
    ///
    /// Errors:
    /// - [`ValidationError::MessageTooLong`] when the message exceeds 160 characters,
    /// - [`ValidationError::MissingSenderId`] when neither the request nor the config has a sender,
    /// - [`ValidationError::ExternalReferenceTooLong`] when the reference exceeds 30 characters,
    /// - [`VoodooSmsError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`VoodooSmsError::Parse`] when the body is not a JSON object.
    pub async fn send(&self, request: SendSms) -> Result<SendSmsResponse, VoodooSmsError> {
        let prepared = request.prepare(self.config.default_sender())?;

        tracing::debug!(
            endpoint = %self.endpoints.send_sms,
            destination = prepared.destination.as_str(),
            sender = prepared.sender.as_str(),
            external_reference = prepared.external_reference.is_some(),
            "sending SMS"
        );

        let params = crate::transport::encode_send_sms_form(self.config.credentials(), &prepared);
        let body = self.post(&self.endpoints.send_sms, params).await?;

        crate::transport::decode_send_sms_json_response(&body)
            .map_err(|err| VoodooSmsError::Parse(Box::new(err)))
    }

    /// Query the delivery status of a message previously sent with [`VoodooSmsClient::send`].
    ///
    /// The reference id is forwarded without any validation.
    ///
    /// Errors:
    /// - [`VoodooSmsError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`VoodooSmsError::Parse`] when the body is not a JSON object.
    pub async fn get_delivery_status(
        &self,
        reference_id: impl Into<ReferenceId>,
    ) -> Result<DeliveryStatusResponse, VoodooSmsError> {
        let reference_id = reference_id.into();

        tracing::debug!(
            endpoint = %self.endpoints.delivery_status,
            reference_id = reference_id.as_str(),
            "requesting delivery status"
        );

        let params = crate::transport::encode_delivery_status_form(
            self.config.credentials(),
            &reference_id,
        );
        let body = self.post(&self.endpoints.delivery_status, params).await?;

        crate::transport::decode_delivery_status_json_response(&body)
            .map_err(|err| VoodooSmsError::Parse(Box::new(err)))
    }

    async fn post(
        &self,
        url: &str,
        params: Vec<(String, String)>,
    ) -> Result<String, VoodooSmsError> {
        let response = self
            .http
            .post_form(url, params)
            .await
            .map_err(VoodooSmsError::Transport)?;

        tracing::debug!(endpoint = %url, status = response.status, "response received");

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(VoodooSmsError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}
