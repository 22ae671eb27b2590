//! Client layer: configuration, HTTP transports, and request orchestration.

mod config;
mod http;

use std::error::Error as StdError;
use std::sync::Arc;

use tracing::debug;

pub use config::{CHARSET, Config, ConfigBuilder, PARTNER_ID, RESPONSE_FORMAT_JSON};
pub use http::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, FORM_CONTENT_TYPE, HttpError, HttpResponse,
    HttpTransport, OneShotTransport, PooledTransport, PooledTransportBuilder,
};

use crate::domain::{
    ApiMethod, GetBalance, ListSenders, MethodCall, Operation, Params, Response, SendMessage,
    ValidationError,
};

#[derive(Debug, thiserror::Error)]
/// Errors returned while preparing or performing a gateway call.
///
/// Errors reported by the gateway itself (wrong password, insufficient funds, ...) are
/// not represented here; they come back as a [`Response`] with
/// [`Response::has_error`] set.
pub enum SmscError {
    /// Credentials are missing; raised before any request is sent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[source] ValidationError),

    /// Host name outside the supported set.
    #[error("host \"{host}\" is not supported")]
    UnsupportedHost { host: String },

    /// Method name outside the supported set.
    #[error("method \"{method}\" is not supported")]
    UnsupportedMethod { method: String },

    /// No usable HTTP client could be set up.
    #[error("HTTP transport unavailable: {0}")]
    TransportUnavailable(#[source] Box<dyn StdError + Send + Sync>),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("network error: {0}")]
    Network(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body is not valid JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl Operation {
    /// Full parameter set for this operation.
    ///
    /// Later sources override earlier ones on key collisions: configuration
    /// credentials and defaults, then [`Config::default_options`], then the
    /// operation's own fields. `config` is only read.
    pub fn build_params(&self, config: &Config) -> Params {
        let mut params = config.base_params();
        params.extend(
            config
                .default_options()
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        params.extend(crate::transport::encode_operation_params(self));
        params
    }

    /// Send this operation through `transport` and decode the reply.
    ///
    /// Errors:
    /// - [`SmscError::InvalidConfig`] before any request when credentials are missing,
    /// - [`SmscError::TransportUnavailable`] / [`SmscError::Network`] from the transport,
    /// - [`SmscError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`SmscError::MalformedResponse`] when the body is not JSON.
    pub fn execute(
        &self,
        config: &Config,
        transport: &dyn HttpTransport,
    ) -> Result<Response, SmscError> {
        config.validate()?;

        let method = self.api_method();
        let url = config.method_url(method);
        let body = crate::transport::encode_form(&self.build_params(config));
        debug!(
            method = method.as_str(),
            host = config.host().as_str(),
            "sending gateway request"
        );

        let response = transport.post_form(&url, &body)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmscError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Response::parse(&response.body, method)
    }
}

impl Response {
    /// Decode a raw gateway body received for `method`.
    pub fn parse(raw: &str, method: ApiMethod) -> Result<Self, SmscError> {
        crate::transport::decode_response(raw, method)
            .map_err(|err| SmscError::MalformedResponse(Box::new(err)))
    }
}

#[derive(Clone)]
/// High-level gateway client: a [`Config`] plus the transport used for every call.
///
/// [`SmscClient::new`] uses a [`OneShotTransport`]; pass a [`PooledTransport`] to
/// [`SmscClient::with_transport`] to keep connections alive between calls.
pub struct SmscClient {
    config: Config,
    http: Arc<dyn HttpTransport>,
}

impl SmscClient {
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, OneShotTransport::new())
    }

    pub fn with_transport(config: Config, transport: impl HttpTransport + 'static) -> Self {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    /// Use a transport that is also shared with other clients.
    pub fn with_shared_transport(config: Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config,
            http: transport,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn execute(&self, operation: impl Into<Operation>) -> Result<Response, SmscError> {
        let operation: Operation = operation.into();
        operation.execute(&self.config, self.http.as_ref())
    }

    /// Send a text, voice or Viber message.
    pub fn send_message(&self, request: SendMessage) -> Result<Response, SmscError> {
        self.execute(request)
    }

    /// Fetch the balance; read it with [`Response::balance`].
    pub fn get_balance(&self) -> Result<Response, SmscError> {
        self.execute(GetBalance)
    }

    /// Fetch approved sender ids; read them with [`Response::senders`].
    pub fn list_senders(&self) -> Result<Response, SmscError> {
        self.execute(ListSenders)
    }

    /// Call a method without a dedicated request type.
    pub fn call(&self, call: MethodCall) -> Result<Response, SmscError> {
        self.execute(call)
    }
}
