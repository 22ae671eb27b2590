//! HTTP transports: the capability that performs the actual POST.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::SmscError;

/// Content type of every request body sent to the gateway.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Default connect timeout of the bundled transports.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default total request timeout of the bundled transports.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw HTTP response: status code and body text.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
/// Failure of a single [`HttpTransport::post_form`] call.
pub enum HttpError {
    /// No usable HTTP client could be set up (TLS backend, resolver, ...).
    #[error("HTTP client unavailable: {0}")]
    Unavailable(#[source] Box<dyn StdError + Send + Sync>),

    /// The request itself failed (DNS, TLS, timeouts, I/O).
    #[error("request failed: {0}")]
    Network(#[source] Box<dyn StdError + Send + Sync>),
}

impl From<HttpError> for SmscError {
    fn from(value: HttpError) -> Self {
        match value {
            HttpError::Unavailable(err) => SmscError::TransportUnavailable(err),
            HttpError::Network(err) => SmscError::Network(err),
        }
    }
}

/// Performs one blocking form POST.
///
/// `body` is already URL-encoded; implementations must send it unchanged with
/// [`FORM_CONTENT_TYPE`]. Non-2xx statuses are returned, not treated as failures.
pub trait HttpTransport: Send + Sync {
    fn post_form(&self, url: &str, body: &str) -> Result<HttpResponse, HttpError>;
}

#[derive(Debug, Clone)]
/// Opens a fresh connection for every call and keeps nothing between calls.
///
/// This is the default transport. Use [`PooledTransport`] to reuse connections.
pub struct OneShotTransport {
    connect_timeout: Duration,
    timeout: Duration,
}

impl OneShotTransport {
    pub fn new() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for OneShotTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for OneShotTransport {
    fn post_form(&self, url: &str, body: &str) -> Result<HttpResponse, HttpError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|err| HttpError::Unavailable(Box::new(err)))?;
        post(&client, url, body)
    }
}

#[derive(Debug, Clone)]
/// Builder for [`PooledTransport`].
pub struct PooledTransportBuilder {
    connect_timeout: Duration,
    timeout: Duration,
    pool_idle_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PooledTransportBuilder {
    pub fn new() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            pool_idle_timeout: None,
            user_agent: None,
        }
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// How long idle keep-alive connections stay in the pool.
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<PooledTransport, SmscError> {
        let mut builder = reqwest::blocking::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout);
        if let Some(timeout) = self.pool_idle_timeout {
            builder = builder.pool_idle_timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmscError::TransportUnavailable(Box::new(err)))?;
        Ok(PooledTransport { client })
    }
}

impl Default for PooledTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
/// Keeps connections alive across calls made through the same instance.
///
/// The pool belongs to this value: build it once, pass it to every call that should
/// share connections, and drop it to close them. Clones share the same pool, and the
/// pool is safe to use from several threads at once.
///
/// Must not be built or dropped inside an async runtime.
pub struct PooledTransport {
    client: reqwest::blocking::Client,
}

impl PooledTransport {
    pub fn new() -> Result<Self, SmscError> {
        Self::builder().build()
    }

    pub fn builder() -> PooledTransportBuilder {
        PooledTransportBuilder::new()
    }
}

impl HttpTransport for PooledTransport {
    fn post_form(&self, url: &str, body: &str) -> Result<HttpResponse, HttpError> {
        post(&self.client, url, body)
    }
}

fn post(
    client: &reqwest::blocking::Client,
    url: &str,
    body: &str,
) -> Result<HttpResponse, HttpError> {
    let response = client
        .post(url)
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(body.to_owned())
        .send()
        .map_err(|err| HttpError::Network(Box::new(err)))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .map_err(|err| HttpError::Network(Box::new(err)))?;
    debug!(status, bytes = body.len(), "received HTTP response");
    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on port 1, so connecting fails immediately.
    const UNREACHABLE_URL: &str = "http://127.0.0.1:1/sys/balance.php";

    #[test]
    fn http_errors_map_to_client_errors() {
        let err: SmscError = HttpError::Unavailable("no tls".into()).into();
        assert!(matches!(err, SmscError::TransportUnavailable(_)));

        let err: SmscError = HttpError::Network("timed out".into()).into();
        assert!(matches!(err, SmscError::Network(_)));
    }

    #[test]
    fn one_shot_transport_reports_connection_failures() {
        let transport = OneShotTransport::new().connect_timeout(Duration::from_secs(1));
        let err = transport.post_form(UNREACHABLE_URL, "cur=1").unwrap_err();
        assert!(matches!(err, HttpError::Network(_)));
    }

    #[test]
    fn pooled_transport_builder_applies_settings() {
        let transport = PooledTransport::builder()
            .connect_timeout(Duration::from_secs(1))
            .timeout(Duration::from_secs(2))
            .pool_idle_timeout(Duration::from_secs(30))
            .user_agent("smsc-tests")
            .build()
            .unwrap();

        let err = transport.post_form(UNREACHABLE_URL, "cur=1").unwrap_err();
        assert!(matches!(err, HttpError::Network(_)));
    }
}
