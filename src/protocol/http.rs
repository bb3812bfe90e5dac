// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the IPX800 JSON and CGI endpoints.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::{Error, ProtocolError, TransportError};
use crate::protocol::{ApiResponse, RequestParams, RetryPolicy};

/// Path of the JSON endpoint.
pub const API_PATH: &str = "/api/xdevices.json";

/// Path of the legacy CGI endpoint.
pub const CGI_PATH: &str = "/user/api.cgi";

/// Marker the CGI endpoint writes into successful answers.
pub const CGI_SUCCESS_MARKER: &str = "Success";

/// Read command covering every category of the bulk state.
const BULK_QUERY: &str = "all";

/// X-PWM channels are missing from the bulk state and are fetched separately.
pub(crate) const XPWM_ALL_CHANNELS: &str = "XPWM|1-24";

/// Cheapest read command, used as a liveness probe.
const PING_QUERY: &str = "R";

// ============================================================================
// Ipx800Config - Connection configuration
// ============================================================================

/// Configuration of an IPX800 gateway connection.
///
/// Immutable once turned into a client. The API key is sent with every JSON
/// request; the username and password are only used as HTTP basic
/// credentials on the legacy CGI endpoint.
///
/// # Examples
///
/// ```
/// use ipx800_lib::protocol::{Ipx800Config, RetryPolicy};
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = Ipx800Config::new("192.168.1.240", "apikey");
///
/// // With all options
/// let config = Ipx800Config::new("192.168.1.240", "apikey")
///     .with_port(8080)
///     .with_credentials("admin", "password")
///     .with_retry_policy(RetryPolicy::new().with_attempts(5))
///     .with_timeout(Duration::from_secs(2))
///     .with_status_check(false);
/// assert_eq!(config.base_url(), "http://192.168.1.240:8080");
/// ```
#[derive(Clone)]
pub struct Ipx800Config {
    host: String,
    port: u16,
    api_key: String,
    credentials: Option<Credentials>,
    retry: RetryPolicy,
    check_status: bool,
    http_client: Option<Client>,
}

impl Ipx800Config {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;

    /// Creates a new configuration for the gateway at `host`.
    ///
    /// # Arguments
    ///
    /// * `host` - Hostname or IP address, with or without an `http://` prefix
    /// * `api_key` - Key configured on the gateway for the JSON API
    #[must_use]
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            api_key: api_key.into(),
            credentials: None,
            retry: RetryPolicy::default(),
            check_status: true,
            http_client: None,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the credentials of the legacy CGI endpoint.
    ///
    /// Empty strings count as unset: credentials are only kept when both the
    /// username and the password are non-empty.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let (username, password) = (username.into(), password.into());
        self.credentials = if username.is_empty() || password.is_empty() {
            None
        } else {
            Some(Credentials { username, password })
        };
        self
    }

    /// Replaces the whole retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Sets the number of attempts per request.
    #[must_use]
    pub fn with_retries(mut self, attempts: u32) -> Self {
        self.retry = self.retry.with_attempts(attempts);
        self
    }

    /// Sets the timeout of each attempt.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.retry = self.retry.with_timeout(timeout);
        self
    }

    /// Sets the pause after an answer without success indicator.
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry = self.retry.with_retry_delay(delay);
        self
    }

    /// Enables or disables the success indicator check (enabled by default).
    ///
    /// When disabled, any answer with a successful HTTP status is accepted.
    #[must_use]
    pub fn with_status_check(mut self, enabled: bool) -> Self {
        self.check_status = enabled;
        self
    }

    /// Uses an existing HTTP client instead of creating one.
    ///
    /// The supplier keeps ownership of the connection pool: dropping the
    /// gateway client leaves it usable.
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Returns the host as given.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the credentials if both are set.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Returns the retry policy.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Returns whether the success indicator is required.
    #[must_use]
    pub fn status_check(&self) -> bool {
        self.check_status
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self
            .host
            .trim_start_matches("http://")
            .trim_end_matches('/');
        if self.port == Self::DEFAULT_PORT {
            format!("http://{host}")
        } else {
            format!("http://{host}:{}", self.port)
        }
    }

    /// Creates an [`Ipx800`] client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or does not form a valid URL, the
    /// retry policy allows no attempt, or the HTTP client cannot be created.
    pub fn into_client(self) -> Result<Ipx800, Error> {
        let host = self.host.trim_start_matches("http://").trim_end_matches('/');
        if host.is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()).into());
        }
        if host.starts_with("https://") {
            return Err(ProtocolError::InvalidAddress(format!(
                "the IPX800 only serves plain HTTP: {host}"
            ))
            .into());
        }
        if self.retry.attempts() == 0 {
            return Err(Error::InvalidConfiguration(
                "at least one attempt per request is required".to_string(),
            ));
        }

        let base_url = self.base_url();
        let api_url = format!("{base_url}{API_PATH}");
        if let Err(e) = reqwest::Url::parse(&api_url) {
            return Err(ProtocolError::InvalidAddress(format!("{host}: {e}")).into());
        }

        let (client, owns_session) = match self.http_client {
            Some(client) => (client, false),
            None => (
                Client::builder().build().map_err(ProtocolError::Http)?,
                true,
            ),
        };

        tracing::debug!(base_url = %base_url, owns_session, "Created IPX800 client");

        Ok(Ipx800 {
            api_url,
            cgi_url: format!("{base_url}{CGI_PATH}"),
            api_key: self.api_key,
            credentials: self.credentials,
            retry: self.retry,
            check_status: self.check_status,
            client,
            owns_session,
        })
    }
}

impl fmt::Debug for Ipx800Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ipx800Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("credentials", &self.credentials)
            .field("retry", &self.retry)
            .field("check_status", &self.check_status)
            .field("external_http_client", &self.http_client.is_some())
            .finish_non_exhaustive()
    }
}

/// HTTP basic credentials of the legacy CGI endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username for authentication.
    pub username: String,
    /// Password for authentication.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

// ============================================================================
// Ipx800 - Gateway client
// ============================================================================

/// Result of one exchange that did not fail fatally.
enum Outcome<T> {
    /// The answer is valid under the active success policy.
    Accepted(T),
    /// The gateway answered without acknowledging the request.
    Rejected(String),
    /// No answer was received.
    Unreachable(TransportError),
}

/// Client for an IPX800 gateway.
///
/// Every device accessor routes its calls through [`request`](Self::request)
/// (JSON endpoint) or [`request_legacy`](Self::request_legacy) (CGI
/// endpoint). Each call is an independent exchange retried according to the
/// configured [`RetryPolicy`]; the client keeps no per-call state, so one
/// instance can be shared between tasks.
///
/// # Examples
///
/// ```no_run
/// use ipx800_lib::protocol::{Ipx800, Ipx800Config, RequestParams};
///
/// # async fn example() -> ipx800_lib::Result<()> {
/// let ipx = Ipx800::new(Ipx800Config::new("192.168.1.240", "apikey"))?;
///
/// if ipx.ping().await {
///     let relays = ipx.request(&RequestParams::get("R")).await?;
///     println!("relay 1 is {}", relays.flag("R1")?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Ipx800 {
    api_url: String,
    cgi_url: String,
    api_key: String,
    credentials: Option<Credentials>,
    retry: RetryPolicy,
    check_status: bool,
    client: Client,
    owns_session: bool,
}

impl Ipx800 {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// See [`Ipx800Config::into_client`].
    pub fn new(config: Ipx800Config) -> Result<Self, Error> {
        config.into_client()
    }

    /// Returns the URL of the JSON endpoint.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the URL of the legacy CGI endpoint.
    #[must_use]
    pub fn cgi_url(&self) -> &str {
        &self.cgi_url
    }

    /// Returns the retry policy.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Returns `true` if CGI credentials are configured.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Returns `true` if this client created its own HTTP session.
    #[must_use]
    pub fn owns_session(&self) -> bool {
        self.owns_session
    }

    /// Consumes this handle on the HTTP session.
    ///
    /// Dropping the client is what releases the session; `close` only makes
    /// that point explicit. An owned session is closed once its last clone
    /// is dropped. An externally supplied session stays with its supplier.
    pub fn close(self) {
        tracing::debug!(owns_session = self.owns_session, "Closing IPX800 client");
    }

    /// Sends a command to the JSON endpoint.
    ///
    /// The API key is added under `key` unless `params` already holds that
    /// key.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::CannotConnect` if the last attempt got no answer
    /// - `ProtocolError::RequestRejected` if the last answer lacked the
    ///   success indicator or had a non-success HTTP status
    /// - `ParseError` if an answer is not a JSON object
    pub async fn request(&self, params: &RequestParams) -> Result<ApiResponse, Error> {
        let query = params.with_api_key(&self.api_key);
        let url = format!("{}?{}", self.api_url, query.to_query_string());
        let url = url.as_str();

        self.with_retries(API_PATH, params, move || self.exchange_api(url))
            .await
    }

    /// Sends a command to the legacy CGI endpoint and returns the raw body.
    ///
    /// Parameters are sent verbatim. Configured credentials are sent as HTTP
    /// basic authentication.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::AuthenticationFailed` on HTTP 401, without retry
    /// - `ProtocolError::CannotConnect` if the last attempt got no answer
    /// - `ProtocolError::RequestRejected` if the last body lacked the success
    ///   marker or had a non-success HTTP status
    pub async fn request_legacy(&self, params: &RequestParams) -> Result<String, Error> {
        let url = format!("{}?{}", self.cgi_url, params.to_query_string());
        let url = url.as_str();

        self.with_retries(CGI_PATH, params, move || self.exchange_cgi(url))
            .await
    }

    /// Returns `true` if the gateway answers a minimal read command.
    ///
    /// Never fails: every error is reported as "not reachable".
    pub async fn ping(&self) -> bool {
        match self.request(&RequestParams::get(PING_QUERY)).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "IPX800 ping failed");
                false
            }
        }
    }

    /// Reads the whole gateway state.
    ///
    /// When CGI credentials are configured, the X-PWM channels, which the
    /// bulk command leaves out, are fetched too and merged into the result.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing request.
    pub async fn fetch_all_state(&self) -> Result<ApiResponse, Error> {
        let mut values = self.request(&RequestParams::get(BULK_QUERY)).await?;
        if self.has_credentials() {
            let channels = self.request(&RequestParams::get(XPWM_ALL_CHANNELS)).await?;
            values.merge(channels);
        }
        Ok(values)
    }

    async fn with_retries<T, F, Fut>(
        &self,
        endpoint: &'static str,
        params: &RequestParams,
        mut exchange: F,
    ) -> Result<T, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<Outcome<T>, Error>>,
    {
        let attempts = self.retry.attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            tracing::debug!(endpoint, attempt, params = %params, "Sending IPX800 request");

            let failure = match exchange().await? {
                Outcome::Accepted(value) => return Ok(value),
                Outcome::Rejected(reason) => {
                    tracing::warn!(endpoint, attempt, reason = %reason, "IPX800 did not acknowledge the request");
                    if self.retry.should_retry(attempt) {
                        tokio::time::sleep(self.retry.retry_delay()).await;
                        continue;
                    }
                    ProtocolError::RequestRejected { attempts, reason }
                }
                Outcome::Unreachable(source) => {
                    tracing::warn!(endpoint, attempt, error = %source, "IPX800 request failed");
                    if self.retry.should_retry(attempt) {
                        continue;
                    }
                    ProtocolError::CannotConnect { attempts, source }
                }
            };

            tracing::warn!(endpoint, attempts, error = %failure, "Giving up IPX800 request");
            return Err(failure.into());
        }
    }

    async fn exchange_api(&self, url: &str) -> Result<Outcome<ApiResponse>, Error> {
        let response = match self.client.get(url).timeout(self.retry.timeout()).send().await {
            Ok(response) => response,
            Err(e) => return self.send_failure(e),
        };

        let status = response.status();
        if !status.is_success() {
            return Ok(Outcome::Rejected(http_status_reason(status)));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Ok(Outcome::Unreachable(self.transport_error(e))),
        };

        tracing::debug!(body = %body, "Received IPX800 API response");

        let content = ApiResponse::parse(&body)?;
        if !self.check_status || content.is_success() {
            Ok(Outcome::Accepted(content))
        } else {
            Ok(Outcome::Rejected(match content.status() {
                Some(status) => format!("status is {status:?}"),
                None => "no status in response".to_string(),
            }))
        }
    }

    async fn exchange_cgi(&self, url: &str) -> Result<Outcome<String>, Error> {
        let mut request = self.client.get(url).timeout(self.retry.timeout());
        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return self.send_failure(e),
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("IPX800 refused the CGI credentials");
            return Err(ProtocolError::AuthenticationFailed.into());
        }
        if !status.is_success() {
            return Ok(Outcome::Rejected(http_status_reason(status)));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Ok(Outcome::Unreachable(self.transport_error(e))),
        };

        tracing::debug!(body = %body, "Received IPX800 CGI response");

        if !self.check_status || body.contains(CGI_SUCCESS_MARKER) {
            Ok(Outcome::Accepted(body))
        } else {
            Ok(Outcome::Rejected("no success marker in response".to_string()))
        }
    }

    // A request that cannot be built never reaches the gateway: not retried.
    fn send_failure<T>(&self, err: reqwest::Error) -> Result<Outcome<T>, Error> {
        if err.is_builder() {
            return Err(ProtocolError::Http(err.without_url()).into());
        }
        Ok(Outcome::Unreachable(self.transport_error(err)))
    }

    // The JSON URL carries the API key; keep it out of errors and logs.
    fn transport_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.retry.timeout())
        } else {
            TransportError::Connection(err.without_url())
        }
    }
}

impl fmt::Debug for Ipx800 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ipx800")
            .field("api_url", &self.api_url)
            .field("cgi_url", &self.cgi_url)
            .field("credentials", &self.credentials)
            .field("retry", &self.retry)
            .field("check_status", &self.check_status)
            .field("owns_session", &self.owns_session)
            .finish_non_exhaustive()
    }
}

fn http_status_reason(status: StatusCode) -> String {
    format!(
        "HTTP {} - {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Ipx800Config::new("192.168.1.240", "apikey");
        assert_eq!(config.host(), "192.168.1.240");
        assert_eq!(config.port(), 80);
        assert!(config.credentials().is_none());
        assert!(config.status_check());
        assert_eq!(config.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn config_base_url() {
        let config = Ipx800Config::new("192.168.1.240", "apikey");
        assert_eq!(config.base_url(), "http://192.168.1.240");

        let config = Ipx800Config::new("http://ipx.local/", "apikey").with_port(8080);
        assert_eq!(config.base_url(), "http://ipx.local:8080");
    }

    #[test]
    fn config_empty_credentials_are_unset() {
        let config = Ipx800Config::new("ipx", "k").with_credentials("admin", "");
        assert!(config.credentials().is_none());

        let config = Ipx800Config::new("ipx", "k").with_credentials("", "secret");
        assert!(config.credentials().is_none());

        let config = Ipx800Config::new("ipx", "k").with_credentials("admin", "secret");
        assert_eq!(config.credentials().unwrap().username, "admin");
    }

    #[test]
    fn config_retry_shortcuts() {
        let config = Ipx800Config::new("ipx", "k")
            .with_retries(5)
            .with_timeout(Duration::from_millis(200))
            .with_retry_delay(Duration::ZERO);
        let policy = config.retry_policy();
        assert_eq!(policy.attempts(), 5);
        assert_eq!(policy.timeout(), Duration::from_millis(200));
        assert_eq!(policy.retry_delay(), Duration::ZERO);
    }

    #[test]
    fn debug_hides_secrets() {
        let config = Ipx800Config::new("ipx", "topsecretkey").with_credentials("admin", "hunter2");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("topsecretkey"));
        assert!(!rendered.contains("hunter2"));

        let client = config.into_client().unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("topsecretkey"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn into_client_builds_endpoint_urls() {
        let client = Ipx800Config::new("192.168.1.240", "apikey")
            .with_port(8080)
            .into_client()
            .unwrap();
        assert_eq!(client.api_url(), "http://192.168.1.240:8080/api/xdevices.json");
        assert_eq!(client.cgi_url(), "http://192.168.1.240:8080/user/api.cgi");
        assert!(client.owns_session());
    }

    #[test]
    fn into_client_with_external_session() {
        let shared = Client::new();
        let client = Ipx800Config::new("ipx", "k")
            .with_http_client(shared.clone())
            .into_client()
            .unwrap();
        assert!(!client.owns_session());
        client.close();
        // The supplier still holds a working handle.
        let _request = shared.get("http://ipx/api/xdevices.json");
    }

    #[test]
    fn into_client_rejects_invalid_config() {
        let err = Ipx800Config::new("", "k").into_client().unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::InvalidAddress(_))
        ));

        let err = Ipx800Config::new("https://ipx", "k")
            .into_client()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::InvalidAddress(_))
        ));

        let err = Ipx800Config::new("ipx", "k")
            .with_retries(0)
            .into_client()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn into_client_rejects_malformed_host() {
        let err = Ipx800Config::new("bad host name", "k")
            .with_retries(3)
            .into_client()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Protocol(ProtocolError::InvalidAddress(_))
        ));
        assert!(!err.is_connection_error());

        assert!(Ipx800Config::new("ipx.local", "k").into_client().is_ok());
    }
}
