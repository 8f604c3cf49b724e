//! High-level client — `CrmClient` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>.rs`.
//! This module keeps the builder, the generic `call` entry points and the accessors.

use crate::auth::client::Auth;
use crate::domain::account::Account;
use crate::domain::contact::Contacts;
use crate::domain::lead::Leads;
use crate::domain::note::Notes;
use crate::domain::pipeline::Pipelines;
use crate::domain::task::Tasks;
use crate::domain::webhook::Webhooks;
use crate::error::{ConfigError, SdkError};
use crate::http::CrmHttp;
use crate::operation::Operation;
use crate::transform::RequestOptions;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::account::Account as AccountClient;
pub use crate::domain::contact::Contacts as ContactsClient;
pub use crate::domain::lead::Leads as LeadsClient;
pub use crate::domain::note::Notes as NotesClient;
pub use crate::domain::pipeline::Pipelines as PipelinesClient;
pub use crate::domain::task::Tasks as TasksClient;
pub use crate::domain::webhook::Webhooks as WebhooksClient;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The primary entry point for the amoCRM SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.tasks()`, `client.leads()`, etc. Clones share one session.
#[derive(Clone)]
pub struct CrmClient {
    pub(crate) http: CrmHttp,
}

impl CrmClient {
    /// Create a client with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Config`] if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> CrmClientBuilder {
        CrmClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks { client: self }
    }

    pub fn contacts(&self) -> Contacts<'_> {
        Contacts { client: self }
    }

    pub fn leads(&self) -> Leads<'_> {
        Leads { client: self }
    }

    pub fn notes(&self) -> Notes<'_> {
        Notes { client: self }
    }

    pub fn pipelines(&self) -> Pipelines<'_> {
        Pipelines { client: self }
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks { client: self }
    }

    // ── Generic dispatch ─────────────────────────────────────────────────

    /// Invoke any operation by identifier.
    ///
    /// `params` may be any serializable value; `&()` sends no parameters.
    pub async fn call<P: Serialize + ?Sized>(
        &self,
        operation: Operation,
        params: &P,
    ) -> Result<Option<Value>, SdkError> {
        self.call_with(operation, params, RequestOptions::default())
            .await
    }

    /// Like [`CrmClient::call`], with per-call transport options.
    pub async fn call_with<P: Serialize + ?Sized>(
        &self,
        operation: Operation,
        params: &P,
        options: RequestOptions,
    ) -> Result<Option<Value>, SdkError> {
        let params = serde_json::to_value(params)?;
        self.http.call(operation, params, options).await
    }

    /// Dispatch an operation whose transform always yields a value.
    pub(crate) async fn call_value<P: Serialize + ?Sized>(
        &self,
        operation: Operation,
        params: &P,
    ) -> Result<Value, SdkError> {
        Ok(self.call(operation, params).await?.unwrap_or(Value::Null))
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CrmClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    user_agent: Option<String>,
}

impl Default for CrmClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            default_headers: Vec::new(),
            user_agent: None,
        }
    }
}

impl CrmClientBuilder {
    /// Account URL, e.g. `https://example.amocrm.ru`. Required.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Client-wide request timeout (native only).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<CrmClient, SdkError> {
        let base_url = validate_base_url(self.base_url.as_deref())?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &self.default_headers {
            let header_name =
                HeaderName::try_from(name.as_str()).map_err(|e| ConfigError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(self.timeout)
                .pool_max_idle_per_host(10);
        }
        let client = builder.build().map_err(ConfigError::HttpClient)?;

        tracing::debug!(base_url = %base_url, "amoCRM client created");
        Ok(CrmClient {
            http: CrmHttp::new(&base_url, client),
        })
    }
}

fn validate_base_url(url: Option<&str>) -> Result<String, ConfigError> {
    let Some(url) = url else {
        return Err(ConfigError::InvalidBaseUrl {
            url: String::new(),
            reason: "base URL is required".to_string(),
        });
    };

    let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
    }
    if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            reason: "URL has no host".to_string(),
        });
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            reason: "URL must not carry a query or fragment".to_string(),
        });
    }
    #[cfg(all(
        not(target_arch = "wasm32"),
        not(any(feature = "rustls-tls", feature = "native-tls"))
    ))]
    {
        if parsed.scheme() == "https" {
            return Err(ConfigError::UnsupportedScheme(
                "https (enable the `rustls-tls` or `native-tls` feature)".to_string(),
            ));
        }
    }
    Ok(url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_http() {
        let client = CrmClient::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }

    #[cfg(any(feature = "rustls-tls", feature = "native-tls"))]
    #[test]
    fn test_new_accepts_https_with_tls() {
        let client = CrmClient::new("https://example.amocrm.ru/").unwrap();
        assert_eq!(client.base_url(), "https://example.amocrm.ru");
    }

    #[cfg(not(any(feature = "rustls-tls", feature = "native-tls")))]
    #[test]
    fn test_new_rejects_https_without_tls() {
        let err = CrmClient::new("https://example.amocrm.ru").err().unwrap();
        assert!(matches!(err, SdkError::Config(ConfigError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        for bad in ["", "not a url", "example.amocrm.ru", "/private/api"] {
            let err = CrmClient::new(bad).err().unwrap();
            assert!(
                matches!(err, SdkError::Config(ConfigError::InvalidBaseUrl { .. })),
                "{bad:?}: {err}"
            );
        }
    }

    #[test]
    fn test_new_rejects_query_and_fragment() {
        for bad in [
            "https://example.amocrm.ru/?lang=ru",
            "https://example.amocrm.ru/#top",
            "https://example.amocrm.ru/?",
        ] {
            let err = CrmClient::new(bad).err().unwrap();
            assert!(
                matches!(err, SdkError::Config(ConfigError::InvalidBaseUrl { .. })),
                "{bad:?}: {err}"
            );
        }
    }

    #[test]
    fn test_new_rejects_other_schemes() {
        let err = CrmClient::new("ftp://example.amocrm.ru").err().unwrap();
        assert!(matches!(
            err,
            SdkError::Config(ConfigError::UnsupportedScheme(ref s)) if s == "ftp"
        ));
    }

    #[test]
    fn test_builder_requires_base_url() {
        let err = CrmClient::builder().build().err().unwrap();
        assert!(matches!(err, SdkError::Config(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_builder_rejects_invalid_header() {
        let err = CrmClient::builder()
            .base_url("https://example.amocrm.ru")
            .header("bad header", "x")
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SdkError::Config(ConfigError::InvalidHeader { ref name, .. }) if name == "bad header"
        ));
    }

    #[test]
    fn test_builder_with_options() {
        let client = CrmClient::builder()
            .base_url("https://example.amocrm.ru")
            .timeout(Duration::from_secs(5))
            .header("X-Client", "amocrm-sdk")
            .user_agent("amocrm-sdk-tests")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://example.amocrm.ru");
    }
}
