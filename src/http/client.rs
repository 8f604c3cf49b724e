//! Low-level HTTP client — `CrmHttp`.
//!
//! One generic entry point, [`CrmHttp::call`], serves every operation: it resolves
//! the verb + path from the registry, applies the request transform, executes the
//! call and applies the response transform. No operation-specific code lives here.
//! There are no retries; transport failures are returned as they occur.

use crate::auth::SessionHeaders;
use crate::envelope::RawResponse;
use crate::error::{HttpError, SdkError};
use crate::http::query::query_pairs;
use crate::operation::{Operation, Verb};
use crate::transform::{self, PreparedRequest, RequestOptions, ResponseTransform};

use async_lock::RwLock;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

/// Dispatcher + transport for the amoCRM REST API.
#[derive(Clone)]
pub struct CrmHttp {
    base_url: String,
    client: Client,
    /// Session headers (the auth cookie). NEVER exposed publicly.
    session: Arc<RwLock<SessionHeaders>>,
}

impl CrmHttp {
    /// `base_url` must already be validated; a trailing `/` is dropped.
    pub(crate) fn new(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            session: Arc::new(RwLock::new(SessionHeaders::default())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn has_session(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    pub(crate) async fn clear_session(&self) {
        *self.session.write().await = SessionHeaders::default();
    }

    /// Dispatch `operation` with `params`.
    ///
    /// Returns the unwrapped payload, or `None` where a lenient transform found
    /// nothing.
    pub async fn call(
        &self,
        operation: Operation,
        params: Value,
        options: RequestOptions,
    ) -> Result<Option<Value>, SdkError> {
        let descriptor = operation.descriptor();
        let prepared = transform::apply_request(operation, PreparedRequest::new(params, options));

        tracing::debug!(
            operation = %operation,
            verb = %descriptor.verb,
            path = descriptor.path,
            "dispatching"
        );
        let raw = self
            .execute(descriptor.verb, descriptor.path, prepared)
            .await?;

        match transform::transforms(operation).response {
            None => Ok(Some(raw.data)),
            Some(ResponseTransform::Pure(parse)) => parse(raw),
            Some(ResponseTransform::Session(parse)) => {
                // Single writer: the guard spans the whole session update.
                let mut session = self.session.write().await;
                parse(raw, &mut *session)
            }
        }
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn execute(
        &self,
        verb: Verb,
        path: &str,
        prepared: PreparedRequest,
    ) -> Result<RawResponse, SdkError> {
        let url = format!("{}{}", self.base_url, path);
        let PreparedRequest {
            params,
            body,
            options,
        } = prepared;

        let mut req = match verb {
            Verb::Get => self.client.get(&url).query(&query_pairs(&params)?),
            Verb::Post => self.client.post(&url).json(&body.unwrap_or(params)),
        };

        for (name, value) in self.session.read().await.iter() {
            req = req.header(name, value);
        }
        for (name, value) in &options.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = options.timeout {
                req = req.timeout(timeout);
            }
        }

        let resp = req.send().await.map_err(HttpError::from)?;
        let status = resp.status();
        let status_code = status.as_u16();
        tracing::debug!(status = status_code, path, "response received");

        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            let err = match status_code {
                401 => HttpError::Unauthorized,
                404 => HttpError::NotFound(body_text),
                429 => HttpError::RateLimited,
                400..=499 => HttpError::BadRequest {
                    status: status_code,
                    body: body_text,
                },
                _ => HttpError::ServerError {
                    status: status_code,
                    body: body_text,
                },
            };
            return Err(err.into());
        }

        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                let text = String::from_utf8_lossy(value.as_bytes()).into_owned();
                if value.to_str().is_err() {
                    tracing::debug!(header = %name, "non-ASCII header value decoded lossily");
                }
                (name.as_str().to_string(), text)
            })
            .collect();

        let bytes = resp.bytes().await.map_err(HttpError::from)?;
        let data = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| HttpError::Decode(e.to_string()))?
        };

        Ok(RawResponse {
            status: status_code,
            headers,
            data,
        })
    }
}
