//! Auth sub-client — login and local session control.

use serde::Serialize;
use serde_json::Value;

use crate::auth::Credentials;
use crate::client::CrmClient;
use crate::error::SdkError;
use crate::operation::Operation;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a CrmClient,
}

impl<'a> Auth<'a> {
    /// Log in and store the session cookie for all later calls.
    ///
    /// Returns the full auth payload. Fails with
    /// [`AuthError::MissingSessionCookie`](crate::error::AuthError) when the
    /// response sets no cookie; the previous session is then kept.
    pub async fn login(&self, credentials: &Credentials) -> Result<Value, SdkError> {
        self.login_with(credentials).await
    }

    /// Log in with an arbitrary request body.
    pub async fn login_with<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, SdkError> {
        self.client.call_value(Operation::Auth, params).await
    }

    /// Whether a session cookie is currently held.
    pub async fn has_session(&self) -> bool {
        self.client.http.has_session().await
    }

    /// Drop the session cookie. Later calls go out unauthenticated.
    pub async fn clear_session(&self) {
        self.client.http.clear_session().await;
    }
}
