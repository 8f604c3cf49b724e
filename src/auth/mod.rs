//! Authentication — credentials and the session headers they produce.
//!
//! ## Session Model
//!
//! A successful `auth` call answers with one or more `set-cookie` headers. The SDK
//! keeps only the `name=value` part of each, joins them with `"; "` and sends the
//! result as the `Cookie` header on every later request from the same client.
//!
//! - The session lives in memory only and is shared by clones of a client.
//! - Each successful `auth` replaces the session wholesale; cookies are never merged.
//! - The cookie value is NEVER exposed via public API — no `.cookie()` accessor
//!   outside the crate.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

/// Login fields expected by `/private/api/auth.php`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "USER_LOGIN")]
    pub login: String,
    /// API key from the user's profile page.
    #[serde(rename = "USER_HASH")]
    pub hash: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            hash: hash.into(),
        }
    }
}

/// Outgoing headers attached to every request of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHeaders {
    cookie: Option<String>,
}

impl SessionHeaders {
    pub fn with_cookie(cookie: impl Into<String>) -> Self {
        Self {
            cookie: Some(cookie.into()),
        }
    }

    pub(crate) fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.cookie.is_some()
    }

    /// Header pairs to inject into a request.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.cookie().map(|c| ("Cookie", c)).into_iter()
    }
}

/// The `name=value` part of a `set-cookie` header value.
pub fn cookie_pair(set_cookie: &str) -> &str {
    set_cookie
        .split_once(';')
        .map_or(set_cookie, |(pair, _)| pair)
        .trim()
}

/// Build a `Cookie` header value from `set-cookie` header values.
///
/// Returns `None` when there are no cookies.
pub fn cookie_header<'a>(set_cookies: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let pairs: Vec<&str> = set_cookies.into_iter().map(cookie_pair).collect();
    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("; "))
    }
}
