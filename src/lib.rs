//! # amoCRM SDK
//!
//! A Rust client for the amoCRM v2 REST API supporting both native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Operation registry, envelopes, request/response transforms (always available, WASM-safe)
//! 2. **Auth** — Credentials + the session cookie carried by every request
//! 3. **HTTP** — `CrmHttp`: the generic dispatcher and its `reqwest` transport
//! 4. **High-Level Client** — `CrmClient` with nested sub-clients per resource
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use amocrm_sdk::prelude::*;
//! use serde_json::json;
//!
//! let client = CrmClient::new("https://example.amocrm.ru")?;
//!
//! client.auth().login(&Credentials::new("user@example.com", "api-hash")).await?;
//!
//! let task = client
//!     .tasks()
//!     .create(&json!({ "element_id": 42, "element_type": 2, "text": "Call back" }))
//!     .await?;
//! let leads = client.leads().list(&json!({ "limit_rows": 50 })).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Operation registry: operation → (verb, path).
pub mod operation;

/// Request/response envelope shapes of the remote API.
pub mod envelope;

/// Per-operation request and response transforms.
pub mod transform;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: credentials, session headers, cookie handling.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Dispatcher + transport.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// Resource sub-clients and their typed parameters.
pub mod domain;

/// `CrmClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Registry
    pub use crate::operation::{registry, Operation, OperationDescriptor, Verb};

    // Envelopes + transforms
    pub use crate::envelope::{Action, RawResponse, Resource};
    pub use crate::transform::{PreparedRequest, RequestOptions};

    // Errors
    pub use crate::error::{AuthError, ConfigError, HttpError, OperationError, SdkError};

    // Auth
    pub use crate::auth::{Credentials, SessionHeaders};

    // Domain params
    pub use crate::domain::webhook::{WebhookEvent, WebhookSubscription};

    // Client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AccountClient, AuthClient, ContactsClient, CrmClient, CrmClientBuilder, LeadsClient,
        NotesClient, PipelinesClient, TasksClient, WebhooksClient,
    };
}
