//! Per-operation request and response transforms.
//!
//! Each [`Operation`] has at most one request transform and at most one response
//! transform. The table lives in [`transforms`] as an exhaustive `match`, so an
//! operation without a registry entry cannot have a transform and vice versa.

pub mod request;
pub mod response;

use std::time::Duration;

use serde_json::Value;

use crate::auth::SessionHeaders;
use crate::envelope::RawResponse;
use crate::error::SdkError;
use crate::operation::Operation;

/// Transport options for a single call. Transforms pass them through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Extra headers for this call only.
    pub headers: Vec<(String, String)>,
    /// Overrides the client-wide timeout (native only).
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Parameters, body and options of a call on its way to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub params: Value,
    /// `None` until a request transform builds a body.
    pub body: Option<Value>,
    pub options: RequestOptions,
}

impl PreparedRequest {
    pub fn new(params: Value, options: RequestOptions) -> Self {
        Self {
            params,
            body: None,
            options,
        }
    }
}

pub type RequestTransform = fn(PreparedRequest) -> PreparedRequest;

/// A response transform. Only `Session` transforms may touch session state.
#[derive(Clone, Copy)]
pub enum ResponseTransform {
    Pure(fn(RawResponse) -> Result<Option<Value>, SdkError>),
    /// Runs while the dispatcher holds the session write lock.
    Session(fn(RawResponse, &mut SessionHeaders) -> Result<Option<Value>, SdkError>),
}

/// The transform pair registered for one operation.
#[derive(Clone, Copy)]
pub struct Transforms {
    pub request: Option<RequestTransform>,
    pub response: Option<ResponseTransform>,
}

pub fn transforms(operation: Operation) -> Transforms {
    use ResponseTransform::{Pure, Session};

    let (request, response): (Option<RequestTransform>, Option<ResponseTransform>) = match operation {
        Operation::Auth => (None, Some(Session(response::store_auth))),
        Operation::GetCurrentAccount => (None, Some(Pure(response::parse_current_account))),
        Operation::GetTasksList => (None, None),
        Operation::CreateTask => (
            Some(request::prepare_create_task),
            Some(Pure(response::parse_create_task)),
        ),
        Operation::GetContactsList => (None, Some(Pure(response::parse_contacts_list))),
        Operation::CreateContact => (
            Some(request::prepare_create_contact),
            Some(Pure(response::parse_create_contact)),
        ),
        Operation::CreateLead => (
            Some(request::prepare_create_lead),
            Some(Pure(response::parse_create_lead)),
        ),
        Operation::GetLeads => (None, Some(Pure(response::parse_leads))),
        Operation::CreateNote => (
            Some(request::prepare_create_note),
            Some(Pure(response::parse_create_note)),
        ),
        Operation::GetPipelines => (None, Some(Pure(response::parse_pipelines))),
        Operation::RegisterWebhook => (Some(request::prepare_register_webhook), None),
    };
    Transforms { request, response }
}

/// Apply the request transform of `operation`, or pass through.
pub fn apply_request(operation: Operation, prepared: PreparedRequest) -> PreparedRequest {
    match transforms(operation).request {
        Some(transform) => transform(prepared),
        None => prepared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_transforms_only_for_mutations() {
        let with_request: Vec<Operation> = Operation::ALL
            .into_iter()
            .filter(|op| transforms(*op).request.is_some())
            .collect();
        assert_eq!(
            with_request,
            vec![
                Operation::CreateTask,
                Operation::CreateContact,
                Operation::CreateLead,
                Operation::CreateNote,
                Operation::RegisterWebhook,
            ]
        );
    }

    #[test]
    fn test_only_auth_touches_session() {
        for op in Operation::ALL {
            let is_session = matches!(transforms(op).response, Some(ResponseTransform::Session(_)));
            assert_eq!(is_session, op == Operation::Auth, "{op}");
        }
    }

    #[test]
    fn test_unparsed_operations() {
        assert!(transforms(Operation::GetTasksList).response.is_none());
        assert!(transforms(Operation::RegisterWebhook).response.is_none());
    }

    #[test]
    fn test_apply_request_passes_through_without_transform() {
        let prepared = PreparedRequest::new(
            serde_json::json!({"limit_rows": 10}),
            RequestOptions::default().header("x-trace", "1"),
        );
        let out = apply_request(Operation::GetLeads, prepared.clone());
        assert_eq!(out, prepared);
        assert!(out.body.is_none());
    }
}
