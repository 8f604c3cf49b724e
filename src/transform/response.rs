//! Response transforms — validate the raw envelope and unwrap the payload.
//!
//! Creation and lookup transforms are strict: a missing result is an
//! [`OperationError`]. List reads (`getPipelines`, `getLeads`) are lenient and
//! degrade to an absent or empty result instead of failing.

use serde_json::Value;

use crate::auth::{cookie_header, SessionHeaders};
use crate::envelope::{action_pointer, response_pointer, Action, RawResponse, Resource};
use crate::error::{AuthError, OperationError, SdkError};
use crate::operation::Operation;

const STATUS_OK: u16 = 200;

/// Store the session cookie from an `auth` response and return its payload.
///
/// On failure the session is left as it was.
pub fn store_auth(
    response: RawResponse,
    session: &mut SessionHeaders,
) -> Result<Option<Value>, SdkError> {
    let Some(cookie) = cookie_header(response.header_values("set-cookie")) else {
        tracing::warn!(status = response.status, "auth response carried no set-cookie header");
        return Err(AuthError::MissingSessionCookie.into());
    };

    tracing::debug!(
        cookies = response.header_values("set-cookie").count(),
        "session cookie replaced"
    );
    *session = SessionHeaders::with_cookie(cookie);
    Ok(Some(response.data))
}

/// First element of `response.<resource>.add`, on status 200.
fn first_added(
    response: RawResponse,
    operation: Operation,
    resource: Resource,
    message: &'static str,
) -> Result<Option<Value>, SdkError> {
    let added = response
        .data
        .pointer(&action_pointer(resource, Action::Add))
        .and_then(Value::as_array)
        .and_then(|items| items.first());

    match added {
        Some(item) if response.status == STATUS_OK => Ok(Some(item.clone())),
        _ => Err(rejected(operation, response.status, message)),
    }
}

/// `response.<key>`, on status 200.
fn required_field(
    response: RawResponse,
    operation: Operation,
    key: &str,
    message: &'static str,
) -> Result<Option<Value>, SdkError> {
    let status = response.status;
    let mut data = response.data;
    let field = data
        .pointer_mut(&response_pointer(key))
        .map(Value::take)
        .filter(is_present);

    match field {
        Some(value) if status == STATUS_OK => Ok(Some(value)),
        _ => Err(rejected(operation, status, message)),
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        _ => true,
    }
}

fn rejected(operation: Operation, status: u16, message: &'static str) -> SdkError {
    tracing::warn!(operation = %operation, status, "{}", message);
    OperationError::new(operation, status, message).into()
}

pub fn parse_create_task(response: RawResponse) -> Result<Option<Value>, SdkError> {
    first_added(
        response,
        Operation::CreateTask,
        Resource::Tasks,
        "Task is not added due to some error",
    )
}

pub fn parse_create_contact(response: RawResponse) -> Result<Option<Value>, SdkError> {
    first_added(
        response,
        Operation::CreateContact,
        Resource::Contacts,
        "Contact is not created due to some error",
    )
}

pub fn parse_create_lead(response: RawResponse) -> Result<Option<Value>, SdkError> {
    first_added(
        response,
        Operation::CreateLead,
        Resource::Leads,
        "Lead is not added due to some error",
    )
}

pub fn parse_create_note(response: RawResponse) -> Result<Option<Value>, SdkError> {
    first_added(
        response,
        Operation::CreateNote,
        Resource::Notes,
        "Note is not added due to some error",
    )
}

pub fn parse_current_account(response: RawResponse) -> Result<Option<Value>, SdkError> {
    required_field(
        response,
        Operation::GetCurrentAccount,
        "account",
        "Can't get current account info for some reason",
    )
}

pub fn parse_contacts_list(response: RawResponse) -> Result<Option<Value>, SdkError> {
    required_field(
        response,
        Operation::GetContactsList,
        Resource::Contacts.as_str(),
        "Contacts list query error",
    )
}

/// `response.pipelines`, or `None` when absent. Never fails.
pub fn parse_pipelines(mut response: RawResponse) -> Result<Option<Value>, SdkError> {
    Ok(response
        .data
        .pointer_mut(&response_pointer("pipelines"))
        .map(Value::take))
}

/// `response.leads` when `response` is present, else an empty list. Never fails.
///
/// A falsy `response` (`null`, `false`, `0`, `""`) counts as absent.
pub fn parse_leads(mut response: RawResponse) -> Result<Option<Value>, SdkError> {
    match response.data.get_mut("response") {
        Some(body) if is_present(body) => {
            Ok(body.get_mut(Resource::Leads.as_str()).map(Value::take))
        }
        _ => Ok(Some(Value::Array(Vec::new()))),
    }
}
