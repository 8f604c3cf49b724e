//! Envelope shapes used by the remote API.
//!
//! Mutations are sent as `{request: {<resource>: {<action>: [<item>]}}}` and
//! answered as `{response: {<resource>: {<action>: [<item>, ...]}}}`. List reads
//! answer `{response: {<resource>: ...}}`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Resource key inside an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Tasks,
    Contacts,
    Leads,
    Notes,
    Webhooks,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Contacts => "contacts",
            Self::Leads => "leads",
            Self::Notes => "notes",
            Self::Webhooks => "webhooks",
        }
    }
}

/// Action key inside an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Subscribe,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subscribe => "subscribe",
        }
    }
}

/// Wrap a single item as `{request: {<resource>: {<action>: [item]}}}`.
pub fn request_envelope(resource: Resource, action: Action, item: Value) -> Value {
    let mut actions = Map::new();
    actions.insert(action.as_str().to_string(), Value::Array(vec![item]));
    let mut resources = Map::new();
    resources.insert(resource.as_str().to_string(), Value::Object(actions));
    json!({ "request": resources })
}

/// JSON pointer to `response.<resource>.<action>` inside a response body.
pub fn action_pointer(resource: Resource, action: Action) -> String {
    format!("/response/{}/{}", resource.as_str(), action.as_str())
}

/// JSON pointer to `response.<key>` inside a response body.
pub fn response_pointer(key: &str) -> String {
    format!("/response/{}", key)
}

/// A transport response before any response transform has seen it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// Header pairs in arrival order. Names are lowercase; repeated headers
    /// appear once per value.
    pub headers: Vec<(String, String)>,
    /// Parsed JSON body; `Null` when the body was empty.
    pub data: Value,
}

impl RawResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self {
            status,
            headers: Vec::new(),
            data,
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_ascii_lowercase(), value.to_string()));
        self
    }

    /// All values of a header, case-insensitive on the name.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
