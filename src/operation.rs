//! Operation registry — every remote operation and the verb + path it is bound to.
//!
//! Paths are fixed: all per-call variability travels in the query string or the
//! request body, never in the URL path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// HTTP verb used by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A remote operation exposed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Auth,
    GetCurrentAccount,
    GetTasksList,
    CreateTask,
    GetContactsList,
    CreateContact,
    CreateLead,
    GetLeads,
    CreateNote,
    GetPipelines,
    RegisterWebhook,
}

/// Immutable verb + path binding of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub operation: Operation,
    pub verb: Verb,
    pub path: &'static str,
}

impl Operation {
    pub const ALL: [Operation; 11] = [
        Operation::Auth,
        Operation::GetCurrentAccount,
        Operation::GetTasksList,
        Operation::CreateTask,
        Operation::GetContactsList,
        Operation::CreateContact,
        Operation::CreateLead,
        Operation::GetLeads,
        Operation::CreateNote,
        Operation::GetPipelines,
        Operation::RegisterWebhook,
    ];

    pub const fn descriptor(self) -> OperationDescriptor {
        let (verb, path) = match self {
            Self::Auth => (Verb::Post, "/private/api/auth.php?type=json"),
            Self::GetCurrentAccount => (Verb::Get, "/private/api/v2/json/accounts/current"),
            Self::GetTasksList => (Verb::Get, "/private/api/v2/json/tasks/list"),
            Self::CreateTask => (Verb::Post, "/private/api/v2/json/tasks/set"),
            Self::GetContactsList => (Verb::Get, "/private/api/v2/json/contacts/list"),
            Self::CreateContact => (Verb::Post, "/private/api/v2/json/contacts/set"),
            Self::CreateLead => (Verb::Post, "/private/api/v2/json/leads/set"),
            Self::GetLeads => (Verb::Get, "/private/api/v2/json/leads/list"),
            Self::CreateNote => (Verb::Post, "/private/api/v2/json/notes/set"),
            Self::GetPipelines => (Verb::Get, "/private/api/v2/json/pipelines/list"),
            Self::RegisterWebhook => (Verb::Post, "/private/api/v2/webhooks/subscribe"),
        };
        OperationDescriptor {
            operation: self,
            verb,
            path,
        }
    }

    pub const fn verb(self) -> Verb {
        self.descriptor().verb
    }

    pub const fn path(self) -> &'static str {
        self.descriptor().path
    }

    /// Wire-style operation name, e.g. `createTask`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::GetCurrentAccount => "getCurrentAccount",
            Self::GetTasksList => "getTasksList",
            Self::CreateTask => "createTask",
            Self::GetContactsList => "getContactsList",
            Self::CreateContact => "createContact",
            Self::CreateLead => "createLead",
            Self::GetLeads => "getLeads",
            Self::CreateNote => "createNote",
            Self::GetPipelines => "getPipelines",
            Self::RegisterWebhook => "registerWebhook",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}

static REGISTRY: [OperationDescriptor; 11] = [
    Operation::Auth.descriptor(),
    Operation::GetCurrentAccount.descriptor(),
    Operation::GetTasksList.descriptor(),
    Operation::CreateTask.descriptor(),
    Operation::GetContactsList.descriptor(),
    Operation::CreateContact.descriptor(),
    Operation::CreateLead.descriptor(),
    Operation::GetLeads.descriptor(),
    Operation::CreateNote.descriptor(),
    Operation::GetPipelines.descriptor(),
    Operation::RegisterWebhook.descriptor(),
];

/// The full registry, in declaration order.
pub fn registry() -> &'static [OperationDescriptor] {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_wire_contract() {
        let expected = [
            ("auth", "POST", "/private/api/auth.php?type=json"),
            ("getCurrentAccount", "GET", "/private/api/v2/json/accounts/current"),
            ("getTasksList", "GET", "/private/api/v2/json/tasks/list"),
            ("createTask", "POST", "/private/api/v2/json/tasks/set"),
            ("getContactsList", "GET", "/private/api/v2/json/contacts/list"),
            ("createContact", "POST", "/private/api/v2/json/contacts/set"),
            ("createLead", "POST", "/private/api/v2/json/leads/set"),
            ("getLeads", "GET", "/private/api/v2/json/leads/list"),
            ("createNote", "POST", "/private/api/v2/json/notes/set"),
            ("getPipelines", "GET", "/private/api/v2/json/pipelines/list"),
            ("registerWebhook", "POST", "/private/api/v2/webhooks/subscribe"),
        ];

        assert_eq!(registry().len(), expected.len());
        for (descriptor, (name, verb, path)) in registry().iter().zip(expected) {
            assert_eq!(descriptor.operation.name(), name);
            assert_eq!(descriptor.verb.as_str(), verb);
            assert_eq!(descriptor.path, path);
        }
    }

    #[test]
    fn test_registry_order_matches_all() {
        let ops: Vec<Operation> = registry().iter().map(|d| d.operation).collect();
        assert_eq!(ops, Operation::ALL.to_vec());
    }

    #[test]
    fn test_names_unique_and_parse_back() {
        let names: HashSet<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
        assert_eq!(names.len(), Operation::ALL.len());

        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("deleteTask".parse::<Operation>().is_err());
        assert!("CreateTask".parse::<Operation>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Operation::GetCurrentAccount).unwrap();
        assert_eq!(json, r#""getCurrentAccount""#);
        let op: Operation = serde_json::from_str(r#""registerWebhook""#).unwrap();
        assert_eq!(op, Operation::RegisterWebhook);
    }
}
