//! Request transforms — wrap flat caller parameters into the mutation envelope.
//!
//! Parameters and options are returned untouched; only the body is replaced.
//! Parameter contents are not validated here.

use crate::envelope::{request_envelope, Action, Resource};
use crate::transform::PreparedRequest;

fn wrap(prepared: PreparedRequest, resource: Resource, action: Action) -> PreparedRequest {
    let body = request_envelope(resource, action, prepared.params.clone());
    PreparedRequest {
        body: Some(body),
        ..prepared
    }
}

pub fn prepare_create_task(prepared: PreparedRequest) -> PreparedRequest {
    wrap(prepared, Resource::Tasks, Action::Add)
}

pub fn prepare_create_contact(prepared: PreparedRequest) -> PreparedRequest {
    wrap(prepared, Resource::Contacts, Action::Add)
}

pub fn prepare_create_lead(prepared: PreparedRequest) -> PreparedRequest {
    wrap(prepared, Resource::Leads, Action::Add)
}

pub fn prepare_create_note(prepared: PreparedRequest) -> PreparedRequest {
    wrap(prepared, Resource::Notes, Action::Add)
}

pub fn prepare_register_webhook(prepared: PreparedRequest) -> PreparedRequest {
    wrap(prepared, Resource::Webhooks, Action::Subscribe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{RequestOptions, RequestTransform};
    use serde_json::json;
    use std::time::Duration;

    fn options() -> RequestOptions {
        RequestOptions::default()
            .header("x-request-id", "abc")
            .timeout(Duration::from_secs(5))
    }

    #[test]
    fn test_creation_transforms_wrap_params_once() {
        let cases: [(RequestTransform, &str, &str); 5] = [
            (prepare_create_task, "tasks", "add"),
            (prepare_create_contact, "contacts", "add"),
            (prepare_create_lead, "leads", "add"),
            (prepare_create_note, "notes", "add"),
            (prepare_register_webhook, "webhooks", "subscribe"),
        ];

        let params = json!({"name": "Acme", "tags": ["a", "b"], "custom_fields": [{"id": 7}]});

        for (transform, resource, action) in cases {
            let out = transform(PreparedRequest::new(params.clone(), options()));

            assert_eq!(out.params, params, "{resource}: params must be untouched");
            assert_eq!(out.options, options(), "{resource}: options must be untouched");

            let body = out.body.expect("body must be built");
            let pointer = format!("/request/{}/{}", resource, action);
            assert_eq!(body.pointer(&pointer), Some(&json!([params.clone()])));

            // Exactly one nesting path.
            assert_eq!(body.as_object().unwrap().len(), 1);
            assert_eq!(body["request"].as_object().unwrap().len(), 1);
            assert_eq!(body["request"][resource].as_object().unwrap().len(), 1);
        }
    }

    #[test]
    fn test_non_object_params_are_wrapped_as_is() {
        let out = prepare_create_note(PreparedRequest::new(json!(null), RequestOptions::default()));
        assert_eq!(out.body, Some(json!({"request": {"notes": {"add": [null]}}})));
    }
}
