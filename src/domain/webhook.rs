//! Webhooks — subscription parameters and sub-client.

use serde::{Deserialize, Serialize};

/// Event names a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEvent {
    AddLead,
    AddContact,
    AddCompany,
    AddCustomer,
    AddTask,
    UpdateLead,
    UpdateContact,
    UpdateCompany,
    UpdateCustomer,
    UpdateTask,
    DeleteLead,
    DeleteContact,
    DeleteCompany,
    DeleteCustomer,
    DeleteTask,
    RestoreLead,
    RestoreContact,
    RestoreCompany,
    StatusLead,
    ResponsibleLead,
    NoteLead,
    NoteContact,
    NoteCompany,
    NoteCustomer,
}

/// One webhook subscription: the callback URL and the events it receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSubscription {
    pub url: String,
    pub events: Vec<WebhookEvent>,
}

impl WebhookSubscription {
    pub fn new(url: impl Into<String>, events: impl IntoIterator<Item = WebhookEvent>) -> Self {
        Self {
            url: url.into(),
            events: events.into_iter().collect(),
        }
    }
}

#[cfg(feature = "http")]
pub use client::Webhooks;

#[cfg(feature = "http")]
mod client {
    use serde::Serialize;
    use serde_json::Value;

    use crate::client::CrmClient;
    use crate::error::SdkError;
    use crate::operation::Operation;

    pub struct Webhooks<'a> {
        pub(crate) client: &'a CrmClient,
    }

    impl<'a> Webhooks<'a> {
        /// Register a webhook. The raw response payload is returned unparsed.
        ///
        /// Usually called with a [`WebhookSubscription`](super::WebhookSubscription).
        pub async fn subscribe<P: Serialize + ?Sized>(
            &self,
            subscription: &P,
        ) -> Result<Value, SdkError> {
            self.client
                .call_value(Operation::RegisterWebhook, subscription)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscription_wire_shape() {
        let sub = WebhookSubscription::new(
            "https://hooks.example.com/amo",
            [WebhookEvent::AddLead, WebhookEvent::StatusLead, WebhookEvent::NoteContact],
        );
        assert_eq!(
            serde_json::to_value(&sub).unwrap(),
            json!({
                "url": "https://hooks.example.com/amo",
                "events": ["add_lead", "status_lead", "note_contact"]
            })
        );
    }

    #[test]
    fn test_event_deserialize() {
        let event: WebhookEvent = serde_json::from_str(r#""responsible_lead""#).unwrap();
        assert_eq!(event, WebhookEvent::ResponsibleLead);
    }
}
