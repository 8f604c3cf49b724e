//! Contacts sub-client.

use serde::Serialize;
use serde_json::Value;

use crate::client::CrmClient;
use crate::error::SdkError;
use crate::operation::Operation;

pub struct Contacts<'a> {
    pub(crate) client: &'a CrmClient,
}

impl<'a> Contacts<'a> {
    /// List contacts (`response.contacts`). Fails if the list is missing.
    pub async fn list<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, SdkError> {
        self.client
            .call_value(Operation::GetContactsList, params)
            .await
    }

    /// Create one contact and return the created entry.
    pub async fn create<P: Serialize + ?Sized>(&self, contact: &P) -> Result<Value, SdkError> {
        self.client.call_value(Operation::CreateContact, contact).await
    }
}
