//! Leads sub-client.

use serde::Serialize;
use serde_json::Value;

use crate::client::CrmClient;
use crate::error::SdkError;
use crate::operation::Operation;

pub struct Leads<'a> {
    pub(crate) client: &'a CrmClient,
}

impl<'a> Leads<'a> {
    /// List leads.
    ///
    /// Lenient: an answer without a `response` body yields `Some([])`, and a
    /// `response` without `leads` yields `None`. Never fails on shape.
    pub async fn list<P: Serialize + ?Sized>(&self, params: &P) -> Result<Option<Value>, SdkError> {
        self.client.call(Operation::GetLeads, params).await
    }

    /// Create one lead and return the created entry.
    pub async fn create<P: Serialize + ?Sized>(&self, lead: &P) -> Result<Value, SdkError> {
        self.client.call_value(Operation::CreateLead, lead).await
    }
}
