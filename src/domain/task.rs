//! Tasks sub-client.

use serde::Serialize;
use serde_json::Value;

use crate::client::CrmClient;
use crate::error::SdkError;
use crate::operation::Operation;

pub struct Tasks<'a> {
    pub(crate) client: &'a CrmClient,
}

impl<'a> Tasks<'a> {
    /// List tasks. The raw response payload is returned unparsed.
    pub async fn list<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, SdkError> {
        self.client.call_value(Operation::GetTasksList, params).await
    }

    /// Create one task and return the created entry.
    pub async fn create<P: Serialize + ?Sized>(&self, task: &P) -> Result<Value, SdkError> {
        self.client.call_value(Operation::CreateTask, task).await
    }
}
