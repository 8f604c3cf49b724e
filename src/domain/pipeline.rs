//! Pipelines sub-client.

use serde::Serialize;
use serde_json::Value;

use crate::client::CrmClient;
use crate::error::SdkError;
use crate::operation::Operation;

pub struct Pipelines<'a> {
    pub(crate) client: &'a CrmClient,
}

impl<'a> Pipelines<'a> {
    /// List pipelines (`response.pipelines`), `None` when absent.
    pub async fn list<P: Serialize + ?Sized>(&self, params: &P) -> Result<Option<Value>, SdkError> {
        self.client.call(Operation::GetPipelines, params).await
    }
}
