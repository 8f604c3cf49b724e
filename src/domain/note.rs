//! Notes sub-client.

use serde::Serialize;
use serde_json::Value;

use crate::client::CrmClient;
use crate::error::SdkError;
use crate::operation::Operation;

pub struct Notes<'a> {
    pub(crate) client: &'a CrmClient,
}

impl<'a> Notes<'a> {
    /// Create one note and return the created entry.
    pub async fn create<P: Serialize + ?Sized>(&self, note: &P) -> Result<Value, SdkError> {
        self.client.call_value(Operation::CreateNote, note).await
    }
}
