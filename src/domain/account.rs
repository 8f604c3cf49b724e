//! Account sub-client.

use serde::Serialize;
use serde_json::Value;

use crate::client::CrmClient;
use crate::error::SdkError;
use crate::operation::Operation;

pub struct Account<'a> {
    pub(crate) client: &'a CrmClient,
}

impl<'a> Account<'a> {
    /// Current account info (`response.account`).
    ///
    /// `params` is sent as the query, e.g. `json!({"with": "users,pipelines"})`.
    pub async fn current<P: Serialize + ?Sized>(&self, params: &P) -> Result<Value, SdkError> {
        self.client
            .call_value(Operation::GetCurrentAccount, params)
            .await
    }
}
