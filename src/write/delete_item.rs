use crate::{RecordClient, Transport, common, error};

use aws_sdk_dynamodb::{operation, types};
use serde::Serialize;
use serde_dynamo::Result;
use std::collections;

/// Request sent to [`Transport::delete`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteItemRequest {
    /// The key of the item to delete.
    pub key: collections::HashMap<String, types::AttributeValue>,
    /// The table to delete from.
    pub table_name: String,
}

impl DeleteItemRequest {
    pub(crate) fn new<V: Serialize>(table: &str, key: common::key::RecordKey<V>) -> Result<Self> {
        let request = Self {
            key: key.try_into()?,
            table_name: table.to_string(),
        };
        Ok(request)
    }
}

impl<T: Transport> RecordClient<T> {
    /// Delete the item stored under `key`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_records.delete_by_key", skip(self, key), err)
    )]
    pub async fn delete_by_key<V: Serialize>(
        &self,
        table: &str,
        key: common::key::RecordKey<V>,
    ) -> error::Result<operation::delete_item::DeleteItemOutput, T::Error> {
        let request = DeleteItemRequest::new(table, key)?;
        self.log_request("delete_by_key", &request);
        self.transport()
            .delete(request)
            .await
            .map_err(error::Error::Transport)
    }
}
