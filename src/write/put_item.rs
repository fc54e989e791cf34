use crate::{RecordClient, Transport, common, error};

use aws_sdk_dynamodb::{operation, types};
use serde::Serialize;
use serde_dynamo::to_item;
use std::collections;

/// Request sent to [`Transport::put`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PutItemRequest {
    /// The item to store.
    pub item: collections::HashMap<String, types::AttributeValue>,
    /// The table to write to.
    pub table_name: String,
}

impl<T: Transport> RecordClient<T> {
    /// Store `item`, replacing any item with the same key.
    ///
    /// `item` is serialized into a new attribute map: with timestamps enabled the created
    /// field is set on that map, never on the caller's value.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_records.insert", skip(self, item), err)
    )]
    pub async fn insert<I: Serialize>(
        &self,
        table: &str,
        item: I,
    ) -> error::Result<operation::put_item::PutItemOutput, T::Error> {
        let mut item: collections::HashMap<String, types::AttributeValue> = to_item(item)?;
        if self.config().timestamps {
            item.insert(
                self.config().created_field.clone(),
                common::timestamp::current_unix_seconds_value(),
            );
        }
        let request = PutItemRequest {
            item,
            table_name: table.to_string(),
        };
        self.log_request("insert", &request);
        self.transport()
            .put(request)
            .await
            .map_err(error::Error::Transport)
    }
}
