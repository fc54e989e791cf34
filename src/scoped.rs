//! [`ScopedRecordClient`]: a [`RecordClient`] bound to one table.

use crate::{Lookup, RecordClient, Transport, common, error};

use aws_sdk_dynamodb::operation;
use serde::Serialize;

/// A [`RecordClient`] borrowed together with a fixed table name.
///
/// Every operation forwards to the [`RecordClient`] operation of the same name with the table
/// filled in, so the requests are identical to unscoped calls.
///
/// ```rust,no_run
/// use dynamodb_records::{ClientConfig, RecordClient, common};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RecordClient::connect(ClientConfig::default()).await;
/// let users = client.scope("users");
/// users
///     .delete_by_key(common::key::RecordKey::partition("id", json!(1)))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ScopedRecordClient<'a, T> {
    client: &'a RecordClient<T>,
    table: String,
}

impl<'a, T> ScopedRecordClient<'a, T> {
    /// Bind `client` to `table`.
    pub fn new(client: &'a RecordClient<T>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// The bound table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The unscoped client.
    pub fn client(&self) -> &'a RecordClient<T> {
        self.client
    }
}

impl<T: Transport> ScopedRecordClient<'_, T> {
    /// See [`RecordClient::insert`].
    pub async fn insert<I: Serialize>(
        &self,
        item: I,
    ) -> error::Result<operation::put_item::PutItemOutput, T::Error> {
        self.client.insert(&self.table, item).await
    }

    /// See [`RecordClient::get_by_key`].
    pub async fn get_by_key<V: Serialize>(
        &self,
        key: common::key::RecordKey<V>,
    ) -> error::Result<Lookup, T::Error> {
        self.client.get_by_key(&self.table, key).await
    }

    /// See [`RecordClient::update_by_key`].
    pub async fn update_by_key<K: Serialize, V: Serialize>(
        &self,
        key: common::key::RecordKey<K>,
        patch: common::item::FieldMap<V>,
    ) -> error::Result<operation::update_item::UpdateItemOutput, T::Error> {
        self.client.update_by_key(&self.table, key, patch).await
    }

    /// See [`RecordClient::delete_by_key`].
    pub async fn delete_by_key<V: Serialize>(
        &self,
        key: common::key::RecordKey<V>,
    ) -> error::Result<operation::delete_item::DeleteItemOutput, T::Error> {
        self.client.delete_by_key(&self.table, key).await
    }

    /// See [`RecordClient::get_where`].
    pub async fn get_where<V: Serialize>(
        &self,
        criteria: common::item::FieldMap<V>,
    ) -> error::Result<operation::scan::ScanOutput, T::Error> {
        self.client.get_where(&self.table, criteria).await
    }
}
