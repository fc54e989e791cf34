//! The seam between [`crate::RecordClient`] and the store.
//!
//! [`Transport`] uses `#[async_trait]` so it stays object-safe and its futures are `Send`.
//! Each primitive takes a fully-built request and returns the SDK output type unchanged.

use crate::{read, write};

use aws_sdk_dynamodb::{Client, operation};

/// The five store primitives used by record operations.
///
/// Implemented for [`aws_sdk_dynamodb::Client`]. Timeouts, retries and cancellation belong to
/// the implementation; record operations surface its errors immediately.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Error returned by every primitive.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read one item by key. `item` is `None` on a miss.
    async fn get(
        &self,
        request: read::get_item::GetItemRequest,
    ) -> Result<operation::get_item::GetItemOutput, Self::Error>;

    /// Create or replace one item.
    async fn put(
        &self,
        request: write::put_item::PutItemRequest,
    ) -> Result<operation::put_item::PutItemOutput, Self::Error>;

    /// Apply an update expression to one item.
    async fn update(
        &self,
        request: write::update_item::UpdateItemRequest,
    ) -> Result<operation::update_item::UpdateItemOutput, Self::Error>;

    /// Delete one item by key.
    async fn delete(
        &self,
        request: write::delete_item::DeleteItemRequest,
    ) -> Result<operation::delete_item::DeleteItemOutput, Self::Error>;

    /// Read one page of a table, filtered by the store.
    async fn scan(
        &self,
        request: read::scan::ScanRequest,
    ) -> Result<operation::scan::ScanOutput, Self::Error>;
}

#[async_trait::async_trait]
impl Transport for Client {
    type Error = aws_sdk_dynamodb::Error;

    async fn get(
        &self,
        request: read::get_item::GetItemRequest,
    ) -> Result<operation::get_item::GetItemOutput, Self::Error> {
        let output = self
            .get_item()
            .set_key(Some(request.key))
            .table_name(request.table_name)
            .send()
            .await?;
        Ok(output)
    }

    async fn put(
        &self,
        request: write::put_item::PutItemRequest,
    ) -> Result<operation::put_item::PutItemOutput, Self::Error> {
        let output = self
            .put_item()
            .set_item(Some(request.item))
            .table_name(request.table_name)
            .send()
            .await?;
        Ok(output)
    }

    async fn update(
        &self,
        request: write::update_item::UpdateItemRequest,
    ) -> Result<operation::update_item::UpdateItemOutput, Self::Error> {
        let output = self
            .update_item()
            .set_key(Some(request.key))
            .update_expression(request.update_expression)
            .set_expression_attribute_names(Some(request.expression_attribute_names))
            .set_expression_attribute_values(Some(request.expression_attribute_values))
            .return_values(request.return_values)
            .table_name(request.table_name)
            .send()
            .await?;
        Ok(output)
    }

    async fn delete(
        &self,
        request: write::delete_item::DeleteItemRequest,
    ) -> Result<operation::delete_item::DeleteItemOutput, Self::Error> {
        let output = self
            .delete_item()
            .set_key(Some(request.key))
            .table_name(request.table_name)
            .send()
            .await?;
        Ok(output)
    }

    async fn scan(
        &self,
        request: read::scan::ScanRequest,
    ) -> Result<operation::scan::ScanOutput, Self::Error> {
        let output = self
            .scan()
            .filter_expression(request.filter_expression)
            .set_expression_attribute_names(Some(request.expression_attribute_names))
            .set_expression_attribute_values(Some(request.expression_attribute_values))
            .table_name(request.table_name)
            .send()
            .await?;
        Ok(output)
    }
}
