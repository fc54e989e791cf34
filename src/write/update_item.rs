use crate::{RecordClient, Transport, common, error};

use aws_sdk_dynamodb::{operation, types};
use serde::Serialize;
use std::collections;

/// Request sent to [`Transport::update`].
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItemRequest {
    /// `#<i>` → attribute name.
    pub expression_attribute_names: collections::HashMap<String, String>,
    /// `:val<i>` → attribute value.
    pub expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
    /// The key of the item to update.
    pub key: collections::HashMap<String, types::AttributeValue>,
    /// Which attributes the store sends back.
    pub return_values: types::ReturnValue,
    /// The table to write to.
    pub table_name: String,
    /// `SET #0 = :val0, ...`.
    pub update_expression: String,
}

impl UpdateItemRequest {
    pub(crate) fn new(
        table: &str,
        key: collections::HashMap<String, types::AttributeValue>,
        expression: common::expression::Expression,
    ) -> Self {
        let (clause, expression_attribute_names, expression_attribute_values) =
            expression.into_parts();
        Self {
            expression_attribute_names,
            expression_attribute_values,
            key,
            return_values: types::ReturnValue::UpdatedNew,
            table_name: table.to_string(),
            update_expression: format!("{}{clause}", common::expression::SET_KEYWORD),
        }
    }
}

impl<T: Transport> RecordClient<T> {
    /// Set the attributes of `patch` on the item stored under `key`.
    ///
    /// With timestamps enabled the updated field is appended to a copy of the patch, so it
    /// takes the last placeholder, unless a patch field sanitizes to the same name: that field
    /// then carries the timestamp. The store answers with the updated attributes.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_records.update_by_key", skip(self, key, patch), err)
    )]
    pub async fn update_by_key<K: Serialize, V: Serialize>(
        &self,
        table: &str,
        key: common::key::RecordKey<K>,
        patch: common::item::FieldMap<V>,
    ) -> error::Result<operation::update_item::UpdateItemOutput, T::Error> {
        if patch.is_empty() {
            return Err(error::Error::empty_expression("update_by_key"));
        }
        let key: collections::HashMap<String, types::AttributeValue> = key.try_into()?;
        let mut patch = common::item::to_attribute_map(patch)?;
        if self.config().timestamps {
            let updated_field = common::expression::sanitize_name(&self.config().updated_field);
            let value = common::timestamp::current_unix_seconds_value();
            // a caller field naming the same attribute takes the timestamp instead
            match patch
                .keys()
                .position(|name| common::expression::sanitize_name(name) == updated_field)
            {
                Some(index) => patch[index] = value,
                None => {
                    patch.insert(self.config().updated_field.clone(), value);
                }
            }
        }
        common::expression::check_names::<_, T::Error>(&patch, "update_by_key")?;
        let expression =
            common::expression::Expression::build(patch, common::expression::UPDATE_SEPARATOR);
        let request = UpdateItemRequest::new(table, key, expression);
        self.log_request("update_by_key", &request);
        self.transport()
            .update(request)
            .await
            .map_err(error::Error::Transport)
    }
}
