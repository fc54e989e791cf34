use crate::{RecordClient, Transport, common, error};

use aws_sdk_dynamodb::{operation, types};
use serde::Serialize;
use std::collections;

/// Request sent to [`Transport::scan`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanRequest {
    /// `#<i>` → attribute name.
    pub expression_attribute_names: collections::HashMap<String, String>,
    /// `:val<i>` → attribute value.
    pub expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
    /// Equality filter applied by the store to every scanned item.
    pub filter_expression: String,
    /// The table to scan.
    pub table_name: String,
}

impl ScanRequest {
    pub(crate) fn new(table: &str, expression: common::expression::Expression) -> Self {
        let (filter_expression, expression_attribute_names, expression_attribute_values) =
            expression.into_parts();
        Self {
            expression_attribute_names,
            expression_attribute_values,
            filter_expression,
            table_name: table.to_string(),
        }
    }
}

impl<T: Transport> RecordClient<T> {
    /// Read the items whose attributes equal every entry of `criteria`.
    ///
    /// This is a scan, not a query: the store reads the whole table and filters afterwards,
    /// so cost grows with the table size. Only the first page is returned; callers can check
    /// `last_evaluated_key` on the output.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_records.get_where", skip(self, criteria), err)
    )]
    pub async fn get_where<V: Serialize>(
        &self,
        table: &str,
        criteria: common::item::FieldMap<V>,
    ) -> error::Result<operation::scan::ScanOutput, T::Error> {
        if criteria.is_empty() {
            return Err(error::Error::empty_expression("get_where"));
        }
        common::expression::check_names::<_, T::Error>(&criteria, "get_where")?;
        let criteria = common::item::to_attribute_map(criteria)?;
        let expression = common::expression::Expression::build(
            criteria,
            common::expression::FILTER_SEPARATOR,
        );
        let request = ScanRequest::new(table, expression);
        self.log_request("get_where", &request);
        self.transport()
            .scan(request)
            .await
            .map_err(error::Error::Transport)
    }
}
