use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use serde::Serialize;
use serde_dynamo::{Result, to_attribute_value};

/// Ordered attribute name → value mapping.
///
/// Iteration order decides placeholder indices, so the same map always builds the same
/// expression.
pub type FieldMap<T> = IndexMap<String, T>;

/// Serialize every value of a [`FieldMap`], keeping the field order.
pub(crate) fn to_attribute_map<T: Serialize>(
    fields: FieldMap<T>,
) -> Result<FieldMap<types::AttributeValue>> {
    let mut attributes = IndexMap::with_capacity(fields.len());
    for (name, value) in fields {
        let value: types::AttributeValue = to_attribute_value(value)?;
        attributes.insert(name, value);
    }
    Ok(attributes)
}
