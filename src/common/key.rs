use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

/// Attributes identifying a single item.
///
/// The key is passed to the store as-is: no check is made that it matches the table's
/// partition/sort key schema.
///
/// ```rust
/// use dynamodb_records::common::key::RecordKey;
///
/// let key = RecordKey::partition("pk", "USER#1").with_sort("sk", "PROFILE");
/// assert_eq!(key.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordKey<T>(IndexMap<String, T>);

impl<T> RecordKey<T> {
    /// Key made of a single partition attribute.
    pub fn partition(name: impl Into<String>, value: T) -> Self {
        Self(IndexMap::from([(name.into(), value)]))
    }

    /// Add a sort key attribute.
    pub fn with_sort(mut self, name: impl Into<String>, value: T) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Number of key attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key has no attribute.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> From<IndexMap<String, T>> for RecordKey<T> {
    fn from(attributes: IndexMap<String, T>) -> Self {
        Self(attributes)
    }
}

impl<T> FromIterator<(String, T)> for RecordKey<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Serialize> TryFrom<RecordKey<T>> for collections::HashMap<String, types::AttributeValue> {
    type Error = Error;

    fn try_from(key: RecordKey<T>) -> Result<Self> {
        let mut keys = Self::with_capacity(key.0.len());
        for (name, value) in key.0 {
            let value = to_attribute_value(value)?;
            keys.insert(name, value);
        }
        Ok(keys)
    }
}
