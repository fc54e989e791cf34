use crate::{RecordClient, Transport, common, error};

use aws_sdk_dynamodb::{operation, types};
use serde::{Serialize, de::DeserializeOwned};
use serde_dynamo::{Result, from_item};
use std::collections;

/// Request sent to [`Transport::get`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetItemRequest {
    /// The key of the item to read.
    pub key: collections::HashMap<String, types::AttributeValue>,
    /// The table to read from.
    pub table_name: String,
}

impl GetItemRequest {
    pub(crate) fn new<V: Serialize>(table: &str, key: common::key::RecordKey<V>) -> Result<Self> {
        let request = Self {
            key: key.try_into()?,
            table_name: table.to_string(),
        };
        Ok(request)
    }
}

/// Outcome of [`RecordClient::get_by_key`].
#[derive(Clone, Debug, PartialEq)]
pub enum Lookup {
    /// The item stored under the key.
    Found(collections::HashMap<String, types::AttributeValue>),
    /// No item under the key: the raw store response, returned unchanged.
    Missing(operation::get_item::GetItemOutput),
}

impl From<operation::get_item::GetItemOutput> for Lookup {
    fn from(mut output: operation::get_item::GetItemOutput) -> Self {
        match output.item.take() {
            Some(item) => Self::Found(item),
            None => Self::Missing(output),
        }
    }
}

impl Lookup {
    /// Whether an item was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The item, if found.
    pub fn into_item(self) -> Option<collections::HashMap<String, types::AttributeValue>> {
        match self {
            Self::Found(item) => Some(item),
            Self::Missing(_) => None,
        }
    }

    /// Deserialize the item, if found.
    ///
    /// ```rust
    /// use aws_sdk_dynamodb::{operation::get_item::GetItemOutput, types::AttributeValue};
    /// use dynamodb_records::Lookup;
    /// use std::collections::HashMap;
    ///
    /// let output = GetItemOutput::builder()
    ///     .set_item(Some(HashMap::from([(
    ///         "name".to_string(),
    ///         AttributeValue::S("Ann".to_string()),
    ///     )])))
    ///     .build();
    /// let item: Option<HashMap<String, String>> = Lookup::from(output).deserialize().unwrap();
    /// assert_eq!(item.unwrap()["name"], "Ann");
    /// ```
    pub fn deserialize<D: DeserializeOwned>(self) -> Result<Option<D>> {
        self.into_item().map(from_item).transpose()
    }
}

impl<T: Transport> RecordClient<T> {
    /// Read the item stored under `key`.
    ///
    /// A miss is reported as [`Lookup::Missing`] holding the raw response, so it cannot be
    /// mistaken for an empty item.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_records.get_by_key", skip(self, key), err)
    )]
    pub async fn get_by_key<V: Serialize>(
        &self,
        table: &str,
        key: common::key::RecordKey<V>,
    ) -> error::Result<Lookup, T::Error> {
        let request = GetItemRequest::new(table, key)?;
        self.log_request("get_by_key", &request);
        let output = self
            .transport()
            .get(request)
            .await
            .map_err(error::Error::Transport)?;
        Ok(output.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientConfig, testing};

    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::partition_key(
        common::key::RecordKey::partition(
            "a",
            Value::String(
                "b".to_string()
            )
        ),
        GetItemRequest {
            key: collections::HashMap::from(
                [
                    (
                        "a".to_string(),
                        types::AttributeValue::S(
                            "b".to_string()
                        )
                    ),
                ]
            ),
            table_name: "c".to_string(),
        }
    )]
    #[case::partition_and_sort_key(
        common::key::RecordKey::partition(
            "a",
            Value::String(
                "b".to_string()
            )
        )
        .with_sort(
            "d",
            Value::Number(
                1.into()
            )
        ),
        GetItemRequest {
            key: collections::HashMap::from(
                [
                    (
                        "a".to_string(),
                        types::AttributeValue::S(
                            "b".to_string()
                        )
                    ),
                    (
                        "d".to_string(),
                        types::AttributeValue::N(
                            "1".to_string()
                        )
                    ),
                ]
            ),
            table_name: "c".to_string(),
        }
    )]
    fn test_get_item_request(
        #[case] key: common::key::RecordKey<Value>,
        #[case] expected: GetItemRequest,
    ) {
        let actual = GetItemRequest::new("c", key).unwrap();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_get_by_key_found_returns_item_only() {
        let item = collections::HashMap::from([
            ("id".to_string(), types::AttributeValue::N("1".to_string())),
            (
                "name".to_string(),
                types::AttributeValue::S("Ann".to_string()),
            ),
        ]);
        let output = operation::get_item::GetItemOutput::builder()
            .set_item(Some(item.clone()))
            .build();
        let client = RecordClient::new(
            testing::RecordingTransport::with_get_output(output),
            ClientConfig::default(),
        );
        let lookup = client
            .get_by_key("Users", common::key::RecordKey::partition("id", json!(1)))
            .await
            .unwrap();
        assert!(lookup.is_found());
        assert_eq!(lookup, Lookup::Found(item));
        assert_eq!(
            client.transport().requests(),
            vec![testing::Request::Get(GetItemRequest {
                key: collections::HashMap::from([(
                    "id".to_string(),
                    types::AttributeValue::N("1".to_string())
                )]),
                table_name: "Users".to_string(),
            })]
        );
    }

    #[tokio::test]
    async fn test_get_by_key_missing_returns_raw_response() {
        let client = RecordClient::new(
            testing::RecordingTransport::default(),
            ClientConfig::default(),
        );
        let lookup = client
            .get_by_key("Users", common::key::RecordKey::partition("id", json!(1)))
            .await
            .unwrap();
        assert!(!lookup.is_found());
        assert_eq!(
            lookup,
            Lookup::Missing(operation::get_item::GetItemOutput::builder().build())
        );
        assert_eq!(lookup.into_item(), None);
    }

    #[tokio::test]
    async fn test_get_by_key_propagates_transport_error() {
        let client = RecordClient::new(
            testing::RecordingTransport::failing("access denied"),
            ClientConfig::default(),
        );
        let error = client
            .get_by_key("Users", common::key::RecordKey::partition("id", json!(1)))
            .await
            .unwrap_err();
        assert_eq!(
            error.into_transport(),
            Some(testing::MockError("access denied".to_string()))
        );
    }

    #[test]
    fn test_lookup_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct User {
            id: u32,
            name: String,
        }

        let found = Lookup::Found(collections::HashMap::from([
            ("id".to_string(), types::AttributeValue::N("7".to_string())),
            (
                "name".to_string(),
                types::AttributeValue::S("Ann".to_string()),
            ),
        ]));
        let user: Option<User> = found.deserialize().unwrap();
        assert_eq!(
            user,
            Some(User {
                id: 7,
                name: "Ann".to_string(),
            })
        );
        let missing = Lookup::Missing(operation::get_item::GetItemOutput::builder().build());
        let user: Option<User> = missing.deserialize().unwrap();
        assert_eq!(user, None);
    }
}
