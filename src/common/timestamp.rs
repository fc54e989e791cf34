use aws_sdk_dynamodb::types;
use chrono::Utc;

/// Seconds since the unix epoch.
///
/// DynamoDB TTL works with a resolution of seconds, so sub-second precision is dropped.
pub fn current_unix_seconds() -> i64 {
    Utc::now().timestamp()
}

pub(crate) fn current_unix_seconds_value() -> types::AttributeValue {
    types::AttributeValue::N(current_unix_seconds().to_string())
}
