use crate::common::item::FieldMap;
use crate::error;

use aws_sdk_dynamodb::types;
use std::collections;

/// Separator joining the sub-clauses of a filter expression.
pub const FILTER_SEPARATOR: &str = " AND ";

/// Separator joining the sub-clauses of an update expression.
pub const UPDATE_SEPARATOR: &str = ", ";

/// Keyword prefixed to an update clause.
pub const SET_KEYWORD: &str = "SET ";

/// Strip every character that is not an ASCII letter.
///
/// ```rust
/// use dynamodb_records::common::expression::sanitize_name;
///
/// assert_eq!(sanitize_name("first_name2"), "firstname");
/// ```
pub fn sanitize_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Reject fields whose sanitized name is empty: the store refuses empty attribute names.
pub(crate) fn check_names<V, E>(
    fields: &FieldMap<V>,
    operation: &'static str,
) -> error::Result<(), E> {
    match fields
        .keys()
        .find(|name| !name.chars().any(|c| c.is_ascii_alphabetic()))
    {
        Some(name) => Err(error::Error::invalid_field_name(operation, name)),
        None => Ok(()),
    }
}

/// Placeholder-based expression built from a [`FieldMap`].
///
/// The `i`-th field in iteration order becomes the sub-clause `#<i> = :val<i>`. Names and
/// values never appear in the clause itself: they are carried in the two placeholder maps,
/// ready to be sent as `ExpressionAttributeNames` and `ExpressionAttributeValues`.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_records::common::expression::{Expression, FILTER_SEPARATOR};
/// use indexmap::IndexMap;
///
/// let fields = IndexMap::from([
///     ("status".to_string(), AttributeValue::S("active".to_string())),
///     ("role".to_string(), AttributeValue::S("admin".to_string())),
/// ]);
/// let expression = Expression::build(fields, FILTER_SEPARATOR);
/// assert_eq!(expression.clause(), "#0 = :val0 AND #1 = :val1");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expression {
    clause: String,
    names_by_placeholder: collections::HashMap<String, String>,
    values_by_placeholder: collections::HashMap<String, types::AttributeValue>,
}

impl Expression {
    /// Build the expression, joining sub-clauses with `separator`.
    ///
    /// Names are passed through [`sanitize_name`]. Sanitization does not deduplicate: two
    /// fields that sanitize to the same name keep distinct placeholders. An empty map yields an
    /// empty clause, which the store rejects; callers check [`Expression::is_empty`] first.
    pub fn build(fields: FieldMap<types::AttributeValue>, separator: &str) -> Self {
        let mut clauses = Vec::with_capacity(fields.len());
        let mut names_by_placeholder = collections::HashMap::with_capacity(fields.len());
        let mut values_by_placeholder = collections::HashMap::with_capacity(fields.len());
        for (index, (name, value)) in fields.into_iter().enumerate() {
            let name_placeholder = format!("#{index}");
            let value_placeholder = format!(":val{index}");
            clauses.push(format!("{name_placeholder} = {value_placeholder}"));
            names_by_placeholder.insert(name_placeholder, sanitize_name(&name));
            values_by_placeholder.insert(value_placeholder, value);
        }
        Self {
            clause: clauses.join(separator),
            names_by_placeholder,
            values_by_placeholder,
        }
    }

    /// The joined sub-clauses.
    pub fn clause(&self) -> &str {
        &self.clause
    }

    /// `#<i>` → sanitized attribute name.
    pub fn names_by_placeholder(&self) -> &collections::HashMap<String, String> {
        &self.names_by_placeholder
    }

    /// `:val<i>` → attribute value.
    pub fn values_by_placeholder(&self) -> &collections::HashMap<String, types::AttributeValue> {
        &self.values_by_placeholder
    }

    /// Number of sub-clauses.
    pub fn len(&self) -> usize {
        self.names_by_placeholder.len()
    }

    /// Whether the expression has no sub-clause.
    pub fn is_empty(&self) -> bool {
        self.names_by_placeholder.is_empty()
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        String,
        collections::HashMap<String, String>,
        collections::HashMap<String, types::AttributeValue>,
    ) {
        (
            self.clause,
            self.names_by_placeholder,
            self.values_by_placeholder,
        )
    }
}
