//! Write operations for modifying records in DynamoDB tables.
//!
//! - Inserting new items or replacing existing ones
//! - Updating attributes of an item
//! - Deleting items by key

/// Delete of a single item by key.
pub mod delete_item;

/// Insert of a single item.
pub mod put_item;

/// Partial update of a single item.
pub mod update_item;
