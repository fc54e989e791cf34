//! Read operations for retrieving records from DynamoDB tables.
//!
//! - Getting individual items by key
//! - Scanning a table with an equality filter

/// Lookup of a single item by key.
pub mod get_item;

/// Filtered scan over a whole table.
pub mod scan;
