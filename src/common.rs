//! Common utilities for record operations.
//!
//! This module provides the types shared across read and write operations,
//! including expression building, field maps, keys and timestamps.

/// Placeholder-based expression building for filters and updates.
pub mod expression;

/// Field maps and their conversion to attribute values.
pub mod item;

/// Key types for identifying items in DynamoDB tables.
pub mod key;

/// Timestamps used for created/updated field injection.
pub mod timestamp;
