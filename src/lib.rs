#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Records
//!
//! A small record client for Amazon DynamoDB that turns plain attribute maps into
//! placeholder-based expressions, so callers never hand-write expression syntax.
//!
//! ## Overview
//!
//! - [`RecordClient`] exposes point get, filtered scan, insert, partial update and delete
//!   against any table.
//! - [`ScopedRecordClient`] binds a [`RecordClient`] to one table.
//! - [`common::expression::Expression`] builds the `#<i> = :val<i>` clauses: attribute names
//!   and values travel out-of-band, which keeps reserved words and user input out of the
//!   expression text.
//! - [`transport::Transport`] is the seam to the store; it is implemented for
//!   [`aws_sdk_dynamodb::Client`].
//!
//! ## Quick Example
//!
//! ```no_run
//! use dynamodb_records::{ClientConfig, RecordClient, common};
//! use indexmap::IndexMap;
//! use serde_json::{Value, json};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RecordClient::connect(ClientConfig {
//!     region: Some("eu-west-1".to_string()),
//!     timestamps: true,
//!     ..Default::default()
//! })
//! .await;
//! let users = client.scope("users");
//! users.insert(json!({"id": "1", "name": "Ann"})).await?;
//! let mut patch: common::item::FieldMap<Value> = IndexMap::new();
//! patch.insert("status".to_string(), json!("active"));
//! // Sends "SET #0 = :val0, #1 = :val1" with status and updatedAt out-of-band.
//! users
//!     .update_by_key(common::key::RecordKey::partition("id", json!("1")), patch)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Expressions, field maps, keys and timestamps
//! - [`mod@read`] - Point lookups and filtered scans
//! - [`mod@write`] - Inserts, partial updates and deletes
//! - [`mod@transport`] - The store seam

/// Client construction and shared operation plumbing.
pub mod client;

/// Expressions, field maps, keys and timestamps shared by all operations.
pub mod common;

/// Connection and behaviour options.
pub mod config;

/// Error types.
pub mod error;

/// Read operations: lookup by key and filtered scan.
pub mod read;

/// Table-scoped client.
pub mod scoped;

/// The store seam used by [`RecordClient`].
pub mod transport;

/// Write operations: insert, partial update and delete.
pub mod write;

#[cfg(test)]
pub(crate) mod testing;

pub use client::RecordClient;
pub use config::{ClientConfig, Credentials};
pub use error::{Error, Result};
pub use read::get_item::Lookup;
pub use scoped::ScopedRecordClient;
pub use transport::Transport;
