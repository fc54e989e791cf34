//! [`RecordClient`] construction and the plumbing shared by its operations.
//!
//! The operations themselves live next to their request types in [`crate::read`] and
//! [`crate::write`].

use crate::{ClientConfig, ScopedRecordClient, common};

use aws_sdk_dynamodb::Client;

/// Record client over a [`crate::Transport`].
///
/// Holds only an immutable [`ClientConfig`] beside the transport, so operations can be issued
/// concurrently without synchronization. Concurrent updates of the same item race at the store:
/// there is no client-side locking.
///
/// ```rust,no_run
/// use dynamodb_records::{ClientConfig, RecordClient, common};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RecordClient::connect(ClientConfig::default()).await;
/// let lookup = client
///     .get_by_key("users", common::key::RecordKey::partition("id", json!(1)))
///     .await?;
/// if let Some(item) = lookup.into_item() {
///     println!("{item:?}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct RecordClient<T> {
    config: ClientConfig,
    transport: T,
}

impl RecordClient<Client> {
    /// Connect to DynamoDB with the region, endpoint and credentials of `config`.
    pub async fn connect(config: ClientConfig) -> Self {
        let client = config.load_client().await;
        Self::new(client, config)
    }
}

impl<T> RecordClient<T> {
    /// Wrap an existing transport.
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { config, transport }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying connection.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Bind this client to `table`.
    pub fn scope(&self, table: impl Into<String>) -> ScopedRecordClient<'_, T> {
        ScopedRecordClient::new(self, table)
    }

    /// Seconds since the unix epoch, as injected in timestamp fields.
    pub fn current_unix_seconds(&self) -> i64 {
        common::timestamp::current_unix_seconds()
    }

    /// Log a request about to be dispatched, when verbose.
    pub(crate) fn log_request(&self, operation: &str, request: &impl std::fmt::Debug) {
        #[cfg(feature = "tracing")]
        if self.config.verbose {
            tracing::info!(operation, ?request, "dispatching request");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = (operation, request);
    }
}
