//! Connection and behaviour options for [`crate::RecordClient`].
//!
//! The configuration is owned by each client and never mutated after construction;
//! nothing in this crate touches process-wide SDK settings.

use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_dynamodb::{Client, config};

/// Default name of the attribute holding the creation time.
pub const DEFAULT_CREATED_FIELD: &str = "createdAt";

/// Default name of the attribute holding the last update time.
pub const DEFAULT_UPDATED_FIELD: &str = "updatedAt";

const CREDENTIALS_PROVIDER_NAME: &str = "dynamodb-records";

/// Explicit AWS credentials, overriding the default provider chain.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Credentials {
    /// The access key id.
    pub access_key_id: String,
    /// The secret access key.
    pub secret_access_key: String,
    /// The session token, for temporary credentials.
    pub session_token: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .finish()
    }
}

/// Client configuration.
///
/// ```rust
/// use dynamodb_records::ClientConfig;
///
/// let config = ClientConfig {
///     region: Some("eu-west-1".to_string()),
///     timestamps: true,
///     ..Default::default()
/// };
/// assert_eq!(config.created_field, "createdAt");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ClientConfig {
    /// The AWS region. Falls back to the default region provider chain when `None`.
    pub region: Option<String>,
    /// Endpoint override, e.g. `http://localhost:8000` for DynamoDB Local.
    pub endpoint_url: Option<String>,
    /// Explicit credentials. Falls back to the default credentials chain when `None`.
    pub credentials: Option<Credentials>,
    /// Log every request before it is dispatched.
    pub verbose: bool,
    /// Inject creation and update timestamps on insert and update.
    pub timestamps: bool,
    /// Attribute set to the current unix time on insert.
    pub created_field: String,
    /// Attribute set to the current unix time on update.
    pub updated_field: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint_url: None,
            credentials: None,
            verbose: false,
            timestamps: false,
            created_field: DEFAULT_CREATED_FIELD.to_string(),
            updated_field: DEFAULT_UPDATED_FIELD.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build a DynamoDB SDK client from the connection part of this configuration.
    ///
    /// Nothing is validated here: a wrong region or bad credentials surface as transport
    /// errors on the first request.
    pub async fn load_client(&self) -> Client {
        let region_provider =
            RegionProviderChain::first_try(self.region.clone().map(config::Region::new))
                .or_default_provider();
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
        if let Some(credentials) = &self.credentials {
            let credentials = config::Credentials::new(
                credentials.access_key_id.clone(),
                credentials.secret_access_key.clone(),
                credentials.session_token.clone(),
                None,
                CREDENTIALS_PROVIDER_NAME,
            );
            loader = loader.credentials_provider(credentials);
        }
        let sdk_config = loader.load().await;
        let mut dynamodb_config = config::Builder::from(&sdk_config);
        if let Some(endpoint_url) = &self.endpoint_url {
            dynamodb_config = dynamodb_config.endpoint_url(endpoint_url);
        }
        Client::from_conf(dynamodb_config.build())
    }
}
