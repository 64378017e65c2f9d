//! Static secrets manager.
//!
//! Serves a secret map supplied at construction. Nothing is fetched, rotated or
//! written back: the map is fixed for the lifetime of the provider.

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::{ProviderConfig, ProviderKind};
use crate::error::{InvalidInput, SecretError, SecretResult};
use crate::provider::SecretProvider;
use crate::value::{SecretStore, SecretValue};

/// Kind tag reported by every [`StaticSecretsManager`].
pub const PROVIDER_KIND: &str = ProviderKind::StaticSecretsManager.as_str();

/// In-memory secret provider for one identity.
///
/// ```
/// use serde_json::json;
/// use static_secrets::{SecretStore, StaticSecretsManager};
///
/// let secret = SecretStore::from_iter([("username", json!("jsmith"))]);
/// let manager = StaticSecretsManager::new("foo", Some(secret)).unwrap();
/// assert_eq!(manager.lookup("username").unwrap(), &json!("jsmith"));
/// ```
#[derive(Debug)]
pub struct StaticSecretsManager {
    config: ProviderConfig,
    secret: Arc<SecretStore>,
}

impl StaticSecretsManager {
    /// Create a new static secrets manager.
    ///
    /// Inputs are checked in order, the first failure is returned:
    /// `secret` must be present, `secret` must not be empty, `id` must not be
    /// empty. The store is moved into the provider.
    pub fn new(id: impl Into<String>, secret: Option<SecretStore>) -> SecretResult<Self> {
        let secret = secret.ok_or(InvalidInput::NilSecret)?;
        if secret.is_empty() {
            return Err(InvalidInput::EmptySecret.into());
        }

        let id = id.into();
        if id.is_empty() {
            return Err(InvalidInput::EmptyId.into());
        }

        Ok(Self {
            config: ProviderConfig::new(id, PROVIDER_KIND),
            secret: Arc::new(secret),
        })
    }

    /// Identifier of this provider.
    pub fn id(&self) -> &str {
        &self.config.id
    }

    /// Borrow the stored secret.
    pub fn secret(&self) -> &SecretStore {
        &self.secret
    }

    /// Borrow the value stored under `key`.
    pub fn lookup(&self, key: &str) -> SecretResult<&SecretValue> {
        self.secret.get(key).ok_or_else(|| SecretError::NotFound {
            key: key.to_string(),
            id: self.config.id.clone(),
        })
    }

    /// Snapshot of this provider's identifier and kind.
    pub fn config(&self) -> ProviderConfig {
        self.config.clone()
    }
}

#[async_trait]
impl SecretProvider for StaticSecretsManager {
    fn id(&self) -> &str {
        &self.config.id
    }

    fn kind(&self) -> &str {
        &self.config.provider
    }

    async fn get_secret(&self, _ctx: &CancellationToken) -> SecretResult<Arc<SecretStore>> {
        Ok(Arc::clone(&self.secret))
    }

    async fn get_secret_by_key(
        &self,
        _ctx: &CancellationToken,
        key: &str,
    ) -> SecretResult<SecretValue> {
        self.lookup(key).cloned()
    }

    async fn get_config(&self, _ctx: &CancellationToken) -> ProviderConfig {
        self.config()
    }
}
