//! Secret provider trait.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::ProviderConfig;
use crate::error::SecretResult;
use crate::value::{SecretStore, SecretValue};

/// Trait for secret providers.
///
/// Implementations answer lookups for one identity's secret bundle, whether it
/// lives in memory (the static secrets manager) or in a remote secrets service.
/// Every operation takes a cancellation token so that I/O-bound providers can
/// abort; providers that never block are free to ignore it.
#[async_trait]
pub trait SecretProvider: fmt::Debug + Send + Sync {
    /// Identifier of this provider instance.
    fn id(&self) -> &str;

    /// Kind tag of this provider (e.g. "static_secrets_manager").
    fn kind(&self) -> &str;

    /// Get the full key/value map of the stored secret.
    async fn get_secret(&self, ctx: &CancellationToken) -> SecretResult<Arc<SecretStore>>;

    /// Get the value stored under `key`.
    ///
    /// Fails with [`SecretError::NotFound`](crate::SecretError::NotFound) when the
    /// key is absent.
    ///
    /// # Security
    /// The returned value is an owned copy and is not wiped on drop. Keep it
    /// short-lived and never log it.
    async fn get_secret_by_key(&self, ctx: &CancellationToken, key: &str)
        -> SecretResult<SecretValue>;

    /// Describe this provider: its identifier and kind.
    async fn get_config(&self, ctx: &CancellationToken) -> ProviderConfig;
}
