//! Provider registry for selecting secret providers by identifier.

use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::{ProviderConfig, SecretsConfig};
use crate::error::{SecretError, SecretResult};
use crate::provider::SecretProvider;

/// Registry of available secret providers.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn SecretProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every provider declared in `config`.
    ///
    /// The configured secrets move into the providers.
    ///
    /// Stops at the first entry that fails to build; the error names the
    /// entry's position in the file.
    pub fn from_config(config: SecretsConfig) -> SecretResult<Self> {
        let mut registry = Self::new();

        for (index, entry) in config.providers.into_iter().enumerate() {
            let provider = entry.build().map_err(|e| {
                SecretError::ConfigError(format!("providers[{}]: {}", index, e))
            })?;
            registry.register(provider)?;
        }

        tracing::info!(providers = registry.len(), "Secret providers registered");
        Ok(registry)
    }

    /// Register a provider.
    ///
    /// Identifiers are unique; registering a second provider under the same
    /// identifier fails and leaves the first in place.
    pub fn register(&mut self, provider: Arc<dyn SecretProvider>) -> SecretResult<()> {
        let id = provider.id().to_string();
        if self.providers.contains_key(&id) {
            return Err(SecretError::DuplicateProvider { id });
        }

        tracing::debug!(id = %id, kind = provider.kind(), "Registering secret provider");
        self.providers.insert(id, provider);
        Ok(())
    }

    /// Get a provider by ID.
    pub fn get(&self, id: &str) -> SecretResult<Arc<dyn SecretProvider>> {
        self.providers
            .get(id)
            .cloned()
            .ok_or_else(|| SecretError::ProviderNotAvailable {
                provider: id.to_string(),
            })
    }

    /// Registered identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// All registered providers, sorted by identifier.
    pub fn list(&self) -> Vec<Arc<dyn SecretProvider>> {
        self.ids()
            .into_iter()
            .filter_map(|id| self.providers.get(id).cloned())
            .collect()
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Describe every registered provider, sorted by identifier.
    pub async fn describe_all(&self, ctx: &CancellationToken) -> Vec<ProviderConfig> {
        let mut configs = Vec::with_capacity(self.providers.len());
        for provider in self.list() {
            configs.push(provider.get_config(ctx).await);
        }
        configs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::StaticSecretsManager;
    use crate::value::SecretStore;
    use serde_json::json;

    fn provider(id: &str) -> Arc<dyn SecretProvider> {
        let secret = SecretStore::from_iter([("username", json!(id))]);
        Arc::new(StaticSecretsManager::new(id, Some(secret)).unwrap())
    }

    #[test]
    fn test_registry_get() {
        let mut registry = ProviderRegistry::new();
        registry.register(provider("jsmith")).unwrap();

        assert_eq!(registry.get("jsmith").unwrap().id(), "jsmith");
        assert_eq!(
            registry.get("nobody").unwrap_err(),
            SecretError::ProviderNotAvailable {
                provider: "nobody".to_string()
            }
        );
    }

    #[test]
    fn test_registry_rejects_duplicate_id() {
        let mut registry = ProviderRegistry::new();
        registry.register(provider("jsmith")).unwrap();

        let err = registry.register(provider("jsmith")).unwrap_err();
        assert_eq!(err.to_string(), r#"provider "jsmith" is already registered"#);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_ids_sorted() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.is_empty());
        for id in ["zeta", "alpha", "mid"] {
            registry.register(provider(id)).unwrap();
        }
        assert_eq!(registry.ids(), vec!["alpha", "mid", "zeta"]);
        let listed: Vec<String> = registry.list().iter().map(|p| p.id().to_string()).collect();
        assert_eq!(listed, vec!["alpha", "mid", "zeta"]);
    }

    #[tokio::test]
    async fn test_registry_describe_all() {
        let mut registry = ProviderRegistry::new();
        registry.register(provider("b")).unwrap();
        registry.register(provider("a")).unwrap();

        let configs = registry.describe_all(&CancellationToken::new()).await;
        assert_eq!(
            configs,
            vec![
                ProviderConfig::new("a", "static_secrets_manager"),
                ProviderConfig::new("b", "static_secrets_manager"),
            ]
        );
    }
}
