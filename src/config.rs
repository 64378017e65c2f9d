//! Provider descriptions and the static secrets configuration file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::Arc;

use crate::error::{SecretError, SecretResult};
use crate::provider::SecretProvider;
use crate::providers::StaticSecretsManager;
use crate::value::SecretStore;

/// Identity and kind of a provider, as reported by `get_config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Identifier of the provider instance
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Kind of provider (e.g. "static_secrets_manager")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub provider: String,
}

impl ProviderConfig {
    /// Create a provider description.
    pub fn new(id: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            provider: provider.into(),
        }
    }

    /// Keyed form of the description: `{"id": ..., "provider": ...}`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::String(self.id.clone()));
        map.insert("provider".to_string(), Value::String(self.provider.clone()));
        map
    }
}

/// Provider kinds that can be built from configuration.
///
/// Configuration files and [`FromStr`](std::str::FromStr) accept the same
/// spellings: `static_secrets_manager` or `static`, in any letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ProviderKind {
    /// In-memory secret map supplied by configuration
    #[default]
    StaticSecretsManager,
}

impl ProviderKind {
    /// Tag reported in [`ProviderConfig::provider`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::StaticSecretsManager => "static_secrets_manager",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = SecretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "static_secrets_manager" | "static" => Ok(ProviderKind::StaticSecretsManager),
            _ => Err(SecretError::ConfigError(format!(
                "Unknown provider kind: {}. Valid kinds: static_secrets_manager",
                s
            ))),
        }
    }
}

impl TryFrom<String> for ProviderKind {
    type Error = SecretError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One provider declared in a configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderEntry {
    /// Identifier of the provider
    #[serde(default)]
    pub id: String,
    /// Kind of provider to build
    #[serde(default)]
    pub provider: ProviderKind,
    /// Secret key/value map; absent or `null` is rejected at build time
    #[serde(default)]
    pub secret: Option<SecretStore>,
}

impl ProviderEntry {
    /// Build the provider this entry describes.
    pub fn build(self) -> SecretResult<Arc<dyn SecretProvider>> {
        match self.provider {
            ProviderKind::StaticSecretsManager => {
                Ok(Arc::new(StaticSecretsManager::new(self.id, self.secret)?))
            },
        }
    }
}

/// Main secrets configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretsConfig {
    /// Declared providers, in file order
    #[serde(default)]
    pub providers: Vec<ProviderEntry>,
}

impl SecretsConfig {
    /// Parse configuration from TOML.
    pub fn from_toml(content: &str) -> SecretResult<Self> {
        toml::from_str(content)
            .map_err(|e| SecretError::ConfigError(format!("Failed to parse TOML config: {}", e)))
    }

    /// Parse configuration from JSON.
    pub fn from_json(content: &str) -> SecretResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| SecretError::ConfigError(format!("Failed to parse JSON config: {}", e)))
    }

    /// Load configuration from a file.
    ///
    /// Files with a `.json` extension are read as JSON, anything else as TOML.
    pub fn load(path: &Path) -> SecretResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SecretError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            providers = config.providers.len(),
            "Loaded secrets config"
        );
        Ok(config)
    }
}
