//! Static secrets manager.
//!
//! This crate serves pre-resolved credential material (a flat key/value map
//! per identity) through the same provider interface that remote secret
//! services implement, so callers never care where a secret came from.
//!
//! # Module Organization
//!
//! - [`provider`] - The [`SecretProvider`] capability set
//! - [`providers`] - Implementations; currently the [`StaticSecretsManager`]
//! - [`registry`] - Select providers by identifier
//! - [`config`] - Provider descriptions and the configuration file model
//! - [`value`] - [`SecretStore`], redacted and zeroized on drop
//! - [`error`] - [`SecretError`] and [`InvalidInput`]
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use static_secrets::{CancellationToken, SecretProvider, SecretStore, StaticSecretsManager};
//!
//! # let runtime = tokio::runtime::Runtime::new().unwrap();
//! # runtime.block_on(async {
//! let secret = SecretStore::from_iter([
//!     ("username", json!("jsmith")),
//!     ("password", json!("hunter2")),
//! ]);
//! let provider = StaticSecretsManager::new("jsmith", Some(secret))?;
//!
//! let ctx = CancellationToken::new();
//! assert_eq!(provider.get_secret_by_key(&ctx, "username").await?, json!("jsmith"));
//! assert_eq!(provider.get_config(&ctx).await.provider, "static_secrets_manager");
//! # Ok::<(), static_secrets::SecretError>(())
//! # }).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod providers;
pub mod registry;
pub mod value;

// Re-exports for ergonomic access
pub use config::{ProviderConfig, ProviderEntry, ProviderKind, SecretsConfig};
pub use error::{InvalidInput, SecretError, SecretResult};
pub use provider::SecretProvider;
pub use providers::{StaticSecretsManager, PROVIDER_KIND};
pub use registry::ProviderRegistry;
pub use tokio_util::sync::CancellationToken;
pub use value::{SecretStore, SecretValue};
