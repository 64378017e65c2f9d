//! Secret provider implementations.

mod static_secrets;

pub use static_secrets::{StaticSecretsManager, PROVIDER_KIND};
