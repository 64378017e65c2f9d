//! static-secrets: inspect statically configured secret providers.
//!
//! Reads a secrets configuration file and answers read-only queries against
//! the providers it declares.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use static_secrets::{CancellationToken, ProviderRegistry, SecretValue, SecretsConfig};

/// Query statically configured secrets
#[derive(Debug, Parser)]
#[command(name = "static-secrets")]
#[command(about = "Read-only access to statically configured secrets", long_about = None)]
#[command(version)]
struct Cli {
    /// Secrets configuration file (TOML, or JSON with a .json extension)
    #[arg(
        long,
        global = true,
        env = "STATIC_SECRETS_CONFIG",
        default_value = "secrets.toml"
    )]
    config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List configured providers (identifiers and kinds, never values)
    List,

    /// Show a provider's identifier and kind
    Describe {
        /// Provider identifier
        id: String,
    },

    /// Print a provider's secret, or a single value from it
    Get {
        /// Provider identifier
        id: String,

        /// Print only the value stored under this key
        #[arg(long)]
        key: Option<String>,

        /// Omit trailing newline (for piping)
        #[arg(long)]
        no_newline: bool,
    },
}

impl Cli {
    fn execute(&self) -> Result<()> {
        tokio::runtime::Runtime::new()?.block_on(self.execute_async())
    }

    async fn execute_async(&self) -> Result<()> {
        let config = SecretsConfig::load(&self.config)
            .with_context(|| format!("Failed to load {}", self.config.display()))?;
        let registry = ProviderRegistry::from_config(config)?;
        let ctx = CancellationToken::new();

        match &self.command {
            Commands::List => {
                let configs = registry.describe_all(&ctx).await;

                if self.format == OutputFormat::Json {
                    println!("{}", serde_json::to_string_pretty(&configs)?);
                } else if configs.is_empty() {
                    if !self.quiet {
                        println!("No providers configured.");
                    }
                } else {
                    println!("{:<32} {}", "ID", "PROVIDER");
                    for config in &configs {
                        println!("{:<32} {}", config.id, config.provider);
                    }
                }
            },

            Commands::Describe { id } => {
                let provider = registry.get(id)?;
                let config = provider.get_config(&ctx).await;

                if self.format == OutputFormat::Json {
                    println!("{}", serde_json::to_string_pretty(&config.to_map())?);
                } else {
                    println!("id:       {}", config.id);
                    println!("provider: {}", config.provider);
                }
            },

            Commands::Get {
                id,
                key,
                no_newline,
            } => {
                // Security warning for terminal output
                if console::Term::stdout().is_term() && !self.quiet {
                    eprintln!("⚠️  Warning: Outputting secret to terminal.");
                    eprintln!();
                }

                let provider = registry.get(id)?;
                let output = match key {
                    Some(key) => {
                        let value = provider.get_secret_by_key(&ctx, key).await?;
                        self.render_value(&value)?
                    },
                    None => {
                        let secret = provider.get_secret(&ctx).await?;
                        serde_json::to_string_pretty(secret.as_map())?
                    },
                };

                if *no_newline {
                    print!("{}", output);
                } else {
                    println!("{}", output);
                }
            },
        }

        Ok(())
    }

    /// Strings print raw in text mode; everything else prints as JSON.
    fn render_value(&self, value: &SecretValue) -> Result<String> {
        match (self.format, value) {
            (OutputFormat::Text, SecretValue::String(s)) => Ok(s.clone()),
            _ => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

/// Initialize logging on stderr.
///
/// `RUST_LOG` takes precedence over the `-v` count.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    cli.execute()
}
