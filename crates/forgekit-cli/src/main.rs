//! forgekit CLI - create repositories on Git hosting services.

mod providers;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use forgekit_core::config::Config;
use forgekit_core::{CreateRepoOptions, ProviderOptions, ProviderType};
use tracing_subscriber::EnvFilter;

use crate::providers::build_provider;

#[derive(Parser)]
#[command(name = "forgekit")]
#[command(author, version, about = "Create repositories on Git hosting services", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a repository and print its URL
    Create {
        /// Hosting service (gitlab, github)
        #[arg(short, long, default_value = "gitlab")]
        provider: ProviderType,

        /// User, group or organization that owns the repository
        #[arg(long)]
        owner: String,

        /// Repository name
        #[arg(long)]
        name: String,

        /// Create a private repository
        #[arg(long)]
        private: bool,

        /// Instance URL (overrides the config file)
        #[arg(long)]
        url: Option<String>,

        /// Access token for the selected provider
        #[arg(long)]
        token: Option<String>,

        /// GitLab access token, used when `--token` is absent
        #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true)]
        gitlab_token: Option<String>,

        /// GitHub access token, used when `--token` is absent
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        github_token: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set a value, e.g. `gitlab.url https://gitlab.example.com`
    Set { key: String, value: String },

    /// Print a value
    Get { key: String },

    /// Show current configuration
    Show,
}

/// Pick the token for `provider`: `--token` first, then the provider's own flag or env var.
fn select_token(
    provider: ProviderType,
    token: Option<String>,
    gitlab_token: Option<String>,
    github_token: Option<String>,
) -> Option<String> {
    let fallback = match provider {
        ProviderType::Gitlab => gitlab_token,
        ProviderType::Github => github_token,
    };
    token.or(fallback).filter(|t| !t.is_empty())
}

/// An explicit `--url` wins; the config file is only read without one.
fn resolve_host(
    provider: ProviderType,
    url: Option<String>,
    load_config: impl FnOnce() -> forgekit_core::Result<Config>,
) -> forgekit_core::Result<Option<String>> {
    match url {
        Some(url) => Ok(Some(url)),
        None => Ok(load_config()?.host_for(provider)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Create {
            provider,
            owner,
            name,
            private,
            url,
            token,
            gitlab_token,
            github_token,
        } => {
            let token = select_token(provider, token, gitlab_token, github_token)
                .ok_or_else(|| {
                    anyhow!(
                        "No access token for {}: pass --token or set {}_TOKEN",
                        provider,
                        provider.as_str().to_uppercase()
                    )
                })?;

            let mut opts = ProviderOptions::new(provider, token);
            opts.host = resolve_host(provider, url, Config::load)?;

            tracing::info!(
                provider = %provider,
                owner = %owner,
                name = %name,
                private = private,
                "Creating repository"
            );

            let backend = build_provider(&opts)?;
            let web_url = backend
                .create_repository(&CreateRepoOptions::new(owner, name).private(private))
                .await
                .with_context(|| format!("Failed to create repository on {}", provider))?;

            println!("{}", web_url);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Set { key, value } => {
                let mut config = Config::load()?;
                config.set(&key, &value)?;
                config.save()?;
            }
            ConfigCommands::Get { key } => {
                let config = Config::load()?;
                match config.get(&key)? {
                    Some(value) => println!("{}", value),
                    None => println!("(not set)"),
                }
            }
            ConfigCommands::Show => {
                let config = Config::load()?;
                println!("Config file: {}", Config::config_path()?.display());
                if !config.has_any_provider() {
                    println!("No providers configured");
                }
                for provider in [ProviderType::Gitlab, ProviderType::Github] {
                    if !config.configured_providers().contains(&provider.as_str()) {
                        continue;
                    }
                    let host = config
                        .host_for(provider)
                        .unwrap_or_else(|| "(default)".to_string());
                    println!("{}: {}", provider, host);
                }
            }
        },
    }

    Ok(())
}
