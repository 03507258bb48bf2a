//! Kumo CLI - witty cloud-computing facts on demand
//!
//! Thin client for the Kumo API.

mod api;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::KumoClient;
use config::Config;

#[derive(Parser)]
#[command(name = "kumo")]
#[command(about = "Kumo CLI - witty cloud-computing facts on demand", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one witty fact
    Fact,

    /// Manage the fact pool
    Facts {
        #[command(subcommand)]
        action: FactsAction,
    },

    /// Check whether the API is reachable
    Health,

    /// Show or change CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum FactsAction {
    /// List all stored facts
    List,
    /// Add a fact
    Add {
        /// The fact text
        text: String,
    },
    /// Remove a fact by id
    Remove {
        /// Fact storage id (uuid)
        id: uuid::Uuid,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Point the CLI at a different server
    SetUrl {
        /// Base URL of the Kumo API
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let client = KumoClient::new(&config.base_url);

    match cli.command {
        Commands::Fact => {
            let fact = client.witty_fact().await?;
            println!("{}", fact.cyan());
        }

        Commands::Facts { action } => match action {
            FactsAction::List => {
                let facts = client.list_facts().await?;
                if facts.is_empty() {
                    println!("{}", "No facts stored yet.".yellow());
                } else {
                    for fact in facts {
                        println!("{}  {}", fact.id.to_string().dimmed(), fact.text);
                    }
                }
            }
            FactsAction::Add { text } => {
                let fact = client.add_fact(text).await?;
                println!(
                    "{} {} ({})",
                    "Added".green(),
                    fact.text,
                    fact.fingerprint.dimmed()
                );
            }
            FactsAction::Remove { id } => {
                client.remove_fact(id).await?;
                println!("{} {}", "Removed".green(), id);
            }
        },

        Commands::Health => {
            if client.health().await.unwrap_or(false) {
                println!("{} {}", "OK".green().bold(), config.base_url);
            } else {
                println!("{} {}", "UNREACHABLE".red().bold(), config.base_url);
                std::process::exit(1);
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("base_url = {}", config.base_url.cyan());
                println!("config file: {:?}", Config::config_path()?);
            }
            ConfigAction::SetUrl { url } => {
                let mut config = config;
                config.set_base_url(url);
                config.save()?;
                println!("{} base_url = {}", "Saved".green(), config.base_url);
            }
        },
    }

    Ok(())
}
