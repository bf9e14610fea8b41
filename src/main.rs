//! CertAssist command-line front end
//!
//! Exercises the fulfillment core without a host dialogue runtime: ask a
//! topic question about a certificate, normalize an utterance, or list the
//! known certificate identifiers.
//!
//! # Usage
//!
//! ```bash
//! certassist ask cost --certificate passport
//! certassist ask tatkal-passport
//! certassist normalize "whats the fee for a pasport"
//! certassist list
//! ```
//!
//! # Environment Variables
//!
//! - `CERTASSIST_CONFIG`: Path to the runtime TOML config
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::Result;
use certassist::handlers::StateEvent;
use certassist::{dispatch, KnowledgeStore, RuntimeConfig, Topic};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "certassist")]
#[command(about = "Certificate information assistant core")]
#[command(version)]
struct CliArgs {
    /// Path to the runtime config file (overrides CERTASSIST_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the knowledge JSON file (overrides the configured path)
    #[arg(long)]
    knowledge: Option<PathBuf>,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Answer a topic question, optionally about a specific certificate
    Ask {
        /// Question topic (e.g. cost, documents, validity; see --help)
        topic: String,
        /// Certificate identifier (e.g. passport, driving_license)
        #[arg(short, long)]
        certificate: Option<String>,
    },
    /// Normalize an utterance the way the intent classifier would see it
    Normalize {
        /// Raw utterance text
        text: String,
    },
    /// List the certificate identifiers in the knowledge store
    List,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => RuntimeConfig::load_path(path),
        None => RuntimeConfig::load(),
    };
    let knowledge_path = args
        .knowledge
        .unwrap_or_else(|| config.knowledge.path.clone());

    match args.command {
        SubCommand::Ask { topic, certificate } => {
            let topic: Topic = topic
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let store = KnowledgeStore::load(&knowledge_path);
            let response = dispatch(topic, certificate.as_deref(), &store);
            if let Some(text) = response.text {
                println!("{text}");
            }
            for event in response.events {
                match event {
                    StateEvent::ClearCertificate => {
                        info!("certificate context cleared");
                    }
                }
            }
        }
        SubCommand::Normalize { text } => {
            let normalizer = config.normalizer();
            println!("{}", normalizer.normalize(&text));
        }
        SubCommand::List => {
            let store = KnowledgeStore::load(&knowledge_path);
            if store.is_empty() {
                println!("(knowledge store is empty)");
            }
            for identifier in store.identifiers() {
                println!("{identifier}");
            }
        }
    }

    Ok(())
}
